//! Catalog Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::CheeseRepository;
use crate::infra::memory::InMemoryCheeseRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the cheese router over the in-memory repository
pub fn cheese_router(repo: InMemoryCheeseRepository) -> Router {
    cheese_router_generic(repo)
}

/// Create a generic cheese router for any repository implementation
pub fn cheese_router_generic<R>(repo: R) -> Router
where
    R: CheeseRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_cheeses::<R>).post(handlers::create_cheese::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_cheese::<R>)
                .put(handlers::update_cheese::<R>)
                .delete(handlers::delete_cheese::<R>),
        )
        .with_state(state)
}
