//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::domain::repository::CredentialStore;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_auth;

/// Auth routes over shared state
///
/// Takes the state rather than building it so the same store and config
/// can also guard other routers through [`require_auth`].
pub fn auth_routes<S>(state: AuthAppState<S>) -> Router
where
    S: CredentialStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/me", get(handlers::me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth::<S>,
        ))
        .route("/register", post(handlers::register::<S>))
        .route("/login", post(handlers::login::<S>))
        .route("/logout", get(handlers::logout::<S>))
        .with_state(state)
}
