//! Application Router
//!
//! - `/register`, `/login`, `/logout`, `/me` from the auth crate
//! - `/api/v1/cheeses` from the catalog crate, behind `require_auth`
//! - everything else falls through to static files

use std::path::Path;

use auth::CredentialStore;
use auth::middleware::require_auth;
use auth::presentation::handlers::AuthAppState;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use catalog::{InMemoryCheeseRepository, cheese_router};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the full application router
pub fn build_app<S>(
    auth_state: AuthAppState<S>,
    cheeses: InMemoryCheeseRepository,
    client_url: &str,
    static_dir: &Path,
) -> anyhow::Result<Router>
where
    S: CredentialStore + Clone + Send + Sync + 'static,
{
    let protected_cheeses = cheese_router(cheeses).route_layer(middleware::from_fn_with_state(
        auth_state.clone(),
        require_auth::<S>,
    ));

    Ok(Router::new()
        .merge(auth::auth_routes(auth_state))
        .nest("/api/v1/cheeses", protected_cheeses)
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors(client_url)?))
}

/// CORS for the browser client; credentials allowed so the cookie travels
fn cors(client_url: &str) -> anyhow::Result<CorsLayer> {
    let origin: HeaderValue = client_url
        .parse()
        .map_err(|e| anyhow::anyhow!("CLIENT_URL is not a valid origin: {e}"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true))
}
