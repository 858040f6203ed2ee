//! Auth Middleware
//!
//! Rejects requests without a valid auth cookie before they reach the
//! protected handler.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::application::AuthorizeUseCase;
use crate::domain::entity::user::User;
use crate::domain::repository::CredentialStore;
use crate::error::AuthError;
use crate::presentation::cookie;
use crate::presentation::handlers::AuthAppState;

/// Authenticated user, stored in request extensions by [`require_auth`]
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that requires a valid auth token
///
/// Any token failure becomes a 401 `{"err": "Unauthorized"}`.
pub async fn require_auth<S>(
    State(state): State<AuthAppState<S>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    S: CredentialStore + Clone + Send + Sync + 'static,
{
    let token = cookie::extract(&state.config, req.headers());

    let user = AuthorizeUseCase::new(state.store.clone(), state.config.clone())
        .execute(token.as_deref())
        .await?;

    tracing::debug!(user_id = %user.user_id, path = %req.uri().path(), "Request authorized");

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
