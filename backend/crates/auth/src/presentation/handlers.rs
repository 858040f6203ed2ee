//! HTTP Handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::CredentialStore;
use crate::error::{AuthError, AuthResult};
use crate::presentation::cookie;
use crate::presentation::dto::{
    LoginRequest, LoginResponse, LogoutResponse, MeResponse, RegisterRequest, RegisterResponse,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers and the auth middleware
#[derive(Clone)]
pub struct AuthAppState<S>
where
    S: CredentialStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub config: Arc<AuthConfig>,
}

impl<S> AuthAppState<S>
where
    S: CredentialStore + Clone + Send + Sync + 'static,
{
    pub fn new(store: S, config: AuthConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

/// Unreadable JSON bodies are plain validation failures
fn read_body<T>(payload: Result<Json<T>, JsonRejection>) -> AuthResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AuthError::Validation(rejection.body_text()))
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<S>(
    State(state): State<AuthAppState<S>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    S: CredentialStore + Clone + Send + Sync + 'static,
{
    let req = read_body(payload)?;

    let use_case = RegisterUseCase::new(state.store.clone(), state.config.clone());
    let summary = use_case
        .execute(RegisterInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            msg: "User registered".to_string(),
            id: summary.id,
            username: summary.username,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<S>(
    State(state): State<AuthAppState<S>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    S: CredentialStore + Clone + Send + Sync + 'static,
{
    let req = read_body(payload)?;

    let use_case = LoginUseCase::new(state.store.clone(), state.config.clone());
    let output = use_case
        .execute(LoginInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    let cookie = cookie::attach(&state.config, output.token.as_str())?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            username: output.user.username,
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// GET /logout
///
/// Always 200, with or without a session.
pub async fn logout<S>(
    State(state): State<AuthAppState<S>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    S: CredentialStore + Clone + Send + Sync + 'static,
{
    let token = cookie::extract(&state.config, &headers);

    LogoutUseCase::new(state.store.clone(), state.config.clone())
        .execute(token.as_deref())
        .await;

    let cookie = cookie::clear(&state.config)?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LogoutResponse {
            msg: "Logged out".to_string(),
        }),
    ))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /me (behind `require_auth`)
pub async fn me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<MeResponse> {
    let summary = user.summary();
    Json(MeResponse {
        id: summary.id,
        username: summary.username,
    })
}
