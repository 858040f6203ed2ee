//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::domain::entities::Cheese;
use crate::domain::repository::CheeseRepository;
use crate::domain::value_objects::{CheeseDraft, CheeseId};
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::CheeseRequest;

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: CheeseRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// Ids that do not parse can never match, so they are simply not found
fn parse_id(raw: &str) -> CatalogResult<CheeseId> {
    raw.parse().map_err(|_| CatalogError::NotFound)
}

fn read_draft(payload: Result<Json<CheeseRequest>, JsonRejection>) -> CatalogResult<CheeseDraft> {
    let Json(req) = payload.map_err(|rejection| CatalogError::Validation(rejection.body_text()))?;
    Ok(CheeseDraft::try_from(req)?)
}

/// GET /
pub async fn list_cheeses<R>(State(state): State<CatalogAppState<R>>) -> CatalogResult<Json<Vec<Cheese>>>
where
    R: CheeseRepository + Clone + Send + Sync + 'static,
{
    Ok(Json(state.repo.list().await?))
}

/// GET /{id}
pub async fn get_cheese<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<Cheese>>
where
    R: CheeseRepository + Clone + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let cheese = state.repo.find(id).await?.ok_or(CatalogError::NotFound)?;
    Ok(Json(cheese))
}

/// POST /
pub async fn create_cheese<R>(
    State(state): State<CatalogAppState<R>>,
    payload: Result<Json<CheeseRequest>, JsonRejection>,
) -> CatalogResult<impl IntoResponse>
where
    R: CheeseRepository + Clone + Send + Sync + 'static,
{
    let draft = read_draft(payload)?;
    let cheese = state.repo.create(draft).await?;

    tracing::info!(cheese_id = %cheese.id, name = %cheese.name, "Cheese created");

    Ok((StatusCode::CREATED, Json(cheese)))
}

/// PUT /{id}
pub async fn update_cheese<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<CheeseRequest>, JsonRejection>,
) -> CatalogResult<StatusCode>
where
    R: CheeseRepository + Clone + Send + Sync + 'static,
{
    let id = parse_id(&id)?;

    // Unknown ids are 404 even when the body is also invalid
    if state.repo.find(id).await?.is_none() {
        return Err(CatalogError::NotFound);
    }
    let draft = read_draft(payload)?;

    state
        .repo
        .update(id, draft)
        .await?
        .ok_or(CatalogError::NotFound)?;

    tracing::info!(cheese_id = %id, "Cheese updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /{id}
pub async fn delete_cheese<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<StatusCode>
where
    R: CheeseRepository + Clone + Send + Sync + 'static,
{
    let id = parse_id(&id)?;

    if !state.repo.delete(id).await? {
        return Err(CatalogError::NotFound);
    }

    tracing::info!(cheese_id = %id, "Cheese deleted");

    Ok(StatusCode::NO_CONTENT)
}
