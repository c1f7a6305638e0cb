//! Pessoa handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::PersonPatch;
use crate::response::{created, no_content, ok};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let people = state.people.list().await?;
    Ok(ok(people))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let person = state
        .people
        .get(id)
        .await?
        .ok_or(AppError::NotFound(id))?;
    Ok(ok(person))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(patch): JsonBody<PersonPatch>,
) -> Result<impl IntoResponse, AppError> {
    let new = RequestValidator::validate_create(patch)?;
    let person = state.people.save(new).await?;
    Ok(created(person))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(patch): JsonBody<PersonPatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let person = state
        .people
        .update(patch, id)
        .await?
        .ok_or(AppError::NotFound(id))?;
    Ok(ok(person))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.people.delete_by_id(id).await?;
    Ok(no_content())
}
