//! Pessoa CRUD routes.

use crate::handlers::person::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn person_routes(state: AppState) -> Router {
    Router::new()
        .route("/pessoas", get(list).post(create))
        .route("/pessoas/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
