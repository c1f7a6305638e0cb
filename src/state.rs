//! Shared application state for all routes.

use crate::service::PersonService;
use crate::store::PersonRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub people: PersonService,
}

impl AppState {
    pub fn new(repo: Arc<dyn PersonRepository>) -> Self {
        AppState {
            people: PersonService::new(repo),
        }
    }
}
