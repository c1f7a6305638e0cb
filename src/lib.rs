//! Pessoas API: REST backend for the pessoa resource.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Settings, StoreKind};
pub use error::{AppError, ConfigError, FieldError};
pub use migration::apply_migrations;
pub use model::{NewPerson, Person, PersonPatch};
pub use routes::{app, common_routes, person_routes, API_PREFIX};
pub use service::{PersonService, RequestValidator};
pub use state::AppState;
pub use store::{ensure_database_exists, InMemoryPersonRepository, PersonRepository, PgPersonRepository};
