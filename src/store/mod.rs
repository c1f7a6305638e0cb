//! Persistence for pessoas: the repository trait and its PostgreSQL and in-memory backends.

mod memory;
mod postgres;

pub use memory::InMemoryPersonRepository;
pub use postgres::{ensure_database_exists, PgPersonRepository, PERSON_TABLE};
pub(crate) use postgres::{qualified_table, quote_ident};

use crate::error::AppError;
use crate::model::{NewPerson, Person};
use async_trait::async_trait;

#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// All rows, ordered by id.
    async fn find_all(&self) -> Result<Vec<Person>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Person>, AppError>;

    /// Store a new row; the store assigns the id.
    async fn insert(&self, person: &NewPerson) -> Result<Person, AppError>;

    /// Overwrite the row with `person.id`. None when no such row exists.
    async fn update(&self, person: &Person) -> Result<Option<Person>, AppError>;

    /// Returns whether a row was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Cheap liveness check used by the readiness route.
    async fn ping(&self) -> Result<(), AppError>;
}
