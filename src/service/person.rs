//! Pessoa service: the partial-update merge and the delete existence check. Everything else
//! goes straight to the repository.

use crate::error::AppError;
use crate::model::{NewPerson, Person, PersonPatch};
use crate::store::PersonRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct PersonService {
    repo: Arc<dyn PersonRepository>,
}

impl PersonService {
    pub fn new(repo: Arc<dyn PersonRepository>) -> Self {
        PersonService { repo }
    }

    pub async fn list(&self) -> Result<Vec<Person>, AppError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Person>, AppError> {
        self.repo.find_by_id(id).await
    }

    pub async fn save(&self, person: NewPerson) -> Result<Person, AppError> {
        let row = self.repo.insert(&person).await?;
        tracing::info!(id = row.id, "pessoa created");
        Ok(row)
    }

    /// Load, overwrite the fields the patch carries, store. None when `id` is unknown.
    pub async fn update(&self, patch: PersonPatch, id: i64) -> Result<Option<Person>, AppError> {
        let Some(mut current) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        current.apply(patch);
        let row = self.repo.update(&current).await?;
        if row.is_some() {
            tracing::info!(id, "pessoa updated");
        }
        Ok(row)
    }

    /// Delete when present; NotFound when absent.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.delete_by_id(id).await? {
            return Err(AppError::NotFound(id));
        }
        tracing::info!(id, "pessoa deleted");
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.repo.ping().await
    }
}
