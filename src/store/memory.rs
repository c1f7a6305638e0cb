//! In-process repository. Ids come from a sequence that is never rewound, so deleted ids are not reused.

use super::PersonRepository;
use crate::error::AppError;
use crate::model::{NewPerson, Person};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Person>,
    last_id: i64,
}

#[derive(Default)]
pub struct InMemoryPersonRepository {
    table: RwLock<Table>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Table>, AppError> {
        self.table
            .read()
            .map_err(|_| AppError::Internal("store lock".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Table>, AppError> {
        self.table
            .write()
            .map_err(|_| AppError::Internal("store lock".into()))
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>, AppError> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Person>, AppError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn insert(&self, person: &NewPerson) -> Result<Person, AppError> {
        let mut table = self.write()?;
        table.last_id += 1;
        let row = Person::from_new(table.last_id, person.clone());
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, person: &Person) -> Result<Option<Person>, AppError> {
        let mut table = self.write()?;
        Ok(table.rows.get_mut(&person.id).map(|row| {
            *row = person.clone();
            row.clone()
        }))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.write()?.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}
