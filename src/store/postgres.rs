//! PostgreSQL repository. Identifiers come from configuration only, values are always bound.

use super::PersonRepository;
use crate::error::{AppError, ConfigError};
use crate::model::{NewPerson, Person};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub const PERSON_TABLE: &str = "pessoas";

const COLUMNS: &str = "id, name, address, hobbies";

/// Quote identifier for PostgreSQL.
pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub(crate) fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(table))
}

#[derive(Clone)]
pub struct PgPersonRepository {
    pool: PgPool,
    table: String,
}

impl PgPersonRepository {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgPersonRepository {
            pool,
            table: qualified_table(schema, PERSON_TABLE),
        }
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, self.table);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Person>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Person>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, self.table);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Person>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, person: &NewPerson) -> Result<Person, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, address, hobbies) VALUES ($1, $2, $3) RETURNING {}",
            self.table, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Person>(&sql)
            .bind(&person.name)
            .bind(&person.address)
            .bind(&person.hobbies)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, person: &Person) -> Result<Option<Person>, AppError> {
        let sql = format!(
            "UPDATE {} SET name = $2, address = $3, hobbies = $4 WHERE id = $1 RETURNING {}",
            self.table, COLUMNS
        );
        tracing::debug!(sql = %sql, id = person.id, "query");
        let row = sqlx::query_as::<_, Person>(&sql)
            .bind(person.id)
            .bind(&person.name)
            .bind(&person.address)
            .bind(&person.hobbies)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        tracing::debug!(sql = %sql, id, "query");
        let result: sqlx::postgres::PgQueryResult = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin_url, db_name)) = split_database_url(database_url) else {
        return Ok(());
    };
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(|_| {
        ConfigError::Invalid {
            var: "DATABASE_URL",
            value: database_url.to_string(),
        }
    })?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a connection URL into (admin URL pointing at `postgres`, database name).
/// None when the URL has no database path.
fn split_database_url(url: &str) -> Option<(String, String)> {
    let authority_start = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = authority_start + url.get(authority_start..)?.find('/')? + 1;
    let (base, rest) = url.split_at(path_start);
    let mut parts = rest.splitn(2, '?');
    let db_name = parts.next().unwrap_or("").trim().to_string();
    let admin_url = match parts.next() {
        Some(query) => format!("{}postgres?{}", base, query),
        None => format!("{}postgres", base),
    };
    Some((admin_url, db_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_ident_doubles_quotes() {
        assert_eq!(quote_ident("pessoas"), "\"pessoas\"");
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
        assert_eq!(qualified_table("public", "pessoas"), "\"public\".\"pessoas\"");
    }

    #[test]
    fn split_database_url_extracts_name() {
        assert_eq!(
            split_database_url("postgres://user:pw@localhost:5432/pessoas"),
            Some((
                "postgres://user:pw@localhost:5432/postgres".to_string(),
                "pessoas".to_string()
            ))
        );
    }

    #[test]
    fn split_database_url_keeps_query() {
        assert_eq!(
            split_database_url("postgres://localhost/pessoas?sslmode=disable"),
            Some((
                "postgres://localhost/postgres?sslmode=disable".to_string(),
                "pessoas".to_string()
            ))
        );
    }

    #[test]
    fn split_database_url_without_path() {
        assert_eq!(split_database_url("postgres://localhost"), None);
        assert_eq!(
            split_database_url("postgres://localhost/"),
            Some(("postgres://localhost/postgres".to_string(), String::new()))
        );
    }
}
