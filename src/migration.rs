//! Apply the pessoa schema to the database: CREATE SCHEMA, CREATE TABLE. Idempotent.

use crate::error::AppError;
use crate::store::{qualified_table, quote_ident, PERSON_TABLE};
use sqlx::PgPool;

pub async fn apply_migrations(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    let schema_sql = format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema));
    tracing::debug!(sql = %schema_sql, "migration");
    sqlx::query(&schema_sql).execute(pool).await?;

    let table = qualified_table(schema, PERSON_TABLE);
    let table_sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            address TEXT NOT NULL,
            hobbies TEXT NOT NULL
        )
        "#,
        table
    );
    tracing::debug!(sql = %table_sql, "migration");
    sqlx::query(&table_sql).execute(pool).await?;

    tracing::info!(table = %table, "migrations applied");
    Ok(())
}
