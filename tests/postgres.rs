//! PostgreSQL repository tests. Run only when DATABASE_URL is set and SKIP_DB_TESTS is not.

use pessoas_api::{
    apply_migrations, ensure_database_exists, NewPerson, PersonRepository, PersonService,
    PgPersonRepository, PersonPatch,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh schema per test so runs do not see each other's rows.
async fn setup() -> Option<(PgPool, String)> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL missing; skip postgres tests");
        return None;
    };
    ensure_database_exists(&database_url).await.unwrap();
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .unwrap();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let schema = format!("pessoas_test_{}_{}", std::process::id(), nanos);
    apply_migrations(&pool, &schema).await.unwrap();
    Some((pool, schema))
}

async fn teardown(pool: &PgPool, schema: &str) {
    sqlx::query(&format!("DROP SCHEMA IF EXISTS \"{}\" CASCADE", schema))
        .execute(pool)
        .await
        .unwrap();
}

fn ana() -> NewPerson {
    NewPerson {
        name: "Ana".into(),
        address: "Rua A".into(),
        hobbies: "Leitura".into(),
    }
}

#[tokio::test]
async fn pg_crud_roundtrip() {
    let Some((pool, schema)) = setup().await else {
        return;
    };
    let repo = PgPersonRepository::new(pool.clone(), &schema);
    repo.ping().await.unwrap();

    let a = repo.insert(&ana()).await.unwrap();
    let b = repo.insert(&ana()).await.unwrap();
    assert!(b.id > a.id);
    assert_eq!(repo.find_by_id(a.id).await.unwrap(), Some(a.clone()));

    let mut changed = a.clone();
    changed.hobbies = String::new();
    assert_eq!(repo.update(&changed).await.unwrap(), Some(changed.clone()));

    assert!(repo.delete_by_id(b.id).await.unwrap());
    assert!(!repo.delete_by_id(b.id).await.unwrap());
    assert_eq!(repo.find_all().await.unwrap(), vec![changed]);

    teardown(&pool, &schema).await;
}

#[tokio::test]
async fn pg_service_merge_and_missing_rows() {
    let Some((pool, schema)) = setup().await else {
        return;
    };
    let svc = PersonService::new(Arc::new(PgPersonRepository::new(pool.clone(), &schema)));

    let row = svc.save(ana()).await.unwrap();
    let patch = PersonPatch {
        address: Some("Rua B".into()),
        ..Default::default()
    };
    let merged = svc.update(patch, row.id).await.unwrap().unwrap();
    assert_eq!(merged.name, "Ana");
    assert_eq!(merged.address, "Rua B");
    assert_eq!(merged.hobbies, "Leitura");

    assert_eq!(svc.update(PersonPatch::default(), row.id + 1000).await.unwrap(), None);
    assert!(svc.delete_by_id(row.id + 1000).await.is_err());

    teardown(&pool, &schema).await;
}
