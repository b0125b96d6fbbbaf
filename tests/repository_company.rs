//! Postgres repository tests. Need `DATABASE_URL`; run with `--ignored`.

mod common;

use sqlx::PgPool;
use std::sync::Arc;

use common::new_company;
use startup_dose::domain::repositories::CompanyRepository;
use startup_dose::infrastructure::persistence::PgCompanyRepository;

#[sqlx::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_insert_assigns_id_and_timestamps(pool: PgPool) {
    let repo = PgCompanyRepository::new(Arc::new(pool));

    let company = repo.insert(new_company("Acme AI", "acme-ai")).await.unwrap();

    assert_eq!(company.slug, "acme-ai");
    assert_eq!(company.created_at, company.updated_at);
    assert!(company.published_at.is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_insert_leaves_absent_socials_null(pool: PgPool) {
    let repo = PgCompanyRepository::new(Arc::new(pool.clone()));

    let mut new = new_company("Acme AI", "acme-ai");
    new.linkedin = Some("https://linkedin.com/company/acme".to_string());
    new.twitter = Some("   ".to_string());
    let company = repo.insert(new).await.unwrap();

    assert_eq!(
        company.linkedin.as_deref(),
        Some("https://linkedin.com/company/acme")
    );
    assert!(company.twitter.is_none());

    let empty_strings: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM companies WHERE twitter = '' OR facebook = '' OR instagram = ''",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(empty_strings, 0);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_ping_reaches_database(pool: PgPool) {
    let repo = PgCompanyRepository::new(Arc::new(pool));

    repo.ping().await.unwrap();
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_get_latest_on_empty_table_is_not_found(pool: PgPool) {
    let repo = PgCompanyRepository::new(Arc::new(pool));

    let err = repo.get_latest().await.unwrap_err();

    assert!(err.is_not_found());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_latest_and_recent_order_by_creation(pool: PgPool) {
    let repo = PgCompanyRepository::new(Arc::new(pool.clone()));

    for slug in ["first", "second", "third"] {
        let company = repo.insert(new_company(slug, slug)).await.unwrap();
        // Separate creation times explicitly; inserts in one test can share now().
        sqlx::query(
            "UPDATE companies SET created_at = now() + (SELECT COUNT(*) FROM companies) * interval '1 second' WHERE id = $1",
        )
        .bind(company.id)
        .execute(&pool)
        .await
        .unwrap();
    }

    assert_eq!(repo.get_latest().await.unwrap().slug, "third");

    let recent = repo.list_recent(2).await.unwrap();
    let slugs: Vec<_> = recent.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["third", "second"]);
}
