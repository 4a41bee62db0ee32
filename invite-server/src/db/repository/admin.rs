//! Admin Repository
//!
//! The admin table doubles as the allow-list: an email absent from it (or
//! marked inactive) never gets a session.

use super::{RepoError, RepoResult};
use shared::models::{Admin, AdminCreate};
use sqlx::SqlitePool;

const ADMIN_SELECT: &str = "SELECT id, email, password_hash, is_active, created_at FROM admin";

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Admin>> {
    let sql = format!("{} WHERE email = ?", ADMIN_SELECT);
    let row = sqlx::query_as::<_, Admin>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Admin>> {
    let sql = format!("{} WHERE id = ?", ADMIN_SELECT);
    let row = sqlx::query_as::<_, Admin>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Add an identity to the allow-list. Fails on duplicate email.
pub async fn create(pool: &SqlitePool, data: AdminCreate) -> RepoResult<Admin> {
    if find_by_email(pool, &data.email).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Admin {} already exists",
            data.email
        )));
    }

    let password_hash = Admin::hash_password(&data.password)
        .map_err(|e| RepoError::Validation(format!("Failed to hash password: {e}")))?;

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO admin (id, email, password_hash, is_active, created_at) VALUES (?1, ?2, ?3, 1, ?4)",
    )
    .bind(id)
    .bind(&data.email)
    .bind(&password_hash)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create admin".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn test_pool() -> SqlitePool {
        DbService::open_in_memory().await.unwrap().pool
    }

    #[tokio::test]
    async fn create_and_find_by_email() {
        let pool = test_pool().await;
        let created = create(
            &pool,
            AdminCreate {
                email: "owner@example.com".to_string(),
                password: "hunter22hunter22".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(created.is_active);

        let found = find_by_email(&pool, "owner@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);
        assert!(found.verify_password("hunter22hunter22").unwrap());

        assert!(find_by_email(&pool, "nobody@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let pool = test_pool().await;
        let data = AdminCreate {
            email: "owner@example.com".to_string(),
            password: "hunter22hunter22".to_string(),
        };
        create(&pool, data.clone()).await.unwrap();
        let err = create(&pool, data).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }
}
