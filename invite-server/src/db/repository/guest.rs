//! Guest Repository

use super::{RepoError, RepoResult};
use shared::models::{Guest, GuestCreate, GuestSummary, RsvpRecord, RsvpSubmit};
use sqlx::SqlitePool;

const GUEST_SELECT: &str = "SELECT id, first_name, last_name, title, message, confirmed, bringing_guests, guest_names, song_request, created_at, updated_at FROM guest";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Guest>> {
    let sql = format!("{} ORDER BY last_name, first_name", GUEST_SELECT);
    let rows = sqlx::query_as::<_, Guest>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Guest>> {
    let sql = format!("{} WHERE id = ?", GUEST_SELECT);
    let row = sqlx::query_as::<_, Guest>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Distinct last names starting with the prefix, case-insensitive, ordered.
///
/// Feeds the suggestion dropdown; the column's NOCASE collation makes
/// DISTINCT fold case the same way LIKE does.
pub async fn distinct_last_names(pool: &SqlitePool, prefix: &str) -> RepoResult<Vec<String>> {
    let pattern = format!("{prefix}%");
    let rows = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT last_name FROM guest WHERE last_name LIKE ? ORDER BY last_name",
    )
    .bind(&pattern)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Guest summaries whose last name starts with the prefix.
///
/// Feeds the first-name disambiguation list; excludes RSVP columns.
pub async fn search_by_last_name(pool: &SqlitePool, prefix: &str) -> RepoResult<Vec<GuestSummary>> {
    let pattern = format!("{prefix}%");
    let rows = sqlx::query_as::<_, GuestSummary>(
        "SELECT id, first_name, last_name, message FROM guest WHERE last_name LIKE ? ORDER BY last_name, first_name",
    )
    .bind(&pattern)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Persisted RSVP answer for one guest, None if the guest does not exist.
pub async fn rsvp_of(pool: &SqlitePool, id: i64) -> RepoResult<Option<RsvpRecord>> {
    let row = sqlx::query_as::<_, RsvpRecord>(
        "SELECT confirmed, bringing_guests, guest_names, song_request FROM guest WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// One-shot RSVP write.
///
/// The `confirmed IS NULL` guard enforces the tri-state invariant at the
/// storage layer: a guest answers exactly once, re-submission is rejected
/// with [`RepoError::AlreadyResponded`].
pub async fn submit_rsvp(pool: &SqlitePool, id: i64, data: RsvpSubmit) -> RepoResult<RsvpRecord> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE guest SET confirmed = ?1, bringing_guests = ?2, guest_names = ?3, song_request = ?4, updated_at = ?5 WHERE id = ?6 AND confirmed IS NULL",
    )
    .bind(data.confirmed)
    .bind(data.bringing_guests)
    .bind(&data.guest_names)
    .bind(&data.song_request)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return match rsvp_of(pool, id).await? {
            None => Err(RepoError::NotFound(format!("Guest {id} not found"))),
            Some(_) => Err(RepoError::AlreadyResponded(format!(
                "Guest {id} has already responded"
            ))),
        };
    }

    rsvp_of(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Guest {id} not found")))
}

pub async fn create(pool: &SqlitePool, data: GuestCreate) -> RepoResult<Guest> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO guest (id, first_name, last_name, title, message, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
    )
    .bind(id)
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.title)
    .bind(&data.message)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create guest".into()))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM guest WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn test_pool() -> SqlitePool {
        DbService::open_in_memory().await.unwrap().pool
    }

    fn guest(first: &str, last: &str) -> GuestCreate {
        GuestCreate {
            first_name: first.to_string(),
            last_name: last.to_string(),
            title: None,
            message: None,
        }
    }

    #[tokio::test]
    async fn distinct_last_names_folds_case_and_orders() {
        let pool = test_pool().await;
        create(&pool, guest("Ana", "Popescu")).await.unwrap();
        create(&pool, guest("Ion", "Popescu")).await.unwrap();
        create(&pool, guest("Maria", "Popa")).await.unwrap();
        create(&pool, guest("Dan", "Ionescu")).await.unwrap();

        let names = distinct_last_names(&pool, "pop").await.unwrap();
        assert_eq!(names, vec!["Popa".to_string(), "Popescu".to_string()]);

        let none = distinct_last_names(&pool, "xyz").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn search_returns_summaries_ordered_by_name() {
        let pool = test_pool().await;
        create(&pool, guest("Ion", "Popescu")).await.unwrap();
        create(&pool, guest("Ana", "Popescu")).await.unwrap();
        create(&pool, guest("Maria", "Popa")).await.unwrap();

        let results = search_by_last_name(&pool, "Pop").await.unwrap();
        let names: Vec<(&str, &str)> = results
            .iter()
            .map(|g| (g.last_name.as_str(), g.first_name.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![("Popa", "Maria"), ("Popescu", "Ana"), ("Popescu", "Ion")]
        );
    }

    #[tokio::test]
    async fn submit_rsvp_writes_once_and_rejects_resubmission() {
        let pool = test_pool().await;
        let g = create(&pool, guest("Ana", "Popescu")).await.unwrap();

        let before = rsvp_of(&pool, g.id).await.unwrap().unwrap();
        assert!(before.confirmed.is_none());

        let submit = RsvpSubmit {
            confirmed: true,
            bringing_guests: true,
            guest_names: "Radu, Elena".to_string(),
            song_request: "Perfect".to_string(),
        };
        let record = submit_rsvp(&pool, g.id, submit.clone()).await.unwrap();
        assert_eq!(record.confirmed, Some(true));
        assert_eq!(record.bringing_guests, Some(true));
        assert_eq!(record.guest_names.as_deref(), Some("Radu, Elena"));

        let err = submit_rsvp(&pool, g.id, submit).await.unwrap_err();
        assert!(matches!(err, RepoError::AlreadyResponded(_)));

        // The stored answer is untouched by the rejected write
        let after = rsvp_of(&pool, g.id).await.unwrap().unwrap();
        assert_eq!(after.guest_names.as_deref(), Some("Radu, Elena"));
    }

    #[tokio::test]
    async fn submit_rsvp_for_unknown_guest_is_not_found() {
        let pool = test_pool().await;
        let err = submit_rsvp(
            &pool,
            99,
            RsvpSubmit {
                confirmed: false,
                bringing_guests: false,
                guest_names: String::new(),
                song_request: String::new(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn declined_guest_is_also_locked_in() {
        let pool = test_pool().await;
        let g = create(&pool, guest("Dan", "Ionescu")).await.unwrap();

        let submit = RsvpSubmit {
            confirmed: false,
            bringing_guests: false,
            guest_names: String::new(),
            song_request: String::new(),
        };
        let record = submit_rsvp(&pool, g.id, submit.clone()).await.unwrap();
        assert_eq!(record.confirmed, Some(false));

        let err = submit_rsvp(&pool, g.id, submit).await.unwrap_err();
        assert!(matches!(err, RepoError::AlreadyResponded(_)));
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let pool = test_pool().await;
        let g = create(&pool, guest("Ana", "Popescu")).await.unwrap();

        assert!(delete(&pool, g.id).await.unwrap());
        assert!(!delete(&pool, g.id).await.unwrap());
        assert!(find_by_id(&pool, g.id).await.unwrap().is_none());
    }
}
