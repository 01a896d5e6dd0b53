use sqlx::SqlitePool;
use time::OffsetDateTime;

use crate::AppResult;

/// Hard cap on stored rows; the display sequence wraps at the same point.
pub const CAPACITY: i64 = 100;

#[derive(sqlx::FromRow)]
pub struct StoredMessage {
    pub id: i64,
    pub content: String,
    pub created_at: OffsetDateTime,
}

/// `((id - 1) mod 100) + 1`, zero-padded: id 101 renders "#001".
pub fn display_id(id: i64) -> String {
    let seq = ((id - 1) % CAPACITY) + 1;
    format!("#{seq:03}")
}

pub async fn list_messages(db_pool: &SqlitePool) -> AppResult<Vec<StoredMessage>> {
    Ok(sqlx::query_as(
        "SELECT id, content, created_at FROM messages ORDER BY created_at ASC, id ASC",
    )
    .fetch_all(db_pool)
    .await?)
}

pub async fn fetch_message(db_pool: &SqlitePool, id: i64) -> AppResult<Option<StoredMessage>> {
    Ok(
        sqlx::query_as("SELECT id, content, created_at FROM messages WHERE id = ?")
            .bind(id)
            .fetch_optional(db_pool)
            .await?,
    )
}

#[cfg(test)]
async fn message_count(db_pool: &SqlitePool) -> AppResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
        .fetch_one(db_pool)
        .await?;
    Ok(count)
}

/// Evicts the oldest row once the board is full, then inserts. The count
/// check, delete and insert share one transaction so the ≤ CAPACITY
/// invariant holds across the pair.
pub async fn add_message(db_pool: &SqlitePool, content: &str) -> AppResult<i64> {
    let mut tx = db_pool.begin().await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
        .fetch_one(&mut *tx)
        .await?;

    if count >= CAPACITY {
        sqlx::query(
            "DELETE FROM messages WHERE id =
                (SELECT id FROM messages ORDER BY created_at ASC, id ASC LIMIT 1)",
        )
        .execute(&mut *tx)
        .await?;
    }

    let result = sqlx::query("INSERT INTO messages (content, created_at) VALUES (?, ?)")
        .bind(content)
        .bind(OffsetDateTime::now_utc())
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use sqlx::sqlite::SqlitePoolOptions;

    // one connection, or each pooled connection gets its own :memory: db
    async fn test_pool() -> SqlitePool {
        let db_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        db::init_schema(&db_pool).await.unwrap();
        db_pool
    }

    #[test]
    fn display_sequence_wraps_at_capacity() {
        assert_eq!(display_id(1), "#001");
        assert_eq!(display_id(7), "#007");
        assert_eq!(display_id(100), "#100");
        assert_eq!(display_id(101), "#001");
        assert_eq!(display_id(200), "#100");
        assert_eq!(display_id(250), "#050");
    }

    #[tokio::test]
    async fn count_tracks_posts_under_capacity() {
        let db_pool = test_pool().await;

        for n in 1..=5 {
            add_message(&db_pool, &format!("m{n}")).await.unwrap();
            assert_eq!(message_count(&db_pool).await.unwrap(), n);
        }
    }

    #[tokio::test]
    async fn ids_are_monotonic() {
        let db_pool = test_pool().await;

        let mut last = 0;
        for n in 1..=10 {
            let id = add_message(&db_pool, &format!("m{n}")).await.unwrap();
            assert!(id > last);
            last = id;
        }
    }

    #[tokio::test]
    async fn list_is_oldest_first() {
        let db_pool = test_pool().await;

        for n in 1..=4 {
            add_message(&db_pool, &format!("m{n}")).await.unwrap();
        }

        let rows = list_messages(&db_pool).await.unwrap();
        let contents: Vec<&str> = rows.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, ["m1", "m2", "m3", "m4"]);
    }

    #[tokio::test]
    async fn overflow_keeps_most_recent_hundred() {
        let db_pool = test_pool().await;

        for n in 1..=105 {
            add_message(&db_pool, &format!("m{n}")).await.unwrap();
        }

        assert_eq!(message_count(&db_pool).await.unwrap(), CAPACITY);

        let rows = list_messages(&db_pool).await.unwrap();
        assert_eq!(rows.len(), 100);
        assert_eq!(rows.first().unwrap().content, "m6");
        assert_eq!(rows.last().unwrap().content, "m105");
    }

    #[tokio::test]
    async fn hundred_and_first_post_wraps_to_one() {
        let db_pool = test_pool().await;

        for n in 1..=100 {
            add_message(&db_pool, &format!("m{n}")).await.unwrap();
        }
        let id = add_message(&db_pool, "hi").await.unwrap();

        assert_eq!(id, 101);
        assert_eq!(display_id(id), "#001");
    }

    #[tokio::test]
    async fn evicted_ids_are_not_reused() {
        let db_pool = test_pool().await;

        for n in 1..=101 {
            add_message(&db_pool, &format!("m{n}")).await.unwrap();
        }

        // id 1 was evicted by the 101st post
        assert!(fetch_message(&db_pool, 1).await.unwrap().is_none());
        let id = add_message(&db_pool, "again").await.unwrap();
        assert_eq!(id, 102);
    }

    #[tokio::test]
    async fn fetch_missing_returns_none() {
        let db_pool = test_pool().await;
        assert!(fetch_message(&db_pool, 42).await.unwrap().is_none());
    }
}
