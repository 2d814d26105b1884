//! Repository for the `kiji2` table.

use atsukai_core::types::DbId;
use sqlx::PgPool;

use crate::models::kiji2::{CreateKiji2, Kiji2, Kiji2Filter, UpdateKiji2};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, atsukai_id, detail, jyoukyou_id, type_id";

/// Provides CRUD operations for kiji2 rows.
pub struct Kiji2Repo;

impl Kiji2Repo {
    /// Insert a new row, returning it.
    pub async fn create(pool: &PgPool, input: &CreateKiji2) -> Result<Kiji2, sqlx::Error> {
        let query = format!(
            "INSERT INTO kiji2 (atsukai_id, detail, jyoukyou_id, type_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Kiji2>(&query)
            .bind(input.atsukai_id)
            .bind(&input.detail)
            .bind(input.jyoukyou_id)
            .bind(input.type_id)
            .fetch_one(pool)
            .await
    }

    /// Find a row by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Kiji2>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kiji2 WHERE id = $1");
        sqlx::query_as::<_, Kiji2>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List rows ordered by id, filtered by parent ids when given.
    pub async fn list(pool: &PgPool, filter: &Kiji2Filter) -> Result<Vec<Kiji2>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM kiji2 \
             WHERE ($1::BIGINT IS NULL OR atsukai_id = $1) \
               AND ($2::BIGINT IS NULL OR type_id = $2) \
               AND ($3::BIGINT IS NULL OR jyoukyou_id = $3) \
             ORDER BY id"
        );
        sqlx::query_as::<_, Kiji2>(&query)
            .bind(filter.atsukai_id)
            .bind(filter.type_id)
            .bind(filter.jyoukyou_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every mutable column. Optional ids given as `None` are
    /// written as NULL.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateKiji2,
    ) -> Result<Option<Kiji2>, sqlx::Error> {
        let query = format!(
            "UPDATE kiji2 SET atsukai_id = $2, detail = $3, jyoukyou_id = $4, type_id = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Kiji2>(&query)
            .bind(id)
            .bind(input.atsukai_id)
            .bind(&input.detail)
            .bind(input.jyoukyou_id)
            .bind(input.type_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a row, returning it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Kiji2>, sqlx::Error> {
        let query = format!("DELETE FROM kiji2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Kiji2>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
