//! Repository for the `kiji1` table.

use atsukai_core::types::DbId;
use sqlx::PgPool;

use crate::models::kiji1::{CreateKiji1, Kiji1, Kiji1Filter, UpdateKiji1};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, atsukai_id, content, type_id";

/// Provides CRUD operations for kiji1 rows.
pub struct Kiji1Repo;

impl Kiji1Repo {
    /// Insert a new row, returning it.
    pub async fn create(pool: &PgPool, input: &CreateKiji1) -> Result<Kiji1, sqlx::Error> {
        let query = format!(
            "INSERT INTO kiji1 (atsukai_id, content, type_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Kiji1>(&query)
            .bind(input.atsukai_id)
            .bind(&input.content)
            .bind(input.type_id)
            .fetch_one(pool)
            .await
    }

    /// Find a row by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Kiji1>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kiji1 WHERE id = $1");
        sqlx::query_as::<_, Kiji1>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List rows ordered by id, filtered by parent ids when given.
    pub async fn list(pool: &PgPool, filter: &Kiji1Filter) -> Result<Vec<Kiji1>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM kiji1 \
             WHERE ($1::BIGINT IS NULL OR atsukai_id = $1) \
               AND ($2::BIGINT IS NULL OR type_id = $2) \
             ORDER BY id"
        );
        sqlx::query_as::<_, Kiji1>(&query)
            .bind(filter.atsukai_id)
            .bind(filter.type_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every mutable column. A `None` type_id is written as NULL.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateKiji1,
    ) -> Result<Option<Kiji1>, sqlx::Error> {
        let query = format!(
            "UPDATE kiji1 SET atsukai_id = $1, content = $2, type_id = $3 \
             WHERE id = $4 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Kiji1>(&query)
            .bind(input.atsukai_id)
            .bind(&input.content)
            .bind(input.type_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a row, returning it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Kiji1>, sqlx::Error> {
        let query = format!("DELETE FROM kiji1 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Kiji1>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
