//! Repository for the `memo` table.

use atsukai_core::types::DbId;
use sqlx::PgPool;

use crate::models::memo::{CreateMemo, Memo, MemoFilter, UpdateMemo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, type_id, atsukai_id, content";

/// Provides CRUD operations for memos.
pub struct MemoRepo;

impl MemoRepo {
    /// Insert a new memo, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMemo) -> Result<Memo, sqlx::Error> {
        let query = format!(
            "INSERT INTO memo (type_id, atsukai_id, content) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Memo>(&query)
            .bind(input.type_id)
            .bind(input.atsukai_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a memo by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Memo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM memo WHERE id = $1");
        sqlx::query_as::<_, Memo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the memo for a `(type_id, atsukai_id)` pair.
    ///
    /// The pair is not unique in the schema; when several rows match, the
    /// oldest (lowest id) wins.
    pub async fn find_by_pair(
        pool: &PgPool,
        type_id: DbId,
        atsukai_id: DbId,
    ) -> Result<Option<Memo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM memo \
             WHERE type_id = $1 AND atsukai_id = $2 \
             ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, Memo>(&query)
            .bind(type_id)
            .bind(atsukai_id)
            .fetch_optional(pool)
            .await
    }

    /// List memos ordered by id, filtered by either parent when given.
    pub async fn list(pool: &PgPool, filter: &MemoFilter) -> Result<Vec<Memo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM memo \
             WHERE ($1::BIGINT IS NULL OR atsukai_id = $1) \
               AND ($2::BIGINT IS NULL OR type_id = $2) \
             ORDER BY id"
        );
        sqlx::query_as::<_, Memo>(&query)
            .bind(filter.atsukai_id)
            .bind(filter.type_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a memo's content.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMemo,
    ) -> Result<Option<Memo>, sqlx::Error> {
        let query = format!("UPDATE memo SET content = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Memo>(&query)
            .bind(id)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a memo, returning the removed row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Memo>, sqlx::Error> {
        let query = format!("DELETE FROM memo WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Memo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
