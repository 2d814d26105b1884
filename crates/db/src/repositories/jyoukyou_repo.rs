//! Repository for the `jyoukyou` table.

use atsukai_core::types::DbId;
use sqlx::PgPool;

use crate::models::jyoukyou::{CreateJyoukyou, Jyoukyou, UpdateJyoukyou};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, car_position, request_source, response_method, action_type, cooperation, afterword";

/// Provides CRUD operations for situation records.
pub struct JyoukyouRepo;

impl JyoukyouRepo {
    /// Insert a new record, returning it.
    pub async fn create(pool: &PgPool, input: &CreateJyoukyou) -> Result<Jyoukyou, sqlx::Error> {
        let query = format!(
            "INSERT INTO jyoukyou \
                (car_position, request_source, response_method, action_type, cooperation, afterword) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Jyoukyou>(&query)
            .bind(&input.car_position)
            .bind(&input.request_source)
            .bind(&input.response_method)
            .bind(&input.action_type)
            .bind(&input.cooperation)
            .bind(&input.afterword)
            .fetch_one(pool)
            .await
    }

    /// Find a record by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Jyoukyou>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jyoukyou WHERE id = $1");
        sqlx::query_as::<_, Jyoukyou>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all records ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Jyoukyou>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jyoukyou ORDER BY id");
        sqlx::query_as::<_, Jyoukyou>(&query).fetch_all(pool).await
    }

    /// Replace all six fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJyoukyou,
    ) -> Result<Option<Jyoukyou>, sqlx::Error> {
        let query = format!(
            "UPDATE jyoukyou SET \
                car_position = $2, request_source = $3, response_method = $4, \
                action_type = $5, cooperation = $6, afterword = $7 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Jyoukyou>(&query)
            .bind(id)
            .bind(&input.car_position)
            .bind(&input.request_source)
            .bind(&input.response_method)
            .bind(&input.action_type)
            .bind(&input.cooperation)
            .bind(&input.afterword)
            .fetch_optional(pool)
            .await
    }

    /// Delete a record, returning it. Kiji2 rows pointing at it keep their
    /// row with `jyoukyou_id` set to NULL.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Jyoukyou>, sqlx::Error> {
        let query = format!("DELETE FROM jyoukyou WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Jyoukyou>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
