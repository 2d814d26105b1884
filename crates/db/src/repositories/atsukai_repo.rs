//! Repository for the `atsukai` table.

use atsukai_core::types::{DbId, DisplayOrder};
use sqlx::PgPool;

use crate::models::atsukai::{Atsukai, CreateAtsukai, UpdateAtsukai};
use crate::repositories::display_order::{OrderedTable, SwapOutcome};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, display_order";

/// Categories form one order across the whole table.
pub const ORDERING: OrderedTable = OrderedTable {
    entity: "Atsukai",
    table: "atsukai",
    scope_column: None,
    columns: COLUMNS,
};

/// Provides CRUD and ordering operations for categories.
pub struct AtsukaiRepo;

impl AtsukaiRepo {
    /// Insert a new category at the end of the order.
    pub async fn create(pool: &PgPool, input: &CreateAtsukai) -> Result<Atsukai, sqlx::Error> {
        let query = format!(
            "INSERT INTO atsukai (name, display_order) \
             VALUES ($1, {}) \
             RETURNING {COLUMNS}",
            ORDERING.next_order_expr(None)
        );
        sqlx::query_as::<_, Atsukai>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a category by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Atsukai>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM atsukai WHERE id = $1");
        sqlx::query_as::<_, Atsukai>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories ordered by display_order, then id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Atsukai>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM atsukai ORDER BY display_order, id");
        sqlx::query_as::<_, Atsukai>(&query).fetch_all(pool).await
    }

    /// Number of categories. Used by the health check to prove the schema is readable.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM atsukai")
            .fetch_one(pool)
            .await
    }

    /// Rename a category.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAtsukai,
    ) -> Result<Option<Atsukai>, sqlx::Error> {
        let query = format!("UPDATE atsukai SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Atsukai>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a category's display order.
    pub async fn set_order(
        pool: &PgPool,
        id: DbId,
        display_order: DisplayOrder,
    ) -> Result<Option<Atsukai>, sqlx::Error> {
        ORDERING.set_order(pool, id, display_order).await
    }

    /// Swap the display orders of two categories in one transaction.
    pub async fn swap_order(
        pool: &PgPool,
        first: DbId,
        second: DbId,
    ) -> Result<SwapOutcome<Atsukai>, sqlx::Error> {
        ORDERING.swap(pool, first, second).await
    }

    /// Delete a category, returning the removed row.
    ///
    /// Types, memos and kiji rows under it are removed by the schema's
    /// `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Atsukai>, sqlx::Error> {
        let query = format!("DELETE FROM atsukai WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Atsukai>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
