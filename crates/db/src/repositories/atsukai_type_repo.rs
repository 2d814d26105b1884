//! Repository for the `type` table.

use atsukai_core::types::DbId;
use sqlx::PgPool;

use crate::models::atsukai_type::{AtsukaiType, CreateAtsukaiType, TypeFilter, UpdateAtsukaiType};
use crate::repositories::display_order::{OrderedTable, SwapOutcome};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, atsukai_order, display_order";

/// Types are ordered separately within each category.
pub const ORDERING: OrderedTable = OrderedTable {
    entity: "Type",
    table: "\"type\"",
    scope_column: Some("atsukai_order"),
    columns: COLUMNS,
};

/// Provides CRUD and ordering operations for types.
pub struct AtsukaiTypeRepo;

impl AtsukaiTypeRepo {
    /// Insert a new type at the end of its category's order.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAtsukaiType,
    ) -> Result<AtsukaiType, sqlx::Error> {
        let query = format!(
            "INSERT INTO \"type\" (name, atsukai_order, display_order) \
             VALUES ($1, $2, {}) \
             RETURNING {COLUMNS}",
            ORDERING.next_order_expr(Some("$2"))
        );
        sqlx::query_as::<_, AtsukaiType>(&query)
            .bind(&input.name)
            .bind(input.atsukai_order)
            .fetch_one(pool)
            .await
    }

    /// Find a type by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AtsukaiType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM \"type\" WHERE id = $1");
        sqlx::query_as::<_, AtsukaiType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List types ordered by display_order, then id, optionally limited to
    /// one category.
    pub async fn list(pool: &PgPool, filter: &TypeFilter) -> Result<Vec<AtsukaiType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM \"type\" \
             WHERE ($1::BIGINT IS NULL OR atsukai_order = $1) \
             ORDER BY display_order, id"
        );
        sqlx::query_as::<_, AtsukaiType>(&query)
            .bind(filter.atsukai_order)
            .fetch_all(pool)
            .await
    }

    /// Update a type. Only non-`None` fields are applied.
    ///
    /// A change of `atsukai_order` without an explicit `display_order`
    /// appends the type to the end of the new category.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAtsukaiType,
    ) -> Result<Option<AtsukaiType>, sqlx::Error> {
        let query = format!(
            "UPDATE \"type\" SET \
                name = COALESCE($2, name), \
                display_order = COALESCE($4, \
                    CASE WHEN $3::BIGINT IS NOT NULL AND $3::BIGINT <> atsukai_order \
                         THEN {} \
                         ELSE display_order END), \
                atsukai_order = COALESCE($3, atsukai_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}",
            ORDERING.next_order_expr(Some("$3"))
        );
        sqlx::query_as::<_, AtsukaiType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.atsukai_order)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Swap the display orders of two types of the same category.
    pub async fn swap_order(
        pool: &PgPool,
        first: DbId,
        second: DbId,
    ) -> Result<SwapOutcome<AtsukaiType>, sqlx::Error> {
        ORDERING.swap(pool, first, second).await
    }

    /// Delete a type, returning the removed row.
    ///
    /// Its memos are removed and kiji rows referencing it keep their row
    /// with `type_id` set to NULL.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<AtsukaiType>, sqlx::Error> {
        let query = format!("DELETE FROM \"type\" WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, AtsukaiType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
