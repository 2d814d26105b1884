//! Display-order bookkeeping shared by the ordered tables.
//!
//! An [`OrderedTable`] describes a table with a `display_order` column and an
//! optional scope column. Orders are assigned `max + 1` within the scope on
//! insert, swapped pairwise inside a single transaction, or overwritten
//! directly. Nothing renumbers rows after a delete, so gaps are expected.
//! Ties are possible (two concurrent inserts can read the same max); readers
//! sort by `display_order, id`.

use atsukai_core::types::{DbId, DisplayOrder};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgConnection, PgPool};

/// A table whose rows carry a `display_order`.
#[derive(Debug, Clone, Copy)]
pub struct OrderedTable {
    /// Entity name used in not-found errors.
    pub entity: &'static str,
    /// Table name as it appears in SQL (quoted where needed).
    pub table: &'static str,
    /// Parent column that partitions the order, if any.
    pub scope_column: Option<&'static str>,
    /// Column list returned by `RETURNING`.
    pub columns: &'static str,
}

/// Outcome of [`OrderedTable::swap`].
#[derive(Debug)]
pub enum SwapOutcome<T> {
    /// Both rows were updated and the transaction committed.
    Swapped { first: T, second: T },
    /// The given id does not exist. Nothing was written.
    Missing(DbId),
    /// The rows belong to different scopes. Nothing was written.
    CrossScope { first: DbId, second: DbId },
}

#[derive(Debug, Clone, Copy, FromRow)]
struct OrderSlot {
    id: DbId,
    scope: Option<DbId>,
    display_order: DisplayOrder,
}

impl OrderedTable {
    /// SQL sub-select yielding the next order for an insert.
    ///
    /// `scope_param` is the placeholder (e.g. `"$2"`) bound to the scope
    /// value. Without a scope column or placeholder the whole table is the
    /// scope. An empty scope yields `1`.
    pub fn next_order_expr(&self, scope_param: Option<&str>) -> String {
        match (self.scope_column, scope_param) {
            (Some(column), Some(param)) => format!(
                "(SELECT COALESCE(MAX(display_order), 0) + 1 FROM {} WHERE {column} = {param})",
                self.table
            ),
            _ => format!(
                "(SELECT COALESCE(MAX(display_order), 0) + 1 FROM {})",
                self.table
            ),
        }
    }

    /// Compute the order the next insert into `scope` would receive.
    pub async fn next_order(
        &self,
        pool: &PgPool,
        scope: Option<DbId>,
    ) -> Result<DisplayOrder, sqlx::Error> {
        let query = format!("SELECT {}", self.next_order_expr(scope.map(|_| "$1")));
        let mut q = sqlx::query_scalar::<_, DisplayOrder>(&query);
        if let Some(scope) = scope {
            q = q.bind(scope);
        }
        q.fetch_one(pool).await
    }

    /// Overwrite one row's order.
    ///
    /// Single statement, not coordinated with [`swap`](Self::swap): a
    /// concurrent swap touching the same row may interleave with it.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_order<T>(
        &self,
        pool: &PgPool,
        id: DbId,
        display_order: DisplayOrder,
    ) -> Result<Option<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let query = format!(
            "UPDATE {} SET display_order = $2 WHERE id = $1 RETURNING {}",
            self.table, self.columns
        );
        sqlx::query_as::<_, T>(&query)
            .bind(id)
            .bind(display_order)
            .fetch_optional(pool)
            .await
    }

    /// Exchange the orders of two rows in one transaction.
    ///
    /// Commits only when both writes succeed. Any error, a missing id or a
    /// scope mismatch rolls the transaction back.
    pub async fn swap<T>(
        &self,
        pool: &PgPool,
        first: DbId,
        second: DbId,
    ) -> Result<SwapOutcome<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut tx = pool.begin().await?;
        let outcome = self.swap_in(&mut *tx, first, second).await?;

        match outcome {
            SwapOutcome::Swapped { .. } => tx.commit().await?,
            SwapOutcome::Missing(id) => {
                tracing::debug!(entity = self.entity, id, "Swap target missing");
                tx.rollback().await?;
            }
            SwapOutcome::CrossScope { first, second } => {
                tracing::debug!(entity = self.entity, first, second, "Swap across scopes");
                tx.rollback().await?;
            }
        }

        Ok(outcome)
    }

    /// Swap on a caller-owned connection, normally an open transaction.
    ///
    /// Both rows are locked before either is written. The caller decides
    /// whether to commit.
    pub async fn swap_in<T>(
        &self,
        conn: &mut PgConnection,
        first: DbId,
        second: DbId,
    ) -> Result<SwapOutcome<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let scope = self.scope_column.unwrap_or("NULL::BIGINT");
        // Lock in id order so two swaps over the same pair cannot deadlock.
        let lock_query = format!(
            "SELECT id, {scope} AS scope, display_order FROM {} \
             WHERE id IN ($1, $2) ORDER BY id FOR UPDATE",
            self.table
        );
        let slots: Vec<OrderSlot> = sqlx::query_as(&lock_query)
            .bind(first)
            .bind(second)
            .fetch_all(&mut *conn)
            .await?;

        let find = |id: DbId| slots.iter().find(|s| s.id == id).copied();
        let Some(a) = find(first) else {
            return Ok(SwapOutcome::Missing(first));
        };
        let Some(b) = find(second) else {
            return Ok(SwapOutcome::Missing(second));
        };
        if a.scope != b.scope {
            return Ok(SwapOutcome::CrossScope { first, second });
        }

        let update_query = format!(
            "UPDATE {} SET display_order = $2 WHERE id = $1 RETURNING {}",
            self.table, self.columns
        );
        let first_row = sqlx::query_as::<_, T>(&update_query)
            .bind(a.id)
            .bind(b.display_order)
            .fetch_one(&mut *conn)
            .await?;
        let second_row = sqlx::query_as::<_, T>(&update_query)
            .bind(b.id)
            .bind(a.display_order)
            .fetch_one(&mut *conn)
            .await?;

        Ok(SwapOutcome::Swapped {
            first: first_row,
            second: second_row,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAT: OrderedTable = OrderedTable {
        entity: "Flat",
        table: "flat",
        scope_column: None,
        columns: "id, display_order",
    };

    const SCOPED: OrderedTable = OrderedTable {
        entity: "Scoped",
        table: "\"scoped\"",
        scope_column: Some("parent_id"),
        columns: "id, parent_id, display_order",
    };

    #[test]
    fn next_order_expr_without_scope_covers_whole_table() {
        assert_eq!(
            FLAT.next_order_expr(None),
            "(SELECT COALESCE(MAX(display_order), 0) + 1 FROM flat)"
        );
        // A placeholder is ignored when the table has no scope column.
        assert_eq!(FLAT.next_order_expr(Some("$2")), FLAT.next_order_expr(None));
    }

    #[test]
    fn next_order_expr_with_scope_filters_by_parent() {
        assert_eq!(
            SCOPED.next_order_expr(Some("$2")),
            "(SELECT COALESCE(MAX(display_order), 0) + 1 FROM \"scoped\" WHERE parent_id = $2)"
        );
    }
}
