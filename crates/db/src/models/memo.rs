//! Memo model and DTOs.

use atsukai_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `memo` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Memo {
    pub id: DbId,
    pub type_id: DbId,
    pub atsukai_id: DbId,
    pub content: String,
}

/// DTO for creating a memo.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMemo {
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub type_id: DbId,
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub atsukai_id: DbId,
    pub content: String,
}

/// DTO for replacing a memo's content. An empty string clears the memo.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMemo {
    pub content: String,
}

/// Exact `(type_id, atsukai_id)` lookup used by `GET /memo`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MemoLookup {
    pub type_id: DbId,
    pub atsukai_id: DbId,
}

/// Optional filters used by `GET /memo/list`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemoFilter {
    pub atsukai_id: Option<DbId>,
    pub type_id: Option<DbId>,
}
