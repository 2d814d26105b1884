//! Kiji1 model and DTOs.

use atsukai_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `kiji1` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Kiji1 {
    pub id: DbId,
    pub atsukai_id: DbId,
    pub content: String,
    pub type_id: Option<DbId>,
}

/// DTO for creating a kiji1 row.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateKiji1 {
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub atsukai_id: DbId,
    #[validate(custom(function = "atsukai_core::validation::not_blank"))]
    pub content: String,
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub type_id: Option<DbId>,
}

/// Updates replace every mutable column; an omitted `type_id` is written as NULL.
pub type UpdateKiji1 = CreateKiji1;

/// Optional filters for `GET /kiji1`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Kiji1Filter {
    pub atsukai_id: Option<DbId>,
    pub type_id: Option<DbId>,
}
