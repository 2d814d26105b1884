//! Kiji2 model and DTOs.

use atsukai_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `kiji2` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Kiji2 {
    pub id: DbId,
    pub atsukai_id: DbId,
    pub detail: String,
    pub jyoukyou_id: Option<DbId>,
    pub type_id: Option<DbId>,
}

/// DTO for creating a kiji2 row.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateKiji2 {
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub atsukai_id: DbId,
    #[validate(custom(function = "atsukai_core::validation::not_blank"))]
    pub detail: String,
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub jyoukyou_id: Option<DbId>,
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub type_id: Option<DbId>,
}

/// Updates replace every mutable column; omitted optional ids are written as NULL.
pub type UpdateKiji2 = CreateKiji2;

/// Optional filters for `GET /kiji2`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Kiji2Filter {
    pub atsukai_id: Option<DbId>,
    pub type_id: Option<DbId>,
    pub jyoukyou_id: Option<DbId>,
}
