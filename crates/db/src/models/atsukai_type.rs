//! Type model and DTOs.
//!
//! Types belong to one atsukai through `atsukai_order` and are ordered
//! within that category only.

use atsukai_core::types::{DbId, DisplayOrder};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `type` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AtsukaiType {
    pub id: DbId,
    pub name: String,
    pub atsukai_order: DbId,
    pub display_order: DisplayOrder,
}

/// DTO for creating a type. `display_order` is assigned within the
/// `atsukai_order` scope.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAtsukaiType {
    #[validate(custom(function = "atsukai_core::validation::not_blank"))]
    pub name: String,
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub atsukai_order: DbId,
}

/// DTO for updating a type. Only present fields are applied.
///
/// Moving a type to another category without an explicit `display_order`
/// appends it to the end of the new category.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAtsukaiType {
    #[validate(custom(function = "atsukai_core::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub atsukai_order: Option<DbId>,
    pub display_order: Option<DisplayOrder>,
}

/// Query filter for listing types.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeFilter {
    pub atsukai_order: Option<DbId>,
}
