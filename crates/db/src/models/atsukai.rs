//! Atsukai (top-level category) model and DTOs.

use atsukai_core::types::{DbId, DisplayOrder};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `atsukai` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Atsukai {
    pub id: DbId,
    pub name: String,
    pub display_order: DisplayOrder,
}

/// DTO for creating a category. `display_order` is always assigned by the store.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAtsukai {
    #[validate(custom(function = "atsukai_core::validation::not_blank"))]
    pub name: String,
}

/// DTO for renaming a category. `name` is the only mutable field here;
/// order changes go through `/order` or `/reorder`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAtsukai {
    #[validate(custom(function = "atsukai_core::validation::not_blank"))]
    pub name: String,
}
