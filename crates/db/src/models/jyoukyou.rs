//! Jyoukyou (situation record) model and DTOs.

use atsukai_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `jyoukyou` table. Every field is free-form text.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Jyoukyou {
    pub id: DbId,
    pub car_position: Option<String>,
    pub request_source: Option<String>,
    pub response_method: Option<String>,
    pub action_type: Option<String>,
    pub cooperation: Option<String>,
    pub afterword: Option<String>,
}

/// DTO for creating a situation record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateJyoukyou {
    pub car_position: Option<String>,
    pub request_source: Option<String>,
    pub response_method: Option<String>,
    pub action_type: Option<String>,
    pub cooperation: Option<String>,
    pub afterword: Option<String>,
}

/// Updates replace all six fields; omitted ones are written as NULL.
pub type UpdateJyoukyou = CreateJyoukyou;
