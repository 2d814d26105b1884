//! Request handlers, one submodule per table.
//!
//! Handlers validate input before touching the store, delegate to the
//! matching repository in `atsukai_db`, and map `None` results to
//! [`CoreError::NotFound`].

pub mod atsukai;
pub mod atsukai_type;
pub mod health;
pub mod jyoukyou;
pub mod kiji1;
pub mod kiji2;
pub mod memo;

use atsukai_core::error::CoreError;
use atsukai_core::types::DbId;
use atsukai_db::models::display_order::SwapConfirmation;
use atsukai_db::repositories::SwapOutcome;
use serde::Serialize;

use crate::error::AppError;

/// Not-found error for `entity` with the given `id`.
pub(crate) fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// Turn a repository swap outcome into the confirmation body or an error.
pub(crate) fn resolve_swap<T: Serialize>(
    entity: &'static str,
    outcome: SwapOutcome<T>,
) -> Result<SwapConfirmation<T>, AppError> {
    match outcome {
        SwapOutcome::Swapped { first, second } => Ok(SwapConfirmation::new(first, second)),
        SwapOutcome::Missing(id) => Err(not_found(entity, id)),
        SwapOutcome::CrossScope { first, second } => Err(AppError::Core(CoreError::Validation(
            format!("{entity} {first} and {second} belong to different categories"),
        ))),
    }
}
