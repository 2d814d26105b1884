//! Input validation run before any query reaches the store.
//!
//! Request DTOs derive [`validator::Validate`]; handlers call
//! [`validate_input`] to turn field errors into a single
//! [`CoreError::Validation`] message.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::types::{DbId, DisplayOrder, MAX_DISPLAY_ORDER};

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

/// Reject strings that are empty or contain only whitespace.
///
/// Used as `#[validate(custom(function = "atsukai_core::validation::not_blank"))]`.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Run the derived validators on `input`.
///
/// Field errors are flattened into `field: reason` pairs sorted by field
/// name so the message is stable across runs.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Validate the id pair of a reorder request.
///
/// Both ids must be positive and must name two different rows.
pub fn validate_swap_pair(first: DbId, second: DbId) -> Result<(), CoreError> {
    if first < 1 || second < 1 {
        return Err(CoreError::Validation(format!(
            "id1 and id2 must be positive, got {first} and {second}"
        )));
    }
    if first == second {
        return Err(CoreError::Validation(format!(
            "id1 and id2 must differ, got {first} twice"
        )));
    }
    Ok(())
}

/// Validate a display order supplied by a client.
///
/// Must lie in `1..=MAX_DISPLAY_ORDER`.
pub fn validate_display_order(order: DisplayOrder) -> Result<(), CoreError> {
    if !(1..=MAX_DISPLAY_ORDER).contains(&order) {
        return Err(CoreError::Validation(format!(
            "display_order must be between 1 and {MAX_DISPLAY_ORDER}, got {order}"
        )));
    }
    Ok(())
}

fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let reason = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .or_else(|| errs.first().map(|e| e.code.to_string()))
                .unwrap_or_else(|| "invalid".to_string());
            format!("{field}: {reason}")
        })
        .collect();
    fields.sort();
    fields.join("; ")
}
