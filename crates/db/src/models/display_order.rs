//! Request and response shapes for display-order changes.

use atsukai_core::types::{DbId, DisplayOrder};
use serde::{Deserialize, Serialize};

/// Body of `PUT /{entity}/reorder`: swap the orders of two rows.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SwapOrderRequest {
    pub id1: DbId,
    pub id2: DbId,
}

/// Body of `PUT /atsukai/{id}/order`: overwrite one row's order.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SetDisplayOrder {
    pub display_order: DisplayOrder,
}

/// Result of a committed swap, carrying both rows with their new orders.
#[derive(Debug, Clone, Serialize)]
pub struct SwapConfirmation<T: Serialize> {
    pub message: &'static str,
    pub swapped: [T; 2],
}

impl<T: Serialize> SwapConfirmation<T> {
    pub fn new(first: T, second: T) -> Self {
        Self {
            message: "display order swapped",
            swapped: [first, second],
        }
    }
}
