//! Row models and request DTOs, one module per table.

pub mod atsukai;
pub mod atsukai_type;
pub mod display_order;
pub mod jyoukyou;
pub mod kiji1;
pub mod kiji2;
pub mod memo;
