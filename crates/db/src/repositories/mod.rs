//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Lookups that can miss
//! return `Option`; the HTTP layer turns `None` into a not-found error.

pub mod atsukai_repo;
pub mod atsukai_type_repo;
pub mod display_order;
pub mod jyoukyou_repo;
pub mod kiji1_repo;
pub mod kiji2_repo;
pub mod memo_repo;

pub use atsukai_repo::AtsukaiRepo;
pub use atsukai_type_repo::AtsukaiTypeRepo;
pub use display_order::{OrderedTable, SwapOutcome};
pub use jyoukyou_repo::JyoukyouRepo;
pub use kiji1_repo::Kiji1Repo;
pub use kiji2_repo::Kiji2Repo;
pub use memo_repo::MemoRepo;
