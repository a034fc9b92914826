pub mod arith;
pub mod config;
pub mod error;
pub mod optional;

pub use arith::{add, add_with, checked_add, saturating_add, OverflowPolicy};
pub use error::{ArithError, OptionalIntError};
pub use optional::OptionalInt;
