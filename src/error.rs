use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionalIntError {
    #[error("no value present")]
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithError {
    #[error("integer overflow: {a} + {b}")]
    Overflow { a: i32, b: i32 },

    #[error("unknown overflow policy: {0}")]
    UnknownPolicy(String),
}
