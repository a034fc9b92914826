use log::{debug, error};
use std::{fmt, mem};

use crate::{config::EMPTY_ACCESS_MESSAGE, error::OptionalIntError};

/// An integer slot that is either empty or holds exactly one value.
///
/// Cloning produces an independent slot; mutating the clone never affects the
/// original. Storage is released when the instance is dropped.
#[derive(Debug, Default, PartialEq, Eq, Hash)]
pub struct OptionalInt {
    slot: Option<i32>,
}

impl OptionalInt {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Creates a slot holding `value`.
    pub fn with_value(value: i32) -> Self {
        Self { slot: Some(value) }
    }

    /// Whether a value is present.
    pub fn has_value(&self) -> bool {
        self.slot.is_some()
    }

    /// Stores `value`, overwriting any previous one.
    pub fn set(&mut self, value: i32) {
        self.slot = Some(value);
    }

    /// Returns the stored value.
    ///
    /// Reading an empty slot logs a diagnostic and returns
    /// [`OptionalIntError::Empty`].
    pub fn value(&self) -> Result<i32, OptionalIntError> {
        let Some(value) = self.slot else {
            error!("{}", EMPTY_ACCESS_MESSAGE);
            return Err(OptionalIntError::Empty);
        };
        Ok(value)
    }

    /// Returns the stored value without logging when empty.
    pub fn get(&self) -> Option<i32> {
        self.slot
    }

    /// Returns the stored value, or `default` when empty.
    pub fn value_or(&self, default: i32) -> i32 {
        self.slot.unwrap_or(default)
    }

    /// Moves the value out, leaving the slot empty.
    pub fn take(&mut self) -> Option<i32> {
        self.slot.take()
    }

    /// Releases the value, leaving the slot empty.
    pub fn reset(&mut self) {
        self.slot = None;
    }

    /// Exchanges the slots of `self` and `other`, presence included.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.slot, &mut other.slot);
    }

    /// Replaces this slot with an independent copy of `other`.
    ///
    /// The copy is built in full before it is swapped in, so `self` is never
    /// observed half-updated and the old value is released with the temporary.
    pub fn assign(&mut self, other: &Self) {
        let mut replacement = other.clone();
        self.swap(&mut replacement);
        debug!("assigned {} (released {})", self, replacement);
    }
}

impl Clone for OptionalInt {
    fn clone(&self) -> Self {
        Self { slot: self.slot }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl From<i32> for OptionalInt {
    fn from(value: i32) -> Self {
        Self::with_value(value)
    }
}

impl From<Option<i32>> for OptionalInt {
    fn from(slot: Option<i32>) -> Self {
        Self { slot }
    }
}

impl From<OptionalInt> for Option<i32> {
    fn from(value: OptionalInt) -> Self {
        value.slot
    }
}

impl fmt::Display for OptionalInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "<empty>"),
        }
    }
}
