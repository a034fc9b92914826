use std::{fmt, str::FromStr};

use crate::error::ArithError;

/// How a sum outside the `i32` range is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    /// Two's-complement wraparound.
    #[default]
    Wrap,
    /// Clamp to `i32::MIN` or `i32::MAX`.
    Saturate,
    /// Report [`ArithError::Overflow`].
    Checked,
}

impl OverflowPolicy {
    /// Name accepted by the `FromStr` impl.
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowPolicy::Wrap => "wrap",
            OverflowPolicy::Saturate => "saturate",
            OverflowPolicy::Checked => "checked",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverflowPolicy {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrap" => Ok(OverflowPolicy::Wrap),
            "saturate" => Ok(OverflowPolicy::Saturate),
            "checked" => Ok(OverflowPolicy::Checked),
            _ => Err(ArithError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Adds two integers with two's-complement wraparound.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Adds two integers, reporting [`ArithError::Overflow`] outside the `i32` range.
pub fn checked_add(a: i32, b: i32) -> Result<i32, ArithError> {
    a.checked_add(b).ok_or(ArithError::Overflow { a, b })
}

/// Adds two integers, clamping to `i32::MIN` or `i32::MAX`.
pub fn saturating_add(a: i32, b: i32) -> i32 {
    a.saturating_add(b)
}

/// Adds two integers under the given overflow policy.
///
/// Only [`OverflowPolicy::Checked`] can fail.
pub fn add_with(policy: OverflowPolicy, a: i32, b: i32) -> Result<i32, ArithError> {
    match policy {
        OverflowPolicy::Wrap => Ok(add(a, b)),
        OverflowPolicy::Saturate => Ok(saturating_add(a, b)),
        OverflowPolicy::Checked => checked_add(a, b),
    }
}
