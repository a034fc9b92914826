use crate::arith::OverflowPolicy;

/// Diagnostic written to the error log when a value is read from an empty slot.
pub const EMPTY_ACCESS_MESSAGE: &str = "No value";

/// Policy used by the demo binary when none is configured.
pub const DEFAULT_OVERFLOW_POLICY: OverflowPolicy = OverflowPolicy::Wrap;

/// Environment variable selecting the demo binary's overflow policy.
pub const OVERFLOW_POLICY_ENV: &str = "OPTIONAL_INT_OVERFLOW";

/// Operands used by the demo binary when none are given on the command line.
pub const DEFAULT_OPERANDS: (i32, i32) = (2, 3);
