//! Guess gate error types.
//!
//! Guessing itself never fails. The only fallible step is building a
//! [`GuesserConfig`](crate::GuesserConfig) from host-supplied values.

use thiserror::Error;

/// Errors from building a lockout policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The policy would lock before the first guess could be made.
    #[error("max_attempts must be at least 1")]
    NoAttempts,
}
