//! Lockout policy.
//!
//! [`GuesserConfig::default`] is the canonical policy. Hosts that embed the
//! gate can carry a policy in their own configuration files; missing fields
//! fall back to the defaults and the result is validated on deserialize.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Characters of the secret kept at construction.
pub const DEFAULT_MAX_SECRET_CHARS: usize = 32;

/// Consecutive misses before the gate locks.
pub const DEFAULT_MAX_ATTEMPTS: u8 = 3;

/// Largest distance a miss may have without locking the gate.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Lockout policy for a [`Guesser`](crate::Guesser).
///
/// # Invariants
///
/// - `max_attempts >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGuesserConfig")]
pub struct GuesserConfig {
    max_secret_chars: usize,
    max_attempts: u8,
    max_distance: usize,
}

impl GuesserConfig {
    /// Create a validated policy.
    pub fn new(
        max_secret_chars: usize,
        max_attempts: u8,
        max_distance: usize,
    ) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }

        Ok(Self { max_secret_chars, max_attempts, max_distance })
    }

    /// Characters of the secret kept at construction; the rest is dropped.
    pub fn max_secret_chars(&self) -> usize {
        self.max_secret_chars
    }

    /// Consecutive misses that lock the gate.
    pub fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    /// A miss farther than this from the secret locks the gate at once.
    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Replace the secret length cap.
    #[must_use]
    pub fn with_max_secret_chars(self, max_secret_chars: usize) -> Self {
        Self { max_secret_chars, ..self }
    }

    /// Replace the attempt budget.
    pub fn with_max_attempts(self, max_attempts: u8) -> Result<Self, ConfigError> {
        Self::new(self.max_secret_chars, max_attempts, self.max_distance)
    }

    /// Replace the distance threshold.
    #[must_use]
    pub fn with_max_distance(self, max_distance: usize) -> Self {
        Self { max_distance, ..self }
    }
}

impl Default for GuesserConfig {
    fn default() -> Self {
        Self {
            max_secret_chars: DEFAULT_MAX_SECRET_CHARS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

/// Wire form of [`GuesserConfig`] before validation.
#[derive(Deserialize)]
#[serde(default)]
struct RawGuesserConfig {
    max_secret_chars: usize,
    max_attempts: u8,
    max_distance: usize,
}

impl Default for RawGuesserConfig {
    fn default() -> Self {
        let config = GuesserConfig::default();
        Self {
            max_secret_chars: config.max_secret_chars,
            max_attempts: config.max_attempts,
            max_distance: config.max_distance,
        }
    }
}

impl TryFrom<RawGuesserConfig> for GuesserConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGuesserConfig) -> Result<Self, Self::Error> {
        Self::new(raw.max_secret_chars, raw.max_attempts, raw.max_distance)
    }
}
