//! Guesser state machine.
//!
//! The `Guesser` owns the secret and a single `GateState`. Every guess
//! goes through [`Guesser::matches`], which applies the transitions below in
//! order.
//!
//! ```text
//!              exact match
//!            ┌────────────┐
//!            ▼            │
//!      Open { n } ────────┘
//!         │   │
//!  miss,  │   │ miss with n + 1 == max_attempts
//!  n + 1  │   │ or distance > max_distance
//!         ▼   ▼
//!   Open { n + 1 }   Locked { n + 1 }  (terminal)
//! ```

use std::fmt;

use tracing::{debug, warn};

use crate::{config::GuesserConfig, distance::distance};

/// Lock state of a [`Guesser`].
///
/// `failures` is the number of consecutive misses. It survives into
/// `Locked` because [`Guesser::remaining`] keeps reporting it there.
///
/// Never exposed: together with `remaining()` it would tell a caller
/// whether a lock came from distance or from the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    /// Guesses are evaluated against the secret.
    Open {
        /// Consecutive misses since construction or the last exact match.
        failures: u8,
    },

    /// Every guess fails. There is no transition out of this state.
    Locked {
        /// Misses counted so far, saturating at the attempt budget.
        failures: u8,
    },
}

impl GateState {
    /// Consecutive misses recorded in this state.
    fn failures(self) -> u8 {
        match self {
            Self::Open { failures } | Self::Locked { failures } => failures,
        }
    }

    #[cfg(test)]
    fn is_locked(self) -> bool {
        matches!(self, Self::Locked { .. })
    }
}

/// Single-secret guess gate.
///
/// Holds one secret for its whole lifetime and answers guesses against it,
/// locking permanently after too many consecutive misses or after a single
/// miss that is too far from the secret.
///
/// The secret is never exposed and is redacted from `Debug` output.
///
/// The gate reports nothing beyond the result of each guess and the
/// remaining attempts. There is no lock query:
///
/// ```compile_fail
/// let gate = guessgate_core::Guesser::new("Secret");
/// gate.is_locked();
/// ```
///
/// and no way to copy a gate to get a fresh attempt budget:
///
/// ```compile_fail
/// let gate = guessgate_core::Guesser::new("Secret");
/// let _copy = gate.clone();
/// ```
pub struct Guesser {
    /// Secret, truncated to `config.max_secret_chars()` characters.
    secret: String,

    state: GateState,

    config: GuesserConfig,
}

impl Guesser {
    /// Create a gate for `secret` with the default policy.
    ///
    /// Only the first 32 characters of `secret` are kept. Any string,
    /// including the empty one, is accepted.
    pub fn new(secret: impl AsRef<str>) -> Self {
        Self::with_config(secret, GuesserConfig::default())
    }

    /// Create a gate for `secret` with a custom policy.
    pub fn with_config(secret: impl AsRef<str>, config: GuesserConfig) -> Self {
        let secret = secret.as_ref().chars().take(config.max_secret_chars()).collect();

        Self { secret, state: GateState::Open { failures: 0 }, config }
    }

    /// Check a guess against the secret.
    ///
    /// Returns true only for an exact, case-sensitive match while the gate
    /// is open; that also resets the miss counter. A miss counts against the
    /// attempt budget and may lock the gate. A lock never changes the result
    /// of the call that causes it, only of the calls after it.
    ///
    /// Once locked, every call returns false. Misses still consume attempts
    /// so [`remaining`](Self::remaining) looks the same for both kinds of
    /// lock.
    pub fn matches(&mut self, guess: impl AsRef<str>) -> bool {
        let guess = guess.as_ref();

        match self.state {
            GateState::Locked { failures } => {
                if guess != self.secret {
                    self.state = GateState::Locked { failures: self.count_miss(failures) };
                }
                false
            },
            GateState::Open { .. } if guess == self.secret => {
                self.state = GateState::Open { failures: 0 };
                true
            },
            GateState::Open { failures } => {
                self.state = self.reject(failures, guess);
                false
            },
        }
    }

    /// Same as [`matches`](Self::matches).
    pub fn r#match(&mut self, guess: impl AsRef<str>) -> bool {
        self.matches(guess)
    }

    /// Attempts left before the miss counter locks the gate.
    ///
    /// Keeps counting down after a lock and never goes below zero.
    pub fn remaining(&self) -> u8 {
        self.config.max_attempts().saturating_sub(self.state.failures())
    }

    #[cfg(test)]
    fn state(&self) -> GateState {
        self.state
    }

    #[cfg(test)]
    fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    /// Policy this gate was built with.
    pub fn config(&self) -> &GuesserConfig {
        &self.config
    }

    /// State after a miss while open.
    fn reject(&self, failures: u8, guess: &str) -> GateState {
        let failures = self.count_miss(failures);
        let max_attempts = self.config.max_attempts();

        if distance(&self.secret, guess) > self.config.max_distance() {
            warn!(reason = "distance", failures, "guess gate locked");
            return GateState::Locked { failures };
        }

        if failures >= max_attempts {
            warn!(reason = "attempts", failures, "guess gate locked");
            return GateState::Locked { failures };
        }

        debug!(failures, remaining = max_attempts - failures, "guess rejected");
        GateState::Open { failures }
    }

    fn count_miss(&self, failures: u8) -> u8 {
        failures.saturating_add(1).min(self.config.max_attempts())
    }
}

impl fmt::Debug for Guesser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guesser")
            .field("secret", &"<redacted>")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
