//! Thread-safe guesser handle.
//!
//! [`Guesser::matches`] needs `&mut self`, so a single owner is already
//! serialized. `SharedGuesser` is for hosts that hand the same gate to
//! several threads: each call holds the lock for the whole
//! read-check-update sequence, so the miss counter can never pass the
//! attempt budget and no lock transition is lost.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{config::GuesserConfig, guesser::Guesser};

/// Cloneable, `Send + Sync` handle to one [`Guesser`].
///
/// Clones share one attempt budget. Like the gate itself, the handle has no
/// lock query:
///
/// ```compile_fail
/// let gate = guessgate_core::SharedGuesser::new("Secret");
/// gate.is_locked();
/// ```
#[derive(Debug, Clone)]
pub struct SharedGuesser {
    inner: Arc<Mutex<Guesser>>,
}

impl SharedGuesser {
    /// Create a shared gate for `secret` with the default policy.
    pub fn new(secret: impl AsRef<str>) -> Self {
        Self::from(Guesser::new(secret))
    }

    /// Create a shared gate for `secret` with a custom policy.
    pub fn with_config(secret: impl AsRef<str>, config: GuesserConfig) -> Self {
        Self::from(Guesser::with_config(secret, config))
    }

    /// See [`Guesser::matches`].
    pub fn matches(&self, guess: impl AsRef<str>) -> bool {
        self.lock().matches(guess)
    }

    /// See [`Guesser::remaining`].
    pub fn remaining(&self) -> u8 {
        self.lock().remaining()
    }

    // A panic can't leave the gate half-updated: every transition is a
    // single assignment of `GateState`.
    fn lock(&self) -> MutexGuard<'_, Guesser> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Guesser> for SharedGuesser {
    fn from(guesser: Guesser) -> Self {
        Self { inner: Arc::new(Mutex::new(guesser)) }
    }
}
