//! Model guesser.

use guessgate_core::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_DISTANCE, DEFAULT_MAX_SECRET_CHARS};

use super::{ObservableState, operation::Operation};

/// Reference guess gate using the default policy.
#[derive(Debug, Clone)]
pub struct ModelGuesser {
    secret: Vec<char>,
    failures: u8,
    locked: bool,
}

impl ModelGuesser {
    /// Create a model gate for `secret`.
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.chars().take(DEFAULT_MAX_SECRET_CHARS).collect(),
            failures: 0,
            locked: false,
        }
    }

    /// The stored (truncated) secret.
    pub fn secret(&self) -> String {
        self.secret.iter().collect()
    }

    /// Whether the model has locked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Attempts left.
    pub fn remaining(&self) -> u8 {
        DEFAULT_MAX_ATTEMPTS - self.failures
    }

    /// Check a guess.
    pub fn guess(&mut self, guess: &str) -> bool {
        let guess: Vec<char> = guess.chars().collect();

        if guess == self.secret {
            if self.locked {
                return false;
            }
            self.failures = 0;
            return true;
        }

        if self.failures < DEFAULT_MAX_ATTEMPTS {
            self.failures += 1;
        }

        if !self.locked
            && (self.distance(&guess) > DEFAULT_MAX_DISTANCE
                || self.failures == DEFAULT_MAX_ATTEMPTS)
        {
            self.locked = true;
        }

        false
    }

    /// Apply an operation and return what a caller would observe.
    pub fn apply(&mut self, op: &Operation) -> ObservableState {
        let matched = op.guess_for(&self.secret()).map(|guess| self.guess(&guess));
        ObservableState { matched, remaining: self.remaining() }
    }

    fn distance(&self, guess: &[char]) -> usize {
        let longest = self.secret.len().max(guess.len());
        let mut distance = 0;

        for i in 0..longest {
            match (self.secret.get(i), guess.get(i)) {
                (Some(s), Some(g)) if s == g => {},
                _ => distance += 1,
            }
        }

        distance.min(self.secret.len())
    }
}
