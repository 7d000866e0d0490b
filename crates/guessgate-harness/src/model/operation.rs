//! Operations for model-based testing.
//!
//! Operations are generated randomly (by proptest or the fuzzer) and applied
//! to both the model and the real gate. Most of them derive their guess from
//! the secret so that random sequences regularly hit the interesting
//! boundaries: exact matches, near misses and distance locks.

use arbitrary::Arbitrary;

/// Operations that can be applied to a gate.
#[derive(Debug, Clone, Arbitrary)]
pub enum Operation {
    /// Guess the secret exactly.
    GuessSecret,

    /// Guess the secret with one character replaced.
    GuessNear {
        /// Position to replace (wrapped to the secret length).
        position: u8,
        /// Replacement character.
        replacement: char,
    },

    /// Guess the secret with characters appended.
    GuessLonger {
        /// Number of extra characters (1 to 8).
        extra: u8,
    },

    /// Guess the secret with characters removed from the end.
    GuessShorter {
        /// Number of characters to drop (wrapped to the secret length).
        cut: u8,
    },

    /// Guess an unrelated string.
    GuessRaw(String),

    /// Read the remaining attempts without guessing.
    QueryRemaining,
}

impl Operation {
    /// The guess this operation makes against `secret`, if any.
    pub fn guess_for(&self, secret: &str) -> Option<String> {
        let mut chars: Vec<char> = secret.chars().collect();

        match self {
            Self::GuessSecret => Some(secret.to_owned()),
            Self::GuessNear { position, replacement } => {
                if chars.is_empty() {
                    chars.push(*replacement);
                } else {
                    let index = usize::from(*position) % chars.len();
                    chars[index] = *replacement;
                }
                Some(chars.into_iter().collect())
            },
            Self::GuessLonger { extra } => {
                let extra = usize::from(*extra % 8) + 1;
                Some(format!("{secret}{}", "z".repeat(extra)))
            },
            Self::GuessShorter { cut } => {
                let keep = chars.len().saturating_sub(usize::from(*cut) % (chars.len() + 1));
                chars.truncate(keep);
                Some(chars.into_iter().collect())
            },
            Self::GuessRaw(guess) => Some(guess.clone()),
            Self::QueryRemaining => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_guess_replaces_one_character() {
        let op = Operation::GuessNear { position: 9, replacement: 'X' };
        assert_eq!(op.guess_for("abcd").as_deref(), Some("aXcd"));
    }

    #[test]
    fn near_guess_on_empty_secret() {
        let op = Operation::GuessNear { position: 0, replacement: 'X' };
        assert_eq!(op.guess_for("").as_deref(), Some("X"));
    }

    #[test]
    fn longer_guess_appends() {
        let op = Operation::GuessLonger { extra: 2 };
        assert_eq!(op.guess_for("ab").as_deref(), Some("abzzz"));
    }

    #[test]
    fn shorter_guess_truncates() {
        let op = Operation::GuessShorter { cut: 2 };
        assert_eq!(op.guess_for("abcd").as_deref(), Some("ab"));
    }

    #[test]
    fn query_does_not_guess() {
        assert_eq!(Operation::QueryRemaining.guess_for("abcd"), None);
    }
}
