//! Guess distance.
//!
//! This is deliberately NOT Levenshtein distance. The gate uses a cheap,
//! length-driven approximation:
//!
//! ```text
//! raw      = |len(guess) - len(secret)| + #{ i < min(len) : secret[i] != guess[i] }
//! distance = min(raw, len(secret))
//! ```
//!
//! Lengths and positions are counted in characters, not bytes.
//!
//! # Properties
//!
//! - One string a prefix of the other: distance is the length difference.
//! - Equal lengths: distance is the Hamming distance.
//! - The result never exceeds the secret's own length, so secrets of two
//!   characters or fewer can never produce a distance above 2.

/// Distance between the stored `secret` and a `guess`.
///
/// Argument order matters only through the cap: the result is bounded by
/// the length of `secret`.
pub fn distance(secret: &str, guess: &str) -> usize {
    let secret_len = secret.chars().count();
    let guess_len = guess.chars().count();

    let mismatched = secret.chars().zip(guess.chars()).filter(|(s, g)| s != g).count();

    (secret_len.abs_diff(guess_len) + mismatched).min(secret_len)
}
