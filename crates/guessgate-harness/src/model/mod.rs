//! Reference model for model-based testing.
//!
//! The model restates the lockout rules as plainly as possible: two
//! independent fields instead of a tagged state, and a distance computed
//! position by position. It serves as the oracle against which the real
//! implementation is verified.

mod guesser;
pub mod operation;

pub use guesser::ModelGuesser;
pub use operation::Operation;

/// Observable state for oracle comparison.
///
/// Everything a caller of the real gate can see after one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservableState {
    /// Result of the guess, `None` for operations that don't guess.
    pub matched: Option<bool>,
    /// Attempts left after the operation.
    pub remaining: u8,
}
