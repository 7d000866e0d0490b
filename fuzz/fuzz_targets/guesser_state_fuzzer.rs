//! Fuzz target for the [`Guesser`] state machine
//!
//! Prevent lockout bypass via unexpected guess sequences
//!
//! # Strategy
//!
//! - Secrets: arbitrary strings, including empty and over-length ones
//! - Guesses: exact, near-miss, longer, shorter and unrelated strings
//! - Oracle: every step is mirrored on the reference model, which is the
//!   only side with a lock query
//!
//! # Invariants
//!
//! - `Locked` is terminal: no transition out of it
//! - A locked gate NEVER returns true, not even for the secret
//! - `remaining()` stays in `[0, 3]`
//! - The real gate and the model never diverge
//! - NEVER panic on any input

#![no_main]

use arbitrary::Arbitrary;
use guessgate_core::Guesser;
use guessgate_harness::{ModelGuesser, ObservableState, Operation};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    secret: String,
    ops: Vec<Operation>,
}

fuzz_target!(|input: FuzzInput| {
    let mut guesser = Guesser::new(&input.secret);
    let mut model = ModelGuesser::new(&input.secret);
    let secret = model.secret();

    for op in &input.ops {
        let was_locked = model.is_locked();

        let matched = op.guess_for(&secret).map(|guess| guesser.matches(&guess));
        let actual = ObservableState { matched, remaining: guesser.remaining() };
        let expected = model.apply(op);

        assert_eq!(actual, expected, "gate diverged from model on {:?}", op);
        assert!(actual.remaining <= 3);

        if was_locked {
            assert!(model.is_locked(), "left Locked state on {:?}", op);
            assert_ne!(matched, Some(true), "locked gate accepted a guess");
        }
    }

    if model.is_locked() {
        assert!(!guesser.matches(&secret));
    }
});
