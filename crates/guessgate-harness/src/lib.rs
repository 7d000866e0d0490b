//! Test harness for the guess gate.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation of the lockout
//! rules. Operations are applied to both the model and the real
//! [`Guesser`](guessgate_core::Guesser), and their observable states are
//! compared after every step.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;

pub use model::{ModelGuesser, ObservableState, Operation};
