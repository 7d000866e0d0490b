//! Guess Gate
//!
//! A single-secret guess gate. A [`Guesser`] holds one secret, accepts
//! repeated guesses and decides whether each one matches, locking itself
//! permanently after suspicious behavior.
//!
//! # Lockout
//!
//! The gate locks when either:
//!
//! - three consecutive guesses miss (the counter is only reset by an exact
//!   match), or
//! - a single miss is too far from the secret (see [`distance`]).
//!
//! Both locks are silent: the locking call itself returns `false` like any
//! other miss, and every later call returns `false`, including the correct
//! secret. [`Guesser::remaining`] keeps counting down through a lock, so the
//! caller cannot tell a distance lock from an exhausted counter.
//!
//! # Components
//!
//! - [`Guesser`]: The state machine
//! - [`GuesserConfig`]: Lockout policy (defaults: 32 characters, 3 attempts,
//!   distance 2)
//! - [`SharedGuesser`]: Mutex-serialized handle for multi-threaded hosts
//! - [`distance`]: The length-plus-prefix-Hamming distance used for locking

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod distance;
mod error;
mod guesser;
mod shared;

pub use config::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_DISTANCE, DEFAULT_MAX_SECRET_CHARS, GuesserConfig,
};
pub use distance::distance;
pub use error::ConfigError;
pub use guesser::Guesser;
pub use shared::SharedGuesser;
