//! Chirpy core: transport-agnostic domain primitives and error types.
//!
//! This crate holds the profanity filter, the hit counter, chirp validation,
//! and the JSON wire shapes shared by the server and its tests. It carries no
//! HTTP or runtime dependencies so the domain rules can be exercised directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `ChirpyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod filter;
pub mod hits;
pub mod protocol;
pub mod validate;

/// Shared result type.
pub use error::{ChirpyError, Result};
pub use filter::ProfanityFilter;
pub use hits::HitCounter;
pub use validate::ChirpValidator;
