//! Request observation middleware.
//!
//! The only counter is the static-file hit count; it lives in `AppState` and
//! is bumped by [`hits::count_hits`] before the wrapped service runs.

pub mod hits;
