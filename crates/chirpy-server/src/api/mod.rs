//! `/api` JSON endpoints.

pub mod chirps;
