//! Chirpy server library entry.
//!
//! Wires config, shared state, the `/app` static file tree with its hit
//! counter, and the `/api` and `/admin` endpoints into one axum router. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod http;
pub mod obs;
pub mod ops;
pub mod router;
