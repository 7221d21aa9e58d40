//! Top-level facade crate for Chirpy.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use chirpy_core::*;
}

pub mod server {
    pub use chirpy_server::*;
}
