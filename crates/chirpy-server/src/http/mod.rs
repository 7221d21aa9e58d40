//! HTTP helpers shared by all handlers.

pub mod redirect;
pub mod response;

pub use response::{json_response, ApiError};
