//! JSON wire shapes for the chirp API.
//!
//! Request decoding is lenient in the way a streaming JSON decoder is: only
//! the first value is read, unknown keys are ignored, `null` stands in for an
//! empty string. A `body` of any other JSON type is a decode failure, which
//! callers see as `ChirpyError::MalformedBody`.

pub mod chirp;
