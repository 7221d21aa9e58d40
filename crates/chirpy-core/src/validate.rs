//! Chirp validation: length limit, then profanity redaction.

use crate::error::{ChirpyError, Result};
use crate::filter::ProfanityFilter;
use crate::protocol::chirp::CleanedChirp;

/// Default maximum chirp length in bytes.
pub const DEFAULT_MAX_CHIRP_LEN: usize = 140;

#[derive(Debug, Clone)]
pub struct ChirpValidator {
    filter: ProfanityFilter,
    max_len: usize,
}

impl Default for ChirpValidator {
    fn default() -> Self {
        Self::new(ProfanityFilter::default(), DEFAULT_MAX_CHIRP_LEN)
    }
}

impl ChirpValidator {
    pub fn new(filter: ProfanityFilter, max_len: usize) -> Self {
        Self { filter, max_len }
    }

    /// Reject over-long text (raw byte length, checked before filtering),
    /// otherwise return the redacted text.
    pub fn validate(&self, body: &str) -> Result<CleanedChirp> {
        if body.len() > self.max_len {
            return Err(ChirpyError::ChirpTooLong {
                len: body.len(),
                max: self.max_len,
            });
        }
        Ok(CleanedChirp {
            cleaned_body: self.filter.clean(body),
        })
    }
}
