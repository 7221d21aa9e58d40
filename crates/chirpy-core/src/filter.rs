//! Exact-token profanity redaction.
//!
//! Text is split on single spaces, so runs of spaces yield empty tokens that
//! survive the rejoin unchanged. Only whole tokens are compared; a banned word
//! embedded in a longer token is left alone.

use std::collections::HashSet;

/// Replacement for every banned token.
pub const MASK: &str = "****";

/// Words redacted when no denylist is configured.
pub const DEFAULT_BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Case-insensitive denylist filter. Entries are stored lowercase.
#[derive(Debug, Clone)]
pub struct ProfanityFilter {
    banned: HashSet<String>,
}

impl Default for ProfanityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_BANNED_WORDS)
    }
}

impl ProfanityFilter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let banned = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { banned }
    }

    pub fn is_banned(&self, token: &str) -> bool {
        self.banned.contains(&token.to_lowercase())
    }

    /// Redact banned tokens, preserving every other token verbatim.
    pub fn clean(&self, text: &str) -> String {
        text.split(' ')
            .map(|token| if self.is_banned(token) { MASK } else { token })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
