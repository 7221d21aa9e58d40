//! Shared application state for the Chirpy server.
//!
//! Holds the loaded config, the compiled chirp validator and the hit counter
//! handed in by the caller. Everything sits behind one `Arc`, so cloning the
//! state per request is cheap.

use std::sync::Arc;

use chirpy_core::{ChirpValidator, HitCounter, ProfanityFilter};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    validator: ChirpValidator,
    hits: Arc<HitCounter>,
}

impl AppState {
    /// Build application state from a validated config and the process-wide
    /// hit counter.
    pub fn new(cfg: ServerConfig, hits: Arc<HitCounter>) -> Self {
        let filter = ProfanityFilter::new(&cfg.chirp.banned_words);
        let validator = ChirpValidator::new(filter, cfg.chirp.max_len);

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                validator,
                hits,
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn validator(&self) -> &ChirpValidator {
        &self.inner.validator
    }

    pub fn hits(&self) -> &HitCounter {
        &self.inner.hits
    }
}
