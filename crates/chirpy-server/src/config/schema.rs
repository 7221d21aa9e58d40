use std::net::SocketAddr;
use std::path::PathBuf;

use chirpy_core::error::{ChirpyError, Result};
use chirpy_core::filter::DEFAULT_BANNED_WORDS;
use chirpy_core::validate::DEFAULT_MAX_CHIRP_LEN;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub chirp: ChirpSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            chirp: ChirpSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ChirpyError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.chirp.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Directory served under `/app`.
    #[serde(default = "default_file_root")]
    pub file_root: PathBuf,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            file_root: default_file_root(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            ChirpyError::BadConfig(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_file_root() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChirpSection {
    #[serde(default = "default_max_len")]
    pub max_len: usize,

    #[serde(default = "default_banned_words")]
    pub banned_words: Vec<String>,
}

impl Default for ChirpSection {
    fn default() -> Self {
        Self {
            max_len: default_max_len(),
            banned_words: default_banned_words(),
        }
    }
}

impl ChirpSection {
    pub fn validate(&self) -> Result<()> {
        if self.max_len == 0 {
            return Err(ChirpyError::BadConfig(
                "chirp.max_len must be greater than 0".into(),
            ));
        }
        for w in &self.banned_words {
            // tokens never contain a space, so such an entry could never match
            if w.is_empty() || w.contains(' ') {
                return Err(ChirpyError::BadConfig(format!(
                    "chirp.banned_words entry must be a single non-empty word: {w:?}"
                )));
            }
        }
        Ok(())
    }
}

fn default_max_len() -> usize {
    DEFAULT_MAX_CHIRP_LEN
}
fn default_banned_words() -> Vec<String> {
    DEFAULT_BANNED_WORDS.iter().map(|w| w.to_string()).collect()
}
