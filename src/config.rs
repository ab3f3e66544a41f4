//! Process configuration, read from the environment.
//!
//! - `DODGE_HIGHSCORE_PATH`: highscore file (default `dodge_highscore.sav`)
//! - `DODGE_SEED`: obstacle RNG seed (default: random)
//! - `DODGE_LOG_PATH`: write logs to this file; logging is off when unset
//! - `DODGE_LOG`: log filter, `env_logger` syntax (default `info`)

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::{FileHighscoreStore, SeededRng, DEFAULT_HIGHSCORE_FILE};

pub const HIGHSCORE_PATH_ENV: &str = "DODGE_HIGHSCORE_PATH";
pub const SEED_ENV: &str = "DODGE_SEED";
pub const LOG_PATH_ENV: &str = "DODGE_LOG_PATH";
pub const LOG_FILTER_ENV: &str = "DODGE_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub highscore_path: PathBuf,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_FILE),
            seed: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset;
    /// an unparseable seed falls back to a random one.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = Self::default();
        Self {
            highscore_path: get(HIGHSCORE_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.highscore_path),
            seed: get(SEED_ENV).and_then(|s| s.parse().ok()),
            log_path: get(LOG_PATH_ENV).map(PathBuf::from),
            log_filter: get(LOG_FILTER_ENV).unwrap_or(defaults.log_filter),
        }
    }

    pub fn rng(&self) -> SeededRng {
        match self.seed {
            Some(seed) => SeededRng::new(seed),
            None => SeededRng::from_entropy(),
        }
    }

    pub fn highscore_store(&self) -> FileHighscoreStore {
        FileHighscoreStore::new(&self.highscore_path)
    }

    /// Route `log` records to `log_path`. Returns false when logging is disabled.
    ///
    /// Nothing is ever logged to the terminal: it is owned by the renderer.
    pub fn init_logging(&self) -> Result<bool> {
        let Some(path) = &self.log_path else {
            return Ok(false);
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;

        env_logger::Builder::new()
            .parse_filters(&self.log_filter)
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init()
            .context("logger already initialized")?;
        Ok(true)
    }
}
