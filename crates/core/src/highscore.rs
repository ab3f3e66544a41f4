//! Highscore persistence.
//!
//! The store is a plain-text file holding one decimal integer. Reading and
//! writing are best effort: failures are logged and never reach the game.

use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

/// Default highscore file name, relative to the working directory
pub const DEFAULT_HIGHSCORE_FILE: &str = "dodge_highscore.sav";

/// Persistence seam for the highscore.
///
/// Implementations must not fail: a store that cannot be read yields 0 and a
/// failed save is dropped.
pub trait HighscoreStore {
    fn load(&mut self) -> u32;
    fn save(&mut self, score: u32);
}

#[derive(Debug, Error)]
pub enum HighscoreError {
    #[error("highscore file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("highscore file {} does not hold an integer: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseIntError,
    },
}

/// Highscore kept in a text file
#[derive(Debug, Clone)]
pub struct FileHighscoreStore {
    path: PathBuf,
}

impl FileHighscoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored value. A missing or blank file reads as 0.
    pub fn read(&self) -> Result<u32, HighscoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(source) => {
                return Err(HighscoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let text = text.trim();
        if text.is_empty() {
            return Ok(0);
        }
        text.parse().map_err(|source| HighscoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the file with `score` in decimal.
    pub fn write(&self, score: u32) -> Result<(), HighscoreError> {
        fs::write(&self.path, score.to_string()).map_err(|source| HighscoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl Default for FileHighscoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHSCORE_FILE)
    }
}

impl HighscoreStore for FileHighscoreStore {
    fn load(&mut self) -> u32 {
        match self.read() {
            Ok(value) => {
                debug!("loaded highscore {value} from {}", self.path.display());
                value
            }
            Err(e) => {
                warn!("ignoring unreadable highscore: {e}");
                0
            }
        }
    }

    fn save(&mut self, score: u32) {
        if let Err(e) = self.write(score) {
            warn!("could not save highscore: {e}");
        }
    }
}

/// In-memory store, for tests and headless runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHighscoreStore {
    value: u32,
    saves: u32,
}

impl MemoryHighscoreStore {
    pub fn new(value: u32) -> Self {
        Self { value, saves: 0 }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Number of `save` calls seen
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl HighscoreStore for MemoryHighscoreStore {
    fn load(&mut self) -> u32 {
        self.value
    }

    fn save(&mut self, score: u32) {
        self.value = score;
        self.saves += 1;
    }
}

impl<S: HighscoreStore + ?Sized> HighscoreStore for Box<S> {
    fn load(&mut self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, score: u32) {
        (**self).save(score)
    }
}
