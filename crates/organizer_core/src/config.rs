//! Storage location resolution.
//!
//! # Invariants
//! - An explicit directory always wins over the platform default.
//! - Database and log paths both live under the resolved data directory.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = "student-organizer";
pub const DB_FILE_NAME: &str = "organizer.sqlite3";
pub const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Platform exposes no per-user data directory.
    NoDataDir,
    /// Relative paths are rejected so logs and data never land in the cwd.
    RelativeDataDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDataDir => write!(f, "no platform data directory; pass --data-dir"),
            Self::RelativeDataDir(path) => {
                write!(f, "data directory must be absolute, got `{}`", path.display())
            }
        }
    }
}

impl Error for ConfigError {}

/// Where the organizer keeps its database and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    data_dir: PathBuf,
}

impl StorageConfig {
    /// Resolves from an explicit directory or `<platform data dir>/student-organizer`.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        let data_dir = match explicit {
            Some(path) => path,
            None => dirs::data_dir()
                .ok_or(ConfigError::NoDataDir)?
                .join(APP_DIR_NAME),
        };
        if !data_dir.is_absolute() {
            return Err(ConfigError::RelativeDataDir(data_dir));
        }
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}
