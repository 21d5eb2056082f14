//! Runtime configuration resolved from the environment.
//!
//! | variable | values | default |
//! |---|---|---|
//! | `OASIS_STORAGE` | `sqlite`, `file`, `memory` | `sqlite` |
//! | `OASIS_DB_PATH` | path | temp dir + backend file name |
//! | `OASIS_ADMIN_PIN` | any non-empty string | `2255` |
//!
//! Blank values count as unset.

use crate::admin::DEFAULT_ADMIN_PIN;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_STORAGE: &str = "OASIS_STORAGE";
pub const ENV_DB_PATH: &str = "OASIS_DB_PATH";
pub const ENV_ADMIN_PIN: &str = "OASIS_ADMIN_PIN";

const SQLITE_FILE_NAME: &str = "oasis.sqlite3";
const SNAPSHOT_FILE_NAME: &str = "oasis_snapshot.json";

/// Which snapshot backend to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Sqlite,
    File,
    Memory,
}

impl StorageBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::File => "file",
            Self::Memory => "memory",
        }
    }

    fn default_path(self) -> PathBuf {
        match self {
            Self::File => std::env::temp_dir().join(SNAPSHOT_FILE_NAME),
            Self::Sqlite | Self::Memory => std::env::temp_dir().join(SQLITE_FILE_NAME),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "file" | "json" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::UnsupportedBackend(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedBackend(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedBackend(value) => write!(
                f,
                "unsupported storage backend `{value}`; expected sqlite|file|memory"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Resolved store settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StorageBackend,
    /// Ignored by the memory backend.
    pub path: PathBuf,
    pub admin_pin: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let backend = StorageBackend::default();
        Self {
            backend,
            path: backend.default_path(),
            admin_pin: DEFAULT_ADMIN_PIN.to_string(),
        }
    }
}

impl StoreConfig {
    /// Reads settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let backend = match read(ENV_STORAGE) {
            Some(value) => value.parse()?,
            None => StorageBackend::default(),
        };
        let path = read(ENV_DB_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| backend.default_path());
        let admin_pin = read(ENV_ADMIN_PIN).unwrap_or_else(|| DEFAULT_ADMIN_PIN.to_string());

        Ok(Self {
            backend,
            path,
            admin_pin,
        })
    }
}
