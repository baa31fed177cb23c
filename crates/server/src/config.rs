use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub storage: StorageConfig,
    pub host: String,
    pub port: u16,
}

/// Where the game store lives and how many connections may be open on it.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub location: StoreLocation,
    pub max_connections: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreLocation {
    File(PathBuf),
    /// Private to the pool; vanishes when the pool closes.
    InMemory,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            storage: StorageConfig::from_env(),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self {
            location: StoreLocation::File(
                env::var("DATABASE_PATH")
                    .unwrap_or_else(|_| "chess_games.db".to_string())
                    .into(),
            ),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(5),
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: StoreLocation::File(path.into()),
            max_connections: 5,
        }
    }

    /// Every connection to `:memory:` is a separate database, so this is
    /// pinned to a single connection.
    pub fn in_memory() -> Self {
        Self {
            location: StoreLocation::InMemory,
            max_connections: 1,
        }
    }
}
