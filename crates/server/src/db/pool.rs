use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::config::{StorageConfig, StoreLocation};
use crate::error::AppError;

pub async fn create_pool(storage: &StorageConfig) -> Result<SqlitePool, sqlx::Error> {
    match &storage.location {
        StoreLocation::File(path) => {
            let options = SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .foreign_keys(true);

            SqlitePoolOptions::new()
                .max_connections(storage.max_connections)
                .connect_with(options)
                .await
        }
        StoreLocation::InMemory => {
            let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

            // Dropping the last connection drops the database with it.
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await
        }
    }
}

/// Bring the schema up to date. The applied version lives in
/// `PRAGMA user_version`; steps at or below it are skipped, so this is safe
/// to run on every start. Returns the resulting schema version.
pub async fn run_migrations(pool: &SqlitePool) -> Result<i64, AppError> {
    let latest = MIGRATIONS.len() as i64;
    let current: i64 = sqlx::query_scalar("PRAGMA user_version")
        .fetch_one(pool)
        .await
        .map_err(AppError::Sqlx)?;

    if current > latest {
        return Err(AppError::Internal(format!(
            "store schema version {current} is newer than supported version {latest}"
        )));
    }
    let applied = usize::try_from(current).map_err(|_| {
        AppError::Internal(format!("store schema version {current} is not a valid version"))
    })?;

    for (idx, sql) in MIGRATIONS.iter().enumerate().skip(applied) {
        let version = idx as i64 + 1;
        let set_version = format!("PRAGMA user_version = {version}");

        let mut tx = pool.begin().await?;
        sqlx::raw_sql(sql).execute(&mut *tx).await?;
        sqlx::raw_sql(&set_version).execute(&mut *tx).await?;
        tx.commit().await?;

        tracing::info!(version, "Applied schema migration");
    }

    Ok(latest)
}

/// Ordered schema steps; index + 1 is the version each one produces.
const MIGRATIONS: &[&str] = &[SCHEMA_V1];

const SCHEMA_V1: &str = r#"
-- In-progress games saved for later resumption
CREATE TABLE IF NOT EXISTS saved_games (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    fen          TEXT NOT NULL,
    move_list    TEXT NOT NULL,  -- JSON array of move tokens
    player_color TEXT NOT NULL,
    difficulty   TEXT NOT NULL,
    time_control INTEGER,
    timestamp    TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_saved_games_timestamp
    ON saved_games (timestamp DESC);

-- Completed games
CREATE TABLE IF NOT EXISTS game_history (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    fen          TEXT NOT NULL,
    move_list    TEXT NOT NULL,
    player_color TEXT NOT NULL,
    difficulty   TEXT NOT NULL,
    time_control INTEGER,
    result       TEXT NOT NULL,
    timestamp    TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_game_history_timestamp
    ON game_history (timestamp DESC);
"#;
