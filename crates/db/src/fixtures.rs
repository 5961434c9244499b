//! Throw-away SQLite databases for tests.
//!
//! Available to this crate's tests and, with the `fixtures` feature, to
//! other crates' tests.  Everything is created under a caller-supplied
//! directory (normally a `tempfile::TempDir`).

use std::path::Path;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection, SqliteConnection};

use crate::config::DEFAULT_TABLE;
use crate::{DbConfig, DbError};

const DB_FILE: &str = "rows.db";

/// Create `<dir>/rows.db` with a `users` table holding `rows`, and return a
/// config pointing at it.
pub async fn seed_sqlite(dir: &Path, rows: &[(i64, &str, &str)]) -> Result<DbConfig, DbError> {
    let mut conn = create_file(dir).await?;

    sqlx::query(
        "CREATE TABLE users (
            id    INTEGER PRIMARY KEY,
            name  TEXT NOT NULL,
            email TEXT NOT NULL
        )",
    )
    .execute(&mut conn)
    .await
    .map_err(DbError::Query)?;

    for &(id, name, email) in rows {
        sqlx::query("INSERT INTO users (id, name, email) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(email)
            .execute(&mut conn)
            .await
            .map_err(DbError::Query)?;
    }

    conn.close().await.map_err(DbError::Query)?;
    DbConfig::new(sqlite_url(dir), DEFAULT_TABLE)
}

/// Create `<dir>/rows.db` with no tables at all.
pub async fn seed_without_table(dir: &Path) -> Result<DbConfig, DbError> {
    let conn = create_file(dir).await?;
    conn.close().await.map_err(DbError::Query)?;
    DbConfig::new(sqlite_url(dir), DEFAULT_TABLE)
}

/// A config pointing at a database file that does not exist.
pub fn missing_database(dir: &Path) -> DbConfig {
    let url = format!("sqlite://{}", dir.join("absent").join(DB_FILE).display());
    DbConfig::new(url, DEFAULT_TABLE).expect("default table name is valid")
}

async fn create_file(dir: &Path) -> Result<SqliteConnection, DbError> {
    SqliteConnectOptions::new()
        .filename(dir.join(DB_FILE))
        .create_if_missing(true)
        .connect()
        .await
        .map_err(DbError::Connect)
}

fn sqlite_url(dir: &Path) -> String {
    format!("sqlite://{}", dir.join(DB_FILE).display())
}
