//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// The configured table name is not a plain SQL identifier.
    #[error("invalid table name: '{0}'")]
    InvalidTable(String),

    /// The driver could not open a connection (unknown scheme, unreachable
    /// server, bad credentials, missing database file).
    #[error("connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    /// The connection opened but the statement failed.
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),
}
