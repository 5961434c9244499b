//! Scoped database connections.
//!
//! No pool: every caller opens one connection, uses it, and closes it
//! again before returning.

use futures::future::BoxFuture;
use sqlx::{AnyConnection, Connection};
use tracing::{debug, warn};

use crate::{DbConfig, DbError};

/// Open a single connection to `config.database_url()`.
///
/// The scheme selects the driver (`postgres://`, `sqlite://`).
pub async fn connect(config: &DbConfig) -> Result<AnyConnection, DbError> {
    sqlx::any::install_default_drivers();

    debug!(url = %config.redacted_url(), "Opening database connection");
    AnyConnection::connect(config.database_url())
        .await
        .map_err(DbError::Connect)
}

/// Run `f` against a freshly opened connection and close it afterwards,
/// whether `f` succeeded or not.
///
/// A failure while closing is only logged; the caller always gets `f`'s
/// own result.
pub async fn with_connection<T, F>(config: &DbConfig, f: F) -> Result<T, DbError>
where
    F: for<'c> FnOnce(&'c mut AnyConnection) -> BoxFuture<'c, Result<T, DbError>>,
{
    let mut conn = connect(config).await?;
    let result = f(&mut conn).await;

    if let Err(err) = conn.close().await {
        warn!(error = %err, "Failed to close database connection");
    }

    result
}
