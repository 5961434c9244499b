//! Read access to the users table.

use tracing::{debug, info};

use crate::connection::with_connection;
use crate::{DbConfig, DbError, models::UserRow};

/// Return every row of the configured table, ordered by primary key.
///
/// Opens one connection for the duration of the query and closes it before
/// returning.  An empty table yields an empty vector; a missing table is a
/// [`DbError::Query`], never an empty result.
pub async fn fetch_all(config: &DbConfig) -> Result<Vec<UserRow>, DbError> {
    let statement = config.select_statement();
    debug!(%statement, "Fetching rows");

    let rows = with_connection(config, move |conn| {
        Box::pin(async move {
            sqlx::query_as::<_, UserRow>(statement.as_str())
                .fetch_all(conn)
                .await
                .map_err(DbError::Query)
        })
    })
    .await?;

    info!(table = config.table(), rows = rows.len(), "Fetched rows");
    Ok(rows)
}
