//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no behaviour and are
//! serialised straight into HTTP responses.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the users table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
}
