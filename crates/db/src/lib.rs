//! `db` crate — pure persistence layer.
//!
//! Holds the connection settings, a scoped (unpooled) connection helper,
//! the row struct and the single read query the service runs.  No HTTP
//! concerns live here.

pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod repository;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub use config::DbConfig;
pub use error::DbError;
pub use models::UserRow;
