//! Repository functions — one function per database operation.
//!
//! Every function takes a `&DbConfig`, opens its own connection and returns
//! a `Result<T, DbError>`.  No business logic — pure SQL.

pub mod users;
