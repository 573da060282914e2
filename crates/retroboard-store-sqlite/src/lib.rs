//! SQLite backend for the RetroBoard store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime. Every trait method executes
//! as one transaction on that connection.

mod schema;
mod store;

pub use store::SqliteStore;
