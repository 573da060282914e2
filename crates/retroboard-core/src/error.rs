//! Error types for `retroboard-core`.
//!
//! The `Display` strings double as the `status` message in API error bodies,
//! so they are phrased for clients, not logs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("Board not found")]
  BoardNotFound,

  #[error("Note not found")]
  NoteNotFound,

  #[error("Category not found")]
  CategoryNotFound,

  /// A category cannot be removed while any note still references its id.
  #[error("Cannot delete: notes still associated with this category")]
  CategoryInUse,

  /// Any failure raised by the storage engine inside a unit-of-work.
  /// The enclosing transaction has already been rolled back.
  #[error("DB Error: {0}")]
  Storage(String),
}

impl Error {
  /// Wrap an arbitrary engine error as a [`Error::Storage`].
  pub fn storage(e: impl std::fmt::Display) -> Self {
    Self::Storage(e.to_string())
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
