//! The `RetroStore` trait.
//!
//! Implemented by storage backends (e.g. `retroboard-store-sqlite`). The API
//! layer depends on this abstraction, not on any concrete backend.
//!
//! Every method is one unit-of-work: all of its statements run inside a
//! single transaction, committed on success and rolled back on any error.
//! No call ever spans two units.

use std::future::Future;

use crate::{
  Result,
  board::{BoardExport, BoardSummary},
  category::Category,
  note::{NewNote, Note},
  setting::{Setting, SettingDefault},
};

/// Abstraction over a RetroBoard storage backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RetroStore: Send + Sync {
  // ── Boards ────────────────────────────────────────────────────────────

  /// List all boards ordered by id, each with its note count. Boards with
  /// no notes appear with `note_count = 0`.
  fn list_boards(
    &self,
  ) -> impl Future<Output = Result<Vec<BoardSummary>>> + Send + '_;

  /// Look up a board's name. Returns `None` if the board does not exist.
  fn board_name(
    &self,
    board_id: i64,
  ) -> impl Future<Output = Result<Option<String>>> + Send + '_;

  /// Create a board and return its id.
  fn add_board(
    &self,
    name: String,
  ) -> impl Future<Output = Result<i64>> + Send + '_;

  /// Remove a board, cascading to its notes and categories.
  /// Fails with [`Error::BoardNotFound`](crate::Error::BoardNotFound) if the
  /// id does not exist.
  fn remove_board(
    &self,
    board_id: i64,
  ) -> impl Future<Output = Result<()>> + Send + '_;

  // ── Notes ─────────────────────────────────────────────────────────────

  /// List all notes on a board.
  fn list_notes(
    &self,
    board_id: i64,
  ) -> impl Future<Output = Result<Vec<Note>>> + Send + '_;

  /// Build the export document for a board, resolving each note's category
  /// id to its name (empty string when the id does not resolve). Returns
  /// `None` when the board itself does not exist.
  fn export_notes(
    &self,
    board_id: i64,
  ) -> impl Future<Output = Result<Option<BoardExport>>> + Send + '_;

  /// Create a note and return its id.
  fn add_note(
    &self,
    note: NewNote,
  ) -> impl Future<Output = Result<i64>> + Send + '_;

  /// Remove a note. Fails with
  /// [`Error::NoteNotFound`](crate::Error::NoteNotFound) if missing.
  fn remove_note(
    &self,
    note_id: i64,
  ) -> impl Future<Output = Result<()>> + Send + '_;

  /// Reassign a note's category id. A missing note surfaces as a storage
  /// error, not a not-found (the lookup is part of the unit-of-work).
  fn set_note_category(
    &self,
    note_id: i64,
    category: i64,
  ) -> impl Future<Output = Result<()>> + Send + '_;

  /// Replace a note's tag list wholesale. Same error contract as
  /// [`RetroStore::set_note_category`].
  fn set_note_tags(
    &self,
    note_id: i64,
    tags: Vec<String>,
  ) -> impl Future<Output = Result<()>> + Send + '_;

  // ── Categories ────────────────────────────────────────────────────────

  /// List all categories on a board.
  fn list_categories(
    &self,
    board_id: i64,
  ) -> impl Future<Output = Result<Vec<Category>>> + Send + '_;

  /// Create a category and return its id.
  fn add_category(
    &self,
    name: String,
    board_id: i64,
  ) -> impl Future<Output = Result<i64>> + Send + '_;

  /// Remove a category.
  ///
  /// Fails with [`Error::CategoryNotFound`](crate::Error::CategoryNotFound)
  /// if missing, and with
  /// [`Error::CategoryInUse`](crate::Error::CategoryInUse) if any note's
  /// `category` field still equals this id.
  fn remove_category(
    &self,
    category_id: i64,
  ) -> impl Future<Output = Result<()>> + Send + '_;

  // ── Settings ──────────────────────────────────────────────────────────

  /// List all settings rows.
  fn list_settings(
    &self,
  ) -> impl Future<Output = Result<Vec<Setting>>> + Send + '_;

  /// Replace a setting's value. A missing name surfaces as a storage error.
  fn update_setting(
    &self,
    name: String,
    value: String,
  ) -> impl Future<Output = Result<()>> + Send + '_;

  /// Seed settings from `defaults`: insert each name that is not present
  /// yet, leave existing rows untouched. One transaction for the whole
  /// list; a failure mid-loop seeds nothing.
  fn sync_settings<'a>(
    &'a self,
    defaults: &'a [SettingDefault],
  ) -> impl Future<Output = Result<()>> + Send + 'a;
}
