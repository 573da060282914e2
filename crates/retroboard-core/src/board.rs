//! Board — the retrospective session container.
//!
//! A board owns its notes and categories; removing a board cascades to both.

use serde::{Deserialize, Serialize};

/// A board row as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
  pub id:   i64,
  /// Display name, at most 30 characters by convention.
  pub name: String,
}

/// The `list boards` read model: one entry per board, including boards with
/// no notes at all (`note_count = 0`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
  pub id:         i64,
  pub name:       String,
  pub note_count: i64,
}

/// The export document for one board.
///
/// `category` carries the category *name*, resolved at export time; a note
/// whose category id no longer resolves gets an empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardExport {
  pub board_name: String,
  pub notes:      Vec<ExportedNote>,
}

/// One note inside a [`BoardExport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedNote {
  pub description: String,
  pub category:    String,
  pub category_id: i64,
}
