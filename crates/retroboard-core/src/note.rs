//! Note — a single retro entry.
//!
//! `category` stores a category's numeric id but is deliberately not an
//! enforced foreign key: a note may reference a missing category, or one on
//! another board, without a constraint violation. Export resolves the name
//! best-effort and the category-removal conflict check matches on this same
//! loose id.

use serde::{Deserialize, Serialize};

/// A note as returned by `list notes`. `board_id` is implied by the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
  pub id:          i64,
  /// Free text, at most 30 characters by convention.
  pub description: String,
  /// Raw category id (unenforced, see module docs).
  pub category:    i64,
  /// Ordered tag list; replaced wholesale on modification, never merged.
  pub tags:        Vec<String>,
}

/// Input to [`crate::store::RetroStore::add_note`].
#[derive(Debug, Clone)]
pub struct NewNote {
  pub description: String,
  pub category:    i64,
  pub tags:        Vec<String>,
  pub board_id:    i64,
}
