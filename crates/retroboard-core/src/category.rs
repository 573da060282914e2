//! Category — a named grouping within a board (e.g. "Went well").
//!
//! Notes point at a category by raw id, not by an enforced relation; the
//! in-use check on removal matches by that same raw id.

use serde::{Deserialize, Serialize};

/// A category as returned by `list categories`. The owning `board_id` is a
/// query parameter, not part of the read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id:   i64,
  pub name: String,
}
