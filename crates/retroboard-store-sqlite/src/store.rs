//! [`SqliteStore`] — the SQLite implementation of [`RetroStore`].
//!
//! Each trait method is one unit-of-work: a transaction opened on the
//! store's connection, committed on success and rolled back (by drop) on
//! any error. Business-rule rejections (not-found, category-in-use) travel
//! through the inner [`retroboard_core::Result`] so they roll back the same
//! way without being conflated with engine failures.

use std::path::Path;

use rusqlite::OptionalExtension as _;

use retroboard_core::{
  Error, Result,
  board::{BoardExport, BoardSummary, ExportedNote},
  category::Category,
  note::{NewNote, Note},
  setting::{Setting, SettingDefault},
  store::RetroStore,
};

use crate::schema::SCHEMA;

// ─── Raw rows ────────────────────────────────────────────────────────────────

/// A `notes` row before the tags column is decoded from JSON.
struct RawNote {
  id:          i64,
  description: String,
  category:    i64,
  tags:        String,
}

impl RawNote {
  fn into_note(self) -> Result<Note> {
    let tags: Vec<String> =
      serde_json::from_str(&self.tags).map_err(Error::storage)?;
    Ok(Note {
      id: self.id,
      description: self.description,
      category: self.category,
      tags,
    })
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A RetroBoard store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(Error::storage)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(Error::storage)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
      .map_err(Error::storage)
  }
}

// ─── RetroStore impl ─────────────────────────────────────────────────────────

impl RetroStore for SqliteStore {
  // ── Boards ────────────────────────────────────────────────────────────────

  async fn list_boards(&self) -> Result<Vec<BoardSummary>> {
    self
      .conn
      .call(|conn| {
        // LEFT JOIN keeps boards with zero notes in the result set.
        let mut stmt = conn.prepare(
          "SELECT b.id, b.name, COUNT(n.id)
           FROM boards b
           LEFT JOIN notes n ON n.board_id = b.id
           GROUP BY b.id, b.name
           ORDER BY b.id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(BoardSummary {
              id:         row.get(0)?,
              name:       row.get(1)?,
              note_count: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(Error::storage)
  }

  async fn board_name(&self, board_id: i64) -> Result<Option<String>> {
    self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT name FROM boards WHERE id = ?1",
              rusqlite::params![board_id],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await
      .map_err(Error::storage)
  }

  async fn add_board(&self, name: String) -> Result<i64> {
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO boards (name) VALUES (?1)",
          rusqlite::params![name],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
      })
      .await
      .map_err(Error::storage)
  }

  async fn remove_board(&self, board_id: i64) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let exists: Option<i64> = tx
          .query_row(
            "SELECT id FROM boards WHERE id = ?1",
            rusqlite::params![board_id],
            |row| row.get(0),
          )
          .optional()?;
        if exists.is_none() {
          return Ok(Err(Error::BoardNotFound));
        }
        // ON DELETE CASCADE takes the board's notes and categories with it.
        tx.execute(
          "DELETE FROM boards WHERE id = ?1",
          rusqlite::params![board_id],
        )?;
        tx.commit()?;
        Ok(Ok(()))
      })
      .await
      .map_err(Error::storage)?
  }

  // ── Notes ─────────────────────────────────────────────────────────────────

  async fn list_notes(&self, board_id: i64) -> Result<Vec<Note>> {
    let raws: Vec<RawNote> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, description, category, tags
           FROM notes WHERE board_id = ?1 ORDER BY id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![board_id], |row| {
            Ok(RawNote {
              id:          row.get(0)?,
              description: row.get(1)?,
              category:    row.get(2)?,
              tags:        row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(Error::storage)?;

    raws.into_iter().map(RawNote::into_note).collect()
  }

  async fn export_notes(&self, board_id: i64) -> Result<Option<BoardExport>> {
    self
      .conn
      .call(move |conn| {
        let board_name: Option<String> = conn
          .query_row(
            "SELECT name FROM boards WHERE id = ?1",
            rusqlite::params![board_id],
            |row| row.get(0),
          )
          .optional()?;
        let Some(board_name) = board_name else {
          return Ok(None);
        };

        // The category name is resolved by raw id; a dangling id yields ''.
        let mut stmt = conn.prepare(
          "SELECT n.description, COALESCE(c.name, ''), n.category
           FROM notes n
           LEFT JOIN categories c ON c.id = n.category
           WHERE n.board_id = ?1
           ORDER BY n.id",
        )?;
        let notes = stmt
          .query_map(rusqlite::params![board_id], |row| {
            Ok(ExportedNote {
              description: row.get(0)?,
              category:    row.get(1)?,
              category_id: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(Some(BoardExport { board_name, notes }))
      })
      .await
      .map_err(Error::storage)
  }

  async fn add_note(&self, note: NewNote) -> Result<i64> {
    let tags_json = serde_json::to_string(&note.tags).map_err(Error::storage)?;
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO notes (description, category, tags, board_id)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![note.description, note.category, tags_json, note.board_id],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
      })
      .await
      .map_err(Error::storage)
  }

  async fn remove_note(&self, note_id: i64) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let exists: Option<i64> = tx
          .query_row(
            "SELECT id FROM notes WHERE id = ?1",
            rusqlite::params![note_id],
            |row| row.get(0),
          )
          .optional()?;
        if exists.is_none() {
          return Ok(Err(Error::NoteNotFound));
        }
        tx.execute("DELETE FROM notes WHERE id = ?1", rusqlite::params![note_id])?;
        tx.commit()?;
        Ok(Ok(()))
      })
      .await
      .map_err(Error::storage)?
  }

  async fn set_note_category(&self, note_id: i64, category: i64) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        // Strict lookup: a missing note id raises QueryReturnedNoRows and
        // surfaces as a storage error, matching the update-ops contract.
        let _: i64 = tx.query_row(
          "SELECT id FROM notes WHERE id = ?1",
          rusqlite::params![note_id],
          |row| row.get(0),
        )?;
        tx.execute(
          "UPDATE notes SET category = ?1 WHERE id = ?2",
          rusqlite::params![category, note_id],
        )?;
        tx.commit()?;
        Ok(())
      })
      .await
      .map_err(Error::storage)
  }

  async fn set_note_tags(&self, note_id: i64, tags: Vec<String>) -> Result<()> {
    let tags_json = serde_json::to_string(&tags).map_err(Error::storage)?;
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let _: i64 = tx.query_row(
          "SELECT id FROM notes WHERE id = ?1",
          rusqlite::params![note_id],
          |row| row.get(0),
        )?;
        tx.execute(
          "UPDATE notes SET tags = ?1 WHERE id = ?2",
          rusqlite::params![tags_json, note_id],
        )?;
        tx.commit()?;
        Ok(())
      })
      .await
      .map_err(Error::storage)
  }

  // ── Categories ────────────────────────────────────────────────────────────

  async fn list_categories(&self, board_id: i64) -> Result<Vec<Category>> {
    self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name FROM categories WHERE board_id = ?1 ORDER BY id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![board_id], |row| {
            Ok(Category { id: row.get(0)?, name: row.get(1)? })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(Error::storage)
  }

  async fn add_category(&self, name: String, board_id: i64) -> Result<i64> {
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO categories (name, board_id) VALUES (?1, ?2)",
          rusqlite::params![name, board_id],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
      })
      .await
      .map_err(Error::storage)
  }

  async fn remove_category(&self, category_id: i64) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let exists: Option<i64> = tx
          .query_row(
            "SELECT id FROM categories WHERE id = ?1",
            rusqlite::params![category_id],
            |row| row.get(0),
          )
          .optional()?;
        if exists.is_none() {
          return Ok(Err(Error::CategoryNotFound));
        }

        // Match by raw note.category value — the same loose coupling the
        // data model uses. Any referencing note blocks the delete.
        let in_use: Option<i64> = tx
          .query_row(
            "SELECT id FROM notes WHERE category = ?1 LIMIT 1",
            rusqlite::params![category_id],
            |row| row.get(0),
          )
          .optional()?;
        if in_use.is_some() {
          return Ok(Err(Error::CategoryInUse));
        }

        tx.execute(
          "DELETE FROM categories WHERE id = ?1",
          rusqlite::params![category_id],
        )?;
        tx.commit()?;
        Ok(Ok(()))
      })
      .await
      .map_err(Error::storage)?
  }

  // ── Settings ──────────────────────────────────────────────────────────────

  async fn list_settings(&self) -> Result<Vec<Setting>> {
    self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT setting_name, setting_value, setting_type,
                  setting_display_name, setting_description
           FROM settings ORDER BY setting_name",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Setting {
              setting_name:         row.get(0)?,
              setting_value:        row.get(1)?,
              setting_type:         row.get(2)?,
              setting_display_name: row.get(3)?,
              setting_description:  row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(Error::storage)
  }

  async fn update_setting(&self, name: String, value: String) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        // Strict lookup, same contract as the note update operations.
        let _: String = tx.query_row(
          "SELECT setting_name FROM settings WHERE setting_name = ?1",
          rusqlite::params![name],
          |row| row.get(0),
        )?;
        tx.execute(
          "UPDATE settings SET setting_value = ?1 WHERE setting_name = ?2",
          rusqlite::params![value, name],
        )?;
        tx.commit()?;
        Ok(())
      })
      .await
      .map_err(Error::storage)
  }

  async fn sync_settings(&self, defaults: &[SettingDefault]) -> Result<()> {
    let defaults = defaults.to_vec();
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        for d in &defaults {
          // Insert-if-absent: an operator-modified value is never reset.
          tx.execute(
            "INSERT OR IGNORE INTO settings
               (setting_name, setting_value, setting_type,
                setting_display_name, setting_description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
              d.setting_name,
              d.default_value,
              d.setting_type,
              d.setting_display_name,
              d.setting_description,
            ],
          )?;
        }
        // One commit for the whole list; a failure above seeds nothing.
        tx.commit()?;
        Ok(())
      })
      .await
      .map_err(Error::storage)
  }
}
