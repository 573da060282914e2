//! SQL schema for the RetroBoard SQLite store.
//!
//! Executed once at connection startup. The store holds a single long-lived
//! connection, so the `foreign_keys` pragma stays in effect for its whole
//! lifetime.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS boards (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(30) NOT NULL
);

CREATE TABLE IF NOT EXISTS categories (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     VARCHAR(30) NOT NULL,
    board_id INTEGER NOT NULL REFERENCES boards(id) ON DELETE CASCADE
);

-- notes.category holds a category id by value only. There is deliberately
-- no REFERENCES clause: a note may point at a missing category, and the
-- category-removal conflict check matches on this raw id.
CREATE TABLE IF NOT EXISTS notes (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    description VARCHAR(30) NOT NULL,
    category    INTEGER NOT NULL,
    tags        TEXT NOT NULL DEFAULT '[]',   -- JSON array of strings
    board_id    INTEGER NOT NULL REFERENCES boards(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS settings (
    setting_name         TEXT PRIMARY KEY,
    setting_value        VARCHAR(64)  NOT NULL,
    setting_type         VARCHAR(16)  NOT NULL,
    setting_display_name VARCHAR(32)  NOT NULL,
    setting_description  VARCHAR(128) NOT NULL
);

CREATE INDEX IF NOT EXISTS notes_board_idx      ON notes(board_id);
CREATE INDEX IF NOT EXISTS notes_category_idx   ON notes(category);
CREATE INDEX IF NOT EXISTS categories_board_idx ON categories(board_id);
";
