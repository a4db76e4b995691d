//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `student` table (one record per row; plain rowid key so SQLite can still
///   pick a free id after a client writes at `i64::MAX`)
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Student records
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS student (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NULL,
    email TEXT NULL,
    branch TEXT NULL,
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL -- RFC3339
);
"#;
