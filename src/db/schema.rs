//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `owners` table (one person per row)
/// - `pets` table (one animal per row, required reference to an owner)
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Owners
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS owners (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL
);

-- ---------------------------------------------------------------------------
-- Pets (every pet belongs to exactly one owner)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS pets (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    species TEXT NOT NULL,
    owner_id INTEGER NOT NULL REFERENCES owners(id)
);

CREATE INDEX IF NOT EXISTS idx_pets_owner_id ON pets(owner_id);
"#;
