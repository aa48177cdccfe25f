//! Schema bootstrap.
//!
//! The schema is created with idempotent statements on every connect so a new
//! database file is immediately usable. Existing tables are left untouched;
//! there is no versioned migration step.

use crate::error::{DatabaseResultExt, Result};

/// Every table created by the bootstrap, parents before children.
pub const TABLES: &[&str] = &[
    "apicultor",
    "apiarios",
    "especies",
    "analista",
    "muestra",
    "analisis_palinologico",
    "tambor",
];

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Foreign keys are off by default in SQLite and are per connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        Ok(())
    }

    /// Whether foreign key enforcement is active on this session.
    pub fn foreign_keys_enabled(&self) -> Result<bool> {
        self.connection
            .query_row("PRAGMA foreign_keys", [], |row| row.get::<_, i64>(0))
            .map(|flag| flag == 1)
            .db_context("Failed to read foreign key setting")
    }
}
