//! Non-interactive commands.
//!
//! Each handler fetches from the session, formats through the core display
//! types and prints via the terminal renderer.

use std::path::Path;

use anyhow::{Context, Result};
use apiario_core::{
    ConnectionConfig, CsvTable, Database, Listing, OperationStatus, TABLES, display::Table,
};

use crate::renderer::TerminalRenderer;

/// Runs one command against an open session.
pub struct Cli<'a> {
    db: &'a mut Database,
    renderer: &'a TerminalRenderer,
}

impl<'a> Cli<'a> {
    pub fn new(db: &'a mut Database, renderer: &'a TerminalRenderer) -> Self {
        Self { db, renderer }
    }

    /// Reports a working connection with the row count of every table.
    pub fn check(&self, config: &ConnectionConfig) -> Result<()> {
        let mut table = Table::new(["Table", "Rows"]);
        for name in TABLES {
            let rows = self
                .db
                .count_rows(name)
                .with_context(|| format!("Failed to count rows in {name}"))?;
            table.push_row([name.to_string(), rows.to_string()]);
        }

        let foreign_keys = if self.db.foreign_keys_enabled()? {
            "on"
        } else {
            "off"
        };

        let mut output =
            OperationStatus::success(format!("Connected to {config}")).to_string();
        output.push('\n');
        output.push_str(&format!("Foreign key enforcement: {foreign_keys}\n\n"));
        output.push_str(&table.to_string());
        self.print(&output)
    }

    /// Prints hive totals, pending samples and the species catalogue.
    pub fn summary(&self) -> Result<()> {
        let hives = self.db.hive_summary().context("Failed to summarize hives")?;
        let pending = self
            .db
            .pending_samples()
            .context("Failed to list pending samples")?;
        let species = self.db.list_species().context("Failed to list species")?;

        let output = format!(
            "## Hives per Beekeeper\n\n{}\n## Pending Samples\n\n{}\n## Species\n\n{}",
            Listing(&hives),
            Listing(&pending),
            Listing(&species)
        );
        self.print(&output)
    }

    /// Loads a CSV file into `table`, all rows or none.
    pub fn load(&mut self, table: CsvTable, file: &Path) -> Result<()> {
        let loaded = self
            .db
            .load_csv(file, table)
            .with_context(|| format!("Failed to load {} into {table}", file.display()))?;
        self.print(
            &OperationStatus::success(format!(
                "Loaded {loaded} records from {} into {table}",
                file.display()
            ))
            .to_string(),
        )
    }

    fn print(&self, markdown: &str) -> Result<()> {
        self.renderer
            .render(markdown)
            .context("Failed to write to the terminal")
    }
}
