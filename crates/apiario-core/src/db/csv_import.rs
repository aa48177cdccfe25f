//! Bulk loading of beekeepers and species from CSV files.
//!
//! Files need a header row. Beekeepers are read from `nombre,apellido` and
//! species from `nombre_cientifico,nombre_comun,familia`; the English field
//! names of the insert parameters are accepted as well and extra columns are
//! ignored. A file is loaded all or nothing.

use std::{fmt, fs::File, path::Path, str::FromStr};

use log::{error, info};
use rusqlite::{Transaction, params};
use serde::de::DeserializeOwned;

use super::{beekeeper_queries::INSERT_BEEKEEPER_SQL, species_queries::INSERT_SPECIES_SQL};
use crate::{
    error::{ApiarioError, DatabaseResultExt, Result},
    params::{NewBeekeeper, NewSpecies},
};

/// Tables that can be loaded from CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvTable {
    Beekeepers,
    Species,
}

impl CsvTable {
    /// Name of the table the records land in.
    pub fn table_name(self) -> &'static str {
        match self {
            Self::Beekeepers => "apicultor",
            Self::Species => "especies",
        }
    }
}

impl fmt::Display for CsvTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

impl FromStr for CsvTable {
    type Err = ApiarioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apicultor" | "beekeeper" | "beekeepers" => Ok(Self::Beekeepers),
            "especies" | "species" => Ok(Self::Species),
            other => Err(ApiarioError::invalid_input("table").with_reason(format!(
                "'{other}' cannot be loaded from CSV; use apicultor or especies"
            ))),
        }
    }
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|source| ApiarioError::FileSystem {
        path: path.to_path_buf(),
        source,
    })?;

    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file)
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()
        .map_err(|source| ApiarioError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

impl super::Database {
    /// Inserts every record of a CSV file into `table` and returns how many
    /// were loaded.
    ///
    /// The file is parsed completely before anything is written, and all rows
    /// go in one transaction: a malformed record or a rejected row (for
    /// example a duplicate scientific name) leaves the table unchanged.
    ///
    /// # Errors
    ///
    /// - `ApiarioError::FileSystem` if the file cannot be opened
    /// - `ApiarioError::Csv` if a record is malformed or misses a column
    /// - `ApiarioError::ConstraintViolation` / `ApiarioError::Database` if a
    ///   row is rejected
    pub fn load_csv<P: AsRef<Path>>(&mut self, path: P, table: CsvTable) -> Result<usize> {
        let path = path.as_ref();
        let result = match table {
            CsvTable::Beekeepers => read_records::<NewBeekeeper>(path).and_then(|records| {
                self.load_records(table, &records, |tx, b| {
                    tx.query_row(
                        INSERT_BEEKEEPER_SQL,
                        params![b.first_name, b.last_name],
                        |row| row.get(0),
                    )
                })
            }),
            CsvTable::Species => read_records::<NewSpecies>(path).and_then(|records| {
                self.load_records(table, &records, |tx, s| {
                    tx.query_row(
                        INSERT_SPECIES_SQL,
                        params![s.scientific_name, s.common_name, s.family],
                        |row| row.get(0),
                    )
                })
            }),
        };

        match &result {
            Ok(count) => info!(
                "Loaded {count} records from {} into {table}",
                path.display()
            ),
            Err(e) => error!("Failed to load CSV {} into {table}: {e}", path.display()),
        }
        result
    }

    fn load_records<T, F>(&mut self, table: CsvTable, records: &[T], insert: F) -> Result<usize>
    where
        F: Fn(&Transaction<'_>, &T) -> rusqlite::Result<i64>,
    {
        info!("Loading {} records into {table}", records.len());

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        for (index, record) in records.iter().enumerate() {
            // Returning early drops `tx`, which rolls the load back.
            insert(&tx, record).map_err(|e| {
                ApiarioError::database(format!(
                    "Failed to load record {} into {table}",
                    index + 1
                ))
                .with_source(e)
            })?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names_parse() {
        assert_eq!("apicultor".parse::<CsvTable>().ok(), Some(CsvTable::Beekeepers));
        assert_eq!("Species".parse::<CsvTable>().ok(), Some(CsvTable::Species));
        assert!(matches!(
            "tambor".parse::<CsvTable>(),
            Err(ApiarioError::InvalidInput { .. })
        ));
        assert_eq!(CsvTable::Species.to_string(), "especies");
    }
}
