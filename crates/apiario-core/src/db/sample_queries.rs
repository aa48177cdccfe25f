//! Sample insert and lookup.

use log::info;
use rusqlite::{Row, params};

use super::utils::{date_column, optional_date_column};
use crate::{error::Result, models::Sample, params::NewSample};

const INSERT_SAMPLE_SQL: &str = "INSERT INTO muestra (id_analista, fecha_extraccion, fecha_analisis, num_registro, observaciones) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id_muestra";

pub(crate) const SAMPLE_COLUMNS: &str =
    "id_muestra, id_analista, fecha_extraccion, fecha_analisis, num_registro, observaciones";

pub(crate) fn sample_from_row(row: &Row<'_>) -> rusqlite::Result<Sample> {
    Ok(Sample {
        id: row.get("id_muestra")?,
        analyst_id: row.get("id_analista")?,
        extracted_on: date_column(row, "fecha_extraccion")?,
        analyzed_on: optional_date_column(row, "fecha_analisis")?,
        registration_number: row.get("num_registro")?,
        observations: row.get("observaciones")?,
    })
}

impl super::Database {
    /// Inserts a sample and returns its ID. Dates are stored as ISO text.
    pub fn insert_sample(&mut self, new: &NewSample) -> Result<i64> {
        let id = self.insert_returning(
            INSERT_SAMPLE_SQL,
            params![
                new.analyst_id,
                new.extracted_on.to_string(),
                new.analyzed_on.map(|date| date.to_string()),
                new.registration_number,
                new.observations
            ],
            |row| row.get(0),
            "Failed to insert sample",
        )?;
        info!(
            "Sample inserted: {} (ID: {id})",
            new.registration_number.as_deref().unwrap_or("unregistered")
        );
        Ok(id)
    }

    /// Lists all samples ordered by extraction date.
    pub fn list_samples(&self) -> Result<Vec<Sample>> {
        self.query_all(
            &format!("SELECT {SAMPLE_COLUMNS} FROM muestra ORDER BY fecha_extraccion, id_muestra"),
            [],
            sample_from_row,
            "Failed to list samples",
        )
    }

    /// Retrieves a sample by ID.
    pub fn get_sample(&self, id: i64) -> Result<Option<Sample>> {
        self.query_optional(
            &format!("SELECT {SAMPLE_COLUMNS} FROM muestra WHERE id_muestra = ?1"),
            params![id],
            sample_from_row,
            "Failed to query sample",
        )
    }
}
