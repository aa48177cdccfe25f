//! Palynological analysis insert and lookup.
//!
//! Analyses have no surrogate key: a row is identified by its sample and
//! species, so inserts return an [`AnalysisKey`].

use log::info;
use rusqlite::{Row, params};

use crate::{
    error::Result,
    models::{Analysis, AnalysisKey},
    params::NewAnalysis,
};

const INSERT_ANALYSIS_SQL: &str = "INSERT INTO analisis_palinologico (id_muestra, id_especie, cantidad_granos, marca_especial, porcentaje) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id_muestra, id_especie";
const SELECT_ANALYSES_SQL: &str = "SELECT id_muestra, id_especie, cantidad_granos, marca_especial, porcentaje FROM analisis_palinologico ORDER BY id_muestra, id_especie";
const SELECT_ANALYSIS_SQL: &str = "SELECT id_muestra, id_especie, cantidad_granos, marca_especial, porcentaje FROM analisis_palinologico WHERE id_muestra = ?1 AND id_especie = ?2";

fn analysis_from_row(row: &Row<'_>) -> rusqlite::Result<Analysis> {
    Ok(Analysis {
        sample_id: row.get("id_muestra")?,
        species_id: row.get("id_especie")?,
        grain_count: row.get("cantidad_granos")?,
        mark: row.get("marca_especial")?,
        percentage: row.get("porcentaje")?,
    })
}

impl super::Database {
    /// Records the grain count of one species in one sample.
    ///
    /// Both the sample and the species must exist, and a species can only be
    /// counted once per sample.
    pub fn insert_analysis(&mut self, new: &NewAnalysis) -> Result<AnalysisKey> {
        let key = self.insert_returning(
            INSERT_ANALYSIS_SQL,
            params![
                new.sample_id,
                new.species_id,
                new.grain_count,
                new.mark,
                new.percentage
            ],
            |row| {
                Ok(AnalysisKey {
                    sample_id: row.get(0)?,
                    species_id: row.get(1)?,
                })
            },
            "Failed to insert palynological analysis",
        )?;
        info!("Palynological analysis inserted for {key}");
        Ok(key)
    }

    /// Lists all analyses ordered by sample, then species.
    pub fn list_analyses(&self) -> Result<Vec<Analysis>> {
        self.query_all(
            SELECT_ANALYSES_SQL,
            [],
            analysis_from_row,
            "Failed to list analyses",
        )
    }

    /// Retrieves the analysis of one species in one sample.
    pub fn get_analysis(&self, key: AnalysisKey) -> Result<Option<Analysis>> {
        self.query_optional(
            SELECT_ANALYSIS_SQL,
            params![key.sample_id, key.species_id],
            analysis_from_row,
            "Failed to query analysis",
        )
    }
}
