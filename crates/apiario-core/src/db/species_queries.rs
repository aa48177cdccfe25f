//! Species insert and lookup.

use log::info;
use rusqlite::{Row, params};

use crate::{error::Result, models::Species, params::NewSpecies};

pub(super) const INSERT_SPECIES_SQL: &str = "INSERT INTO especies (nombre_cientifico, nombre_comun, familia) VALUES (?1, ?2, ?3) RETURNING id_especie";
const SELECT_ALL_SPECIES_SQL: &str = "SELECT id_especie, nombre_cientifico, nombre_comun, familia FROM especies ORDER BY nombre_comun, id_especie";
const SELECT_SPECIES_SQL: &str = "SELECT id_especie, nombre_cientifico, nombre_comun, familia FROM especies WHERE id_especie = ?1";

fn species_from_row(row: &Row<'_>) -> rusqlite::Result<Species> {
    Ok(Species {
        id: row.get("id_especie")?,
        scientific_name: row.get("nombre_cientifico")?,
        common_name: row.get("nombre_comun")?,
        family: row.get("familia")?,
    })
}

impl super::Database {
    /// Inserts a species and returns its ID. Scientific names are unique.
    pub fn insert_species(&mut self, new: &NewSpecies) -> Result<i64> {
        let id = self.insert_returning(
            INSERT_SPECIES_SQL,
            params![new.scientific_name, new.common_name, new.family],
            |row| row.get(0),
            "Failed to insert species",
        )?;
        info!("Species inserted: {} (ID: {id})", new.common_name);
        Ok(id)
    }

    /// Lists all species ordered by common name.
    pub fn list_species(&self) -> Result<Vec<Species>> {
        self.query_all(
            SELECT_ALL_SPECIES_SQL,
            [],
            species_from_row,
            "Failed to list species",
        )
    }

    /// Retrieves a species by ID.
    pub fn get_species(&self, id: i64) -> Result<Option<Species>> {
        self.query_optional(
            SELECT_SPECIES_SQL,
            params![id],
            species_from_row,
            "Failed to query species",
        )
    }
}
