//! Apiary insert and lookup.

use log::info;
use rusqlite::{Row, params};

use crate::{error::Result, models::Apiary, params::NewApiary};

const INSERT_APIARY_SQL: &str = "INSERT INTO apiarios (id_apicultor, nombre_apiario, cant_colmenas, localidad, latitud, longitud) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id_apiario";

const APIARY_COLUMNS: &str =
    "id_apiario, id_apicultor, nombre_apiario, cant_colmenas, localidad, latitud, longitud";

fn apiary_from_row(row: &Row<'_>) -> rusqlite::Result<Apiary> {
    Ok(Apiary {
        id: row.get("id_apiario")?,
        beekeeper_id: row.get("id_apicultor")?,
        name: row.get("nombre_apiario")?,
        hive_count: row.get("cant_colmenas")?,
        locality: row.get("localidad")?,
        latitude: row.get("latitud")?,
        longitude: row.get("longitud")?,
    })
}

impl super::Database {
    /// Inserts an apiary for an existing beekeeper and returns its ID.
    pub fn insert_apiary(&mut self, new: &NewApiary) -> Result<i64> {
        let id = self.insert_returning(
            INSERT_APIARY_SQL,
            params![
                new.beekeeper_id,
                new.name,
                new.hive_count,
                new.locality,
                new.latitude,
                new.longitude
            ],
            |row| row.get(0),
            "Failed to insert apiary",
        )?;
        info!("Apiary inserted: {} (ID: {id})", new.name);
        Ok(id)
    }

    /// Lists all apiaries ordered by name.
    pub fn list_apiaries(&self) -> Result<Vec<Apiary>> {
        self.query_all(
            &format!("SELECT {APIARY_COLUMNS} FROM apiarios ORDER BY nombre_apiario, id_apiario"),
            [],
            apiary_from_row,
            "Failed to list apiaries",
        )
    }

    /// Lists the apiaries owned by one beekeeper, ordered by name.
    pub fn list_apiaries_for_beekeeper(&self, beekeeper_id: i64) -> Result<Vec<Apiary>> {
        self.query_all(
            &format!(
                "SELECT {APIARY_COLUMNS} FROM apiarios WHERE id_apicultor = ?1 ORDER BY nombre_apiario, id_apiario"
            ),
            params![beekeeper_id],
            apiary_from_row,
            "Failed to list apiaries of beekeeper",
        )
    }

    /// Retrieves an apiary by ID.
    pub fn get_apiary(&self, id: i64) -> Result<Option<Apiary>> {
        self.query_optional(
            &format!("SELECT {APIARY_COLUMNS} FROM apiarios WHERE id_apiario = ?1"),
            params![id],
            apiary_from_row,
            "Failed to query apiary",
        )
    }
}
