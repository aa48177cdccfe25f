//! Analyst insert and lookup.

use log::info;
use rusqlite::{Row, params};

use crate::{error::Result, models::Analyst, params::NewAnalyst};

const INSERT_ANALYST_SQL: &str = "INSERT INTO analista (nombres, apellidos, contacto) VALUES (?1, ?2, ?3) RETURNING id_analista";
const SELECT_ANALYSTS_SQL: &str = "SELECT id_analista, nombres, apellidos, contacto FROM analista ORDER BY apellidos, nombres, id_analista";
const SELECT_ANALYST_SQL: &str =
    "SELECT id_analista, nombres, apellidos, contacto FROM analista WHERE id_analista = ?1";

fn analyst_from_row(row: &Row<'_>) -> rusqlite::Result<Analyst> {
    Ok(Analyst {
        id: row.get("id_analista")?,
        first_names: row.get("nombres")?,
        last_names: row.get("apellidos")?,
        contact: row.get("contacto")?,
    })
}

impl super::Database {
    pub fn insert_analyst(&mut self, new: &NewAnalyst) -> Result<i64> {
        let id = self.insert_returning(
            INSERT_ANALYST_SQL,
            params![new.first_names, new.last_names, new.contact],
            |row| row.get(0),
            "Failed to insert analyst",
        )?;
        info!(
            "Analyst inserted: {} {} (ID: {id})",
            new.first_names, new.last_names
        );
        Ok(id)
    }

    /// Lists all analysts ordered by last names, then first names.
    pub fn list_analysts(&self) -> Result<Vec<Analyst>> {
        self.query_all(
            SELECT_ANALYSTS_SQL,
            [],
            analyst_from_row,
            "Failed to list analysts",
        )
    }

    pub fn get_analyst(&self, id: i64) -> Result<Option<Analyst>> {
        self.query_optional(
            SELECT_ANALYST_SQL,
            params![id],
            analyst_from_row,
            "Failed to query analyst",
        )
    }
}
