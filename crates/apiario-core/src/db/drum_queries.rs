use log::info;
use rusqlite::{Row, params};

use crate::{error::Result, models::Drum, params::NewDrum};

const INSERT_DRUM_SQL: &str = "INSERT INTO tambor (num_registro) VALUES (?1) RETURNING id_tambor";
const SELECT_DRUMS_SQL: &str =
    "SELECT id_tambor, num_registro FROM tambor ORDER BY num_registro, id_tambor";
const SELECT_DRUM_SQL: &str = "SELECT id_tambor, num_registro FROM tambor WHERE id_tambor = ?1";

fn drum_from_row(row: &Row<'_>) -> rusqlite::Result<Drum> {
    Ok(Drum {
        id: row.get("id_tambor")?,
        registration_number: row.get("num_registro")?,
    })
}

impl super::Database {
    /// Registers a drum. Registration numbers are unique.
    pub fn insert_drum(&mut self, new: &NewDrum) -> Result<i64> {
        let id = self.insert_returning(
            INSERT_DRUM_SQL,
            params![new.registration_number],
            |row| row.get(0),
            "Failed to insert drum",
        )?;
        info!("Drum inserted: {} (ID: {id})", new.registration_number);
        Ok(id)
    }

    pub fn list_drums(&self) -> Result<Vec<Drum>> {
        self.query_all(SELECT_DRUMS_SQL, [], drum_from_row, "Failed to list drums")
    }

    pub fn get_drum(&self, id: i64) -> Result<Option<Drum>> {
        self.query_optional(
            SELECT_DRUM_SQL,
            params![id],
            drum_from_row,
            "Failed to query drum",
        )
    }
}
