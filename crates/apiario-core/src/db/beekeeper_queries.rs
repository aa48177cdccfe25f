//! Beekeeper insert, lookup and deletion.

use log::{error, info, warn};
use rusqlite::{Row, params};

use crate::{
    error::{ApiarioError, DatabaseResultExt, Result},
    models::Beekeeper,
    params::NewBeekeeper,
};

pub(super) const INSERT_BEEKEEPER_SQL: &str =
    "INSERT INTO apicultor (nombre, apellido) VALUES (?1, ?2) RETURNING id_apicultor";
const SELECT_BEEKEEPERS_SQL: &str =
    "SELECT id_apicultor, nombre, apellido FROM apicultor ORDER BY apellido, nombre, id_apicultor";
const SELECT_BEEKEEPER_SQL: &str =
    "SELECT id_apicultor, nombre, apellido FROM apicultor WHERE id_apicultor = ?1";
const DELETE_BEEKEEPER_SQL: &str = "DELETE FROM apicultor WHERE id_apicultor = ?1";

fn beekeeper_from_row(row: &Row<'_>) -> rusqlite::Result<Beekeeper> {
    Ok(Beekeeper {
        id: row.get("id_apicultor")?,
        first_name: row.get("nombre")?,
        last_name: row.get("apellido")?,
    })
}

impl super::Database {
    /// Inserts a beekeeper and returns the generated ID.
    pub fn insert_beekeeper(&mut self, new: &NewBeekeeper) -> Result<i64> {
        let id = self.insert_returning(
            INSERT_BEEKEEPER_SQL,
            params![new.first_name, new.last_name],
            |row| row.get(0),
            "Failed to insert beekeeper",
        )?;
        info!(
            "Beekeeper inserted: {} {} (ID: {id})",
            new.first_name, new.last_name
        );
        Ok(id)
    }

    /// Lists all beekeepers ordered by last name, then first name.
    pub fn list_beekeepers(&self) -> Result<Vec<Beekeeper>> {
        self.query_all(
            SELECT_BEEKEEPERS_SQL,
            [],
            beekeeper_from_row,
            "Failed to list beekeepers",
        )
    }

    /// Retrieves a beekeeper by ID.
    pub fn get_beekeeper(&self, id: i64) -> Result<Option<Beekeeper>> {
        self.query_optional(
            SELECT_BEEKEEPER_SQL,
            params![id],
            beekeeper_from_row,
            "Failed to query beekeeper",
        )
    }

    /// Permanently deletes a beekeeper.
    ///
    /// A missing beekeeper is reported as `ApiarioError::NotFound` without
    /// issuing the DELETE. A beekeeper that still owns apiaries is not
    /// cascaded: the foreign key rejects the delete, the transaction is rolled
    /// back and `ApiarioError::ConstraintViolation` is returned.
    pub fn delete_beekeeper(&mut self, id: i64) -> Result<()> {
        if self.get_beekeeper(id)?.is_none() {
            warn!("Beekeeper {id} not found, nothing deleted");
            return Err(ApiarioError::not_found("Beekeeper", id));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if let Err(e) = tx.execute(DELETE_BEEKEEPER_SQL, params![id]) {
            let err = ApiarioError::database(format!("Failed to delete beekeeper {id}"))
                .with_source(e);
            if let Err(rollback) = tx.rollback() {
                error!("Failed to roll back transaction: {rollback}");
            }
            error!("{err}");
            return Err(err);
        }

        tx.commit()
            .db_context("Failed to commit transaction")
            .inspect_err(|e| error!("{e}"))?;
        info!("Beekeeper {id} deleted");
        Ok(())
    }
}
