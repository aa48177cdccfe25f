//! Database session and SQL execution for apiary records.
//!
//! [`Database`] owns the single session of a run. It is returned by
//! [`Database::connect`] and released either by [`Database::disconnect`] or by
//! dropping it, so every exit path closes the session.
//!
//! Entity repositories and the reporting layer are implemented as further
//! `impl Database` blocks, one submodule per table:
//!
//! - [`beekeeper_queries`], [`apiary_queries`], [`species_queries`],
//!   [`analyst_queries`], [`sample_queries`], [`analysis_queries`],
//!   [`drum_queries`]: insert / list / get (and delete for beekeepers)
//! - [`report_queries`]: read-only aggregates for the dashboards
//! - [`csv_import`]: bulk loading of beekeepers and species

use std::fs;

use log::{debug, error, info};
use rusqlite::{Connection, params_from_iter, types::Value};

use crate::{
    config::ConnectionConfig,
    error::{ApiarioError, DatabaseResultExt, Result},
    models::Row,
};

pub mod analysis_queries;
pub mod analyst_queries;
pub mod apiary_queries;
pub mod beekeeper_queries;
pub mod csv_import;
pub mod drum_queries;
pub mod report_queries;
pub mod sample_queries;
pub mod schema;
pub mod species_queries;
pub mod utils;

/// Leading keywords accepted by [`Database::execute_query`].
const QUERY_KEYWORDS: &[&str] = &["SELECT", "WITH", "VALUES", "EXPLAIN"];

/// First keyword of `sql`, skipping whitespace and comments.
fn leading_keyword(sql: &str) -> &str {
    let mut rest = sql;
    loop {
        rest = rest.trim_start();
        if let Some(comment) = rest.strip_prefix("--") {
            rest = comment.split_once('\n').map_or("", |(_, tail)| tail);
        } else if let Some(comment) = rest.strip_prefix("/*") {
            rest = comment.split_once("*/").map_or("", |(_, tail)| tail);
        } else {
            break;
        }
    }
    let end = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    &rest[..end]
}

/// A statement and its positional parameters, as run by
/// [`Database::execute_transaction`].
pub type Statement<'a> = (&'a str, Vec<Value>);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens a session and makes sure the schema exists.
    ///
    /// # Errors
    ///
    /// Returns `ApiarioError::Connection` if the database cannot be opened or
    /// is not a valid database file. The failure is logged before returning.
    pub fn connect(config: &ConnectionConfig) -> Result<Self> {
        debug!(
            "Connecting to {config} (host, port and credentials are not used by the embedded engine)"
        );

        let connection = Self::open(config).inspect_err(|e| {
            error!("Failed to connect to the database: {e}");
        })?;

        let db = Self { connection };
        db.initialize_schema().inspect_err(|e| {
            error!("Failed to initialize the database schema: {e}");
        })?;

        info!("Connected to database {config}");
        Ok(db)
    }

    fn open(config: &ConnectionConfig) -> Result<Connection> {
        let opened = if config.is_in_memory() {
            Connection::open_in_memory()
        } else {
            let path = config.database_path()?;
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent).map_err(|e| ApiarioError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
            Connection::open(&path)
        };
        let connection = opened.map_err(|source| ApiarioError::Connection {
            message: format!("cannot open {}", config.database),
            source,
        })?;

        // SQLite opens lazily; touch the file so a corrupt or foreign file
        // fails here rather than on the first repository call.
        connection
            .query_row("SELECT count(*) FROM sqlite_master", [], |row| {
                row.get::<_, i64>(0)
            })
            .map_err(|source| ApiarioError::Connection {
                message: format!("{} is not a usable database", config.database),
                source,
            })?;

        Ok(connection)
    }

    /// Closes the session.
    ///
    /// Consuming `self` means a session can only be closed once; dropping a
    /// `Database` without calling this closes it as well.
    pub fn disconnect(self) -> Result<()> {
        match self.connection.close() {
            Ok(()) => {
                info!("Connection closed");
                Ok(())
            }
            Err((_, e)) => {
                error!("Failed to close the connection: {e}");
                Err(ApiarioError::database("Failed to close connection").with_source(e))
            }
        }
    }

    /// Runs a read-only statement with positional parameters and returns every
    /// row as an ordered column → value mapping.
    ///
    /// Parameters are bound, never interpolated. Only `SELECT`, `WITH`,
    /// `VALUES` and `EXPLAIN` statements are accepted; anything else,
    /// including pragmas, transaction control and `ATTACH`, is rejected with
    /// `ApiarioError::InvalidInput`. Writes go through the repositories or
    /// [`Database::execute_transaction`].
    pub fn execute_query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        let result = self.query_rows(sql, params);
        match &result {
            Ok(rows) => info!("Query executed: {} rows returned", rows.len()),
            Err(e) => error!("Failed to execute query: {e}"),
        }
        result
    }

    fn query_rows(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        // SQLite reports PRAGMA, BEGIN and ATTACH as read-only, so the
        // leading keyword is checked first.
        let keyword = leading_keyword(sql).to_ascii_uppercase();
        if !QUERY_KEYWORDS.contains(&keyword.as_str()) {
            return Err(ApiarioError::invalid_input("sql").with_reason(format!(
                "only {} statements can be run as queries",
                QUERY_KEYWORDS.join(", ")
            )));
        }

        let results = self.read_rows(sql, params);

        if !self.connection.is_autocommit() {
            if let Err(e) = self.connection.execute_batch("ROLLBACK") {
                error!("Failed to roll back a query-opened transaction: {e}");
            }
            return Err(ApiarioError::invalid_input("sql")
                .with_reason("queries may not leave a transaction open"));
        }

        results
    }

    fn read_rows(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;

        if !stmt.readonly() {
            return Err(ApiarioError::invalid_input("sql")
                .with_reason("only read-only statements can be run as queries"));
        }

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = stmt
            .query(params_from_iter(params.iter()))
            .db_context("Failed to execute query")?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().db_context("Failed to fetch row")? {
            let entries = columns
                .iter()
                .enumerate()
                .map(|(index, name)| Ok((name.clone(), row.get::<_, Value>(index)?)))
                .collect::<rusqlite::Result<Vec<_>>>()
                .db_context("Failed to read row")?;
            results.push(Row::new(entries));
        }

        Ok(results)
    }

    /// Runs every statement inside one transaction.
    ///
    /// Commits only when all statements succeed and returns how many were
    /// executed. On the first failure the whole batch is rolled back and the
    /// failing statement's error is returned.
    pub fn execute_transaction(&mut self, statements: &[Statement<'_>]) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        for (index, (sql, params)) in statements.iter().enumerate() {
            if let Err(e) = tx.execute(sql, params_from_iter(params.iter())) {
                let err = ApiarioError::database(format!(
                    "Statement {} of {} failed",
                    index + 1,
                    statements.len()
                ))
                .with_source(e);
                if let Err(rollback) = tx.rollback() {
                    error!("Failed to roll back transaction: {rollback}");
                }
                error!("Transaction rolled back: {err}");
                return Err(err);
            }
        }

        tx.commit()
            .db_context("Failed to commit transaction")
            .inspect_err(|e| error!("{e}"))?;
        info!(
            "Transaction committed: {} statements executed",
            statements.len()
        );
        Ok(statements.len())
    }
}
