//! Shared statement helpers for the repositories.

use jiff::civil::Date;
use log::{error, info};
use rusqlite::{OptionalExtension, Params, Row, types::Type};

use crate::error::{ApiarioError, DatabaseResultExt, Result};

impl super::Database {
    /// Runs an `INSERT … RETURNING` statement in its own transaction and maps
    /// the returned row.
    ///
    /// The insert is committed immediately. Any failure rolls the transaction
    /// back, is logged, and comes back as a typed error.
    pub(crate) fn insert_returning<T, P, F>(
        &mut self,
        sql: &str,
        params: P,
        map: F,
        context: &str,
    ) -> Result<T>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        let result: Result<T> = (|| {
            let tx = self
                .connection
                .transaction()
                .db_context("Failed to begin transaction")?;
            // An error before commit drops `tx`, which rolls it back.
            let value = tx.query_row(sql, params, map).db_context(context)?;
            tx.commit().db_context("Failed to commit transaction")?;
            Ok(value)
        })();

        if let Err(e) = &result {
            error!("{e}");
        }
        result
    }

    /// Runs a query and maps every row.
    pub(crate) fn query_all<T, P, F>(
        &self,
        sql: &str,
        params: P,
        map: F,
        context: &str,
    ) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let result: Result<Vec<T>> = (|| {
            let mut stmt = self
                .connection
                .prepare_cached(sql)
                .db_context("Failed to prepare query")?;
            let rows = stmt
                .query_map(params, map)
                .db_context(context)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .db_context(context)?;
            Ok(rows)
        })();

        match &result {
            Ok(rows) => info!("Query executed: {} rows returned", rows.len()),
            Err(e) => error!("{e}"),
        }
        result
    }

    /// Runs a query expected to match at most one row.
    pub(crate) fn query_optional<T, P, F>(
        &self,
        sql: &str,
        params: P,
        map: F,
        context: &str,
    ) -> Result<Option<T>>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        let result = self
            .connection
            .query_row(sql, params, map)
            .optional()
            .db_context(context);

        if let Err(e) = &result {
            error!("{e}");
        }
        result
    }

    /// Counts the rows of a table. Used to check that failed writes left no
    /// trace.
    pub fn count_rows(&self, table: &str) -> Result<i64> {
        if !table.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ApiarioError::invalid_input("table")
                .with_reason(format!("'{table}' is not a valid table name")));
        }

        self.connection
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
            .db_context("Failed to count rows")
    }
}

/// Reads an ISO `YYYY-MM-DD` text column as a civil date.
pub(crate) fn date_column(row: &Row<'_>, column: &str) -> rusqlite::Result<Date> {
    let raw: String = row.get(column)?;
    parse_date(row, column, &raw)
}

/// Like [`date_column`] for nullable columns.
pub(crate) fn optional_date_column(
    row: &Row<'_>,
    column: &str,
) -> rusqlite::Result<Option<Date>> {
    let raw: Option<String> = row.get(column)?;
    raw.map(|raw| parse_date(row, column, &raw)).transpose()
}

fn parse_date(row: &Row<'_>, column: &str, raw: &str) -> rusqlite::Result<Date> {
    raw.parse::<Date>().map_err(|e| {
        let index = row.as_ref().column_index(column).unwrap_or_default();
        rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e))
    })
}
