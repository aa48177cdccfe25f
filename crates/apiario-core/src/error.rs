//! Error types for the apiary data-access layer.

use std::path::PathBuf;

use rusqlite::ErrorCode;
use thiserror::Error;

/// Error type for every connection, repository and report operation.
///
/// Callers can tell "no rows" (`Ok(vec![])` / `Ok(None)`) apart from a failed
/// statement, and a failed statement apart from a rejected constraint.
#[derive(Error, Debug)]
pub enum ApiarioError {
    /// The session could not be opened
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A foreign key, unique, not-null or check constraint rejected a statement
    #[error("Constraint violation: {message}")]
    ConstraintViolation {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Any other statement failure
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No row exists for the given key
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A CSV file could not be read or a record did not match its columns
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source, classifying constraint
    /// failures separately from other statement failures.
    pub fn with_source(self, source: rusqlite::Error) -> ApiarioError {
        if is_constraint_violation(&source) {
            ApiarioError::ConstraintViolation {
                message: self.message,
                source,
            }
        } else {
            ApiarioError::Database {
                message: self.message,
                source,
            }
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ApiarioError {
        ApiarioError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ApiarioError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a not-found error for an entity key.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Whether this error is a rejected constraint.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }

    /// Whether this error is a missing row.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn is_constraint_violation(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ApiarioError::database(message).with_source(e))
    }
}

/// Result type alias for apiary operations
pub type Result<T> = std::result::Result<T, ApiarioError>;

#[cfg(test)]
mod tests {
    use rusqlite::ffi;

    use super::*;

    fn sqlite_failure(code: std::os::raw::c_int) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(ffi::Error::new(code), Some("boom".to_string()))
    }

    #[test]
    fn test_constraint_failures_are_classified() {
        let err = ApiarioError::database("Failed to insert apiary")
            .with_source(sqlite_failure(ffi::SQLITE_CONSTRAINT_FOREIGNKEY));
        assert!(err.is_constraint_violation());
        assert!(err.to_string().contains("Failed to insert apiary"));
    }

    #[test]
    fn test_other_failures_stay_database_errors() {
        let err = ApiarioError::database("Failed to query").with_source(sqlite_failure(ffi::SQLITE_ERROR));
        assert!(matches!(err, ApiarioError::Database { .. }));
        assert!(!err.is_constraint_violation());
    }

    #[test]
    fn test_not_found_message() {
        let err = ApiarioError::not_found("Beekeeper", 42);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Beekeeper with ID 42 not found");
    }
}
