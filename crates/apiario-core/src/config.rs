//! Connection parameters and database location resolution.

use std::{
    env, fmt,
    path::{Path, PathBuf},
};

use crate::error::{ApiarioError, Result};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_DATABASE: &str = "apiarios.db";
pub const DEFAULT_USER: &str = "postgres";

/// Name that opens a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Parameters needed to open a session.
///
/// The embedded engine only reads `database`; host, port, user and password
/// are carried so the same environment works against networked setups and
/// show up in connection logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl ConnectionConfig {
    /// Reads `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER` and `DB_PASSWORD`,
    /// falling back to the documented defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("DB_PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|e| {
                ApiarioError::invalid_input("DB_PORT").with_reason(format!("'{raw}': {e}"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            host: env::var("DB_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            database: env::var("DB_NAME").unwrap_or_else(|_| DEFAULT_DATABASE.to_string()),
            user: env::var("DB_USER").unwrap_or_else(|_| DEFAULT_USER.to_string()),
            password: env::var("DB_PASSWORD").unwrap_or_default(),
        })
    }

    /// Config for a throwaway in-memory database.
    pub fn in_memory() -> Self {
        Self {
            database: IN_MEMORY.to_string(),
            ..Self::default()
        }
    }

    /// Config pointing at a database file.
    pub fn with_database_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            database: path.as_ref().to_string_lossy().into_owned(),
            ..Self::default()
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database == IN_MEMORY
    }

    /// Resolves `database` to a file location.
    ///
    /// Absolute paths and names containing a directory component are used as
    /// given. A bare file name is placed in the XDG data directory:
    /// `$XDG_DATA_HOME/apiario/<name>` or `~/.local/share/apiario/<name>`.
    pub fn database_path(&self) -> Result<PathBuf> {
        if self.database.trim().is_empty() {
            return Err(ApiarioError::invalid_input("DB_NAME").with_reason("database name is empty"));
        }

        let path = Path::new(&self.database);
        if path.is_absolute() || path.components().count() > 1 {
            return Ok(path.to_path_buf());
        }

        xdg::BaseDirectories::with_prefix("apiario")
            .place_data_file(path)
            .map_err(|e| ApiarioError::XdgDirectory(e.to_string()))
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            user: DEFAULT_USER.to_string(),
            password: String::new(),
        }
    }
}

// Keeps the password out of logs and panic messages.
impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

impl fmt::Display for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}/{}", self.user, self.host, self.port, self.database)
    }
}
