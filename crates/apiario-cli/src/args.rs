use std::path::PathBuf;

use apiario_core::{
    ConnectionConfig, CsvTable,
    config::{DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_USER},
};
use clap::{Parser, Subcommand};

/// Console for apiary and palynology records
///
/// Without a command an interactive menu is started on the terminal: run
/// read-only SQL, view dashboards, and add or delete records. Connection
/// settings are read from the environment (or a `.env` file) and can be
/// overridden with flags.
#[derive(Parser)]
#[command(version, about, name = "apiario")]
pub struct Args {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Append-only log file
    #[arg(
        long,
        global = true,
        env = "APIARIO_LOG_FILE",
        default_value = "apicola_db.log"
    )]
    pub log_file: PathBuf,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Connection parameters.
///
/// Only the database name is used by the embedded engine; the others are
/// accepted so the same environment works everywhere and are logged on
/// connect.
#[derive(clap::Args)]
pub struct ConnectionArgs {
    /// Database host
    #[arg(long = "db-host", global = true, env = "DB_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Database port
    #[arg(long = "db-port", global = true, env = "DB_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Database file. Bare names are placed in $XDG_DATA_HOME/apiario/;
    /// use `:memory:` for a throwaway database
    #[arg(long = "db-name", global = true, env = "DB_NAME", default_value = DEFAULT_DATABASE)]
    pub database: String,

    /// Database user
    #[arg(long = "db-user", global = true, env = "DB_USER", default_value = DEFAULT_USER)]
    pub user: String,

    /// Database password
    #[arg(
        long = "db-password",
        global = true,
        env = "DB_PASSWORD",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub password: String,
}

impl ConnectionArgs {
    pub fn into_config(self) -> ConnectionConfig {
        ConnectionConfig {
            host: self.host,
            port: self.port,
            database: self.database,
            user: self.user,
            password: self.password,
        }
    }
}

/// Non-interactive commands
#[derive(Subcommand)]
pub enum Commands {
    /// Verify that the database can be opened and print table sizes
    Check,
    /// Print hive totals, pending samples and the species catalogue
    Summary,
    /// Load beekeepers or species from a CSV file with a header row
    Load {
        /// Target table: apicultor or especies
        table: CsvTable,
        /// CSV file to read
        file: PathBuf,
    },
}
