//! Core library for the Apiario records console.
//!
//! This crate provides the data-access layer for beekeepers, apiaries, pollen
//! samples, species and palynological analyses: a single owned database
//! session, one repository per table, read-only report queries, and display
//! wrappers that turn rows into markdown tables and text charts.
//!
//! # Layers
//!
//! - **Connection manager** ([`Database`]): opens the session, runs read-only
//!   queries and all-or-nothing transactions
//! - **Repositories** ([`db`] `*_queries` modules): insert, list and get per
//!   entity, plus beekeeper deletion
//! - **Reports** ([`db::report_queries`]): hive totals, top species, pending
//!   samples
//! - **Display** ([`display`]): markdown rendering of all of the above
//!
//! Every operation returns [`Result`]; "no rows" is `Ok(vec![])` or `Ok(None)`
//! and never an error.
//!
//! # Quick Start
//!
//! ```rust
//! use apiario_core::{ConnectionConfig, Database, params::{NewApiary, NewBeekeeper}};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = Database::connect(&ConnectionConfig::in_memory())?;
//!
//! let ana = db.insert_beekeeper(&NewBeekeeper::new("Ana", "Ruiz"))?;
//! for hives in [10, 5] {
//!     db.insert_apiary(&NewApiary {
//!         beekeeper_id: ana,
//!         name: format!("Apiary {hives}"),
//!         hive_count: hives,
//!         locality: "Tandil".to_string(),
//!         ..Default::default()
//!     })?;
//! }
//!
//! let summary = db.hive_summary()?;
//! assert_eq!(summary[0].beekeeper, "Ana Ruiz");
//! assert_eq!(summary[0].total_hives, Some(15));
//!
//! db.disconnect()?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use config::ConnectionConfig;
pub use db::{
    Database, Statement, csv_import::CsvTable, report_queries::TOP_SPECIES_LIMIT, schema::TABLES,
};
pub use display::{
    BarChart, CreateResult, DeleteResult, Listing, OperationStatus, QueryResults, ShareChart,
};
pub use error::{ApiarioError, Result};
pub use models::{
    Analysis, AnalysisKey, Analyst, Apiary, Beekeeper, Drum, HiveSummary, PendingSample, Record,
    Row, Sample, Species, SpeciesCount,
};
pub use rusqlite::types::Value;
