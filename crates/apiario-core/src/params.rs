//! Parameter structures for insert operations.
//!
//! Each `New*` struct carries the columns a caller supplies when creating a
//! row; the database generates the primary key. The menu, the CLI
//! sub-commands and tests build them the same way.
//!
//! The serde derives let [`Database::load_csv`](crate::Database::load_csv)
//! read them straight from CSV records; field aliases accept the column names
//! used in the database (`nombre`, `apellido`, `nombre_cientifico`, ...).
//!
//! ```rust
//! use apiario_core::{Database, ConnectionConfig, params::{NewApiary, NewBeekeeper}};
//!
//! # fn example() -> apiario_core::Result<()> {
//! let mut db = Database::connect(&ConnectionConfig::in_memory())?;
//! let owner = db.insert_beekeeper(&NewBeekeeper::new("Ana", "Ruiz"))?;
//! db.insert_apiary(&NewApiary {
//!     beekeeper_id: owner,
//!     name: "Los Álamos".to_string(),
//!     hive_count: 10,
//!     locality: "Tandil".to_string(),
//!     latitude: None,
//!     longitude: None,
//! })?;
//! # Ok(())
//! # }
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Parameters for inserting a beekeeper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBeekeeper {
    #[serde(alias = "nombre")]
    pub first_name: String,
    #[serde(alias = "apellido")]
    pub last_name: String,
}

impl NewBeekeeper {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Parameters for inserting an apiary.
///
/// `beekeeper_id` must reference an existing beekeeper; the database rejects
/// the row otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewApiary {
    pub beekeeper_id: i64,
    pub name: String,
    pub hive_count: i64,
    pub locality: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Parameters for inserting a plant species.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSpecies {
    #[serde(alias = "nombre_cientifico")]
    pub scientific_name: String,
    #[serde(alias = "nombre_comun")]
    pub common_name: String,
    #[serde(alias = "familia")]
    pub family: String,
}

/// Parameters for inserting an analyst.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAnalyst {
    pub first_names: String,
    pub last_names: String,
    pub contact: Option<String>,
}

/// Parameters for inserting a sample.
///
/// Leave `analyzed_on` empty to register a pending sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSample {
    pub analyst_id: i64,
    pub extracted_on: Date,
    pub analyzed_on: Option<Date>,
    pub registration_number: Option<String>,
    pub observations: Option<String>,
}

/// Parameters for inserting a palynological analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAnalysis {
    pub sample_id: i64,
    pub species_id: i64,
    pub grain_count: i64,
    pub mark: Option<String>,
    pub percentage: Option<f64>,
}

/// Parameters for registering a drum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDrum {
    pub registration_number: String,
}
