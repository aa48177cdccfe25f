//! Apiary model.

use serde::{Deserialize, Serialize};

use super::Record;

/// A site holding one or more hives, owned by a single beekeeper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Apiary {
    pub id: i64,

    /// Owning beekeeper
    pub beekeeper_id: i64,

    pub name: String,

    /// Number of hives at the site
    pub hive_count: i64,

    pub locality: String,

    pub latitude: Option<f64>,

    pub longitude: Option<f64>,
}

impl Apiary {
    /// Both coordinates, when the site has been located.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

impl Record for Apiary {
    const ENTITY: &'static str = "Apiary";

    fn key(&self) -> String {
        self.id.to_string()
    }
}
