//! Beekeeper model.

use serde::{Deserialize, Serialize};

use super::Record;

/// A beekeeper, owner of zero or more apiaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Beekeeper {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl Beekeeper {
    /// "First Last", the same form the reports use.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Beekeeper {
    const ENTITY: &'static str = "Beekeeper";

    fn key(&self) -> String {
        self.id.to_string()
    }
}
