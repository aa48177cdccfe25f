//! Analyst model.

use serde::{Deserialize, Serialize};

use super::Record;

/// A lab analyst responsible for samples.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Analyst {
    pub id: i64,
    pub first_names: String,
    pub last_names: String,

    /// Free-form contact detail (phone, email)
    pub contact: Option<String>,
}

impl Analyst {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_names, self.last_names)
    }
}

impl Record for Analyst {
    const ENTITY: &'static str = "Analyst";

    fn key(&self) -> String {
        self.id.to_string()
    }
}
