//! Palynological analysis model.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Record;

/// Composite key of an analysis row: one species counted in one sample.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AnalysisKey {
    pub sample_id: i64,
    pub species_id: i64,
}

impl fmt::Display for AnalysisKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sample {} / species {}", self.sample_id, self.species_id)
    }
}

/// Pollen grain count of one species within one sample.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analysis {
    pub sample_id: i64,
    pub species_id: i64,
    pub grain_count: i64,

    /// Special mark noted by the analyst
    pub mark: Option<String>,

    pub percentage: Option<f64>,
}

impl Analysis {
    pub fn id(&self) -> AnalysisKey {
        AnalysisKey {
            sample_id: self.sample_id,
            species_id: self.species_id,
        }
    }
}

impl Record for Analysis {
    const ENTITY: &'static str = "Analysis";

    fn key(&self) -> String {
        self.id().to_string()
    }
}
