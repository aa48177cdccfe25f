//! Rows produced by the aggregate report queries.

use serde::{Deserialize, Serialize};

use super::Sample;

/// Apiary and hive totals for one beekeeper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HiveSummary {
    pub beekeeper_id: i64,

    /// "First Last"
    pub beekeeper: String,

    pub total_apiaries: i64,

    /// `None` for a beekeeper without apiaries
    pub total_hives: Option<i64>,
}

/// Total pollen grains counted for one species across all analyses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpeciesCount {
    pub common_name: String,
    pub grain_count: i64,
}

/// A sample awaiting analysis, with the analyst's display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingSample {
    pub sample: Sample,
    pub analyst: String,
}
