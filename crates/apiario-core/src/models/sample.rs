//! Pollen sample model.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Record;

/// A pollen sample taken by an analyst.
///
/// A sample without an analysis date has been extracted but not analyzed yet
/// and is reported as pending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sample {
    pub id: i64,

    /// Analyst in charge of the sample
    pub analyst_id: i64,

    pub extracted_on: Date,

    /// `None` while the sample is pending
    pub analyzed_on: Option<Date>,

    pub registration_number: Option<String>,

    pub observations: Option<String>,
}

impl Sample {
    pub fn is_pending(&self) -> bool {
        self.analyzed_on.is_none()
    }
}

impl Record for Sample {
    const ENTITY: &'static str = "Sample";

    fn key(&self) -> String {
        self.id.to_string()
    }
}
