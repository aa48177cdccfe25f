//! Plant species model.

use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Species {
    pub id: i64,
    pub scientific_name: String,
    pub common_name: String,
    pub family: String,
}

impl Record for Species {
    const ENTITY: &'static str = "Species";

    fn key(&self) -> String {
        self.id.to_string()
    }
}
