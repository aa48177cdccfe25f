use serde::{Deserialize, Serialize};

use super::Record;

/// A registered storage drum, tracked independently of samples.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Drum {
    pub id: i64,
    pub registration_number: String,
}

impl Record for Drum {
    const ENTITY: &'static str = "Drum";

    fn key(&self) -> String {
        self.id.to_string()
    }
}
