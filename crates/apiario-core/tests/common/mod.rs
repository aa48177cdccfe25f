#![allow(dead_code)]

use apiario_core::{
    ConnectionConfig, Database,
    params::{NewAnalyst, NewApiary, NewBeekeeper, NewSample, NewSpecies},
};
use jiff::civil::Date;
use tempfile::TempDir;

/// Helper function to create a test database in a temporary directory
pub fn create_test_db() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = ConnectionConfig::with_database_path(temp_dir.path().join("test.db"));
    let db = Database::connect(&config).expect("Failed to create test database");
    (temp_dir, db)
}

pub fn add_beekeeper(db: &mut Database, first: &str, last: &str) -> i64 {
    db.insert_beekeeper(&NewBeekeeper::new(first, last))
        .expect("Failed to insert beekeeper")
}

pub fn add_apiary(db: &mut Database, beekeeper_id: i64, name: &str, hives: i64) -> i64 {
    db.insert_apiary(&NewApiary {
        beekeeper_id,
        name: name.to_string(),
        hive_count: hives,
        locality: "Tandil".to_string(),
        latitude: None,
        longitude: None,
    })
    .expect("Failed to insert apiary")
}

pub fn add_analyst(db: &mut Database, first: &str, last: &str) -> i64 {
    db.insert_analyst(&NewAnalyst {
        first_names: first.to_string(),
        last_names: last.to_string(),
        contact: None,
    })
    .expect("Failed to insert analyst")
}

pub fn add_species(db: &mut Database, scientific: &str, common: &str) -> i64 {
    db.insert_species(&NewSpecies {
        scientific_name: scientific.to_string(),
        common_name: common.to_string(),
        family: "Fabaceae".to_string(),
    })
    .expect("Failed to insert species")
}

pub fn add_sample(
    db: &mut Database,
    analyst_id: i64,
    extracted_on: Date,
    analyzed_on: Option<Date>,
    registration: &str,
) -> i64 {
    db.insert_sample(&NewSample {
        analyst_id,
        extracted_on,
        analyzed_on,
        registration_number: Some(registration.to_string()),
        observations: None,
    })
    .expect("Failed to insert sample")
}
