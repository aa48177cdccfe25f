//! Data models for apiary and palynology records.
//!
//! Each model mirrors one row of its table. Rows are created through the
//! repositories in [`crate::db`] and never updated in place, so the models are
//! plain data: no behaviour beyond small derived helpers. Display
//! implementations live in [`crate::display::models`].
//!
//! | Model | Table |
//! |---|---|
//! | [`Beekeeper`] | `apicultor` |
//! | [`Apiary`] | `apiarios` |
//! | [`Species`] | `especies` |
//! | [`Analyst`] | `analista` |
//! | [`Sample`] | `muestra` |
//! | [`Analysis`] | `analisis_palinologico` |
//! | [`Drum`] | `tambor` |
//!
//! Report rows produced by [`crate::db::report_queries`] are in [`reports`],
//! and the untyped rows returned by ad-hoc queries are in [`row`].

pub mod analysis;
pub mod analyst;
pub mod apiary;
pub mod beekeeper;
pub mod drum;
pub mod reports;
pub mod row;
pub mod sample;
pub mod species;


pub use analysis::{Analysis, AnalysisKey};
pub use analyst::Analyst;
pub use apiary::Apiary;
pub use beekeeper::Beekeeper;
pub use drum::Drum;
pub use reports::{HiveSummary, PendingSample, SpeciesCount};
pub use row::Row;
pub use sample::Sample;
pub use species::Species;

/// A stored record that can be named and identified in messages.
pub trait Record {
    /// Human-readable entity name, e.g. "Beekeeper".
    const ENTITY: &'static str;

    /// The record's key rendered for display.
    fn key(&self) -> String;
}
