//! Display formatting for records, query results and charts.
//!
//! Everything here renders to markdown so the CLI can show it through its
//! terminal renderer, or print it as plain text when colors are disabled.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Models, Reports │    │ Tables, Charts, │    │    Markdown     │
//! │  and Query Rows │───▶│ Result Wrappers │───▶│  (Terminal/Log) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for single records
//! - [`tables`]: markdown tables for record listings and ad-hoc query rows
//! - [`charts`]: text bar and share charts fed by the report rows
//! - [`results`]: outcome wrappers for inserts, deletes and status messages
//!
//! ## Usage Examples
//!
//! ```rust
//! use apiario_core::{display::BarChart, models::HiveSummary};
//!
//! let summary = vec![HiveSummary {
//!     beekeeper_id: 1,
//!     beekeeper: "Ana Ruiz".to_string(),
//!     total_apiaries: 2,
//!     total_hives: Some(15),
//! }];
//!
//! let chart = BarChart::hives(&summary);
//! assert!(chart.to_string().contains("Ana Ruiz"));
//! ```

pub mod charts;
pub mod models;
pub mod results;
pub mod tables;

pub use charts::{BarChart, ShareChart};
pub use results::{CreateResult, DeleteResult, OperationStatus};
pub use tables::{Listing, QueryResults, Table};
