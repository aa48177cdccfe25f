//! Markdown tables for record listings and ad-hoc query results.

use std::fmt;

use rusqlite::types::Value;

use crate::models::{
    Analysis, Analyst, Apiary, Beekeeper, Drum, HiveSummary, PendingSample, Row, Sample, Species,
};

/// A markdown table with a header row.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Missing cells render empty, extra cells are dropped.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', " ")
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = self.headers.iter().map(|h| escape_cell(h)).collect();
        writeln!(f, "| {} |", header.join(" | "))?;
        writeln!(f, "|{}|", vec!["---"; self.headers.len()].join("|"))?;
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|c| escape_cell(c)).collect();
            writeln!(f, "| {} |", cells.join(" | "))?;
        }
        Ok(())
    }
}

fn optional<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

/// Renders one SQL value as a table cell.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(r) => r.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => format!("<{} bytes>", b.len()),
    }
}

/// Rows returned by an ad-hoc query, shown with their own column names.
pub struct QueryResults<'a>(pub &'a [Row]);

impl fmt::Display for QueryResults<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.0.first() else {
            return writeln!(f, "The query returned no rows.");
        };

        let mut table = Table::new(first.columns());
        for row in self.0 {
            table.push_row(row.values().map(format_value));
        }
        write!(f, "{table}")?;
        writeln!(f)?;
        writeln!(f, "{} rows", self.0.len())
    }
}

/// Newtype wrapper for displaying a collection of records as a table.
///
/// Empty collections print a "No … found." line instead of an empty table.
///
/// ```rust
/// use apiario_core::{display::Listing, models::Beekeeper};
///
/// let beekeepers = vec![Beekeeper {
///     id: 1,
///     first_name: "Ana".to_string(),
///     last_name: "Ruiz".to_string(),
/// }];
/// let output = Listing(&beekeepers).to_string();
/// assert!(output.contains("| 1 | Ruiz | Ana |"));
/// ```
pub struct Listing<'a, T>(pub &'a [T]);

impl<T> Listing<'_, T> {
    fn render(
        &self,
        f: &mut fmt::Formatter<'_>,
        what: &str,
        headers: &[&str],
        cells: impl Fn(&T) -> Vec<String>,
    ) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No {what} found.");
        }
        let mut table = Table::new(headers.iter().copied());
        for item in self.0 {
            table.push_row(cells(item));
        }
        write!(f, "{table}")
    }
}

impl fmt::Display for Listing<'_, Beekeeper> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, "beekeepers", &["ID", "Last name", "First name"], |b| {
            vec![b.id.to_string(), b.last_name.clone(), b.first_name.clone()]
        })
    }
}

impl fmt::Display for Listing<'_, Apiary> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(
            f,
            "apiaries",
            &["ID", "Name", "Beekeeper", "Hives", "Locality", "Latitude", "Longitude"],
            |a| {
                vec![
                    a.id.to_string(),
                    a.name.clone(),
                    a.beekeeper_id.to_string(),
                    a.hive_count.to_string(),
                    a.locality.clone(),
                    optional(&a.latitude),
                    optional(&a.longitude),
                ]
            },
        )
    }
}

impl fmt::Display for Listing<'_, Species> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(
            f,
            "species",
            &["ID", "Common name", "Scientific name", "Family"],
            |s| {
                vec![
                    s.id.to_string(),
                    s.common_name.clone(),
                    s.scientific_name.clone(),
                    s.family.clone(),
                ]
            },
        )
    }
}

impl fmt::Display for Listing<'_, Analyst> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, "analysts", &["ID", "Name", "Contact"], |a| {
            vec![a.id.to_string(), a.full_name(), optional(&a.contact)]
        })
    }
}

impl fmt::Display for Listing<'_, Sample> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(
            f,
            "samples",
            &["ID", "Registration", "Analyst", "Extracted", "Analyzed"],
            |s| {
                vec![
                    s.id.to_string(),
                    optional(&s.registration_number),
                    s.analyst_id.to_string(),
                    s.extracted_on.to_string(),
                    s.analyzed_on
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "pending".to_string()),
                ]
            },
        )
    }
}

impl fmt::Display for Listing<'_, Analysis> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(
            f,
            "analyses",
            &["Sample", "Species", "Grains", "Mark", "Percentage"],
            |a| {
                vec![
                    a.sample_id.to_string(),
                    a.species_id.to_string(),
                    a.grain_count.to_string(),
                    optional(&a.mark),
                    a.percentage.map(|p| format!("{p:.1}%")).unwrap_or_default(),
                ]
            },
        )
    }
}

impl fmt::Display for Listing<'_, Drum> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, "drums", &["ID", "Registration"], |d| {
            vec![d.id.to_string(), d.registration_number.clone()]
        })
    }
}

impl fmt::Display for Listing<'_, HiveSummary> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, "beekeepers", &["Beekeeper", "Apiaries", "Hives"], |h| {
            vec![
                h.beekeeper.clone(),
                h.total_apiaries.to_string(),
                optional(&h.total_hives),
            ]
        })
    }
}

impl fmt::Display for Listing<'_, PendingSample> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(
            f,
            "pending samples",
            &["ID", "Registration", "Analyst", "Extracted"],
            |p| {
                vec![
                    p.sample.id.to_string(),
                    optional(&p.sample.registration_number),
                    p.analyst.clone(),
                    p.sample.extracted_on.to_string(),
                ]
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_escapes_pipes() {
        let mut table = Table::new(["a", "b"]);
        table.push_row(["x|y", "z"]);
        let output = table.to_string();
        assert!(output.starts_with("| a | b |\n|---|---|\n"));
        assert!(output.contains("x\\|y"));
    }

    #[test]
    fn test_table_pads_short_rows() {
        let mut table = Table::new(["a", "b", "c"]);
        table.push_row(["1"]);
        assert!(table.to_string().contains("| 1 |  |  |"));
    }

    #[test]
    fn test_query_results_empty() {
        assert_eq!(
            QueryResults(&[]).to_string(),
            "The query returned no rows.\n"
        );
    }

    #[test]
    fn test_query_results_keep_column_order() {
        let rows = vec![Row::new(vec![
            ("z".to_string(), Value::Integer(1)),
            ("a".to_string(), Value::Null),
        ])];
        let output = QueryResults(&rows).to_string();
        assert!(output.starts_with("| z | a |"));
        assert!(output.contains("| 1 | NULL |"));
        assert!(output.contains("1 rows"));
    }

    #[test]
    fn test_empty_listing() {
        let none: Vec<Drum> = Vec::new();
        assert_eq!(Listing(&none).to_string(), "No drums found.\n");
    }
}
