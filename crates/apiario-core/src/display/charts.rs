//! Text charts drawn from report rows.
//!
//! Charts render as fenced code blocks so bar alignment survives markdown
//! rendering.

use std::fmt;

use crate::models::{HiveSummary, SpeciesCount};

/// Width in characters of a full-length bar.
const BAR_WIDTH: usize = 40;
const BAR_CHAR: char = '█';

fn bar(units: usize) -> String {
    std::iter::repeat_n(BAR_CHAR, units).collect()
}

/// Horizontal bar chart. Bars are scaled to the largest value.
#[derive(Debug, Clone)]
pub struct BarChart {
    title: String,
    bars: Vec<(String, Option<i64>)>,
}

impl BarChart {
    pub fn new(title: impl Into<String>, bars: Vec<(String, Option<i64>)>) -> Self {
        Self {
            title: title.into(),
            bars,
        }
    }

    /// Hives per beekeeper. Beekeepers without apiaries show an empty bar.
    pub fn hives(summary: &[HiveSummary]) -> Self {
        Self::new(
            "Hives per Beekeeper",
            summary
                .iter()
                .map(|row| (row.beekeeper.clone(), row.total_hives))
                .collect(),
        )
    }

    fn scaled(value: i64, max: i64) -> usize {
        if value <= 0 || max <= 0 {
            return 0;
        }
        let units = (value as u128 * BAR_WIDTH as u128 + max as u128 / 2) / max as u128;
        (units as usize).max(1)
    }
}

impl fmt::Display for BarChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        if self.bars.is_empty() {
            return writeln!(f, "No data to chart.");
        }

        let label_width = self.bars.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
        let max = self.bars.iter().filter_map(|(_, v)| *v).max().unwrap_or(0);

        writeln!(f, "```")?;
        for (label, value) in &self.bars {
            let units = value.map(|v| Self::scaled(v, max)).unwrap_or(0);
            let shown = value.map(|v| v.to_string()).unwrap_or_else(|| "n/a".to_string());
            writeln!(f, "{label:<label_width$} │{} {shown}", bar(units))?;
        }
        writeln!(f, "```")
    }
}

/// Share-of-total chart, the text stand-in for a pie chart.
#[derive(Debug, Clone)]
pub struct ShareChart {
    title: String,
    slices: Vec<(String, i64)>,
}

impl ShareChart {
    pub fn new(title: impl Into<String>, slices: Vec<(String, i64)>) -> Self {
        Self {
            title: title.into(),
            slices,
        }
    }

    /// Grain share of the most frequent species.
    pub fn species(counts: &[SpeciesCount]) -> Self {
        Self::new(
            format!("Top {} Species in Samples", counts.len()),
            counts
                .iter()
                .map(|row| (row.common_name.clone(), row.grain_count))
                .collect(),
        )
    }

    /// Percentage of the total for each slice, in slice order.
    pub fn percentages(&self) -> Vec<f64> {
        let total: i64 = self.slices.iter().map(|(_, v)| (*v).max(0)).sum();
        self.slices
            .iter()
            .map(|(_, v)| {
                if total == 0 {
                    0.0
                } else {
                    (*v).max(0) as f64 * 100.0 / total as f64
                }
            })
            .collect()
    }
}

impl fmt::Display for ShareChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        if self.slices.is_empty() {
            return writeln!(f, "No data to chart.");
        }

        let label_width = self.slices.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
        let bar_width = BAR_WIDTH;

        writeln!(f, "```")?;
        for ((label, value), pct) in self.slices.iter().zip(self.percentages()) {
            let units = (pct / 100.0 * BAR_WIDTH as f64).round() as usize;
            writeln!(
                f,
                "{label:<label_width$} │{:<bar_width$} {pct:>5.1}% ({value})",
                bar(units)
            )?;
        }
        writeln!(f, "```")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, hives: Option<i64>) -> HiveSummary {
        HiveSummary {
            beekeeper_id: 1,
            beekeeper: name.to_string(),
            total_apiaries: i64::from(hives.is_some()),
            total_hives: hives,
        }
    }

    #[test]
    fn test_bars_scale_to_largest_value() {
        let chart = BarChart::hives(&[summary("Ana Ruiz", Some(20)), summary("Luis Paz", Some(10))]);
        let output = chart.to_string();
        assert!(output.contains(&format!("Ana Ruiz │{} 20", bar(40))));
        assert!(output.contains(&format!("Luis Paz │{} 10", bar(20))));
    }

    #[test]
    fn test_missing_total_draws_empty_bar() {
        let chart = BarChart::hives(&[summary("Ana Ruiz", Some(5)), summary("Eva Sol", None)]);
        assert!(chart.to_string().contains("Eva Sol  │ n/a"));
    }

    #[test]
    fn test_small_values_still_visible() {
        assert_eq!(BarChart::scaled(1, 1000), 1);
        assert_eq!(BarChart::scaled(0, 1000), 0);
    }

    #[test]
    fn test_share_percentages() {
        let chart = ShareChart::species(&[
            SpeciesCount {
                common_name: "Trébol".to_string(),
                grain_count: 300,
            },
            SpeciesCount {
                common_name: "Eucalipto".to_string(),
                grain_count: 100,
            },
        ]);
        assert_eq!(chart.percentages(), vec![75.0, 25.0]);
        let output = chart.to_string();
        assert!(output.starts_with("## Top 2 Species in Samples"));
        assert!(output.contains("75.0% (300)"));
    }

    #[test]
    fn test_empty_chart() {
        assert!(BarChart::hives(&[]).to_string().contains("No data to chart."));
    }
}
