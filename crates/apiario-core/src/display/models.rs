//! Display implementations for single records.
//!
//! Each record renders as a markdown header with its key and name, followed by
//! a bullet list of its remaining columns. Optional columns are omitted when
//! empty.

use std::fmt;

use crate::models::{Analysis, Analyst, Apiary, Beekeeper, Drum, Sample, Species};

impl fmt::Display for Beekeeper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.full_name())
    }
}

impl fmt::Display for Apiary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Beekeeper: {}", self.beekeeper_id)?;
        writeln!(f, "- Hives: {}", self.hive_count)?;
        writeln!(f, "- Locality: {}", self.locality)?;
        if let Some((lat, lon)) = self.coordinates() {
            writeln!(f, "- Coordinates: {lat}, {lon}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.common_name)?;
        writeln!(f)?;
        writeln!(f, "- Scientific name: *{}*", self.scientific_name)?;
        writeln!(f, "- Family: {}", self.family)
    }
}

impl fmt::Display for Analyst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.full_name())?;
        if let Some(contact) = &self.contact {
            writeln!(f)?;
            writeln!(f, "- Contact: {contact}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.registration_number {
            Some(number) => writeln!(f, "# {}. Sample {number}", self.id)?,
            None => writeln!(f, "# {}. Sample", self.id)?,
        }
        writeln!(f)?;
        writeln!(f, "- Analyst: {}", self.analyst_id)?;
        writeln!(f, "- Extracted: {}", self.extracted_on)?;
        match self.analyzed_on {
            Some(date) => writeln!(f, "- Analyzed: {date}")?,
            None => writeln!(f, "- Analyzed: pending")?,
        }
        if let Some(observations) = &self.observations {
            writeln!(f)?;
            writeln!(f, "{observations}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Analysis of {}", self.id())?;
        writeln!(f)?;
        writeln!(f, "- Grains: {}", self.grain_count)?;
        if let Some(mark) = &self.mark {
            writeln!(f, "- Mark: {mark}")?;
        }
        if let Some(percentage) = self.percentage {
            writeln!(f, "- Percentage: {percentage:.1}%")?;
        }
        Ok(())
    }
}

impl fmt::Display for Drum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. Drum {}", self.id, self.registration_number)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_pending_sample_display() {
        let sample = Sample {
            id: 3,
            analyst_id: 1,
            extracted_on: date(2024, 3, 1),
            analyzed_on: None,
            registration_number: Some("M-003".to_string()),
            observations: Some("Dark honey".to_string()),
        };
        let output = sample.to_string();
        assert!(output.starts_with("# 3. Sample M-003"));
        assert!(output.contains("- Extracted: 2024-03-01"));
        assert!(output.contains("- Analyzed: pending"));
        assert!(output.contains("Dark honey"));
    }

    #[test]
    fn test_apiary_without_coordinates() {
        let apiary = Apiary {
            id: 1,
            beekeeper_id: 1,
            name: "Los Álamos".to_string(),
            hive_count: 10,
            locality: "Tandil".to_string(),
            latitude: Some(-37.3),
            longitude: None,
        };
        let output = apiary.to_string();
        assert!(output.contains("- Hives: 10"));
        assert!(!output.contains("Coordinates"));
    }
}
