//! Unit conversion utilities
//!
//! Handles conversion between Metric (mm) and Imperial (inch) systems for
//! report output. Layout math is always carried out in millimeters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl Default for MeasurementSystem {
    fn default() -> Self {
        Self::Metric
    }
}

impl MeasurementSystem {
    /// Unit suffix used in report output.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Metric => "mm",
            Self::Imperial => "in",
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Format length value for display
///
/// * `value_mm` - Value in millimeters
/// * `system` - Target measurement system
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => {
            format!("{:.3}", value_mm)
        }
        MeasurementSystem::Imperial => {
            let inches = value_mm / 25.4;
            format!("{:.3}", inches)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_length_metric() {
        assert_eq!(format_length(80.0, MeasurementSystem::Metric), "80.000");
        assert_eq!(format_length(9.7561, MeasurementSystem::Metric), "9.756");
    }

    #[test]
    fn test_format_length_imperial() {
        assert_eq!(format_length(25.4, MeasurementSystem::Imperial), "1.000");
    }

    #[test]
    fn test_parse_measurement_system() {
        assert_eq!(
            "metric".parse::<MeasurementSystem>().unwrap(),
            MeasurementSystem::Metric
        );
        assert_eq!(
            "in".parse::<MeasurementSystem>().unwrap(),
            MeasurementSystem::Imperial
        );
        assert!("furlong".parse::<MeasurementSystem>().is_err());
    }
}
