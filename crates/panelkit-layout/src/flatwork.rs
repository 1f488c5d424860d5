//! Flat-work shop calculators.
//!
//! Closed-form companions to the layout solvers: the developed (unfolded)
//! length of a U-folded sheet part, and the stringer length and cut angles
//! of a straight stair run.

use panelkit_core::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};

/// Parameters for a folded sheet development.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetDevelopment {
    /// Outside length of the folded part (mm).
    pub outer_length: f64,
    /// Height of each folded side (mm).
    pub side_height: f64,
    /// Sheet thickness (mm).
    pub thickness: f64,
}

impl Default for SheetDevelopment {
    fn default() -> Self {
        Self {
            outer_length: 1000.0,
            side_height: 200.0,
            thickness: 2.0,
        }
    }
}

/// Developed lengths of a folded sheet part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetDevelopmentResult {
    /// Flat length measured on the outside of the folds (mm).
    pub outer_path: f64,
    /// Flat length measured on the inside of the folds (mm).
    pub inner_path: f64,
}

impl SheetDevelopment {
    /// Computes the developed lengths, two bend deductions per side.
    pub fn develop(&self) -> LayoutResult<SheetDevelopmentResult> {
        require_positive("outer_length", self.outer_length)?;
        require_positive("side_height", self.side_height)?;
        require_positive("thickness", self.thickness)?;
        let folded = self.outer_length + 2.0 * self.side_height;
        Ok(SheetDevelopmentResult {
            outer_path: folded - 4.0 * self.thickness,
            inner_path: folded + 4.0 * self.thickness,
        })
    }
}

/// Parameters for a straight stair run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StairRun {
    /// Horizontal run of one tread (mm).
    pub run: f64,
    /// Vertical rise of one tread (mm).
    pub rise: f64,
    /// Number of treads in the run.
    pub treads: u32,
}

impl Default for StairRun {
    fn default() -> Self {
        Self {
            run: 250.0,
            rise: 180.0,
            treads: 12,
        }
    }
}

/// Solved stair run figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StairRunResult {
    /// Diagonal of a single tread (mm).
    pub tread_diagonal: f64,
    /// Total stringer length over all treads (mm).
    pub stringer_length: f64,
    /// Angle between stringer and the horizontal, degrees.
    pub inner_angle_deg: f64,
    /// Complement of the inner angle, degrees.
    pub outer_angle_deg: f64,
}

impl StairRun {
    /// Computes stringer length and cut angles.
    pub fn solve(&self) -> LayoutResult<StairRunResult> {
        require_positive("run", self.run)?;
        require_positive("rise", self.rise)?;
        if self.treads < 1 {
            return Err(LayoutError::invalid("treads", "need at least one tread"));
        }
        let diagonal = self.run.hypot(self.rise);
        let inner = (self.run / diagonal).acos().to_degrees();
        Ok(StairRunResult {
            tread_diagonal: diagonal,
            stringer_length: f64::from(self.treads) * diagonal,
            inner_angle_deg: inner,
            outer_angle_deg: 90.0 - inner,
        })
    }
}

fn require_positive(name: &str, value: f64) -> LayoutResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LayoutError::invalid(
            name,
            format!("must be positive, got {value}"),
        ));
    }
    Ok(())
}
