//! Record types exchanged between the layout solvers and their consumers.

use serde::{Deserialize, Serialize};

/// Which way the slope edge runs, read left to right.
///
/// Reported separately from the slope angle, which is always a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlopeDirection {
    /// The edge drops toward the right (left height above right height).
    DescendsRight,
    /// The edge climbs toward the right.
    AscendsRight,
    /// Both edge heights are equal.
    Flat,
}

impl SlopeDirection {
    /// Classifies the direction from `right_height - left_height`.
    pub fn from_delta(delta: f64) -> Self {
        if delta < 0.0 {
            SlopeDirection::DescendsRight
        } else if delta > 0.0 {
            SlopeDirection::AscendsRight
        } else {
            SlopeDirection::Flat
        }
    }

    /// Returns a human-readable name of the direction.
    pub fn name(&self) -> &'static str {
        match self {
            SlopeDirection::DescendsRight => "descends to the right",
            SlopeDirection::AscendsRight => "ascends to the right",
            SlopeDirection::Flat => "flat",
        }
    }
}

/// One solid slat (or post) placed across the panel.
///
/// Positions run along the base axis; heights are measured perpendicular to
/// it at each end of the slat. All values in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slat {
    /// 1-based placement order, left to right.
    pub index: u32,
    /// Left edge position along the base axis.
    pub left: f64,
    /// Right edge position along the base axis.
    pub right: f64,
    /// Perpendicular height at the left edge.
    pub left_height: f64,
    /// Perpendicular height at the right edge.
    pub right_height: f64,
    /// Oblique length of the slanted top edge. Populated by the triangle
    /// solver; `None` for trapezoid posts.
    pub top_length: Option<f64>,
}

/// Clear spacing between two consecutive slats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    /// 1-based order, left to right.
    pub index: u32,
    /// Left edge position along the base axis.
    pub left: f64,
    /// Right edge position along the base axis.
    pub right: f64,
}

/// Solved layout figures echoed back to the caller alongside the records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSummary {
    /// Overall span along the base axis.
    pub span: f64,
    /// Slat width along the base axis.
    pub slat_width: f64,
    /// Gap width along the base axis (derived or caller-supplied).
    pub gap_width: f64,
    /// Number of slats emitted by the tiling.
    pub slat_count: u32,
    /// Number of gaps emitted by the tiling.
    pub gap_count: u32,
    /// Panel height at the left edge.
    pub left_height: f64,
    /// Panel height at the right edge.
    pub right_height: f64,
    /// Slope-edge length used for projection (the supplied hypotenuse when
    /// the caller measured one).
    pub slope_length: f64,
    /// Slope-edge length computed from the panel dimensions, reported as a
    /// cross-check.
    pub computed_slope_length: f64,
    /// Slat width projected onto the slope edge.
    pub slat_width_on_slope: f64,
    /// Gap width projected onto the slope edge.
    pub gap_width_on_slope: f64,
    /// Count-weighted width total along the base; must match the span.
    pub base_total: f64,
    /// Count-weighted projected total; must match the slope length.
    pub slope_total: f64,
    /// Magnitude of the slope angle in degrees.
    pub slope_angle_deg: f64,
    /// Which way the slope runs, left to right.
    pub direction: SlopeDirection,
    /// Non-fatal observation attached to an otherwise successful solve.
    pub notice: Option<String>,
}

/// The full solver output: ordered slats, ordered gaps, and the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelLayout {
    pub slats: Vec<Slat>,
    pub gaps: Vec<Gap>,
    pub summary: LayoutSummary,
}
