//! Triangle panel layout solver.
//!
//! Lays a row of equal slats with equal gaps across a right-triangle
//! panel: the base runs along the horizontal top edge, the vertical leg
//! stands at the left, and the hypotenuse closes the panel from the top of
//! that leg down to the far end of the base. Slat heights measure the
//! vertical drop from the base line to the hypotenuse.

use panelkit_core::{drop_at, project_onto_slope, LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::profile::{solve_layout, SlopeProfile, Tiling};
use crate::types::{LayoutSummary, PanelLayout, SlopeDirection};

/// Absolute tolerance for the base-line constraint (mm).
const BASE_TOLERANCE: f64 = 1e-9;

/// Tolerance before a supplied hypotenuse is flagged as discrepant (mm).
const HYPOTENUSE_TOLERANCE: f64 = 1e-6;

/// Parameters for the triangle layout solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleParameters {
    /// Horizontal leg: the span along the base axis (mm).
    pub base: f64,
    /// Vertical leg at the left edge of the panel (mm).
    pub rise: f64,
    /// Measured hypotenuse (mm). Leave `None` to use the computed value.
    pub hypotenuse: Option<f64>,
    /// Number of slat/gap pairs tiling the base.
    pub pairs: u32,
    /// Slat width measured along the base axis (mm).
    pub slat_width: f64,
    /// Gap width along the base axis (mm). Leave `None` to derive it.
    pub gap_width: Option<f64>,
}

impl Default for TriangleParameters {
    fn default() -> Self {
        Self {
            base: 8200.0,
            rise: 1000.0,
            hypotenuse: None,
            pairs: 10,
            slat_width: 80.0,
            gap_width: None,
        }
    }
}

struct TriangleProfile {
    base: f64,
    rise: f64,
    /// Slope length used for projection; stays the caller-supplied value
    /// even when it disagrees with the computed one.
    hypotenuse: f64,
}

impl SlopeProfile for TriangleProfile {
    fn span(&self) -> f64 {
        self.base
    }

    fn height_at(&self, x: f64) -> f64 {
        drop_at(x, self.base, self.rise)
    }

    fn slope_length(&self) -> f64 {
        self.hypotenuse
    }

    fn project(&self, dx: f64) -> f64 {
        project_onto_slope(dx, self.base, self.hypotenuse)
    }
}

/// Solver for triangle panel layouts.
pub struct TriangleLayoutSolver {
    params: TriangleParameters,
}

impl TriangleLayoutSolver {
    /// Create a new solver with the given parameters.
    pub fn new(params: TriangleParameters) -> Self {
        Self { params }
    }

    /// Solve the layout: derive the gap width, verify both geometric
    /// constraints, and emit the per-slat and per-gap records.
    pub fn solve(&self) -> LayoutResult<PanelLayout> {
        let p = &self.params;
        if p.pairs < 1 {
            return Err(LayoutError::invalid(
                "pairs",
                "need at least one slat/gap pair",
            ));
        }
        require_positive("base", p.base)?;
        require_positive("rise", p.rise)?;
        require_positive("slat_width", p.slat_width)?;

        let a = p.base;
        let b = p.rise;
        let m = p.pairs;
        let s = p.slat_width;
        debug!(base = a, rise = b, pairs = m, "solving triangle layout");

        let computed = a.hypot(b);
        let mut notice = None;
        let c = match p.hypotenuse {
            Some(supplied) => {
                if (supplied - computed).abs() > HYPOTENUSE_TOLERANCE {
                    warn!(
                        supplied,
                        computed, "supplied hypotenuse disagrees with computed value"
                    );
                    notice = Some(format!(
                        "supplied hypotenuse {supplied:.3} mm differs from computed \
                         {computed:.3} mm; projections use the supplied value"
                    ));
                }
                supplied
            }
            None => computed,
        };

        let x = match p.gap_width {
            Some(x) => x,
            None => a / f64::from(m) - s,
        };
        if x < 0.0 {
            return Err(LayoutError::infeasible(format!(
                "{m} slats of {s} mm leave a negative gap of {x:.3} mm on a {a} mm base"
            )));
        }

        let profile = TriangleProfile {
            base: a,
            rise: b,
            hypotenuse: c,
        };
        let tiling = Tiling {
            slat_count: m,
            gap_count: m,
            slat_width: s,
            gap_width: x,
            base_tolerance: BASE_TOLERANCE,
            oblique_tops: true,
        };
        let (slats, gaps, figures) = solve_layout(&profile, &tiling)?;

        let summary = LayoutSummary {
            span: a,
            slat_width: s,
            gap_width: x,
            slat_count: m,
            gap_count: m,
            left_height: b,
            right_height: 0.0,
            slope_length: c,
            computed_slope_length: computed,
            slat_width_on_slope: figures.slat_width_on_slope,
            gap_width_on_slope: figures.gap_width_on_slope,
            base_total: figures.base_total,
            slope_total: figures.slope_total,
            slope_angle_deg: b.atan2(a).to_degrees(),
            direction: SlopeDirection::from_delta(-b),
            notice,
        };
        Ok(PanelLayout {
            slats,
            gaps,
            summary,
        })
    }
}

/// Solves a triangle layout in one call.
pub fn solve_triangle(params: TriangleParameters) -> LayoutResult<PanelLayout> {
    TriangleLayoutSolver::new(params).solve()
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
