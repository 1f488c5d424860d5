//! Trapezoid panel layout solver.
//!
//! Lays a row of posts across a panel whose bottom edge slopes linearly
//! between two measured edge heights. Posts bracket every gap, so a layout
//! with `n` gaps carries `n + 1` posts, the first flush with the left edge
//! and the last flush with the right.

use panelkit_core::{point_on_slope, slope_scale, LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::profile::{solve_layout, SlopeProfile, Tiling};
use crate::types::{LayoutSummary, PanelLayout, SlopeDirection};

/// Absolute tolerance for the base-line constraint (mm).
const BASE_TOLERANCE: f64 = 1e-6;

/// Tolerance for the single-post exact-fill feasibility check (mm).
const EXACT_FILL_TOLERANCE: f64 = 1e-9;

/// Parameters for the trapezoid layout solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrapezoidParameters {
    /// Horizontal span along the base axis (mm).
    pub span: f64,
    /// Panel height at the left edge (mm).
    pub left_height: f64,
    /// Panel height at the right edge (mm).
    pub right_height: f64,
    /// Number of gaps between posts. Posts number one more.
    pub gaps: u32,
    /// Post thickness measured along the base axis (mm).
    pub post_width: f64,
    /// Gap width along the base axis (mm). Leave `None` to derive it.
    pub gap_width: Option<f64>,
}

impl Default for TrapezoidParameters {
    fn default() -> Self {
        Self {
            span: 8200.0,
            left_height: 1000.0,
            right_height: 600.0,
            gaps: 10,
            post_width: 40.0,
            gap_width: None,
        }
    }
}

struct TrapezoidProfile {
    span: f64,
    left_height: f64,
    right_height: f64,
}

impl SlopeProfile for TrapezoidProfile {
    fn span(&self) -> f64 {
        self.span
    }

    fn height_at(&self, x: f64) -> f64 {
        point_on_slope(x, self.span, self.left_height, self.right_height).y
    }

    fn slope_length(&self) -> f64 {
        self.project(self.span)
    }

    fn project(&self, dx: f64) -> f64 {
        dx * slope_scale(self.span, self.left_height, self.right_height)
    }
}

/// Solver for trapezoid panel layouts.
pub struct TrapezoidLayoutSolver {
    params: TrapezoidParameters,
}

impl TrapezoidLayoutSolver {
    /// Create a new solver with the given parameters.
    pub fn new(params: TrapezoidParameters) -> Self {
        Self { params }
    }

    /// Solve the layout: derive the gap width, verify both geometric
    /// constraints, and emit the per-post and per-gap records.
    pub fn solve(&self) -> LayoutResult<PanelLayout> {
        let p = &self.params;
        require_positive("span", p.span)?;
        require_positive("left_height", p.left_height)?;
        require_positive("right_height", p.right_height)?;
        require_positive("post_width", p.post_width)?;

        let a = p.span;
        let n = p.gaps;
        let m = n + 1;
        let s = p.post_width;
        debug!(span = a, gaps = n, posts = m, "solving trapezoid layout");

        let x = if n == 0 {
            // A lone post must fill the span exactly; the gap width has
            // nothing to describe and is pinned to zero.
            if (a - s).abs() > EXACT_FILL_TOLERANCE {
                return Err(LayoutError::infeasible(format!(
                    "a single post of {s} mm cannot exactly fill a {a} mm span"
                )));
            }
            0.0
        } else {
            let x = match p.gap_width {
                Some(x) => x,
                None => (a - f64::from(m) * s) / f64::from(n),
            };
            if x < 0.0 {
                return Err(LayoutError::infeasible(format!(
                    "{m} posts of {s} mm leave a negative gap of {x:.3} mm on a {a} mm span"
                )));
            }
            x
        };

        let profile = TrapezoidProfile {
            span: a,
            left_height: p.left_height,
            right_height: p.right_height,
        };
        let tiling = Tiling {
            slat_count: m,
            gap_count: n,
            slat_width: s,
            gap_width: x,
            base_tolerance: BASE_TOLERANCE,
            oblique_tops: false,
        };
        let (slats, gaps, figures) = solve_layout(&profile, &tiling)?;

        let delta = p.right_height - p.left_height;
        let notice = match slats.last() {
            Some(last) if slats.len() == m as usize && (a - last.right).abs() <= BASE_TOLERANCE => {
                None
            }
            Some(last) => Some(format!(
                "posts stop {:.3} mm short of the right edge",
                a - last.right
            )),
            None => Some("no post fits inside the span".to_string()),
        };
        if let Some(notice) = &notice {
            warn!(notice = %notice, "trapezoid layout solved with a tiling shortfall");
        }

        let summary = LayoutSummary {
            span: a,
            slat_width: s,
            gap_width: x,
            slat_count: m,
            gap_count: n,
            left_height: p.left_height,
            right_height: p.right_height,
            slope_length: profile.slope_length(),
            computed_slope_length: profile.slope_length(),
            slat_width_on_slope: figures.slat_width_on_slope,
            gap_width_on_slope: figures.gap_width_on_slope,
            base_total: figures.base_total,
            slope_total: figures.slope_total,
            slope_angle_deg: delta.abs().atan2(a).to_degrees(),
            direction: SlopeDirection::from_delta(delta),
            notice,
        };
        Ok(PanelLayout {
            slats,
            gaps,
            summary,
        })
    }
}

/// Solves a trapezoid layout in one call.
pub fn solve_trapezoid(params: TrapezoidParameters) -> LayoutResult<PanelLayout> {
    TrapezoidLayoutSolver::new(params).solve()
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
