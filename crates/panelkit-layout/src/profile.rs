//! Shared solve pipeline for the two panel variants.
//!
//! Both solvers run the same sequence: validate the base-line constraint,
//! project the widths onto the slope edge, validate the slope-line
//! constraint, then emit per-slat and per-gap records left to right. The
//! panel-specific geometry enters through [`SlopeProfile`].

use panelkit_core::{LayoutError, LayoutResult};
use tracing::debug;

use crate::types::{Gap, Slat};

/// Absolute tolerance for the slope-line cross-check (mm).
pub const SLOPE_TOLERANCE: f64 = 1e-6;

/// Float overshoot allowed past the span before emission stops (mm).
const OVERSHOOT_GUARD: f64 = 1e-9;

/// Geometry of one panel variant as seen by the solve pipeline.
pub trait SlopeProfile {
    /// Overall span along the base axis.
    fn span(&self) -> f64;

    /// Perpendicular panel height at base position `x`.
    fn height_at(&self, x: f64) -> f64;

    /// Total length of the slope edge used for projection.
    fn slope_length(&self) -> f64;

    /// Projects a base-axis delta onto the slope edge.
    fn project(&self, dx: f64) -> f64;
}

/// Tiling counts and widths handed to the pipeline by a solver.
pub(crate) struct Tiling {
    pub slat_count: u32,
    pub gap_count: u32,
    pub slat_width: f64,
    pub gap_width: f64,
    /// Absolute tolerance for the base-line constraint (mm).
    pub base_tolerance: f64,
    /// Whether slats carry a slanted top edge worth measuring.
    pub oblique_tops: bool,
}

/// Projected widths and constraint totals computed by the pipeline.
#[derive(Debug)]
pub(crate) struct SlopeFigures {
    pub slat_width_on_slope: f64,
    pub gap_width_on_slope: f64,
    pub base_total: f64,
    pub slope_total: f64,
}

/// Runs the shared pipeline: constraint checks, projection, emission.
///
/// A gap is emitted after slat `k` while `k` is below the gap count, so a
/// gap count equal to the slat count trails every slat (triangle panels)
/// and a gap count one short only fills the space between neighbors
/// (trapezoid posts).
pub(crate) fn solve_layout<P: SlopeProfile>(
    profile: &P,
    tiling: &Tiling,
) -> LayoutResult<(Vec<Slat>, Vec<Gap>, SlopeFigures)> {
    let span = profile.span();
    let m = f64::from(tiling.slat_count);
    let g = f64::from(tiling.gap_count);
    let s = tiling.slat_width;
    let x = tiling.gap_width;

    let base_total = m * s + g * x;
    if (base_total - span).abs() > tiling.base_tolerance {
        return Err(LayoutError::ConstraintViolation {
            check: "base length".to_string(),
            expected: span,
            actual: base_total,
            tolerance: tiling.base_tolerance,
        });
    }

    let slat_width_on_slope = profile.project(s);
    let gap_width_on_slope = profile.project(x);
    let slope_total = m * slat_width_on_slope + g * gap_width_on_slope;
    if (slope_total - profile.slope_length()).abs() > SLOPE_TOLERANCE {
        return Err(LayoutError::ConstraintViolation {
            check: "slope length".to_string(),
            expected: profile.slope_length(),
            actual: slope_total,
            tolerance: SLOPE_TOLERANCE,
        });
    }

    let pitch = s + x;
    let mut slats = Vec::with_capacity(tiling.slat_count as usize);
    let mut gaps = Vec::with_capacity(tiling.gap_count as usize);
    for k in 0..tiling.slat_count {
        let left = f64::from(k) * pitch;
        let right = left + s;
        if right > span + OVERSHOOT_GUARD {
            debug!(
                index = k + 1,
                right, span, "slat overshoots the span, stopping emission"
            );
            break;
        }
        let left_height = profile.height_at(left);
        let right_height = profile.height_at(right);
        slats.push(Slat {
            index: k + 1,
            left,
            right,
            left_height,
            right_height,
            top_length: tiling
                .oblique_tops
                .then(|| s.hypot(left_height - right_height)),
        });
        if k < tiling.gap_count {
            gaps.push(Gap {
                index: k + 1,
                left: right,
                right: right + x,
            });
        }
    }
    debug!(
        slats = slats.len(),
        gaps = gaps.len(),
        "emitted layout records"
    );

    Ok((
        slats,
        gaps,
        SlopeFigures {
            slat_width_on_slope,
            gap_width_on_slope,
            base_total,
            slope_total,
        },
    ))
}
