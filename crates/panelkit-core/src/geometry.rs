//! Plane-geometry helpers shared across PanelKit.
//!
//! Everything in this module is a pure function over finite real inputs.
//! The layout solvers use the projection helpers; the drop/point helpers
//! and label-angle normalization exist for downstream diagram consumers.

use serde::{Deserialize, Serialize};

/// A point in the panel plane, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Returns the point of a sloped edge at base position `x`.
///
/// The edge runs linearly from `(0, left_height)` to `(span, right_height)`.
pub fn point_on_slope(x: f64, span: f64, left_height: f64, right_height: f64) -> Point {
    debug_assert!(
        span.is_finite() && span > 0.0,
        "span must be positive and finite, got {span}"
    );
    let t = x / span;
    Point::new(x, left_height + (right_height - left_height) * t)
}

/// Vertical drop from a horizontal reference edge to a similarity slope at
/// base position `x`.
///
/// The slope starts at `reference_height` over `x = 0` and reaches the base
/// line at `x = span`, so the drop is `reference_height * (1 - x / span)`.
pub fn drop_at(x: f64, span: f64, reference_height: f64) -> f64 {
    debug_assert!(
        span.is_finite() && span > 0.0,
        "span must be positive and finite, got {span}"
    );
    reference_height * (1.0 - x / span)
}

/// Projects a base-axis delta onto a slope of total length `slope_length`
/// over a horizontal run of `run`.
pub fn project_onto_slope(dx: f64, run: f64, slope_length: f64) -> f64 {
    debug_assert!(
        run.is_finite() && run > 0.0,
        "run must be positive and finite, got {run}"
    );
    dx * (slope_length / run)
}

/// Length of one unit of base axis measured along the sloped edge from
/// `(0, left_height)` to `(span, right_height)`.
pub fn slope_scale(span: f64, left_height: f64, right_height: f64) -> f64 {
    debug_assert!(
        span.is_finite() && span > 0.0,
        "span must be positive and finite, got {span}"
    );
    1.0_f64.hypot((right_height - left_height) / span)
}

/// Folds a label angle into the readable range [-90, 90] degrees by
/// shifting in whole half-turns.
pub fn normalize_label_angle(degrees: f64) -> f64 {
    let mut angle = degrees;
    while angle > 90.0 {
        angle -= 180.0;
    }
    while angle < -90.0 {
        angle += 180.0;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_on_slope_interpolates() {
        let p = point_on_slope(4100.0, 8200.0, 1000.0, 600.0);
        assert_eq!(p.x, 4100.0);
        assert!((p.y - 800.0).abs() < 1e-9);
    }

    #[test]
    fn test_drop_at_endpoints() {
        assert!((drop_at(0.0, 8200.0, 1000.0) - 1000.0).abs() < 1e-9);
        assert!(drop_at(8200.0, 8200.0, 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_onto_slope_scales_linearly() {
        let projected = project_onto_slope(80.0, 8200.0, 8200.0_f64.hypot(1000.0));
        assert!((projected - 80.59269).abs() < 1e-4);
    }

    #[test]
    fn test_slope_scale_flat_edge() {
        assert!((slope_scale(100.0, 50.0, 50.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_label_angle() {
        assert_eq!(normalize_label_angle(45.0), 45.0);
        assert_eq!(normalize_label_angle(135.0), -45.0);
        assert_eq!(normalize_label_angle(-135.0), 45.0);
        assert_eq!(normalize_label_angle(270.0), 90.0);
        assert_eq!(normalize_label_angle(-90.0), -90.0);
    }
}
