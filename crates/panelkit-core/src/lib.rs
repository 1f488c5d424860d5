//! # PanelKit Core
//!
//! Core types and utilities for PanelKit.
//! Provides the fundamental abstractions for layout errors, measurement
//! units, and the plane-geometry helpers shared by the layout solvers and
//! their downstream consumers.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{LayoutError, LayoutResult};
pub use geometry::{
    drop_at, normalize_label_angle, point_on_slope, project_onto_slope, slope_scale, Point,
};
pub use units::{format_length, MeasurementSystem};
