//! Plain-text cutting list generation.
//!
//! Turns a solved [`PanelLayout`] into a commented text report the shop can
//! print or paste into a job sheet. The caller owns the returned string;
//! no file I/O happens here.

use anyhow::Result;
use panelkit_core::{format_length, MeasurementSystem};

use crate::types::PanelLayout;

/// Generator for cutting-list text reports.
pub struct CutListGenerator {
    layout: PanelLayout,
    system: MeasurementSystem,
}

impl CutListGenerator {
    /// Create a new generator for the given layout.
    pub fn new(layout: PanelLayout, system: MeasurementSystem) -> Self {
        Self { layout, system }
    }

    /// Generate the cutting-list text.
    pub fn generate(&self) -> Result<String> {
        let mut report = String::new();
        let summary = &self.layout.summary;
        let unit = self.system.suffix();
        let fmt = |v: f64| format_length(v, self.system);

        report.push_str("; Panel Cutting List\n");
        report.push_str(&format!("; Span: {} {unit}\n", fmt(summary.span)));
        report.push_str(&format!(
            "; Edge heights: {} / {} {unit}\n",
            fmt(summary.left_height),
            fmt(summary.right_height)
        ));
        report.push_str(&format!(
            "; Slats: {} x {} {unit} ({} {unit} on slope)\n",
            summary.slat_count,
            fmt(summary.slat_width),
            fmt(summary.slat_width_on_slope)
        ));
        report.push_str(&format!(
            "; Gaps: {} x {} {unit} ({} {unit} on slope)\n",
            summary.gap_count,
            fmt(summary.gap_width),
            fmt(summary.gap_width_on_slope)
        ));
        report.push_str(&format!(
            "; Slope edge: {} {unit} at {:.3} deg, {}\n",
            fmt(summary.slope_length),
            summary.slope_angle_deg,
            summary.direction.name()
        ));
        if let Some(notice) = &summary.notice {
            report.push_str(&format!("; Note: {notice}\n"));
        }

        for slat in &self.layout.slats {
            report.push_str(&format!(
                "Slat {:>3}: {} .. {}  heights {} / {}",
                slat.index,
                fmt(slat.left),
                fmt(slat.right),
                fmt(slat.left_height),
                fmt(slat.right_height)
            ));
            if let Some(top) = slat.top_length {
                report.push_str(&format!("  top {}", fmt(top)));
            }
            report.push('\n');
        }
        for gap in &self.layout.gaps {
            report.push_str(&format!(
                "Gap  {:>3}: {} .. {}\n",
                gap.index,
                fmt(gap.left),
                fmt(gap.right)
            ));
        }

        Ok(report)
    }
}
