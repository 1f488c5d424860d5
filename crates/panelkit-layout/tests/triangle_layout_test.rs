use panelkit_core::LayoutError;
use panelkit_layout::{solve_triangle, TriangleParameters};

fn workshop_panel() -> TriangleParameters {
    TriangleParameters {
        base: 8200.0,
        rise: 1000.0,
        hypotenuse: None,
        pairs: 10,
        slat_width: 80.0,
        gap_width: None,
    }
}

#[test]
fn test_even_spacing_scenario() {
    let layout = solve_triangle(workshop_panel()).unwrap();
    let summary = &layout.summary;

    // x = 8200 / 10 - 80
    assert!((summary.gap_width - 740.0).abs() < 1e-9);
    assert!((summary.base_total - 8200.0).abs() < 1e-9);

    let computed = 8200.0_f64.hypot(1000.0);
    assert!((summary.slope_length - computed).abs() < 1e-9);
    assert!((summary.computed_slope_length - computed).abs() < 1e-9);
    assert!((summary.slat_width_on_slope - 80.0 * computed / 8200.0).abs() < 1e-9);
    assert!((summary.gap_width_on_slope - 740.0 * computed / 8200.0).abs() < 1e-9);
    assert!((summary.slope_total - computed).abs() < 1e-6);
    assert!(summary.notice.is_none());
}

#[test]
fn test_positions_monotone_and_bounded() {
    let layout = solve_triangle(workshop_panel()).unwrap();
    let mut cursor = 0.0;
    for (slat, gap) in layout.slats.iter().zip(&layout.gaps) {
        assert!(slat.left >= cursor - 1e-9);
        assert!(slat.right > slat.left);
        assert_eq!(gap.left, slat.right);
        assert!(gap.right <= 8200.0 + 1e-9);
        cursor = gap.right;
    }
    // the final gap closes the base exactly
    assert!((layout.gaps.last().unwrap().right - 8200.0).abs() < 1e-9);
}

#[test]
fn test_negative_gap_is_infeasible() {
    let params = TriangleParameters {
        base: 400.0,
        rise: 300.0,
        hypotenuse: None,
        pairs: 5,
        slat_width: 100.0,
        gap_width: None,
    };
    let err = solve_triangle(params).unwrap_err();
    assert!(matches!(err, LayoutError::Infeasible { .. }));
}

#[test]
fn test_supplied_hypotenuse_stays_authoritative() {
    let params = TriangleParameters {
        hypotenuse: Some(8300.0),
        ..workshop_panel()
    };
    let layout = solve_triangle(params).unwrap();
    let summary = &layout.summary;

    // solve succeeds, the discrepancy is only a notice
    assert!(summary.notice.as_deref().unwrap().contains("8300.000"));
    assert_eq!(summary.slope_length, 8300.0);
    assert!((summary.computed_slope_length - 8200.0_f64.hypot(1000.0)).abs() < 1e-9);
    // projections scale with the supplied value
    assert!((summary.slat_width_on_slope - 80.0 * 8300.0 / 8200.0).abs() < 1e-9);
    assert!((summary.slope_total - 8300.0).abs() < 1e-6);
}

#[test]
fn test_matching_hypotenuse_raises_no_notice() {
    let params = TriangleParameters {
        hypotenuse: Some(8200.0_f64.hypot(1000.0)),
        ..workshop_panel()
    };
    let layout = solve_triangle(params).unwrap();
    assert!(layout.summary.notice.is_none());
}

#[test]
fn test_explicit_gap_width_must_tile_the_base() {
    let good = TriangleParameters {
        gap_width: Some(740.0),
        ..workshop_panel()
    };
    assert!(solve_triangle(good).is_ok());

    let bad = TriangleParameters {
        gap_width: Some(700.0),
        ..workshop_panel()
    };
    let err = solve_triangle(bad).unwrap_err();
    assert!(matches!(
        err,
        LayoutError::ConstraintViolation { ref check, .. } if check == "base length"
    ));
}

#[test]
fn test_identical_inputs_identical_outputs() {
    let first = solve_triangle(workshop_panel()).unwrap();
    let second = solve_triangle(workshop_panel()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_layout_serializes_for_downstream() {
    let layout = solve_triangle(workshop_panel()).unwrap();
    let json = serde_json::to_value(&layout).unwrap();

    assert!(json["summary"]["slope_angle_deg"].is_number());
    assert!(json["summary"]["direction"].is_string());
    assert_eq!(json["slats"][0]["index"], 1);
    assert!(json["slats"][0]["top_length"].is_number());
    assert!(json["gaps"][9]["right"].is_number());
}
