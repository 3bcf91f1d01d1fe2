use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// =============================================================
// Point markers
// =============================================================

#[test]
fn point_marker_highlights_values_over_threshold() {
    assert_eq!(point_marker(101.0), PointMarker { radius: 7.0, fill: "red" });
    assert_eq!(point_marker(180.0), PointMarker { radius: 7.0, fill: "red" });
}

#[test]
fn point_marker_threshold_is_exclusive() {
    assert_eq!(point_marker(100.0), PointMarker { radius: 5.0, fill: "#66E8E2" });
    assert_eq!(point_marker(0.0), PointMarker { radius: 5.0, fill: "#66E8E2" });
}

// =============================================================
// Axis scaling
// =============================================================

#[test]
fn nice_ceiling_rounds_to_1_2_5_steps() {
    assert!(approx(nice_ceiling(7.0), 10.0));
    assert!(approx(nice_ceiling(13.0), 20.0));
    assert!(approx(nice_ceiling(42.0), 50.0));
    assert!(approx(nice_ceiling(160.0), 200.0));
    assert!(approx(nice_ceiling(500.0), 500.0));
}

#[test]
fn nice_ceiling_handles_empty_and_invalid_input() {
    assert!(approx(nice_ceiling(0.0), 1.0));
    assert!(approx(nice_ceiling(-3.0), 1.0));
    assert!(approx(nice_ceiling(f64::NAN), 1.0));
}

#[test]
fn ticks_span_zero_to_max() {
    assert_eq!(ticks(200.0, 4), vec![0.0, 50.0, 100.0, 150.0, 200.0]);
    assert_eq!(ticks(10.0, 0), vec![0.0, 10.0]);
}

#[test]
fn plot_area_y_maps_and_clamps() {
    let area = PlotArea { left: 0.0, top: 10.0, width: 100.0, height: 100.0 };
    assert!(approx(area.y(0.0, 50.0), 110.0));
    assert!(approx(area.y(50.0, 50.0), 10.0));
    assert!(approx(area.y(25.0, 50.0), 60.0));
    assert!(approx(area.y(80.0, 50.0), 10.0));
    assert!(approx(area.y(5.0, 0.0), 110.0));
}

#[test]
fn plot_area_bands_split_width_evenly() {
    let area = PlotArea { left: 40.0, top: 0.0, width: 120.0, height: 50.0 };
    assert!(approx(area.band_width(4), 30.0));
    assert!(approx(area.band_center(0, 4), 55.0));
    assert!(approx(area.band_center(3, 4), 145.0));
    assert!(approx(area.band_width(0), 120.0));
}

#[test]
fn plot_area_with_axes_leaves_label_margins() {
    let area = PlotArea::with_axes(600.0, 300.0);
    assert!(area.left > 0.0);
    assert!(area.right() < 600.0);
    assert!(area.bottom() < 300.0);
}

// =============================================================
// Stacking and paths
// =============================================================

#[test]
fn stack_accumulates_from_zero() {
    assert_eq!(stack(&[3.0, 2.0, 5.0]), vec![(0.0, 3.0), (3.0, 5.0), (5.0, 10.0)]);
}

#[test]
fn stack_treats_negative_as_empty_segment() {
    assert_eq!(stack(&[3.0, -2.0, 1.0]), vec![(0.0, 3.0), (3.0, 3.0), (3.0, 4.0)]);
}

#[test]
fn line_path_moves_then_draws() {
    assert_eq!(line_path(&[(0.0, 1.0), (2.5, 3.0), (4.0, 0.5)]), "M0.0,1.0 L2.5,3.0 L4.0,0.5");
    assert_eq!(line_path(&[]), "");
}

// =============================================================
// Pie geometry
// =============================================================

#[test]
fn slice_angles_cover_full_circle_from_top() {
    let slices = slice_angles(&[1.0, 1.0, 2.0]);
    assert_eq!(slices.len(), 3);
    assert!(approx(slices[0].0, -FRAC_PI_2));
    assert!(approx(slices[0].1 - slices[0].0, TAU / 4.0));
    assert!(approx(slices[2].1 - slices[2].0, TAU / 2.0));
    assert!(approx(slices[2].1, -FRAC_PI_2 + TAU));
}

#[test]
fn slice_angles_with_zero_total_are_empty() {
    for (start, end) in slice_angles(&[0.0, 0.0]) {
        assert!(approx(start, end));
    }
}

#[test]
fn arc_path_without_inner_radius_is_a_wedge() {
    let path = arc_path(50.0, 50.0, 0.0, 40.0, -FRAC_PI_2, 0.0);
    assert!(path.starts_with("M50.00,50.00 L50.00,10.00 A40.00,40.00 0 0 1 90.00,50.00"));
    assert!(path.ends_with('Z'));
}

#[test]
fn arc_path_with_inner_radius_is_a_ring_segment() {
    let path = arc_path(50.0, 50.0, 20.0, 40.0, -FRAC_PI_2, std::f64::consts::FRAC_PI_2);
    assert!(path.starts_with("M50.00,10.00 A40.00,40.00 0 0 1 50.00,90.00"));
    assert!(path.contains("A20.00,20.00 0 0 0 50.00,30.00"));
}

#[test]
fn arc_path_marks_large_arcs() {
    let path = arc_path(0.0, 0.0, 0.0, 10.0, 0.0, 4.0);
    assert!(path.contains(" 0 1 1 "));
}

#[test]
fn arc_path_full_circle_does_not_collapse() {
    let path = arc_path(0.0, 0.0, 5.0, 10.0, 0.0, TAU);
    assert!(path.contains(" 0 1 1 "));
    assert!(!path.contains("NaN"));
}
