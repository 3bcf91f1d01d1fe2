use super::*;

#[test]
fn breach_label_maps_every_series_key() {
    assert_eq!(breach_label("speedBreach"), "Hız ihlali");
    assert_eq!(breach_label("areaBreach"), "Bölge ihlali");
    assert_eq!(breach_label("jobBreach"), "Dökme ihlali");
    assert_eq!(breach_label("other"), "Diğer");
    for series in BREACH_SERIES {
        assert!(!breach_label(series.key).is_empty(), "{} has no label", series.key);
    }
}

#[test]
fn breach_label_unknown_key_is_empty() {
    assert_eq!(breach_label("fuel"), "");
}

#[test]
fn breach_row_value_reads_each_series() {
    let row = STACKED_BAR_DATA[0];
    let sum: f64 = BREACH_SERIES.iter().map(|s| row.value(s.key)).sum();
    assert!((sum - row.total()).abs() < f64::EPSILON);
    assert!(row.value("unknown").abs() < f64::EPSILON);
}

#[test]
fn speed_data_has_points_on_both_sides_of_threshold() {
    assert!(PERSONNEL_DATA_LINE.iter().any(|p| p.value > 100.0));
    assert!(PERSONNEL_DATA_LINE.iter().any(|p| p.value <= 100.0));
}

#[test]
fn cycle_color_wraps_palette() {
    assert_eq!(cycle_color(PERSONNEL_DOUGHNUT_COLORS, 0), "#59CBEB");
    assert_eq!(cycle_color(PERSONNEL_DOUGHNUT_COLORS, 3), "#E44B5D");
    assert_eq!(cycle_color(&[], 3), "#999999");
}

#[test]
fn legend_colours_follow_series_labels() {
    let legend: Vec<_> = BREACH_SERIES.iter().map(|s| (s.color, breach_label(s.key))).collect();
    assert_eq!(
        legend,
        vec![
            ("#EA6C4C", "Hız ihlali"),
            ("#6074DD", "Dökme ihlali"),
            ("#59CBEB", "Bölge ihlali"),
            ("#E44B5D", "Diğer"),
        ]
    );
}
