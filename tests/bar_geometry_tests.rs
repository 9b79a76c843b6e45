use approx::assert_abs_diff_eq;
use dashchart::core::{Canvas, project_bar_rects};
use dashchart::error::ChartError;

#[test]
fn bars_match_reference_dashboard_data() {
    let bars = project_bar_rects(&[20.0, 30.0, 60.0, 95.0], Canvas::default()).expect("project");
    assert_eq!(bars.len(), 4);

    let expected = [
        (0.0, 80.0, 20.0),
        (25.0, 70.0, 30.0),
        (50.0, 40.0, 60.0),
        (75.0, 5.0, 95.0),
    ];
    for (bar, (x, y, height)) in bars.iter().zip(expected) {
        assert_abs_diff_eq!(bar.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(bar.y, y, epsilon = 1e-9);
        assert_abs_diff_eq!(bar.width, 25.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bar.height, height, epsilon = 1e-9);
    }
}

#[test]
fn bar_width_is_floored() {
    // 100 / 3 floors to 33; the remainder stays undrawn at the right edge.
    let bars = project_bar_rects(&[10.0, 10.0, 10.0], Canvas::default()).expect("project");
    for (index, bar) in bars.iter().enumerate() {
        assert_abs_diff_eq!(bar.width, 33.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bar.x, index as f64 * 33.0, epsilon = 1e-9);
    }
}

#[test]
fn empty_magnitudes_yield_no_bars() {
    let bars = project_bar_rects(&[], Canvas::default()).expect("project");
    assert!(bars.is_empty());
}

#[test]
fn bars_share_the_bottom_baseline() {
    let canvas = Canvas::new(120.0, 60.0);
    let bars = project_bar_rects(&[5.0, 45.0, 0.0], canvas).expect("project");
    for bar in &bars {
        assert_abs_diff_eq!(bar.y + bar.height, 60.0, epsilon = 1e-9);
    }
}

#[test]
fn overflowing_magnitude_is_not_clamped() {
    let bars = project_bar_rects(&[130.0], Canvas::default()).expect("project");
    assert_abs_diff_eq!(bars[0].y, -30.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[0].height, 130.0, epsilon = 1e-9);
}

#[test]
fn zero_magnitude_produces_a_zero_height_bar() {
    let bars = project_bar_rects(&[0.0, 50.0], Canvas::default()).expect("project");
    assert_abs_diff_eq!(bars[0].height, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[0].y, 100.0, epsilon = 1e-9);
}

#[test]
fn negative_magnitudes_are_rejected() {
    let result = project_bar_rects(&[10.0, -1.0], Canvas::default());
    assert!(matches!(result, Err(ChartError::InvalidInput(_))));
}

#[test]
fn invalid_canvas_is_rejected() {
    let result = project_bar_rects(&[10.0], Canvas::new(0.0, 100.0));
    assert!(matches!(result, Err(ChartError::InvalidCanvas { .. })));
}
