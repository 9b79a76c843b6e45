use std::f64::consts::PI;

use dashchart::core::{
    AxisBounds, Canvas, PathCommand, PieRadii, SeriesPoint, project_bar_rects, project_line_path,
    project_pie_sectors,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn in_bounds_points_stay_inside_the_canvas(
        fractions in proptest::collection::vec((0.0f64..=1.0, 0.0f64..=1.0), 0..64),
        min_x in -1_000.0f64..1_000.0,
        x_span in 0.001f64..10_000.0,
        min_y in -1_000.0f64..1_000.0,
        y_span in 0.001f64..10_000.0,
    ) {
        let bounds = AxisBounds::new(min_x, min_x + x_span, min_y, min_y + y_span);
        let canvas = Canvas::new(100.0, 100.0);

        let points: Vec<SeriesPoint> = fractions
            .iter()
            .map(|(fx, fy)| SeriesPoint::new(min_x + fx * x_span, min_y + fy * y_span))
            .collect();

        let path = project_line_path(&points, bounds, canvas).expect("project");
        prop_assert_eq!(path.len(), points.len() + 1);

        let tolerance = 1e-6;
        for command in path.commands() {
            let (x, y) = command.end_point().expect("line commands have end points");
            prop_assert!((-tolerance..=canvas.width + tolerance).contains(&x));
            prop_assert!((-tolerance..=canvas.height + tolerance).contains(&y));
        }
    }

    #[test]
    fn wedge_spans_are_proportional_and_cover_the_circle(
        magnitudes in proptest::collection::vec(0.0f64..1_000.0, 1..32)
    ) {
        let total: f64 = magnitudes.iter().sum();
        prop_assume!(total > 0.0);

        let radii = PieRadii::default();
        let wedges = project_pie_sectors(&magnitudes, radii).expect("project");
        prop_assert_eq!(wedges.len(), magnitudes.len());

        let mut cumulative = 0.0;
        for (wedge, magnitude) in wedges.iter().zip(&magnitudes) {
            let start_angle = cumulative * 2.0 * PI;
            cumulative += magnitude / total;
            let end_angle = cumulative * 2.0 * PI;

            let PathCommand::LineTo { x, y } = wedge.commands()[1] else {
                panic!("expected rim line");
            };
            prop_assert!((x - radii.rx * start_angle.cos()).abs() <= 1e-9);
            prop_assert!((y + radii.ry * start_angle.sin()).abs() <= 1e-9);

            let PathCommand::ArcTo { x, y, large_arc, .. } = wedge.commands()[2] else {
                panic!("expected rim arc");
            };
            prop_assert!((x - radii.rx * end_angle.cos()).abs() <= 1e-9);
            prop_assert!((y + radii.ry * end_angle.sin()).abs() <= 1e-9);
            prop_assert_eq!(large_arc, end_angle - start_angle > PI);

            // Rim points stay on the ellipse.
            let rim = (x / radii.rx).powi(2) + (y / radii.ry).powi(2);
            prop_assert!((rim - 1.0).abs() <= 1e-9);
        }

        prop_assert!((cumulative - 1.0).abs() <= 1e-9);
    }

    #[test]
    fn bars_partition_the_canvas_left_to_right(
        magnitudes in proptest::collection::vec(0.0f64..150.0, 1..50)
    ) {
        let canvas = Canvas::default();
        let bars = project_bar_rects(&magnitudes, canvas).expect("project");
        prop_assert_eq!(bars.len(), magnitudes.len());

        let expected_width = (canvas.width / magnitudes.len() as f64).floor();
        for (index, (bar, magnitude)) in bars.iter().zip(&magnitudes).enumerate() {
            prop_assert!((bar.width - expected_width).abs() <= 1e-9);
            prop_assert!((bar.x - index as f64 * expected_width).abs() <= 1e-9);
            prop_assert!((bar.height - magnitude).abs() <= 1e-9);
            prop_assert!((bar.y + bar.height - canvas.height).abs() <= 1e-9);
        }
    }
}
