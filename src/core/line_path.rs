use crate::core::path::Path;
use crate::core::types::{AxisBounds, Canvas, SeriesPoint};
use crate::error::{ChartError, ChartResult};

/// Maps one data-space point into canvas space.
///
/// Canvas Y grows downward while data-space Y grows upward, so the vertical
/// coordinate is flipped against the canvas height.
#[must_use]
pub(crate) fn map_point(point: SeriesPoint, bounds: AxisBounds, canvas: Canvas) -> (f64, f64) {
    let plot_x = (point.x - bounds.min_x) / bounds.x_span() * canvas.width;
    let plot_y = canvas.height - (point.y - bounds.min_y) / bounds.y_span() * canvas.height;
    (plot_x, plot_y)
}

/// Projects an ordered point sequence into a straight-segment line path.
///
/// The path always opens with a move to the bottom-left canvas corner
/// `(0, height)` before visiting the mapped points in input order. This
/// baseline anchor is intentional reference behavior: it pins the drawn line
/// to the chart floor even when the first sample maps elsewhere.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output.
pub fn project_line_path(
    points: &[SeriesPoint],
    bounds: AxisBounds,
    canvas: Canvas,
) -> ChartResult<Path> {
    bounds.validate()?;
    canvas.validate()?;

    for point in points {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(ChartError::InvalidInput(format!(
                "series point ({}, {}) must be finite",
                point.x, point.y
            )));
        }
    }

    let mut path = Path::with_capacity(points.len() + 1);
    path.move_to(0.0, canvas.height);
    for point in points {
        let (plot_x, plot_y) = map_point(*point, bounds, canvas);
        path.line_to(plot_x, plot_y);
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::map_point;
    use crate::core::types::{AxisBounds, Canvas, SeriesPoint};

    #[test]
    fn mapping_flips_the_vertical_axis() {
        let bounds = AxisBounds::new(0.0, 100.0, 0.0, 100.0);
        let canvas = Canvas::default();

        let (x, y) = map_point(SeriesPoint::new(0.0, 0.0), bounds, canvas);
        assert_eq!((x, y), (0.0, 100.0));

        let (x, y) = map_point(SeriesPoint::new(100.0, 100.0), bounds, canvas);
        assert_eq!((x, y), (100.0, 0.0));
    }

    #[test]
    fn mapping_scales_to_the_canvas_size() {
        let bounds = AxisBounds::new(0.0, 10.0, 0.0, 10.0);
        let canvas = Canvas::new(200.0, 50.0);

        let (x, y) = map_point(SeriesPoint::new(5.0, 5.0), bounds, canvas);
        assert_eq!((x, y), (100.0, 25.0));
    }
}
