use crate::core::types::{Canvas, Rect};
use crate::error::{ChartError, ChartResult};

/// Projects a magnitude sequence into equal-width bars on a shared baseline.
///
/// The canvas width is partitioned into `floor(width / N)` unit columns,
/// left to right in input order. Each bar rises from the bottom edge to
/// `height - magnitude`; magnitudes taller than the canvas yield a negative
/// top edge, which is left unclamped since truncation is a rendering
/// concern.
pub fn project_bar_rects(magnitudes: &[f64], canvas: Canvas) -> ChartResult<Vec<Rect>> {
    canvas.validate()?;

    if magnitudes.is_empty() {
        return Ok(Vec::new());
    }

    for magnitude in magnitudes {
        if !magnitude.is_finite() || *magnitude < 0.0 {
            return Err(ChartError::InvalidInput(format!(
                "bar magnitude {magnitude} must be finite and >= 0"
            )));
        }
    }

    let bar_width = (canvas.width / magnitudes.len() as f64).floor();
    let mut bars = Vec::with_capacity(magnitudes.len());
    for (index, magnitude) in magnitudes.iter().enumerate() {
        bars.push(Rect {
            x: index as f64 * bar_width,
            y: canvas.height - magnitude,
            width: bar_width,
            height: *magnitude,
        });
    }

    Ok(bars)
}
