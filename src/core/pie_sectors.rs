use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::path::Path;
use crate::error::{ChartError, ChartResult};

/// Horizontal and vertical wedge radii in canvas units.
///
/// The reference dashboard draws the pie into a `-50 -50 100 100` view box,
/// so the default radii are 50x50 around the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieRadii {
    pub rx: f64,
    pub ry: f64,
}

impl PieRadii {
    #[must_use]
    pub const fn new(rx: f64, ry: f64) -> Self {
        Self { rx, ry }
    }

    fn validate(self) -> ChartResult<()> {
        if !self.rx.is_finite() || !self.ry.is_finite() || self.rx <= 0.0 || self.ry <= 0.0 {
            return Err(ChartError::InvalidInput(format!(
                "pie radii ({}, {}) must be finite and > 0",
                self.rx, self.ry
            )));
        }
        Ok(())
    }
}

impl Default for PieRadii {
    fn default() -> Self {
        Self::new(50.0, 50.0)
    }
}

/// Point on the wedge rim at `angle`, with the sine negated because canvas Y
/// grows downward while the angle convention assumes Y grows upward.
fn rim_point(radii: PieRadii, angle: f64) -> (f64, f64) {
    (radii.rx * angle.cos(), -radii.ry * angle.sin())
}

/// Projects a magnitude sequence into closed wedge paths, one per magnitude
/// in input order.
///
/// Each wedge spans `2π * magnitude / total` radians starting where the
/// previous wedge ended. Wedges wider than a half turn set the large-arc
/// flag so the rim follows the major arc.
///
/// The generator places no limit on sector count; palette-size limits are a
/// presentation concern enforced by the render layer.
pub fn project_pie_sectors(magnitudes: &[f64], radii: PieRadii) -> ChartResult<Vec<Path>> {
    radii.validate()?;

    if magnitudes.is_empty() {
        return Ok(Vec::new());
    }

    let mut total = 0.0;
    for magnitude in magnitudes {
        if !magnitude.is_finite() || *magnitude < 0.0 {
            return Err(ChartError::InvalidInput(format!(
                "pie magnitude {magnitude} must be finite and >= 0"
            )));
        }
        total += magnitude;
    }

    if total == 0.0 {
        return Err(ChartError::InvalidInput(
            "pie magnitudes sum to zero, wedge spans are undefined".to_owned(),
        ));
    }

    let mut wedges = Vec::with_capacity(magnitudes.len());
    let mut cumulative_fraction = 0.0;
    for magnitude in magnitudes {
        let fraction = magnitude / total;
        let start_angle = cumulative_fraction * 2.0 * PI;
        cumulative_fraction += fraction;
        let end_angle = cumulative_fraction * 2.0 * PI;

        let (start_x, start_y) = rim_point(radii, start_angle);
        let (end_x, end_y) = rim_point(radii, end_angle);

        let mut wedge = Path::with_capacity(4);
        wedge.move_to(0.0, 0.0);
        wedge.line_to(start_x, start_y);
        // Sweep is fixed counterclockwise in canvas coordinates, matching
        // the negated-sine rim convention.
        wedge.arc_to(
            radii.rx,
            radii.ry,
            end_angle - start_angle > PI,
            false,
            end_x,
            end_y,
        );
        wedge.close();
        wedges.push(wedge);
    }

    Ok(wedges)
}
