use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Fixed logical drawing surface in canvas units.
///
/// The reference dashboard uses 100x100 logical units regardless of the
/// on-screen pixel size; the on-screen size is a styling concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

/// One (x, y) sample in unitless data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

impl SeriesPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Data-space rectangle mapped onto the canvas by the line-path generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl AxisBounds {
    #[must_use]
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Rejects bounds whose normalization would divide by zero.
    pub fn validate(self) -> ChartResult<()> {
        let finite = self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite();
        if !finite || self.max_x <= self.min_x || self.max_y <= self.min_y {
            return Err(ChartError::InvalidBounds {
                min_x: self.min_x,
                max_x: self.max_x,
                min_y: self.min_y,
                max_y: self.max_y,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn x_span(self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn y_span(self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Axis-aligned rectangle in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
