use serde::{Deserialize, Serialize};

use crate::core::{Path, Rect};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidInput(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one vector path in canvas space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub path: Path,
    pub stroke: Color,
    pub fill: Option<Color>,
    pub stroke_width: f64,
}

impl PathPrimitive {
    #[must_use]
    pub fn stroked(path: Path, stroke: Color, stroke_width: f64) -> Self {
        Self {
            path,
            stroke,
            fill: None,
            stroke_width,
        }
    }

    #[must_use]
    pub fn filled(path: Path, color: Color, stroke_width: f64) -> Self {
        Self {
            path,
            stroke: color,
            fill: Some(color),
            stroke_width,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.path.is_finite() {
            return Err(ChartError::InvalidInput(
                "path coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidInput(
                "path stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.stroke.validate()?;
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        Ok(())
    }
}

/// Draw command for one filled rectangle in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub rect: Rect,
    pub stroke: Color,
    pub fill: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(rect: Rect, stroke: Color, fill: Color) -> Self {
        Self { rect, stroke, fill }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.rect.x.is_finite()
            || !self.rect.y.is_finite()
            || !self.rect.width.is_finite()
            || !self.rect.height.is_finite()
        {
            return Err(ChartError::InvalidInput(
                "rect coordinates must be finite".to_owned(),
            ));
        }
        if self.rect.width < 0.0 || self.rect.height < 0.0 {
            return Err(ChartError::InvalidInput(
                "rect dimensions must be >= 0".to_owned(),
            ));
        }
        self.stroke.validate()?;
        self.fill.validate()
    }
}
