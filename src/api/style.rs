use serde::{Deserialize, Serialize};

use crate::core::{Canvas, PieRadii};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Palette};

/// Presentation configuration shared by the scene builders.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    #[serde(default)]
    pub canvas: Canvas,
    #[serde(default)]
    pub pie_radii: PieRadii,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_line_stroke")]
    pub line_stroke: Color,
    #[serde(default = "default_bar_fill")]
    pub bar_fill: Color,
    #[serde(default)]
    pub pie_palette: Palette,
}

impl ChartStyle {
    #[must_use]
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    #[must_use]
    pub fn with_pie_radii(mut self, radii: PieRadii) -> Self {
        self.pie_radii = radii;
        self
    }

    #[must_use]
    pub fn with_pie_palette(mut self, palette: Palette) -> Self {
        self.pie_palette = palette;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.canvas.validate()?;
        self.line_stroke.validate()?;
        self.bar_fill.validate()?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidInput(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            pie_radii: PieRadii::default(),
            stroke_width: default_stroke_width(),
            line_stroke: default_line_stroke(),
            bar_fill: default_bar_fill(),
            pie_palette: Palette::default(),
        }
    }
}

fn default_stroke_width() -> f64 {
    1.0
}

/// Red line stroke, per the reference styling.
fn default_line_stroke() -> Color {
    Color::rgb(1.0, 0.0, 0.0)
}

/// Blue bar fill, per the reference styling.
fn default_bar_fill() -> Color {
    Color::rgb(0.0, 0.0, 1.0)
}
