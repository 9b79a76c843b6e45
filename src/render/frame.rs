use serde::{Deserialize, Serialize};

use crate::core::Canvas;
use crate::error::{ChartError, ChartResult};
use crate::render::{PathPrimitive, RectPrimitive};

/// Visible coordinate window of a frame.
///
/// Line and bar charts draw into `0 0 w h`; the pie chart is centered on the
/// origin and draws into `-w/2 -h/2 w h`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    #[must_use]
    pub fn top_left(canvas: Canvas) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width: canvas.width,
            height: canvas.height,
        }
    }

    #[must_use]
    pub fn centered(canvas: Canvas) -> Self {
        Self {
            min_x: -canvas.width / 2.0,
            min_y: -canvas.height / 2.0,
            width: canvas.width,
            height: canvas.height,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.min_x.is_finite()
            || !self.min_y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ChartError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub canvas: Canvas,
    pub view_box: ViewBox,
    pub paths: Vec<PathPrimitive>,
    pub rects: Vec<RectPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(canvas: Canvas, view_box: ViewBox) -> Self {
        Self {
            canvas,
            view_box,
            paths: Vec::new(),
            rects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.canvas.validate()?;
        self.view_box.validate()?;

        for path in &self.paths {
            path.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.rects.is_empty()
    }
}
