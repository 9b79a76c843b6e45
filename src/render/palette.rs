use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Fill colors available for distinguishing adjacent shapes.
///
/// The geometry core supports any sector count; this presentation-side limit
/// is the only place where sector count is capped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> ChartResult<Self> {
        if colors.is_empty() {
            return Err(ChartError::InvalidInput(
                "palette must hold at least one color".to_owned(),
            ));
        }
        for color in &colors {
            color.validate()?;
        }
        Ok(Self { colors })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Checks that `shapes` adjacent shapes can each get a distinct color.
    pub fn ensure_capacity(&self, shapes: usize) -> ChartResult<()> {
        if shapes > self.colors.len() {
            warn!(
                shapes,
                colors = self.colors.len(),
                "not enough palette colors to render all sectors"
            );
            return Err(ChartError::PaletteExhausted {
                sectors: shapes,
                colors: self.colors.len(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    /// Red, blue, green: the three fills the reference dashboard ships.
    fn default() -> Self {
        Self {
            colors: vec![
                Color::rgb(1.0, 0.0, 0.0),
                Color::rgb(0.0, 0.0, 1.0),
                Color::rgb(0.0, 0.5, 0.0),
            ],
        }
    }
}
