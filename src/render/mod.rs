mod frame;
mod null_renderer;
mod palette;
mod primitives;
mod svg_backend;

pub use frame::{RenderFrame, ViewBox};
pub use null_renderer::NullRenderer;
pub use palette::Palette;
pub use primitives::{Color, PathPrimitive, RectPrimitive};
pub use svg_backend::{SvgRenderer, path_data, render_to_string};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart geometry and dashboard logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
