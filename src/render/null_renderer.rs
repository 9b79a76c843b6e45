use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_path_count: usize,
    pub last_rect_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_path_count = frame.paths.len();
        self.last_rect_count = frame.rects.len();
        self.frames_rendered += 1;
        Ok(())
    }
}
