use tracing::debug;

use crate::api::data::DashboardData;
use crate::api::scene::DashboardScene;
use crate::api::style::ChartStyle;
use crate::error::ChartResult;
use crate::render::Renderer;

/// Orchestration facade consumed by host applications.
///
/// The engine separates the pure and impure halves of a draw:
/// [`DashboardEngine::prepare`] projects geometry and can run before any
/// drawing surface exists; [`DashboardEngine::attach`] hands the prepared
/// scene to the backend once the surface is available.
pub struct DashboardEngine<R: Renderer> {
    renderer: R,
    style: ChartStyle,
    data: DashboardData,
}

impl<R: Renderer> DashboardEngine<R> {
    pub fn new(renderer: R, style: ChartStyle, data: DashboardData) -> ChartResult<Self> {
        style.validate()?;
        Ok(Self {
            renderer,
            style,
            data,
        })
    }

    #[must_use]
    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    pub fn set_data(&mut self, data: DashboardData) {
        self.data = data;
    }

    pub fn set_style(&mut self, style: ChartStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    /// Pure phase: projects the current dashboard state into frames.
    pub fn prepare(&self) -> ChartResult<DashboardScene> {
        DashboardScene::build(&self.data, &self.style)
    }

    /// Impure phase: renders a prepared scene through the backend,
    /// one frame per chart.
    pub fn attach(&mut self, scene: &DashboardScene) -> ChartResult<()> {
        self.renderer.render(&scene.line)?;
        self.renderer.render(&scene.pie)?;
        self.renderer.render(&scene.bars)?;
        debug!("dashboard scene attached to backend");
        Ok(())
    }

    /// Convenience for hosts that already hold a surface: prepare then
    /// attach in one call.
    pub fn render(&mut self) -> ChartResult<DashboardScene> {
        let scene = self.prepare()?;
        self.attach(&scene)?;
        Ok(scene)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
