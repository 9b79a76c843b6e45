use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::data::{BarChartData, DashboardData, LineChartData, PieChartData};
use crate::api::style::ChartStyle;
use crate::core::{project_bar_rects, project_line_path, project_pie_sectors};
use crate::error::{ChartError, ChartResult};
use crate::render::{PathPrimitive, RectPrimitive, RenderFrame, ViewBox};

/// Builds the line-chart frame: one stroked path, no fill.
pub fn build_line_chart_frame(data: &LineChartData, style: &ChartStyle) -> ChartResult<RenderFrame> {
    style.validate()?;
    let path = project_line_path(&data.points, data.bounds, style.canvas)?;
    debug!(commands = path.len(), "line chart path projected");

    Ok(
        RenderFrame::new(style.canvas, ViewBox::top_left(style.canvas)).with_path(
            PathPrimitive::stroked(path, style.line_stroke, style.stroke_width),
        ),
    )
}

/// Builds the pie-chart frame: one filled wedge per magnitude, centered on
/// the origin.
///
/// The palette-size cap lives here, not in the geometry core: the generator
/// supports any sector count, but each rendered wedge needs a distinct fill.
pub fn build_pie_chart_frame(data: &PieChartData, style: &ChartStyle) -> ChartResult<RenderFrame> {
    style.validate()?;
    let wedges = project_pie_sectors(&data.magnitudes, style.pie_radii)?;
    style.pie_palette.ensure_capacity(wedges.len())?;
    debug!(wedges = wedges.len(), "pie chart sectors projected");

    let mut frame = RenderFrame::new(style.canvas, ViewBox::centered(style.canvas));
    for (index, wedge) in wedges.into_iter().enumerate() {
        frame = frame.with_path(PathPrimitive::filled(
            wedge,
            style.pie_palette.color(index),
            style.stroke_width,
        ));
    }
    Ok(frame)
}

/// Builds the bar-chart frame: one filled rectangle per magnitude.
pub fn build_bar_chart_frame(data: &BarChartData, style: &ChartStyle) -> ChartResult<RenderFrame> {
    style.validate()?;
    let bars = project_bar_rects(&data.magnitudes, style.canvas)?;
    debug!(bars = bars.len(), "bar chart rectangles projected");

    let mut frame = RenderFrame::new(style.canvas, ViewBox::top_left(style.canvas));
    for bar in bars {
        frame = frame.with_rect(RectPrimitive::new(bar, style.bar_fill, style.bar_fill));
    }
    Ok(frame)
}

/// Fully materialized dashboard: one frame per chart, ready to hand to any
/// backend. Building a scene is the pure phase of the two-phase lifecycle;
/// attaching it to a drawing surface is the impure phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardScene {
    pub line: RenderFrame,
    pub pie: RenderFrame,
    pub bars: RenderFrame,
}

impl DashboardScene {
    /// Builds all three frames from one snapshot of dashboard state.
    pub fn build(data: &DashboardData, style: &ChartStyle) -> ChartResult<Self> {
        Ok(Self {
            line: build_line_chart_frame(&data.line, style)?,
            pie: build_pie_chart_frame(&data.pie, style)?,
            bars: build_bar_chart_frame(&data.bars, style)?,
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidInput(format!("failed to serialize scene json: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidInput(format!("failed to parse scene json: {e}")))
    }
}
