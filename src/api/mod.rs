mod data;
mod engine;
mod scene;
mod style;

pub use data::{BarChartData, DashboardData, LineChartData, PieChartData};
pub use engine::DashboardEngine;
pub use scene::{
    DashboardScene, build_bar_chart_frame, build_line_chart_frame, build_pie_chart_frame,
};
pub use style::ChartStyle;
