use serde::{Deserialize, Serialize};

use crate::core::{AxisBounds, SeriesPoint};

/// Input for the line chart: ordered samples plus the data-space window they
/// are normalized against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartData {
    pub bounds: AxisBounds,
    pub points: Vec<SeriesPoint>,
}

/// Input for the pie chart: one magnitude per wedge, in wedge order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartData {
    pub magnitudes: Vec<f64>,
}

/// Input for the bar chart: one magnitude per bar, left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartData {
    pub magnitudes: Vec<f64>,
}

/// Current state of all three charts.
///
/// Passed explicitly into every scene build so chart construction stays
/// referentially transparent; there is no ambient application-state
/// singleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub line: LineChartData,
    pub pie: PieChartData,
    pub bars: BarChartData,
}

impl DashboardData {
    /// The demo data set the reference dashboard boots with.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            line: LineChartData {
                bounds: AxisBounds::new(0.0, 100.0, 0.0, 100.0),
                points: vec![
                    SeriesPoint::new(0.0, 0.0),
                    SeriesPoint::new(10.0, 10.0),
                    SeriesPoint::new(50.0, 20.0),
                    SeriesPoint::new(75.0, 25.0),
                    SeriesPoint::new(100.0, 27.0),
                ],
            },
            pie: PieChartData {
                magnitudes: vec![66.0, 66.0, 66.0],
            },
            bars: BarChartData {
                magnitudes: vec![20.0, 30.0, 60.0, 95.0],
            },
        }
    }
}
