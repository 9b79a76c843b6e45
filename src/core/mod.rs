pub mod bar_geometry;
pub mod line_path;
pub mod path;
pub mod pie_sectors;
pub mod types;

pub use bar_geometry::project_bar_rects;
pub use line_path::project_line_path;
pub use path::{Path, PathCommand};
pub use pie_sectors::{PieRadii, project_pie_sectors};
pub use types::{AxisBounds, Canvas, Rect, SeriesPoint};
