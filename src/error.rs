use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(
        "invalid axis bounds: x={min_x}..{max_x}, y={min_y}..{max_y} (ranges must be finite and non-empty)"
    )]
    InvalidBounds {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },

    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("palette exhausted: {sectors} sectors but only {colors} colors available")]
    PaletteExhausted { sectors: usize, colors: usize },
}
