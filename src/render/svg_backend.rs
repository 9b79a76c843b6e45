use std::fmt::Write as _;

use crate::core::{Path, PathCommand};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer};

/// Serializes a command sequence into SVG path data.
#[must_use]
pub fn path_data(path: &Path) -> String {
    let mut data = String::new();
    for command in path.commands() {
        if !data.is_empty() {
            data.push(' ');
        }
        match *command {
            PathCommand::MoveTo { x, y } => {
                let _ = write!(data, "M {} {}", trim(x), trim(y));
            }
            PathCommand::LineTo { x, y } => {
                let _ = write!(data, "L {} {}", trim(x), trim(y));
            }
            PathCommand::ArcTo {
                rx,
                ry,
                large_arc,
                sweep,
                x,
                y,
            } => {
                let _ = write!(
                    data,
                    "A {} {} 0 {} {} {} {}",
                    trim(rx),
                    trim(ry),
                    u8::from(large_arc),
                    u8::from(sweep),
                    trim(x),
                    trim(y)
                );
            }
            PathCommand::Close => data.push('Z'),
        }
    }
    data
}

/// Serializes a validated frame into a standalone SVG document.
pub fn render_to_string(frame: &RenderFrame) -> ChartResult<String> {
    frame.validate()?;

    let mut svg = String::new();
    write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">",
        trim(frame.view_box.min_x),
        trim(frame.view_box.min_y),
        trim(frame.view_box.width),
        trim(frame.view_box.height)
    )
    .map_err(write_error)?;

    for path in &frame.paths {
        let fill = match path.fill {
            Some(color) => css_color(color),
            None => "none".to_owned(),
        };
        write!(
            svg,
            "<path d=\"{}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"{}\"/>",
            path_data(&path.path),
            css_color(path.stroke),
            trim(path.stroke_width),
            fill
        )
        .map_err(write_error)?;
    }

    for rect in &frame.rects {
        write!(
            svg,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" stroke=\"{}\" fill=\"{}\"/>",
            trim(rect.rect.x),
            trim(rect.rect.y),
            trim(rect.rect.width),
            trim(rect.rect.height),
            css_color(rect.stroke),
            css_color(rect.fill)
        )
        .map_err(write_error)?;
    }

    svg.push_str("</svg>");
    Ok(svg)
}

/// Renderer backend that keeps the serialized document of the last frame.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    #[must_use]
    pub fn take_document(&mut self) -> Option<String> {
        self.document.take()
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.document = Some(render_to_string(frame)?);
        Ok(())
    }
}

fn css_color(color: Color) -> String {
    let to_byte = |channel: f64| (channel * 255.0).round().clamp(0.0, 255.0) as u8;
    if (color.alpha - 1.0).abs() < f64::EPSILON {
        format!(
            "rgb({},{},{})",
            to_byte(color.red),
            to_byte(color.green),
            to_byte(color.blue)
        )
    } else {
        format!(
            "rgba({},{},{},{})",
            to_byte(color.red),
            to_byte(color.green),
            to_byte(color.blue),
            trim(color.alpha)
        )
    }
}

/// Fixed-precision coordinate formatting with trailing zeros removed.
fn trim(value: f64) -> String {
    let mut text = format!("{value:.3}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

fn write_error(err: std::fmt::Error) -> ChartError {
    ChartError::InvalidInput(format!("svg serialization failed: {err}"))
}
