use serde::{Deserialize, Serialize};

/// One instruction in an ordered vector-drawing sequence.
///
/// The command set matches the SVG path subset the dashboard emits: absolute
/// move/line, elliptical arc, and close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    ArcTo {
        rx: f64,
        ry: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathCommand {
    /// Returns the end point of the command, if it has one.
    #[must_use]
    pub fn end_point(self) -> Option<(f64, f64)> {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } | Self::ArcTo { x, y, .. } => {
                Some((x, y))
            }
            Self::Close => None,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => x.is_finite() && y.is_finite(),
            Self::ArcTo { rx, ry, x, y, .. } => {
                rx.is_finite() && ry.is_finite() && x.is_finite() && y.is_finite()
            }
            Self::Close => true,
        }
    }
}

/// Ordered drawing-command sequence produced by the geometry core.
///
/// Paths are built once and handed to a rendering collaborator; nothing in
/// this crate mutates a path after its generator returns it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::LineTo { x, y });
        self
    }

    pub fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            rx,
            ry,
            large_arc,
            sweep,
            x,
            y,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|command| command.is_finite())
    }
}
