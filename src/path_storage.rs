//! Path storage: the command list built by `move_to`/`line_to`/curves.
//!
//! Points are stored in device space: the caller transforms each point when
//! the command is appended, so a later change of transform does not move
//! recorded geometry. Curves are kept exact and only flattened into lines by
//! [`Path::to_lines`] at rasterization time.

use crate::basics::{Line, Point};
use crate::curves::{flatten_cubic, flatten_quadratic};

/// A single path command in device space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadraticTo { ctrl: Point, end: Point },
    BezierTo { ctrl1: Point, ctrl2: Point, end: Point },
}

impl PathCommand {
    /// The point the pen rests on after this command.
    pub fn end_point(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::QuadraticTo { end, .. } | PathCommand::BezierTo { end, .. } => end,
        }
    }
}

/// Ordered path commands plus the start of the current sub-path.
///
/// The first command of a non-empty path is always a `MoveTo`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
    start: Option<Point>,
    closed: bool,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.start = None;
        self.closed = false;
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Where the pen currently rests, if anywhere.
    pub fn current_point(&self) -> Option<Point> {
        self.commands.last().map(PathCommand::end_point)
    }

    // ---------------------------------------------------------------
    // Path construction
    // ---------------------------------------------------------------

    /// Begin a new sub-path at `p`.
    pub fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
        self.start = Some(p);
        self.closed = false;
    }

    fn ensure_sub_path(&mut self, p: Point) {
        if self.commands.is_empty() {
            self.move_to(p);
        }
    }

    /// Straight segment to `p`. On an empty path this only moves the pen.
    pub fn line_to(&mut self, p: Point) {
        self.ensure_sub_path(p);
        self.commands.push(PathCommand::LineTo(p));
    }

    pub fn quadratic_to(&mut self, ctrl: Point, end: Point) {
        self.ensure_sub_path(ctrl);
        self.commands.push(PathCommand::QuadraticTo { ctrl, end });
    }

    pub fn bezier_to(&mut self, ctrl1: Point, ctrl2: Point, end: Point) {
        self.ensure_sub_path(ctrl1);
        self.commands.push(PathCommand::BezierTo { ctrl1, ctrl2, end });
    }

    /// Straight segment back to the sub-path start. Does nothing if the
    /// sub-path is already closed or no sub-path exists.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        if let Some(start) = self.start {
            self.commands.push(PathCommand::LineTo(start));
            self.closed = true;
        }
    }

    // ---------------------------------------------------------------
    // Flattening
    // ---------------------------------------------------------------

    /// Flatten every command into line segments, sub-paths left open.
    pub fn to_lines(&self) -> Vec<Line> {
        self.flatten(false)
    }

    /// Flatten with every sub-path closed back to its `MoveTo` point.
    ///
    /// Fill and clip operate on this form; the path itself is unchanged.
    pub fn to_closed_lines(&self) -> Vec<Line> {
        self.flatten(true)
    }

    fn flatten(&self, close_sub_paths: bool) -> Vec<Line> {
        let mut lines = Vec::with_capacity(self.commands.len());
        let mut start = Point::default();
        let mut curr = Point::default();
        let mut have_sub_path = false;

        let close = |lines: &mut Vec<Line>, curr: Point, start: Point| {
            if curr != start {
                lines.push(Line::new(curr, start));
            }
        };

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    if close_sub_paths && have_sub_path {
                        close(&mut lines, curr, start);
                    }
                    start = p;
                    curr = p;
                    have_sub_path = true;
                }
                PathCommand::LineTo(p) => {
                    lines.push(Line::new(curr, p));
                    curr = p;
                }
                PathCommand::QuadraticTo { ctrl, end } => {
                    curr = flatten_quadratic(curr, ctrl, end, &mut lines);
                }
                PathCommand::BezierTo { ctrl1, ctrl2, end } => {
                    curr = flatten_cubic(&[curr, ctrl1, ctrl2, end], &mut lines);
                }
            }
        }
        if close_sub_paths && have_sub_path {
            close(&mut lines, curr, start);
        }
        lines
    }
}

// ============================================================================
// Tests
// ============================================================================
