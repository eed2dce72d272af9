//! Frame output for the simulation.
//!
//! The core never performs I/O itself. A [`Robot`](crate::robot::Robot) is handed a
//! [`Renderer`] and calls it after every successful move and every successful clean.

use crate::grid::{Grid, ROBOT_GLYPH};
use glam::IVec2;
use std::io::Write;
use std::thread;
use std::time::Duration;

/// Receives a snapshot of the grid together with the robot's position.
pub trait Renderer {
    /// Called with the current grid and the robot's cell.
    fn render(&mut self, grid: &Grid, robot: IVec2);
}

impl<F> Renderer for F
where
    F: FnMut(&Grid, IVec2),
{
    fn render(&mut self, grid: &Grid, robot: IVec2) {
        self(grid, robot);
    }
}

/// Formats one frame: `height` lines of legend glyphs with the robot overlaid.
pub fn render_frame(grid: &Grid, robot: IVec2) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            if robot == IVec2::new(x, y) {
                out.push(ROBOT_GLYPH);
            } else if let Some(cell) = grid.cell(x, y) {
                out.push(cell.legend());
            }
        }
        out.push('\n');
    }
    out
}

/// Discards every frame. Used for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _grid: &Grid, _robot: IVec2) {}
}

/// Keeps every rendered frame in memory.
#[derive(Clone, Debug, Default)]
pub struct FrameRecorder {
    /// Rendered frames, oldest first.
    pub frames: Vec<String>,
}

impl FrameRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames recorded.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if nothing has been rendered yet.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The most recent frame, if any.
    pub fn last(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Renderer for FrameRecorder {
    fn render(&mut self, grid: &Grid, robot: IVec2) {
        self.frames.push(render_frame(grid, robot));
    }
}

/// Writes frames to an [`io::Write`](std::io::Write) sink, pausing between frames.
///
/// Write failures are logged and otherwise ignored so that a broken terminal
/// never stops the sweep.
pub struct TextRenderer<W: Write> {
    out: W,
    frame_delay: Duration,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out`. A zero `frame_delay` disables pacing.
    pub fn new(out: W, frame_delay: Duration) -> Self {
        Self { out, frame_delay }
    }

    /// Consumes the renderer and returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, grid: &Grid, robot: IVec2) {
        let frame = render_frame(grid, robot);
        if let Err(e) = writeln!(self.out, "{frame}").and_then(|_| self.out.flush()) {
            log::warn!("Dropping frame: {e}");
        }
        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }
    }
}
