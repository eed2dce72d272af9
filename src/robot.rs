//! The cleaning robot and its movement rules.

use crate::grid::Grid;
use crate::render::Renderer;
use crate::strategy::CleaningStrategy;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Counters accumulated by a [`Robot`] across all traversals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotStats {
    /// Every call to [`Robot::move_to`], successful or not.
    pub move_attempts: usize,
    /// Moves that changed the robot's position.
    pub moves: usize,
    /// Moves rejected because the target was an obstacle or out of bounds.
    pub blocked_moves: usize,
    /// Dirt cells this robot has cleaned.
    pub cells_cleaned: usize,
}

/// A robot standing on a [`Grid`].
///
/// The robot borrows the grid, its strategy and its renderer for its whole
/// lifetime. It starts at `(0, 0)` and only [`move_to`](Self::move_to) changes
/// its position.
pub struct Robot<'a> {
    grid: &'a mut Grid,
    strategy: &'a dyn CleaningStrategy,
    renderer: &'a mut dyn Renderer,
    position: IVec2,
    stats: RobotStats,
}

impl<'a> Robot<'a> {
    /// Places a robot at `(0, 0)` on `grid`, bound to `strategy` and `renderer`.
    pub fn new(
        grid: &'a mut Grid,
        strategy: &'a dyn CleaningStrategy,
        renderer: &'a mut dyn Renderer,
    ) -> Self {
        Self {
            grid,
            strategy,
            renderer,
            position: IVec2::ZERO,
            stats: RobotStats::default(),
        }
    }

    /// Current cell of the robot.
    pub fn position(&self) -> IVec2 {
        self.position
    }

    /// Read-only view of the grid the robot is working on.
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// Counters accumulated since construction.
    pub fn stats(&self) -> RobotStats {
        self.stats
    }

    /// Moves the robot to `(x, y)`.
    ///
    /// Succeeds only if the target is in bounds and not an obstacle, in which
    /// case a frame is rendered. On failure the position is unchanged and
    /// nothing is rendered.
    pub fn move_to(&mut self, x: i32, y: i32) -> bool {
        self.stats.move_attempts += 1;
        if !self.grid.is_in_bounds(x, y) || self.grid.is_obstacle(x, y) {
            log::trace!("Move to ({x}, {y}) blocked");
            self.stats.blocked_moves += 1;
            return false;
        }
        self.position = IVec2::new(x, y);
        self.stats.moves += 1;
        log::trace!("Moved to ({x}, {y})");
        self.renderer.render(self.grid, self.position);
        true
    }

    /// Cleans the robot's current cell if it holds dirt; otherwise does nothing.
    pub fn clean_current_spot(&mut self) {
        let IVec2 { x, y } = self.position;
        if self.grid.is_dirt(x, y) {
            self.grid.clean(x, y);
            self.stats.cells_cleaned += 1;
            log::trace!("Cleaned ({x}, {y})");
            self.renderer.render(self.grid, self.position);
        }
    }

    /// Runs the bound strategy to completion.
    pub fn start_cleaning(&mut self) {
        let strategy = self.strategy;
        log::debug!(
            "Starting {} on {}x{} grid at {}",
            strategy.name(),
            self.grid.width(),
            self.grid.height(),
            self.position
        );
        strategy.clean(self);
        log::debug!(
            "{} finished at {} ({} dirt cells left)",
            strategy.name(),
            self.position,
            self.grid.remaining_dirt()
        );
    }
}
