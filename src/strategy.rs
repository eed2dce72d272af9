//! Traversal strategies that decide where the robot goes next.
//!
//! A strategy receives a [`Robot`] and drives it to completion using only
//! [`Robot::move_to`] and [`Robot::clean_current_spot`]. Implement
//! [`CleaningStrategy`] to add new coverage patterns.

use crate::grid::Grid;
use crate::robot::Robot;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// A policy that drives a robot over its grid.
pub trait CleaningStrategy {
    /// Short human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Drives `robot` until the strategy considers the grid covered.
    fn clean(&self, robot: &mut Robot<'_>);
}

/// Row-major serpentine coverage.
///
/// Rows are visited top to bottom. Even rows sweep left to right, odd rows
/// right to left, so consecutive targets are always adjacent. Every cell gets
/// exactly one move attempt, followed by a clean attempt whether or not the
/// move succeeded. Obstacles are never routed around: the blocked move fails,
/// the robot stays where it was, and the sweep continues with the next cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoustrophedonSweep;

impl CleaningStrategy for BoustrophedonSweep {
    fn name(&self) -> &str {
        "boustrophedon"
    }

    fn clean(&self, robot: &mut Robot<'_>) {
        let path = SweepPath::new(robot.grid().width(), robot.grid().height());
        for target in path {
            robot.move_to(target.x, target.y);
            robot.clean_current_spot();
        }
    }
}

/// Iterator over the boustrophedon visiting order of a `width x height` grid.
#[derive(Clone, Debug)]
pub struct SweepPath {
    width: usize,
    height: usize,
    next: usize,
}

impl SweepPath {
    /// Starts a sweep at `(0, 0)`.
    ///
    /// Dimensions are clamped to [`Grid::MAX_DIMENSION`] so every yielded
    /// coordinate fits in an `i32`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.min(Grid::MAX_DIMENSION),
            height: height.min(Grid::MAX_DIMENSION),
            next: 0,
        }
    }

    fn total(&self) -> usize {
        self.width.saturating_mul(self.height)
    }
}

impl Iterator for SweepPath {
    type Item = IVec2;

    fn next(&mut self) -> Option<IVec2> {
        if self.next >= self.total() {
            return None;
        }
        let row = self.next / self.width;
        let step = self.next % self.width;
        self.next += 1;

        let col = if row % 2 == 0 {
            step
        } else {
            self.width - 1 - step
        };
        Some(IVec2::new(col as i32, row as i32))
    }

    fn nth(&mut self, n: usize) -> Option<IVec2> {
        self.next = self.next.saturating_add(n).min(self.total());
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SweepPath {}

impl FusedIterator for SweepPath {}

/// Serializable selector for the built-in strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    Boustrophedon,
}

impl StrategyKind {
    /// Instantiates the selected strategy.
    pub fn strategy(self) -> Box<dyn CleaningStrategy> {
        match self {
            Self::Boustrophedon => Box::new(BoustrophedonSweep),
        }
    }
}
