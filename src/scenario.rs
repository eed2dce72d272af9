//! Scenario configuration: grid size, initial obstacle and dirt placement,
//! strategy selection and render pacing.
//!
//! Scenarios are plain structs with sensible defaults and can be loaded from YAML:
//!
//! ```yaml
//! name: demo_room
//! width: 20
//! height: 10
//! obstacles: [[2, 5], [12, 1]]
//! dirt: [[5, 3], [10, 8]]
//! render:
//!   frame_delay_ms: 100
//! ```

use crate::grid::{CellCounts, Grid};
use crate::render::Renderer;
use crate::robot::{Robot, RobotStats};
use crate::strategy::StrategyKind;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading a [`Scenario`].
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("grid of {width}x{height} cells is too large")]
    GridTooLarge { width: usize, height: usize },
}

/// Presentation settings for frame output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Whether frames are drawn at all.
    pub enabled: bool,
    /// Pause after each frame, in milliseconds. Zero disables pacing.
    pub frame_delay_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            frame_delay_ms: 100,
        }
    }
}

impl RenderConfig {
    /// Frame pause as a [`Duration`].
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

/// Initial setup of a cleaning run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable scenario name.
    #[serde(default)]
    pub name: String,

    /// Grid width in cells.
    pub width: usize,

    /// Grid height in cells.
    pub height: usize,

    /// Traversal strategy to run.
    #[serde(default)]
    pub strategy: StrategyKind,

    /// Obstacle placements, applied before dirt.
    #[serde(default)]
    pub obstacles: Vec<IVec2>,

    /// Dirt placements, applied after obstacles.
    #[serde(default)]
    pub dirt: Vec<IVec2>,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Outcome of [`Scenario::run`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CleaningReport {
    /// Where the robot stopped.
    pub final_position: IVec2,
    pub stats: RobotStats,
    /// Cell tally after the run.
    pub counts: CellCounts,
    /// Final grid state.
    pub grid: Grid,
}

impl Scenario {
    /// The built-in 20x10 room with two dirt spots and two obstacles.
    pub fn demo_room() -> Self {
        Self {
            name: "demo_room".to_string(),
            width: 20,
            height: 10,
            strategy: StrategyKind::Boustrophedon,
            obstacles: vec![IVec2::new(2, 5), IVec2::new(12, 1)],
            dirt: vec![IVec2::new(5, 3), IVec2::new(10, 8)],
            render: RenderConfig::default(),
        }
    }

    /// Loads a scenario from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parses a scenario from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = serde_yaml::from_str(yaml)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Rejects grids with a zero dimension or a size [`Grid`] cannot hold.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(ScenarioError::InvalidDimensions { width, height });
        }
        if !Grid::supports_size(width, height) {
            return Err(ScenarioError::GridTooLarge { width, height });
        }
        Ok(())
    }

    /// Builds the initial grid. Out-of-bounds placements are logged and skipped.
    ///
    /// # Panics
    ///
    /// Panics if the size is unsupported by [`Grid::new`]. Scenarios loaded via
    /// [`load`](Self::load) or [`from_yaml`](Self::from_yaml) are already validated.
    pub fn build_grid(&self) -> Grid {
        let mut grid = Grid::new(self.width, self.height);
        for p in &self.obstacles {
            if !grid.is_in_bounds(p.x, p.y) {
                log::warn!("Ignoring obstacle outside {}x{} grid: {p}", self.width, self.height);
            }
            grid.add_obstacle(p.x, p.y);
        }
        for p in &self.dirt {
            if !grid.is_in_bounds(p.x, p.y) {
                log::warn!("Ignoring dirt outside {}x{} grid: {p}", self.width, self.height);
            }
            grid.add_dirt(p.x, p.y);
        }
        grid
    }

    /// Builds the grid, runs the configured strategy once and reports the result.
    ///
    /// Panics under the same conditions as [`build_grid`](Self::build_grid).
    pub fn run<R: Renderer>(&self, renderer: &mut R) -> CleaningReport {
        let mut grid = self.build_grid();
        let strategy = self.strategy.strategy();
        let (final_position, stats) = {
            let mut robot = Robot::new(&mut grid, strategy.as_ref(), renderer);
            robot.start_cleaning();
            (robot.position(), robot.stats())
        };
        log::info!(
            "Scenario '{}' done: {} moves, {} blocked, {} cleaned",
            self.name,
            stats.moves,
            stats.blocked_moves,
            stats.cells_cleaned
        );
        CleaningReport {
            final_position,
            stats,
            counts: grid.counts(),
            grid,
        }
    }
}
