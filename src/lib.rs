//! # grid-sweeper
//!
//! A headless simulation of a cleaning robot covering a rectangular grid.
//!
//! A [`Grid`] holds the per-cell state (empty, dirt, obstacle, cleaned). A [`Robot`]
//! borrows the grid, enforces movement rules and cleans the cell it stands on.
//! Coverage is delegated to a pluggable [`CleaningStrategy`]; the built-in
//! [`BoustrophedonSweep`] walks the grid in a serpentine row-by-row pattern.
//! Output is decoupled from the core through the [`Renderer`] trait.

pub mod grid;
pub mod render;
pub mod robot;
pub mod scenario;
pub mod strategy;

pub use grid::*;
pub use render::*;
pub use robot::*;
pub use scenario::*;
pub use strategy::*;
