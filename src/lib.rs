//! **mazes** generates perfect mazes on rectangular grids with a randomised depth first
//! backtracker, then draws them to PNG images or exports them as plain text graph files.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod graph_export;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod renderers;
pub mod units;
pub mod visited;
pub mod walls;
