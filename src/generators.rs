use error_chain::bail;
use log::{debug, log_enabled, trace, Level};
use rand::Rng;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::grid_dimensions::RectGridDimensions;
use crate::grid_displays::WallCodes;
use crate::units::{ColumnsCount, RowsCount};
use crate::visited::VisitedSet;
use crate::walls::WallGrid;

/// Where the depth first traversal starts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StartCell {
    /// Sampled uniformly from the grid with the generator's own rng.
    Random,
    Fixed(GridCoordinate),
    /// Row 1, column 1 whatever the grid size.
    Legacy,
}

pub const LEGACY_START: GridCoordinate = GridCoordinate { row: 1, col: 1 };

impl StartCell {
    pub fn resolve<R: Rng>(self, dimensions: &RectGridDimensions, rng: &mut R) -> Result<GridCoordinate> {
        let coord = match self {
            StartCell::Random => {
                let (RowsCount(rows), ColumnsCount(columns)) = (dimensions.rows(), dimensions.columns());
                GridCoordinate::new(rng.gen_range(0..rows), rng.gen_range(0..columns))
            }
            StartCell::Fixed(coord) => coord,
            StartCell::Legacy => LEGACY_START,
        };

        if !dimensions.is_valid_coordinate(coord) {
            bail!(ErrorKind::InvalidStartCell(coord));
        }
        Ok(coord)
    }
}

/// A finished perfect maze and the state of the traversal that carved it.
#[derive(Debug, Clone)]
pub struct GeneratedMaze {
    pub walls: WallGrid,
    pub visited: VisitedSet,
    pub start: GridCoordinate,
    pub passages_opened: usize,
}

/// Carve a perfect maze over a fully walled grid of the given dimensions.
pub fn generate<R: Rng>(dimensions: RectGridDimensions,
                        start: StartCell,
                        rng: &mut R)
                        -> Result<GeneratedMaze> {

    let start_coord = start.resolve(&dimensions, rng)?;
    let mut walls = WallGrid::with_dimensions(dimensions);
    let mut visited = VisitedSet::new(dimensions, start_coord)?;

    let passages_opened = recursive_backtracker(&mut walls, &mut visited, start_coord, rng)?;

    Ok(GeneratedMaze {
        walls,
        visited,
        start: start_coord,
        passages_opened,
    })
}

/// Apply the recursive backtracker (randomised depth first search) algorithm to a grid.
///
/// From the current cell pick a random unvisited neighbour, knock down the wall pair between
/// them and continue from that neighbour. When a cell has no unvisited neighbours left we back
/// up to the previous cell on the path and try its remaining neighbours. Finishes once we have
/// backed out past `start`.
///
/// The path is an explicit stack so large grids cannot overflow the call stack. The unvisited
/// neighbours of the top cell are looked up afresh every step because the subtree explored
/// since the cell was last on top may have visited some of them.
///
/// Returns the number of passages opened, which is `cells - 1` when every cell starts
/// unvisited apart from `start`.
pub fn recursive_backtracker<R: Rng>(walls: &mut WallGrid,
                                     visited: &mut VisitedSet,
                                     start: GridCoordinate,
                                     rng: &mut R)
                                     -> Result<usize> {

    if !walls.dimensions().is_valid_coordinate(start) {
        bail!(ErrorKind::OutOfBounds(start, None));
    }
    visited.mark_visited(start);

    let mut stack = Vec::with_capacity(walls.size());
    stack.push(start);
    let mut passages_opened = 0;
    let mut max_depth = stack.len();

    while let Some(&current) = stack.last() {

        let candidates = visited.unvisited_neighbours(current);
        if candidates.is_empty() {
            let _ = stack.pop();
            continue;
        }

        let chosen = rng.gen_range(0..candidates.len());
        let (direction, next) = candidates[chosen];
        trace!("at {} candidates {:?}, chose index {} -> {}", current, candidates, chosen, next);

        visited.mark_visited(next);
        walls.remove_wall_pair(current, direction)?;
        passages_opened += 1;

        if log_enabled!(Level::Trace) {
            trace!("wall codes:\n{}", WallCodes(walls));
        }

        stack.push(next);
        if stack.len() > max_depth {
            max_depth = stack.len();
        }
    }

    debug!("recursive backtracker from {} opened {} passages, max path depth {}",
           start,
           passages_opened,
           max_depth);

    Ok(passages_opened)
}
