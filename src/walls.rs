use error_chain::bail;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{CellWalls, Direction, GridCoordinate};
use crate::errors::*;
use crate::grid_dimensions::RectGridDimensions;
use crate::grid_iterators::{RectGridCellIter, RectRowIter};
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};

/// Per cell wall state for a rectangular maze.
///
/// Walls between two adjacent cells are only ever removed as a pair, so for any cells A and
/// B next to each other the wall on A's side facing B stands exactly when the wall on B's
/// side facing A stands. Walls on the outer boundary are never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGrid {
    dimensions: RectGridDimensions,
    cells: Vec<CellWalls>,
}

impl WallGrid {
    /// A grid with every cell fully walled.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<WallGrid> {
        let dimensions = RectGridDimensions::new(rows, columns)?;
        Ok(WallGrid::with_dimensions(dimensions))
    }

    pub fn with_dimensions(dimensions: RectGridDimensions) -> WallGrid {
        WallGrid {
            dimensions,
            cells: vec![CellWalls::all(); dimensions.size().0],
        }
    }

    #[inline]
    pub fn dimensions(&self) -> &RectGridDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.dimensions.rows()
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.dimensions.columns()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size().0
    }

    #[inline]
    pub fn cell_walls(&self, coord: GridCoordinate) -> Option<CellWalls> {
        self.dimensions
            .grid_coordinate_to_index(coord)
            .map(|index| self.cells[index])
    }

    /// Does a wall block movement out of `coord` towards `direction`?
    /// Coordinates off the grid are solid and always report a wall.
    #[inline]
    pub fn has_wall(&self, coord: GridCoordinate, direction: Direction) -> bool {
        self.cell_walls(coord)
            .map_or(true, |walls| walls.has_wall(direction))
    }

    /// Open the passage between `coord` and its neighbour towards `direction`, clearing the
    /// facing wall flag on both cells.
    ///
    /// Fails with `OutOfBounds` if `coord` is not on the grid or has no neighbour that way.
    /// Removing an already removed pair is a no-op.
    pub fn remove_wall_pair(&mut self, coord: GridCoordinate, direction: Direction) -> Result<()> {
        let cell_index = match self.dimensions.grid_coordinate_to_index(coord) {
            Some(index) => index,
            None => bail!(ErrorKind::OutOfBounds(coord, None)),
        };
        let neighbour_index = match self.dimensions
                                        .neighbour_at_direction(coord, direction)
                                        .and_then(|n| self.dimensions.grid_coordinate_to_index(n)) {
            Some(index) => index,
            None => bail!(ErrorKind::OutOfBounds(coord, Some(direction))),
        };

        self.cells[cell_index].remove(direction.wall());
        self.cells[neighbour_index].remove(direction.opposite().wall());
        Ok(())
    }

    /// Is there an open passage between `coord` and its neighbour towards `direction`?
    #[inline]
    pub fn is_passage(&self, coord: GridCoordinate, direction: Direction) -> bool {
        self.dimensions.neighbour_at_direction(coord, direction).is_some() &&
        !self.has_wall(coord, direction)
    }

    /// Every open passage exactly once, as the cell plus `Right` or `Down` towards the
    /// other cell. Row-major order, the right opening of a cell before its bottom opening.
    pub fn iter_passages(&self) -> impl Iterator<Item = (GridCoordinate, Direction)> + '_ {
        self.iter().flat_map(move |coord| {
            [Direction::Right, Direction::Down]
                .iter()
                .filter(move |&&dir| self.is_passage(coord, dir))
                .map(move |&dir| (coord, dir))
                .collect::<Vec<_>>()
        })
    }

    pub fn passages_count(&self) -> usize {
        self.iter_passages().count()
    }

    #[inline]
    pub fn iter(&self) -> RectGridCellIter {
        RectGridCellIter::new(self.dimensions)
    }

    #[inline]
    pub fn iter_row(&self) -> RectRowIter {
        RectRowIter::new(self.dimensions)
    }

    /// Decimal wall code of each cell (see `CellWalls::decimal_code`), one vec per row.
    pub fn decimal_codes(&self) -> Vec<Vec<u16>> {
        let ColumnsCount(width) = self.columns();
        self.cells
            .chunks(width)
            .map(|row| row.iter().map(|walls| walls.decimal_code()).collect())
            .collect()
    }

    /// The open passages as an undirected graph. Node `i` is the cell with row-major index `i`.
    pub fn to_graph(&self) -> UnGraph<GridCoordinate, ()> {
        let (NodesCount(nodes), EdgesCount(edges)) = self.dimensions.graph_size();
        let mut graph = UnGraph::with_capacity(nodes, edges);
        for coord in self.iter() {
            let _ = graph.add_node(coord);
        }

        for (coord, dir) in self.iter_passages() {
            let neighbour = self.dimensions.neighbour_at_direction(coord, dir);
            let indices = (self.dimensions.grid_coordinate_to_index(coord),
                           neighbour.and_then(|n| self.dimensions.grid_coordinate_to_index(n)));
            if let (Some(a), Some(b)) = indices {
                let _ = graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
            }
        }

        graph
    }
}
