use error_chain::bail;
use smallvec::SmallVec;

use crate::cells::{Direction, GridCoordinate};
use crate::errors::*;
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};

/// Adjacent cells of some cell, each paired with the direction to reach it.
pub type NeighbourSmallVec = SmallVec<[(Direction, GridCoordinate); 4]>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RectGridDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl RectGridDimensions {
    /// Fails with `InvalidDimensions` when either side is zero or the cell count does not fit
    /// in a `usize`.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<RectGridDimensions> {
        let (RowsCount(r), ColumnsCount(c)) = (rows, columns);
        if r == 0 || c == 0 || r.checked_mul(c).is_none() {
            bail!(ErrorKind::InvalidDimensions(r, c));
        }

        Ok(RectGridDimensions { rows, columns })
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.rows.0 * self.columns.0)
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// Cell count and the number of adjacent cell pairs.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let (RowsCount(r), ColumnsCount(c)) = (self.rows, self.columns);
        let horizontal_pairs = r * (c - 1);
        let vertical_pairs = c * (r - 1);
        (self.size(), EdgesCount(horizontal_pairs + vertical_pairs))
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.row < self.rows.0 && coord.col < self.columns.0
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...size.
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.columns.0 + coord.col)
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_grid_coordinate(&self, index: usize) -> Option<GridCoordinate> {
        if index < self.size().0 {
            Some(GridCoordinate::from_row_major_index(index, self.columns))
        } else {
            None
        }
    }

    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: Direction)
                                  -> Option<GridCoordinate> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        coord.offset(direction)
             .filter(|neighbour| self.is_valid_coordinate(*neighbour))
    }

    /// Cells to the Up, Down, Right or Left of a coordinate, in that order, that lie on the grid.
    pub fn neighbours(&self, coord: GridCoordinate) -> NeighbourSmallVec {
        const SEARCH_ORDER: [Direction; 4] =
            [Direction::Up, Direction::Down, Direction::Right, Direction::Left];

        SEARCH_ORDER.iter()
                    .filter_map(|&dir| self.neighbour_at_direction(coord, dir).map(|n| (dir, n)))
                    .collect()
    }
}
