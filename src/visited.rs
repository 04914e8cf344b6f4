use bit_set::BitSet;
use error_chain::bail;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::grid_dimensions::{NeighbourSmallVec, RectGridDimensions};

/// Cells that have joined the spanning tree so far.
///
/// A cell is never unmarked once visited.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    dimensions: RectGridDimensions,
    visited: BitSet,
}

impl VisitedSet {
    /// Only `start` is visited. Fails with `OutOfBounds` if `start` is not on the grid.
    pub fn new(dimensions: RectGridDimensions, start: GridCoordinate) -> Result<VisitedSet> {
        let mut visited_set = VisitedSet {
            dimensions,
            visited: BitSet::with_capacity(dimensions.size().0),
        };
        if !visited_set.mark_visited(start) {
            bail!(ErrorKind::OutOfBounds(start, None));
        }

        Ok(visited_set)
    }

    /// Returns true if the cell was not visited before. Coordinates off the grid are ignored.
    #[inline]
    pub fn mark_visited(&mut self, coord: GridCoordinate) -> bool {
        match self.dimensions.grid_coordinate_to_index(coord) {
            Some(index) => self.visited.insert(index),
            None => false,
        }
    }

    #[inline]
    pub fn is_visited(&self, coord: GridCoordinate) -> bool {
        self.dimensions
            .grid_coordinate_to_index(coord)
            .map_or(false, |index| self.visited.contains(index))
    }

    /// On-grid neighbours of `coord` not yet visited, each with the direction from `coord`.
    /// Candidates come in Up, Down, Right, Left order.
    pub fn unvisited_neighbours(&self, coord: GridCoordinate) -> NeighbourSmallVec {
        self.dimensions
            .neighbours(coord)
            .into_iter()
            .filter(|&(_, neighbour)| !self.is_visited(neighbour))
            .collect()
    }

    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.visited_count() == self.dimensions.size().0
    }

    #[inline]
    pub fn dimensions(&self) -> &RectGridDimensions {
        &self.dimensions
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::Direction;
    use crate::units::{ColumnsCount, RowsCount};

    fn dims(rows: usize, columns: usize) -> RectGridDimensions {
        RectGridDimensions::new(RowsCount(rows), ColumnsCount(columns))
            .expect("valid dimensions")
    }

    #[test]
    fn only_start_visited() {
        let d = dims(3, 3);
        let start = GridCoordinate::new(1, 2);
        let visited = VisitedSet::new(d, start).expect("start on grid");
        assert_eq!(visited.visited_count(), 1);
        for coord in (0..9).filter_map(|i| d.index_to_grid_coordinate(i)) {
            assert_eq!(visited.is_visited(coord), coord == start);
        }
    }

    #[test]
    fn start_must_be_on_grid() {
        let result = VisitedSet::new(dims(2, 2), GridCoordinate::new(1, 2));
        match result.map_err(|e| e.0) {
            Err(ErrorKind::OutOfBounds(coord, None)) => {
                assert_eq!(coord, GridCoordinate::new(1, 2))
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn mark_visited_is_idempotent() {
        let mut visited = VisitedSet::new(dims(2, 2), GridCoordinate::new(0, 0))
            .expect("start on grid");
        let cell = GridCoordinate::new(1, 1);
        assert!(visited.mark_visited(cell));
        assert!(!visited.mark_visited(cell));
        assert!(visited.is_visited(cell));
        assert_eq!(visited.visited_count(), 2);

        assert!(!visited.mark_visited(GridCoordinate::new(9, 9)));
        assert!(!visited.is_visited(GridCoordinate::new(9, 9)));
        assert_eq!(visited.visited_count(), 2);
    }

    #[test]
    fn unvisited_neighbours_shrink() {
        let gc = |r, c| GridCoordinate::new(r, c);
        let mut visited = VisitedSet::new(dims(3, 3), gc(1, 1)).expect("start on grid");

        let all = visited.unvisited_neighbours(gc(1, 1));
        assert_eq!(&all[..],
                   &[(Direction::Up, gc(0, 1)),
                     (Direction::Down, gc(2, 1)),
                     (Direction::Right, gc(1, 2)),
                     (Direction::Left, gc(1, 0))]);

        visited.mark_visited(gc(2, 1));
        visited.mark_visited(gc(1, 0));
        let some = visited.unvisited_neighbours(gc(1, 1));
        assert_eq!(&some[..], &[(Direction::Up, gc(0, 1)), (Direction::Right, gc(1, 2))]);

        // the corner only borders cells already visited
        assert!(visited.unvisited_neighbours(gc(2, 0)).is_empty());
    }

    #[test]
    fn completion() {
        let mut visited = VisitedSet::new(dims(1, 3), GridCoordinate::new(0, 0))
            .expect("start on grid");
        assert!(!visited.is_complete());
        visited.mark_visited(GridCoordinate::new(0, 1));
        visited.mark_visited(GridCoordinate::new(0, 2));
        assert!(visited.is_complete());
    }

    #[test]
    fn single_cell_is_complete_from_start() {
        let visited = VisitedSet::new(dims(1, 1), GridCoordinate::new(0, 0))
            .expect("start on grid");
        assert!(visited.is_complete());
        assert!(visited.unvisited_neighbours(GridCoordinate::new(0, 0)).is_empty());
    }
}
