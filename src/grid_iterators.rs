use crate::cells::GridCoordinate;
use crate::grid_dimensions::RectGridDimensions;
use crate::units::{ColumnIndex, ColumnsCount, RowIndex, RowsCount};

/// Row-major iteration over every cell coordinate of a grid.
#[derive(Debug, Clone)]
pub struct RectGridCellIter {
    columns: ColumnsCount,
    next_index: usize,
    end_index: usize,
}

impl RectGridCellIter {
    pub fn new(dimensions: RectGridDimensions) -> RectGridCellIter {
        RectGridCellIter {
            columns: dimensions.columns(),
            next_index: 0,
            end_index: dimensions.size().0,
        }
    }
}

impl Iterator for RectGridCellIter {
    type Item = GridCoordinate;

    fn next(&mut self) -> Option<GridCoordinate> {
        if self.next_index == self.end_index {
            return None;
        }
        let coord = GridCoordinate::from_row_major_index(self.next_index, self.columns);
        self.next_index += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end_index - self.next_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RectGridCellIter {}

/// Yields each grid row, top to bottom, as a vec of its coordinates.
#[derive(Debug, Copy, Clone)]
pub struct RectRowIter {
    next_row: usize,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl RectRowIter {
    pub fn new(dimensions: RectGridDimensions) -> RectRowIter {
        RectRowIter {
            next_row: 0,
            rows: dimensions.rows(),
            columns: dimensions.columns(),
        }
    }
}

impl Iterator for RectRowIter {
    type Item = Vec<GridCoordinate>;

    fn next(&mut self) -> Option<Vec<GridCoordinate>> {
        let (RowsCount(rows), ColumnsCount(columns)) = (self.rows, self.columns);
        if self.next_row == rows {
            return None;
        }
        let row = RowIndex(self.next_row);
        self.next_row += 1;
        Some((0..columns)
            .map(|col| GridCoordinate::from_row_column_indices(row, ColumnIndex(col)))
            .collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows.0 - self.next_row;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RectRowIter {}
