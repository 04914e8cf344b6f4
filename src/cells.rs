use bitflags::bitflags;
use std::convert::From;
use std::fmt;

use crate::units::{ColumnIndex, ColumnsCount, RowIndex};

/// A cell position on a rectangular grid, 0-indexed from the top left.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub col: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate { row, col }
    }

    #[inline]
    pub fn from_row_column_indices(row_index: RowIndex, col_index: ColumnIndex) -> Self {
        let (RowIndex(row), ColumnIndex(col)) = (row_index, col_index);
        GridCoordinate::new(row, col)
    }

    #[inline]
    pub fn from_row_major_index(index: usize, columns: ColumnsCount) -> GridCoordinate {
        let ColumnsCount(width) = columns;
        GridCoordinate::new(index / width, index % width)
    }

    /// Creates a new `GridCoordinate` offset 1 cell away in the given direction.
    /// Returns None if the coordinate is not representable (above row 0 or left of column 0).
    /// There is no check against the far edges of any particular grid.
    pub fn offset(&self, direction: Direction) -> Option<GridCoordinate> {
        let (row_delta, col_delta) = direction.delta();
        let row = offset_index(self.row, row_delta)?;
        let col = offset_index(self.col, col_delta)?;
        Some(GridCoordinate::new(row, col))
    }
}

fn offset_index(index: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        index.checked_sub(delta.unsigned_abs())
    } else {
        index.checked_add(delta as usize)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for GridCoordinate {
    fn from(row_col_pair: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(row_col_pair.0, row_col_pair.1)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Every direction, in wall code digit order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// (row, column) unit step.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// The wall flag that blocks movement this way out of a cell.
    #[inline]
    pub fn wall(self) -> CellWalls {
        match self {
            Direction::Up => CellWalls::TOP,
            Direction::Right => CellWalls::RIGHT,
            Direction::Down => CellWalls::BOTTOM,
            Direction::Left => CellWalls::LEFT,
        }
    }
}

bitflags! {
    /// Walls currently standing around one cell. A set flag blocks movement that way.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CellWalls: u8 {
        const TOP = 0b0001;
        const RIGHT = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT = 0b1000;
    }
}

impl CellWalls {
    #[inline]
    pub fn has_wall(self, direction: Direction) -> bool {
        self.contains(direction.wall())
    }

    /// Base 10 wall code with one digit per side: units = top, tens = right,
    /// hundreds = bottom, thousands = left. A 1 digit is a standing wall, so a fully
    /// walled cell is `1111`.
    pub fn decimal_code(self) -> u16 {
        Direction::ALL
            .iter()
            .zip(DIGIT_WEIGHTS.iter())
            .filter(|&(dir, _)| self.has_wall(*dir))
            .map(|(_, weight)| weight)
            .sum()
    }

    /// Inverse of `decimal_code`. None if any digit is not 0 or 1.
    pub fn from_decimal_code(code: u16) -> Option<CellWalls> {
        let mut remaining = code;
        let mut walls = CellWalls::empty();
        for dir in Direction::ALL.iter() {
            match remaining % 10 {
                0 => {}
                1 => walls.insert(dir.wall()),
                _ => return None,
            }
            remaining /= 10;
        }

        if remaining == 0 {
            Some(walls)
        } else {
            None
        }
    }
}

const DIGIT_WEIGHTS: [u16; 4] = [1, 10, 100, 1000];

impl Default for CellWalls {
    fn default() -> Self {
        CellWalls::all()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions() {
        for dir in Direction::ALL.iter() {
            assert_ne!(dir.opposite(), *dir);
            assert_eq!(dir.opposite().opposite(), *dir);

            let (r, c) = dir.delta();
            let (or, oc) = dir.opposite().delta();
            assert_eq!((r + or, c + oc), (0, 0));
        }
    }

    #[test]
    fn offset_coordinates() {
        let gc = |r, c| GridCoordinate::new(r, c);
        assert_eq!(gc(0, 0).offset(Direction::Up), None);
        assert_eq!(gc(0, 0).offset(Direction::Left), None);
        assert_eq!(gc(0, 0).offset(Direction::Right), Some(gc(0, 1)));
        assert_eq!(gc(0, 0).offset(Direction::Down), Some(gc(1, 0)));
        assert_eq!(gc(3, 7).offset(Direction::Up), Some(gc(2, 7)));
        assert_eq!(gc(3, 7).offset(Direction::Left), Some(gc(3, 6)));
    }

    #[test]
    fn row_major_index() {
        let columns = ColumnsCount(3);
        assert_eq!(GridCoordinate::from_row_major_index(0, columns), GridCoordinate::new(0, 0));
        assert_eq!(GridCoordinate::from_row_major_index(2, columns), GridCoordinate::new(0, 2));
        assert_eq!(GridCoordinate::from_row_major_index(3, columns), GridCoordinate::new(1, 0));
        assert_eq!(GridCoordinate::from_row_major_index(7, columns), GridCoordinate::new(2, 1));
    }

    #[test]
    fn wall_codes() {
        assert_eq!(CellWalls::all().decimal_code(), 1111);
        assert_eq!(CellWalls::empty().decimal_code(), 0);
        assert_eq!(CellWalls::TOP.decimal_code(), 1);
        assert_eq!(CellWalls::RIGHT.decimal_code(), 10);
        assert_eq!(CellWalls::BOTTOM.decimal_code(), 100);
        assert_eq!(CellWalls::LEFT.decimal_code(), 1000);
        assert_eq!((CellWalls::TOP | CellWalls::BOTTOM).decimal_code(), 101);
    }

    #[test]
    fn wall_codes_decode() {
        for bits in 0..16u8 {
            let walls = CellWalls::from_bits_truncate(bits);
            assert_eq!(CellWalls::from_decimal_code(walls.decimal_code()), Some(walls));
        }
        assert_eq!(CellWalls::from_decimal_code(2), None);
        assert_eq!(CellWalls::from_decimal_code(1211), None);
        assert_eq!(CellWalls::from_decimal_code(11111), None);
    }

    #[test]
    fn walls_by_direction() {
        let walls = CellWalls::all() - Direction::Right.wall();
        assert!(walls.has_wall(Direction::Up));
        assert!(!walls.has_wall(Direction::Right));
        assert!(walls.has_wall(Direction::Down));
        assert!(walls.has_wall(Direction::Left));
    }
}
