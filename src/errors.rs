//! Error types for maze generation and export.
//!
//! Other modules `use crate::errors::*;` to get the `Error`, `ErrorKind`, `Result` and
//! `ResultExt` types that `error_chain!` creates.

use crate::cells::{Direction, GridCoordinate};
use error_chain::*;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        Image(::image::ImageError);
    }

    errors {
        InvalidDimensions(rows: usize, columns: usize) {
            description("invalid maze dimensions")
            display("invalid maze dimensions {} x {}: rows and columns must be positive", rows, columns)
        }

        OutOfBounds(coord: GridCoordinate, direction: Option<Direction>) {
            description("grid coordinate out of bounds")
            display("{} is out of bounds{}", coord,
                    direction.map(|d| format!(" when moving {:?}", d)).unwrap_or_default())
        }

        InvalidStartCell(coord: GridCoordinate) {
            description("start cell is not on the grid")
            display("start cell {} is not on the grid", coord)
        }

        InvalidImageSize(rows: usize, columns: usize, cell_pixels: u32) {
            description("maze image cannot be drawn at this size")
            display("cannot draw a {} x {} maze with {} pixel cells", rows, columns, cell_pixels)
        }
    }
}
