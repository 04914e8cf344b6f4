use itertools::Itertools;
use std::fmt;

use crate::cells::{Direction, GridCoordinate};
use crate::walls::WallGrid;

pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: GridCoordinate) -> String {
        String::from("   ")
    }
}

#[derive(Debug)]
pub struct StartPointDisplay {
    start: GridCoordinate,
}
impl StartPointDisplay {
    pub fn new(start: GridCoordinate) -> StartPointDisplay {
        StartPointDisplay { start }
    }
}
impl GridDisplay for StartPointDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if coord == self.start {
            String::from(" S ")
        } else {
            String::from("   ")
        }
    }
}

/// Text drawing of a maze, `+---+` corners and sides with `|` walls.
pub struct TextRendering<'a> {
    grid: &'a WallGrid,
    grid_display: Option<&'a dyn GridDisplay>,
}

impl<'a> TextRendering<'a> {
    pub fn new(grid: &'a WallGrid) -> TextRendering<'a> {
        TextRendering {
            grid,
            grid_display: None,
        }
    }

    pub fn with_display(mut self, grid_display: &'a dyn GridDisplay) -> TextRendering<'a> {
        self.grid_display = Some(grid_display);
        self
    }
}

impl<'a> fmt::Display for TextRendering<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const CORNER: &str = "+";
        const WALL_LR_3: &str = "---";
        const WALL_UD: &str = "|";
        const OPEN_3: &str = "   ";
        const OPEN: &str = " ";
        let default_cell_body = String::from(OPEN_3);

        let grid = self.grid;
        let mut output = String::new();

        // Special case the north most boundary, each row below draws its own southern walls.
        for (index_row, row) in grid.iter_row().enumerate() {
            if index_row == 0 {
                output.push_str(CORNER);
                for coord in &row {
                    output.push_str(if grid.has_wall(*coord, Direction::Up) { WALL_LR_3 } else { OPEN_3 });
                    output.push_str(CORNER);
                }
                output.push('\n');
            }

            let mut row_middle_section_render = String::new();
            let mut row_bottom_section_render = String::from(CORNER);
            for (index_column, coord) in row.iter().enumerate() {
                if index_column == 0 {
                    row_middle_section_render.push_str(if grid.has_wall(*coord, Direction::Left) {
                                                           WALL_UD
                                                       } else {
                                                           OPEN
                                                       });
                }

                if let Some(displayer) = self.grid_display {
                    row_middle_section_render.push_str(displayer.render_cell_body(*coord).as_str());
                } else {
                    row_middle_section_render.push_str(default_cell_body.as_str());
                }
                row_middle_section_render.push_str(if grid.has_wall(*coord, Direction::Right) {
                                                       WALL_UD
                                                   } else {
                                                       OPEN
                                                   });

                row_bottom_section_render.push_str(if grid.has_wall(*coord, Direction::Down) {
                                                       WALL_LR_3
                                                   } else {
                                                       OPEN_3
                                                   });
                row_bottom_section_render.push_str(CORNER);
            }

            output.push_str(row_middle_section_render.as_ref());
            output.push('\n');
            output.push_str(row_bottom_section_render.as_ref());
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}

impl fmt::Display for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", TextRendering::new(self))
    }
}

/// Table of the decimal wall codes, tab separated, one grid row per line.
pub struct WallCodes<'a>(pub &'a WallGrid);

impl<'a> fmt::Display for WallCodes<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.0.decimal_codes() {
            writeln!(f, "{}", row.iter().format("\t"))?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{ColumnsCount, RowsCount};

    fn walled(rows: usize, columns: usize) -> WallGrid {
        WallGrid::new(RowsCount(rows), ColumnsCount(columns)).expect("valid dimensions")
    }

    #[test]
    fn single_cell_text() {
        assert_eq!(format!("{}", walled(1, 1)), "+---+\n|   |\n+---+\n");
    }

    #[test]
    fn corridor_text() {
        let mut g = walled(1, 3);
        g.remove_wall_pair(GridCoordinate::new(0, 0), Direction::Right).expect("in bounds");
        g.remove_wall_pair(GridCoordinate::new(0, 1), Direction::Right).expect("in bounds");
        assert_eq!(format!("{}", g), "+---+---+---+\n|           |\n+---+---+---+\n");
    }

    #[test]
    fn two_by_two_text_with_start() {
        let mut g = walled(2, 2);
        let gc = |r, c| GridCoordinate::new(r, c);
        g.remove_wall_pair(gc(0, 0), Direction::Right).expect("in bounds");
        g.remove_wall_pair(gc(0, 1), Direction::Down).expect("in bounds");
        g.remove_wall_pair(gc(1, 1), Direction::Left).expect("in bounds");

        let start = StartPointDisplay::new(gc(1, 0));
        let text = format!("{}", TextRendering::new(&g).with_display(&start));
        let expected = "+---+---+\n\
                        |       |\n\
                        +---+   +\n\
                        | S     |\n\
                        +---+---+\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn wall_code_table() {
        let mut g = walled(2, 2);
        g.remove_wall_pair(GridCoordinate::new(0, 0), Direction::Down).expect("in bounds");
        assert_eq!(format!("{}", WallCodes(&g)), "1011\t1111\n1110\t1111\n");
    }
}
