use image::{Rgb, RgbImage};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::cells::{Direction, GridCoordinate};
use crate::errors::*;
use crate::units::{CellPixels, ColumnsCount, Height, RowsCount, Width};
use crate::walls::WallGrid;

pub const DEFAULT_CELL_PIXELS: u32 = 100;
const WALL_LINE_WIDTH: u32 = 6;
// The floor rectangle leaves a dark frame around the maze, wider at the bottom right edge.
const FLOOR_INSET_TOP_LEFT: i64 = 5;
const FLOOR_INSET_BOTTOM_RIGHT: i64 = 6;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);

#[derive(Debug)]
pub struct RenderOptions<'path> {
    cell_side_pixels_length: CellPixels,
    output_file: Option<&'path Path>,
    snapshot_prefix: Option<&'path str>,
}

impl<'path> RenderOptions<'path> {
    #[inline]
    pub fn cell_side_pixels_length(&self) -> CellPixels {
        self.cell_side_pixels_length
    }
}

#[derive(Debug)]
pub struct RenderOptionsBuilder<'path> {
    options: RenderOptions<'path>,
}

impl<'path> RenderOptionsBuilder<'path> {
    pub fn new() -> RenderOptionsBuilder<'path> {
        RenderOptionsBuilder {
            options: RenderOptions {
                cell_side_pixels_length: CellPixels(DEFAULT_CELL_PIXELS),
                output_file: None,
                snapshot_prefix: None,
            },
        }
    }

    pub fn cell_side_pixels_length(mut self, cell_pixels: u32) -> Self {
        self.options.cell_side_pixels_length = CellPixels(cell_pixels);
        self
    }

    /// Save the finished image here, always PNG format.
    pub fn output_file(mut self, file_name: Option<&'path Path>) -> Self {
        self.options.output_file = file_name;
        self
    }

    /// Also save the image in progress after each cell is drawn, as `<prefix>_<n>.png`.
    pub fn snapshot_prefix(mut self, prefix: Option<&'path str>) -> Self {
        self.options.snapshot_prefix = prefix;
        self
    }

    pub fn build(self) -> RenderOptions<'path> {
        self.options
    }
}

impl<'path> Default for RenderOptionsBuilder<'path> {
    fn default() -> Self {
        RenderOptionsBuilder::new()
    }
}

/// Pixel width and height of the image for a grid drawn with square cells.
pub fn image_size(grid: &WallGrid, cell_pixels: CellPixels) -> Result<(Width, Height)> {
    let (RowsCount(rows), ColumnsCount(columns), CellPixels(cell)) =
        (grid.rows(), grid.columns(), cell_pixels);
    let side = |count: usize| {
        (count as u64)
            .checked_mul(u64::from(cell))
            .filter(|&pixels| pixels > 0 && pixels <= u64::from(u32::MAX))
            .map(|pixels| pixels as u32)
    };

    match (side(columns), side(rows)) {
        (Some(w), Some(h)) => Ok((Width(w), Height(h))),
        _ => Err(ErrorKind::InvalidImageSize(rows, columns, cell).into()),
    }
}

/// Draw the walls of a maze.
///
/// The image starts black with a white floor rectangle, then every cell in row-major order
/// has a black line drawn along each side where it still has a wall.
pub fn render_wall_grid(grid: &WallGrid, options: &RenderOptions) -> Result<RgbImage> {

    let cell_pixels = options.cell_side_pixels_length;
    let (Width(width), Height(height)) = image_size(grid, cell_pixels)?;
    let mut image = RgbImage::from_pixel(width, height, BLACK);

    fill_rect(&mut image,
              FLOOR_INSET_TOP_LEFT,
              FLOOR_INSET_TOP_LEFT,
              i64::from(width) - 1 - FLOOR_INSET_BOTTOM_RIGHT,
              i64::from(height) - 1 - FLOOR_INSET_BOTTOM_RIGHT,
              WHITE);

    for (count, coord) in grid.iter().enumerate() {
        for &dir in Direction::ALL.iter() {
            if grid.has_wall(coord, dir) {
                draw_wall(&mut image, coord, dir, cell_pixels);
            }
        }

        if let Some(prefix) = options.snapshot_prefix {
            let snapshot = snapshot_path(prefix, count);
            image.save(&snapshot)
                 .chain_err(|| format!("Failed to save maze snapshot {}", snapshot.display()))?;
        }
    }
    if let Some(prefix) = options.snapshot_prefix {
        debug!("saved {} snapshots with prefix {}", grid.size(), prefix);
    }

    if let Some(path) = options.output_file {
        image.save(path)
             .chain_err(|| format!("Failed to save maze image {}", path.display()))?;
        info!("maze image {}x{} written to {}", width, height, path.display());
    }

    Ok(image)
}

pub fn snapshot_path(prefix: &str, count: usize) -> PathBuf {
    PathBuf::from(format!("{}_{}.png", prefix, count))
}

fn draw_wall(image: &mut RgbImage, coord: GridCoordinate, direction: Direction, cell_pixels: CellPixels) {
    let CellPixels(cell) = cell_pixels;
    let cell = i64::from(cell);
    let x1 = coord.col as i64 * cell;
    let y1 = coord.row as i64 * cell;
    let x2 = x1 + cell;
    let y2 = y1 + cell;

    match direction {
        Direction::Up => draw_line(image, (x1, y1), (x2, y1)),
        Direction::Right => draw_line(image, (x2, y1), (x2, y2)),
        Direction::Down => draw_line(image, (x1, y2), (x2, y2)),
        Direction::Left => draw_line(image, (x1, y1), (x1, y2)),
    }
}

/// Thick horizontal or vertical line with square ends that extend half the line width past
/// each end point.
fn draw_line(image: &mut RgbImage, (x1, y1): (i64, i64), (x2, y2): (i64, i64)) {
    let half = i64::from(WALL_LINE_WIDTH / 2);
    let (left, right) = (x1.min(x2), x1.max(x2));
    let (top, bottom) = (y1.min(y2), y1.max(y2));
    fill_rect(image,
              left - half,
              top - half,
              right + half - 1,
              bottom + half - 1,
              BLACK);
}

/// Fill the inclusive rectangle, clipped to the image. Empty if the corners are swapped.
fn fill_rect(image: &mut RgbImage, x0: i64, y0: i64, x1: i64, y1: i64, colour: Rgb<u8>) {
    let max_x = i64::from(image.width()) - 1;
    let max_y = i64::from(image.height()) - 1;
    let (x0, x1) = (x0.max(0), x1.min(max_x));
    let (y0, y1) = (y0.max(0), y1.min(max_y));
    if x0 > x1 || y0 > y1 {
        return;
    }

    for y in y0..=y1 {
        for x in x0..=x1 {
            image.put_pixel(x as u32, y as u32, colour);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn walled(rows: usize, columns: usize) -> WallGrid {
        WallGrid::new(RowsCount(rows), ColumnsCount(columns)).expect("valid dimensions")
    }

    fn render(grid: &WallGrid, cell_pixels: u32) -> RgbImage {
        let options = RenderOptionsBuilder::new()
            .cell_side_pixels_length(cell_pixels)
            .build();
        render_wall_grid(grid, &options).expect("render failed")
    }

    #[test]
    fn image_dimensions() {
        let image = render(&walled(2, 3), 100);
        assert_eq!((image.width(), image.height()), (300, 200));

        let image = render(&walled(4, 1), 10);
        assert_eq!((image.width(), image.height()), (10, 40));
    }

    #[test]
    fn zero_pixel_cells_are_rejected() {
        let options = RenderOptionsBuilder::new().cell_side_pixels_length(0).build();
        match render_wall_grid(&walled(2, 2), &options).map_err(|e| e.0) {
            Err(ErrorKind::InvalidImageSize(2, 2, 0)) => {}
            other => panic!("unexpected result {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn oversized_images_are_rejected() {
        let g = walled(2, 3);
        assert!(image_size(&g, CellPixels(u32::MAX)).is_err());
        assert!(image_size(&g, CellPixels(u32::MAX / 3)).is_ok());
    }

    #[test]
    fn walls_and_floor() {
        let image = render(&walled(2, 2), 100);

        // cell centres are floor
        assert_eq!(*image.get_pixel(50, 50), WHITE);
        assert_eq!(*image.get_pixel(150, 150), WHITE);

        // shared walls between all four cells
        assert_eq!(*image.get_pixel(100, 50), BLACK);
        assert_eq!(*image.get_pixel(97, 50), BLACK);
        assert_eq!(*image.get_pixel(102, 50), BLACK);
        assert_eq!(*image.get_pixel(50, 100), BLACK);

        // just beyond the line width is floor again
        assert_eq!(*image.get_pixel(96, 50), WHITE);
        assert_eq!(*image.get_pixel(103, 50), WHITE);

        // frame
        assert_eq!(*image.get_pixel(0, 0), BLACK);
        assert_eq!(*image.get_pixel(199, 199), BLACK);
    }

    #[test]
    fn open_passages_are_not_drawn() {
        let mut g = walled(1, 2);
        g.remove_wall_pair(GridCoordinate::new(0, 0), Direction::Right).expect("in bounds");
        let image = render(&g, 100);
        for x in 90..110 {
            assert_eq!(*image.get_pixel(x, 50), WHITE, "wall pixel at x {}", x);
        }
        // top and bottom walls of the corridor remain
        assert_eq!(*image.get_pixel(100, 1), BLACK);
        assert_eq!(*image.get_pixel(100, 98), BLACK);
    }

    #[test]
    fn snapshot_names() {
        assert_eq!(snapshot_path("rooms-colored", 3), PathBuf::from("rooms-colored_3.png"));
    }

    #[test]
    fn saves_snapshots_and_output() {
        let dir = std::env::temp_dir().join(format!("mazes-render-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let prefix = dir.join("step").to_string_lossy().into_owned();
        let output = dir.join("maze.png");

        let options = RenderOptionsBuilder::new()
            .cell_side_pixels_length(10)
            .snapshot_prefix(Some(prefix.as_str()))
            .output_file(Some(output.as_path()))
            .build();
        let g = walled(2, 2);
        render_wall_grid(&g, &options).expect("render failed");

        assert!(output.exists());
        for count in 0..4 {
            assert!(snapshot_path(&prefix, count).exists());
        }
        assert!(!snapshot_path(&prefix, 4).exists());

        let saved = image::open(&output).expect("readable png").to_rgb8();
        assert_eq!((saved.width(), saved.height()), (20, 20));

        std::fs::remove_dir_all(&dir).expect("cleanup");
    }
}
