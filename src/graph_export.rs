//! Plain text graph files describing a finished maze for external graph tools.
//!
//! Three files, all one record per line:
//!
//! - edge list: a `<edge_count> <rows> <cols>` header then `<u> <v> <weight>` for each open
//!   passage, found by looking right and down from every cell.
//! - vertex plot map: `<id> <pixel_row_centre> <pixel_col_centre>` for every cell.
//! - vertex tags: `<id> <tag>` for every cell.

use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::renderers::DEFAULT_CELL_PIXELS;
use crate::units::{CellPixels, ColumnsCount, RowsCount};
use crate::walls::WallGrid;

pub const EDGE_WEIGHT: u32 = 2;
pub const VERTEX_TAG: &str = "corridor";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Should match the cell size used by the image renderer so plot positions line up.
    pub cell_side_pixels_length: CellPixels,
    /// Id of the top left cell in the vertex files.
    pub vertex_base: usize,
    /// Id of the top left cell in the edge list.
    pub edge_base: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            cell_side_pixels_length: CellPixels(DEFAULT_CELL_PIXELS),
            vertex_base: 0,
            edge_base: 1,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub source: usize,
    pub target: usize,
    pub weight: u32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VertexPlot {
    pub id: usize,
    pub pixel_row: u64,
    pub pixel_col: u64,
}

/// Output paths, any left as None is not written.
#[derive(Debug, Default, Copy, Clone)]
pub struct ExportPaths<'a> {
    pub edges: Option<&'a Path>,
    pub vertex_plot_map: Option<&'a Path>,
    pub vertex_tags: Option<&'a Path>,
}

fn cell_id(grid: &WallGrid, coord: GridCoordinate, base: usize) -> usize {
    let ColumnsCount(columns) = grid.columns();
    coord.row * columns + coord.col + base
}

pub fn edge_list(grid: &WallGrid, options: &ExportOptions) -> Vec<GraphEdge> {
    grid.iter_passages()
        .filter_map(|(coord, dir)| {
            grid.dimensions()
                .neighbour_at_direction(coord, dir)
                .map(|neighbour| {
                    GraphEdge {
                        source: cell_id(grid, coord, options.edge_base),
                        target: cell_id(grid, neighbour, options.edge_base),
                        weight: EDGE_WEIGHT,
                    }
                })
        })
        .collect()
}

pub fn vertex_plot_map(grid: &WallGrid, options: &ExportOptions) -> Vec<VertexPlot> {
    let CellPixels(cell) = options.cell_side_pixels_length;
    let cell = u64::from(cell);
    let centre = |index: usize| index as u64 * cell + cell / 2;

    grid.iter()
        .map(|coord| {
            VertexPlot {
                id: cell_id(grid, coord, options.vertex_base),
                pixel_row: centre(coord.row),
                pixel_col: centre(coord.col),
            }
        })
        .collect()
}

pub fn write_edge_list<W: Write>(grid: &WallGrid, options: &ExportOptions, out: &mut W) -> Result<()> {
    let edges = edge_list(grid, options);
    let (RowsCount(rows), ColumnsCount(columns)) = (grid.rows(), grid.columns());

    writeln!(out, "{} {} {}", edges.len(), rows, columns)?;
    for e in &edges {
        writeln!(out, "{} {} {}", e.source, e.target, e.weight)?;
    }
    Ok(())
}

pub fn write_vertex_plot_map<W: Write>(grid: &WallGrid,
                                       options: &ExportOptions,
                                       out: &mut W)
                                       -> Result<()> {
    for v in vertex_plot_map(grid, options) {
        writeln!(out, "{} {} {}", v.id, v.pixel_row, v.pixel_col)?;
    }
    Ok(())
}

pub fn write_vertex_tags<W: Write>(grid: &WallGrid, options: &ExportOptions, out: &mut W) -> Result<()> {
    for coord in grid.iter() {
        writeln!(out, "{} {}", cell_id(grid, coord, options.vertex_base), VERTEX_TAG)?;
    }
    Ok(())
}

/// Write whichever of the three graph files have a path.
pub fn save_maze_graph(grid: &WallGrid, paths: &ExportPaths, options: &ExportOptions) -> Result<()> {
    if let Some(path) = paths.edges {
        write_to_file(path, |out| write_edge_list(grid, options, out))
            .chain_err(|| format!("Failed to write maze edge list to {}", path.display()))?;
    }
    if let Some(path) = paths.vertex_plot_map {
        write_to_file(path, |out| write_vertex_plot_map(grid, options, out))
            .chain_err(|| format!("Failed to write maze vertex plot map to {}", path.display()))?;
    }
    if let Some(path) = paths.vertex_tags {
        write_to_file(path, |out| write_vertex_tags(grid, options, out))
            .chain_err(|| format!("Failed to write maze vertex tags to {}", path.display()))?;
    }
    Ok(())
}

fn write_to_file<F>(path: &Path, write_contents: F) -> Result<()>
    where F: FnOnce(&mut BufWriter<File>) -> Result<()>
{
    let mut out = BufWriter::new(File::create(path)?);
    write_contents(&mut out)?;
    out.flush()?;
    debug!("wrote {}", path.display());
    Ok(())
}
