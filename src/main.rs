use docopt::Docopt;
use log::{info, log_enabled, Level};
use mazes::{
    cells::GridCoordinate,
    generators::{self, StartCell},
    graph_export::{self, ExportOptions, ExportPaths},
    grid_dimensions::RectGridDimensions,
    grid_displays::{StartPointDisplay, TextRendering, WallCodes},
    renderers,
    units::{CellPixels, ColumnsCount, RowsCount},
};
use petgraph::algo::connected_components;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use std::path::Path;

const USAGE: &str = "Mazes

Generate a perfect maze with a randomised depth first backtracker.

Usage:
    mazes_driver -h | --help
    mazes_driver <rows> <cols> [--seed=<n>] [(--start-row=<r> --start-col=<c>) | --legacy-start] [--image-out=<path> | --no-image] [--cell-pixels=<n>] [--snapshot-prefix=<prefix>] [--edges-out=<path>] [--vertex-map-out=<path>] [--vertex-tags-out=<path>] [--text] [--codes]

Options:
    -h --help                   Show this screen.
    --seed=<n>                  Seed for the random number generator. A random seed is chosen and logged if not given.
    --start-row=<r>             Row of the cell the maze is carved from.
    --start-col=<c>             Column of the cell the maze is carved from.
    --legacy-start              Always start from row 1, column 1. Needs at least 2 rows and 2 columns.
    --image-out=<path>          Output file path for an image rendering of the maze. Always PNG format [default: maze.png].
    --no-image                  Do not render an image.
    --cell-pixels=<n>           Pixel count for the side of one cell in the image and vertex plot map [default: 100].
    --snapshot-prefix=<prefix>  Also save the image after each cell is drawn, as <prefix>_<n>.png.
    --edges-out=<path>          Write the passages as an edge list: '<edges> <rows> <cols>' then '<u> <v> <weight>' per line with 1-based vertex ids.
    --vertex-map-out=<path>     Write the pixel centre of every cell: '<id> <row> <col>' per line.
    --vertex-tags-out=<path>    Write a tag for every cell: '<id> <tag>' per line.
    --text                      Print the maze as text.
    --codes                     Print the decimal wall code of every cell.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    arg_rows: usize,
    arg_cols: usize,
    flag_seed: Option<u64>,
    flag_start_row: Option<usize>,
    flag_start_col: Option<usize>,
    flag_legacy_start: bool,
    flag_image_out: String,
    flag_no_image: bool,
    flag_cell_pixels: u32,
    flag_snapshot_prefix: String,
    flag_edges_out: String,
    flag_vertex_map_out: String,
    flag_vertex_tags_out: String,
    flag_text: bool,
    flag_codes: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::mazes::errors::Error, ::mazes::errors::ErrorKind);
        }
    }
}
use crate::errors::*;

fn main() {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    if let Err(ref e) = run(&args) {
        eprintln!("error: {}", e);
        for cause in e.iter().skip(1) {
            eprintln!("caused by: {}", cause);
        }
        std::process::exit(1);
    }
}

fn run(args: &MazeArgs) -> Result<()> {

    let dimensions = RectGridDimensions::new(RowsCount(args.arg_rows), ColumnsCount(args.arg_cols))?;

    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("generating {}x{} maze with seed {}", args.arg_rows, args.arg_cols, seed);
    let mut rng = XorShiftRng::seed_from_u64(seed);

    let maze = generators::generate(dimensions, start_cell(args), &mut rng)?;
    info!("maze carved from start cell {}", maze.start);
    if log_enabled!(Level::Info) {
        let graph = maze.walls.to_graph();
        info!("{} passages, {} connected region(s)",
              graph.edge_count(),
              connected_components(&graph));
    }

    if args.flag_text {
        let start_display = StartPointDisplay::new(maze.start);
        println!("{}", TextRendering::new(&maze.walls).with_display(&start_display));
    }
    if args.flag_codes {
        print!("{}", WallCodes(&maze.walls));
    }

    if !args.flag_no_image {
        let render_options = renderers::RenderOptionsBuilder::new()
            .cell_side_pixels_length(args.flag_cell_pixels)
            .output_file(optional_path(&args.flag_image_out))
            .snapshot_prefix(optional_arg(&args.flag_snapshot_prefix))
            .build();
        renderers::render_wall_grid(&maze.walls, &render_options)?;
    }

    let export_paths = ExportPaths {
        edges: optional_path(&args.flag_edges_out),
        vertex_plot_map: optional_path(&args.flag_vertex_map_out),
        vertex_tags: optional_path(&args.flag_vertex_tags_out),
    };
    let export_options = ExportOptions {
        cell_side_pixels_length: CellPixels(args.flag_cell_pixels),
        ..ExportOptions::default()
    };
    graph_export::save_maze_graph(&maze.walls, &export_paths, &export_options)?;

    Ok(())
}

fn start_cell(args: &MazeArgs) -> StartCell {
    match (args.flag_start_row, args.flag_start_col) {
        (Some(row), Some(col)) => StartCell::Fixed(GridCoordinate::new(row, col)),
        _ if args.flag_legacy_start => StartCell::Legacy,
        _ => StartCell::Random,
    }
}

fn optional_arg(arg: &str) -> Option<&str> {
    if arg.is_empty() {
        None
    } else {
        Some(arg)
    }
}

fn optional_path(arg: &str) -> Option<&Path> {
    optional_arg(arg).map(Path::new)
}
