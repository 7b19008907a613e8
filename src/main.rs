//! Jigsaw Puzzle Generator
//!
//! Generates the piece shapes for a jigsaw puzzle and prints them, either
//! for an explicit grid size or for an image of a given size cut into
//! pieces of a chosen size.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use jigsaw::census::ShapeCensus;
use jigsaw::grid::{format_class_names, format_labels};
use jigsaw::layout::{grid_dimensions, PieceGeometry, PieceSize};
use jigsaw::{generate, Grid, PieceLabel, PuzzleError};

/// Generates interlocking jigsaw piece shapes.
#[derive(Parser)]
#[command(name = "jigsaw")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate piece shapes for a grid of the given size.
    Generate {
        #[arg(long, allow_negative_numbers = true)]
        rows: i64,
        #[arg(long, allow_negative_numbers = true)]
        columns: i64,
        /// Seed for a reproducible puzzle.
        #[arg(long)]
        seed: Option<u64>,
        /// Print shape class names instead of edge codes.
        #[arg(long)]
        classes: bool,
    },
    /// Cut an image of the given pixel size and print its pieces.
    Image {
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
        /// Piece size: small, normal or big.
        #[arg(long, default_value = "normal")]
        size: String,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Count distinct piece shapes in a generated grid.
    Census {
        #[arg(long, allow_negative_numbers = true)]
        rows: i64,
        #[arg(long, allow_negative_numbers = true)]
        columns: i64,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(command: Command) -> Result<(), PuzzleError> {
    match command {
        Command::Generate {
            rows,
            columns,
            seed,
            classes,
        } => {
            let labels = generate_grid(rows, columns, seed)?;
            if classes {
                print!("{}", format_class_names(&labels));
            } else {
                print!("{}", format_labels(&labels));
            }
        }
        Command::Image {
            width,
            height,
            size,
            seed,
        } => {
            let size = PieceSize::from_name(&size);
            let (rows, columns) = grid_dimensions(width, height, size)?;
            info!(width, height, size = size.name(), rows, columns, "cutting image");
            let labels = generate_grid(rows, columns, seed)?;
            print!("{}", format_pieces(&labels, &PieceGeometry::new(size)));
        }
        Command::Census {
            rows,
            columns,
            seed,
        } => {
            let labels = generate_grid(rows, columns, seed)?;
            print!("{}", format_census(&ShapeCensus::of(&labels)));
        }
    }
    Ok(())
}

fn generate_grid(rows: i64, columns: i64, seed: Option<u64>) -> Result<Grid<PieceLabel>, PuzzleError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate(rows, columns, &mut rng)
}

/// One line per piece: position, home offset, background offset and shape.
fn format_pieces(labels: &Grid<PieceLabel>, geometry: &PieceGeometry) -> String {
    let mut output = String::new();
    for (cell, label) in labels.iter() {
        let (x, y) = geometry.home_position(cell);
        let (bg_x, bg_y) = geometry.background_position(cell);
        output.push_str(&format!(
            "{}x{} home=({x},{y}) background=({bg_x},{bg_y}) {}\n",
            cell.0,
            cell.1,
            label.class_name()
        ));
    }
    output
}

fn format_census(census: &ShapeCensus) -> String {
    let mut output = format!(
        "corners: {}\nborder: {}\ninterior: {}\ndistinct shapes: {}\n",
        census.corners(),
        census.border(),
        census.interior(),
        census.distinct_shapes()
    );
    for (label, count) in census.ranked() {
        output.push_str(&format!("{} {count}\n", label.code()));
    }
    output
}
