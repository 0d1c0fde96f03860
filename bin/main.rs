use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use mazenav::{compress, encode_path, find_path, util::sample_cells, Maze};

/// Turn a color-coded maze image into driving instructions.
///
/// White cells are free, black cells are walls, the green cell is the
/// start and the red cell is the goal.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Path to the maze image.
    image: PathBuf,

    /// Side length of one maze cell, in pixels.
    #[arg(long, default_value_t = 10)]
    cell_size: u32,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let args = Args::parse();

    let img = image::open(&args.image)
        .with_context(|| format!("failed to open {}", args.image.display()))?;

    let samples = sample_cells(&img, args.cell_size)?;
    let maze = Maze::classify(&samples)?;

    let path = find_path(&maze)?;
    println!("{}", maze.render(&path));

    let instructions = compress(&encode_path(&path)?);
    for (i, instruction) in instructions.iter().enumerate() {
        println!("{} : {}", i + 1, instruction);
    }

    Ok(())
}
