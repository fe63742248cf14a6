use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod clamp;
mod cube;
mod error;
mod grid;
mod orientation;
mod parse;
mod score;

use crate::cube::Cube;
use crate::orientation::Face;
use crate::parse::{parse_puzzle, Puzzle};
use crate::score::Answers;

type Result<T> = std::result::Result<T, anyhow::Error>;

/// Paints a twisting cube from a list of instructions and prints the three answers.
#[derive(Parser)]
#[command(name = "cube", version)]
struct Cli {
    /// Puzzle input; read from stdin when omitted
    input: Option<PathBuf>,

    /// Log every instruction and twist
    #[arg(short, long)]
    verbose: bool,

    /// Dump both final grids of this face to stderr
    #[arg(long)]
    show_face: Option<Face>,
}

fn run(puzzle: &Puzzle) -> Result<Cube> {
    let mut cube = Cube::new();

    if puzzle.twists.len() > puzzle.instructions.len() {
        warn!(
            "{} twists left over after the last instruction",
            puzzle.twists.len() - puzzle.instructions.len()
        );
    }

    let twists = puzzle
        .twists
        .iter()
        .copied()
        .map(Some)
        .pad_using(puzzle.instructions.len(), |_| None);

    for (ins, twist) in puzzle.instructions.iter().zip(twists) {
        cube.apply_instruction(ins)?;
        cube.apply_twist(twist);
    }

    info!(absorption = ?cube.absorption(), "done");
    Ok(cube)
}

fn solve(s: &str) -> Result<(Cube, Answers)> {
    let puzzle = parse_puzzle(s)?;
    info!(
        instructions = puzzle.instructions.len(),
        twists = puzzle.twists.len(),
        "parsed puzzle"
    );
    let cube = run(&puzzle)?;
    let answers = score::answers(&cube);
    Ok((cube, answers))
}

fn show_face(cube: &Cube, face: Face) {
    let format_cell = |x: &i64| format!("{:4}", x);
    eprintln!("Primary grid of {}:", face);
    eprint!("{}", cube.primary(face).show(format_cell));
    eprintln!("Secondary grid of {}:", face);
    eprint!("{}", cube.secondary(face).show(format_cell));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let buffer = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let (cube, answers) = solve(&buffer)?;

    if let Some(face) = cli.show_face {
        show_face(&cube, face);
    }

    println!("{}", answers.part1);
    println!("{}", answers.part2);
    println!("{}", answers.part3);

    Ok(())
}
