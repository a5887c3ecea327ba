/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Maze Solver.

Maze Solver is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Maze Solver is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Maze Solver. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! # Examples
//!
//! Generate and solve a 6 by 3 maze from a fixed seed. Without `--seed`, a random seed is selected
//! and printed so that the maze can be built again:
//!
//! ```text
//! $ maze-solver -c 6 -r 3 -s 1337
//! Maze with 3 rows and 6 columns, cell size: 20x20
//! Seed: 1337
//! +   +---+---+---+---+---+
//! | *   *   * |           |
//! +---+---+   +   +   +---+
//! | . | *   * |   |       |
//! +   +   +---+---+---+   +
//! | .   *   *   *   *   * |
//! +---+---+---+---+---+   +
//! Path: 10 cells, 11 forward moves, 2 backtracks
//! ```
//!
//! Use `--json` to get the result as a JSON document, and `--trace` to list the solver moves.

use clap::Parser;
use log::{LevelFilter, debug, error};
use rand::Rng;
use serde::Serialize;
use std::error::Error;

use maze_solver::ascii::AsciiMaze;
use maze_solver::maze::grid::default_cell_size;
use maze_solver::{CellPos, DeadEnds, Generator, Grid, Solver, Trace};

/// Generate a random maze and find a path from the entrance to the exit.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Number of columns
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(2..=50))]
    cols: u16,

    /// Number of rows
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(2..=50))]
    rows: u16,

    /// Seed for the random generator. A random seed is used when not provided
    #[arg(short, long)]
    seed: Option<u64>,

    /// Cell width, in renderer units
    #[arg(long)]
    cell_width: Option<usize>,

    /// Cell height, in renderer units
    #[arg(long)]
    cell_height: Option<usize>,

    /// Whether the dead ends stay marked after the search
    #[arg(value_enum, short = 'e', long, default_value_t = DeadEnds::Keep)]
    dead_ends: DeadEnds,

    /// Only generate the maze
    #[arg(long, default_value_t = false)]
    no_solve: bool,

    /// List the solver moves
    #[arg(short, long, default_value_t = false)]
    trace: bool,

    /// Print the result in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Result of a run, for the JSON output.
#[derive(Serialize)]
struct Report {
    summary: String,
    seed: u64,
    maze: String,
    solved: Option<bool>,
    path: Vec<CellPos>,
    forward_moves: usize,
    backtracks: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<Trace>,
}

/// Parse and process command-line options.
///
/// Return the exit status of the program.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();

    match run(&args) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

fn run(args: &Args) -> Result<u8, Box<dyn Error>> {
    let num_cols: usize = usize::from(args.cols);
    let num_rows: usize = usize::from(args.rows);
    let seed: u64 = match args.seed {
        Some(s) => s,
        None => rand::rng().random(),
    };
    debug!("Columns = {num_cols}  Rows = {num_rows}  Seed = {seed}");

    let mut grid: Grid = Grid::with_cell_size(
        num_cols,
        num_rows,
        args.cell_width.unwrap_or(default_cell_size(num_cols)),
        args.cell_height.unwrap_or(default_cell_size(num_rows)),
    )?;
    let mut trace: Trace = Trace::new();
    Generator::with_seed(seed).run(&mut grid, &mut trace);

    let mut report = Report {
        summary: grid.summary(),
        seed,
        maze: String::new(),
        solved: None,
        path: Vec::new(),
        forward_moves: 0,
        backtracks: 0,
        trace: None,
    };

    if !args.no_solve {
        let mut solver = Solver::with_seed(seed, args.dead_ends);
        let found: bool = solver.run(&mut grid, &mut trace);
        if !found {
            // A carved maze always has a path
            error!("No path found in the maze for seed {seed}");
        }
        report.solved = Some(found);
        report.path = solver.path().to_vec();
        report.forward_moves = solver.forward_moves;
        report.backtracks = solver.backtracks;
    }
    report.maze = AsciiMaze::new(&grid).with_path(&report.path).to_string();
    if args.trace {
        report.trace = Some(trace);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(match report.solved {
        Some(false) => 2,
        _ => 0,
    })
}

fn print_report(report: &Report) {
    println!("{}", report.summary);
    println!("Seed: {}", report.seed);
    print!("{}", report.maze);
    if report.solved.is_some() {
        println!(
            "Path: {} cells, {} forward moves, {} backtracks",
            report.path.len(),
            report.forward_moves,
            report.backtracks
        );
    }
    if let Some(trace) = &report.trace {
        for m in &trace.moves {
            if m.undo {
                println!("  back {} -> {}", m.from, m.to);
            } else {
                println!("       {} -> {}", m.from, m.to);
            }
        }
    }
}
