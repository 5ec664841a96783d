//! A command line interface to build distance matrices and solve routing problems.
//!

mod commands;

use clap::Command;
use commands::matrix::{get_matrix_app, run_matrix};
use commands::solve::{get_solve_app, run_solve};
use commands::strip::{get_strip_app, run_strip};
use std::process;

fn main() {
    let matches = Command::new("Distance Matrix Tour Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to build distance matrices and run routing strategies")
        .subcommand(get_solve_app())
        .subcommand(get_matrix_app())
        .subcommand(get_strip_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches),
        Some(("matrix", matrix_matches)) => run_matrix(matrix_matches, commands::create_write_buffer),
        Some(("strip", strip_matches)) => run_strip(strip_matches, commands::create_write_buffer),
        Some((name, _)) => Err(format!("unknown subcommand: '{name}'")),
        None => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
