use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod matrix;
pub mod solve;
pub mod strip;

use std::fs::{File, OpenOptions};
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::process;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tour_cli::core::utils::InfoLogger;
use tour_cli::scientific::common::CoordinateEncoding;
use tour_cli::scientific::{MatrixBuilder, MatrixFormat, ProblemData};

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const ROWS_ARG_NAME: &str = "rows";
const COLS_ARG_NAME: &str = "cols";
const FORMAT_ARG_NAME: &str = "format";
const ENCODING_ARG_NAME: &str = "encoding";

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> File {
    File::open(path).unwrap_or_else(|err| {
        eprintln!("cannot open {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| {
        eprintln!("cannot create {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

/// Adds arguments which describe the problem file and the expected matrix shape.
fn add_problem_args(command: Command) -> Command {
    command
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::new(ROWS_ARG_NAME)
                .help("Specifies amount of matrix rows, equal to amount of nodes")
                .short('r')
                .long(ROWS_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(COLS_ARG_NAME)
                .help("Specifies amount of matrix columns, the same as rows when omitted")
                .long(COLS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies the problem file layout")
                .short('f')
                .long(FORMAT_ARG_NAME)
                .value_parser(["tsplib", "sectioned"])
                .default_value("tsplib"),
        )
        .arg(
            Arg::new(ENCODING_ARG_NAME)
                .help("Specifies the number encoding of coordinates and weights")
                .short('e')
                .long(ENCODING_ARG_NAME)
                .value_parser(["int", "float", "scientific"])
                .default_value("int"),
        )
}

/// Creates matrix builder from problem arguments.
fn create_matrix_builder(matches: &ArgMatches) -> Result<MatrixBuilder, String> {
    let rows = parse_int_value::<usize>(matches, ROWS_ARG_NAME, "matrix rows")?
        .ok_or_else(|| "matrix rows should be specified".to_string())?;
    let cols = parse_int_value::<usize>(matches, COLS_ARG_NAME, "matrix columns")?.unwrap_or(rows);

    let format = matches
        .get_one::<String>(FORMAT_ARG_NAME)
        .map_or(Ok(MatrixFormat::Tsplib), |format| format.parse::<MatrixFormat>())
        .map_err(|err| err.to_string())?;
    let encoding = matches
        .get_one::<String>(ENCODING_ARG_NAME)
        .map_or(Ok(CoordinateEncoding::default()), |encoding| encoding.parse::<CoordinateEncoding>())
        .map_err(|err| err.to_string())?;

    Ok(MatrixBuilder::new(rows, cols, format, encoding))
}

/// Builds problem data from the problem file.
fn read_problem_data(matches: &ArgMatches) -> Result<ProblemData, String> {
    let problem_path = matches
        .get_one::<String>(PROBLEM_ARG_NAME)
        .ok_or_else(|| "problem file should be specified".to_string())?;

    create_matrix_builder(matches)?
        .build(Path::new(problem_path))
        .map_err(|err| format!("cannot build distance matrix: {err}"))
}

/// Creates a logger which writes to stdout and, optionally, appends to the log file.
fn create_logger(log_path: Option<&str>) -> Result<InfoLogger, String> {
    let log_file = log_path
        .map(|path| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|err| format!("cannot open log file '{path}': '{err}'"))
        })
        .transpose()?
        .map(Mutex::new);

    Ok(Arc::new(move |msg: &str| {
        println!("{msg}");

        if let Some(file) = log_file.as_ref() {
            if let Ok(mut file) = file.lock() {
                // write errors are ignored
                let _ = writeln!(file, "{msg}");
            }
        }
    }))
}
