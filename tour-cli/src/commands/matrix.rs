#[cfg(test)]
#[path = "../../tests/unit/commands/matrix_test.rs"]
mod matrix_test;

use super::*;
use tour_cli::scientific::common::write_matrix_table;

const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_matrix_app() -> Command {
    add_problem_args(Command::new("matrix").about("Builds distance matrix and prints it as a table")).arg(
        Arg::new(OUT_RESULT_ARG_NAME)
            .help("Specifies path to the file for result output")
            .short('o')
            .long(OUT_RESULT_ARG_NAME)
            .required(false),
    )
}

/// Runs matrix command.
pub fn run_matrix(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let data = read_problem_data(matches)?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out matrix"));

    write_matrix_table(out_writer_func(out_result), &data.matrix).map_err(|err| format!("cannot write matrix: '{err}'"))
}
