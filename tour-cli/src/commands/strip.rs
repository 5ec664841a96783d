#[cfg(test)]
#[path = "../../tests/unit/commands/strip_test.rs"]
mod strip_test;

use super::*;
use std::io::{BufRead, BufReader, Read};

const INPUT_ARG_NAME: &str = "INPUT";
const CHAR_ARG_NAME: &str = "char";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_strip_app() -> Command {
    Command::new("strip")
        .about("Copies a file removing every occurrence of a character, e.g. dots of decimal coordinates")
        .arg(Arg::new(INPUT_ARG_NAME).help("Sets the input file to use").required(true).index(1))
        .arg(
            Arg::new(CHAR_ARG_NAME)
                .help("Specifies character to remove")
                .long(CHAR_ARG_NAME)
                .value_parser(clap::value_parser!(char))
                .default_value("."),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

/// Runs strip command.
pub fn run_strip(matches: &ArgMatches, out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>) -> Result<(), String> {
    let input_path =
        matches.get_one::<String>(INPUT_ARG_NAME).ok_or_else(|| "input file should be specified".to_string())?;
    let symbol = matches.get_one::<char>(CHAR_ARG_NAME).copied().unwrap_or('.');

    let reader = BufReader::new(open_file(input_path, "input"));
    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));

    strip_char(reader, out_writer_func(out_result), symbol).map_err(|err| format!("cannot strip '{input_path}': '{err}'"))
}

/// Copies lines from reader to writer removing every occurrence of the symbol.
fn strip_char<R: Read, W: Write>(reader: BufReader<R>, writer: BufWriter<W>, symbol: char) -> std::io::Result<()> {
    let mut writer = writer;

    for line in reader.lines() {
        let line = line?;
        writeln!(writer, "{}", line.chars().filter(|&ch| ch != symbol).collect::<String>())?;
    }

    writer.flush()
}
