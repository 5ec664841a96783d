#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use std::fmt::{Display, Formatter};
use std::io::prelude::*;
use std::io::{BufReader, Read};
use std::str::FromStr;
use tour_core::models::Coordinate;
use tour_core::utils::GenericError;

/// An error which happens when problem data cannot be read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadError {
    /// A data line cannot be decoded.
    Parse(String),
    /// A section marker is missing, counts do not match or the file ended prematurely.
    Format(String),
    /// Underlying io failure.
    Io(String),
}

impl Display for ReadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::Parse(msg) => write!(f, "parse error: {msg}"),
            ReadError::Format(msg) => write!(f, "format error: {msg}"),
            ReadError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for ReadError {}

impl ReadError {
    /// Prepends a context, e.g. a line number or a file path, to the error message keeping its kind.
    pub fn with_context(self, context: impl Display) -> Self {
        match self {
            ReadError::Parse(msg) => ReadError::Parse(format!("{context}: {msg}")),
            ReadError::Format(msg) => ReadError::Format(format!("{context}: {msg}")),
            ReadError::Io(msg) => ReadError::Io(format!("{context}: {msg}")),
        }
    }
}

impl From<std::io::Error> for ReadError {
    fn from(err: std::io::Error) -> Self {
        ReadError::Io(err.to_string())
    }
}

impl From<ReadError> for GenericError {
    fn from(err: ReadError) -> Self {
        GenericError::from(err.to_string())
    }
}

/// A result type of read operations.
pub type ReadResult<T> = Result<T, ReadError>;

/// Specifies how numeric fields are encoded in a data line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CoordinateEncoding {
    /// Base-10 integer.
    #[default]
    Int,
    /// Decimal number truncated toward zero.
    Float,
    /// `<mantissa><exponent>` where exponent is the last two digits and the mantissa has an implicit
    /// decimal point four digits from its right end: `1668000006` is `1668.0000e6`. Tokens of four
    /// or fewer characters are plain integers.
    Scientific,
}

impl FromStr for CoordinateEncoding {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "int" | "integer" => Ok(CoordinateEncoding::Int),
            "float" => Ok(CoordinateEncoding::Float),
            "scientific" | "sci" => Ok(CoordinateEncoding::Scientific),
            _ => Err(format!("unknown coordinate encoding: '{value}'").into()),
        }
    }
}

/// Digits of the scientific notation mantissa which are after the implicit decimal point.
const SCIENTIFIC_FRACTION_DIGITS: u32 = 4;

/// Amount of trailing exponent digits in the scientific notation.
const SCIENTIFIC_EXPONENT_DIGITS: usize = 2;

/// Splits a line on runs of whitespaces and decodes every token using the given encoding.
pub fn parse_fields(line: &str, encoding: CoordinateEncoding) -> ReadResult<Vec<Coordinate>> {
    line.split_whitespace().map(|token| parse_token(token, encoding)).collect()
}

/// Decodes a single token using the given encoding.
pub fn parse_token(token: &str, encoding: CoordinateEncoding) -> ReadResult<Coordinate> {
    match encoding {
        CoordinateEncoding::Int => parse_int(token),
        CoordinateEncoding::Float => token
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(|value| value.trunc() as Coordinate)
            .ok_or_else(|| ReadError::Parse(format!("cannot parse float: '{token}'"))),
        CoordinateEncoding::Scientific => parse_scientific(token),
    }
}

fn parse_int(token: &str) -> ReadResult<Coordinate> {
    token.parse::<Coordinate>().map_err(|err| ReadError::Parse(format!("cannot parse integer: '{token}': {err}")))
}

fn parse_scientific(token: &str) -> ReadResult<Coordinate> {
    if token.len() <= SCIENTIFIC_FRACTION_DIGITS as usize {
        return parse_int(token);
    }

    if !token.is_ascii() {
        return Err(ReadError::Parse(format!("cannot parse scientific: '{token}'")));
    }

    let (mantissa, exponent) = token.split_at(token.len() - SCIENTIFIC_EXPONENT_DIGITS);
    let mantissa = parse_int(mantissa)?;
    let exponent = exponent
        .parse::<u32>()
        .map_err(|err| ReadError::Parse(format!("cannot parse scientific exponent: '{token}': {err}")))?;

    let overflow = || ReadError::Parse(format!("scientific value is out of range: '{token}'"));

    if exponent >= SCIENTIFIC_FRACTION_DIGITS {
        10_i64
            .checked_pow(exponent - SCIENTIFIC_FRACTION_DIGITS)
            .and_then(|multiplier| mantissa.checked_mul(multiplier))
            .ok_or_else(overflow)
    } else {
        // rounds half away from zero
        let divisor = 10_i64.pow(SCIENTIFIC_FRACTION_DIGITS - exponent);
        let (quotient, remainder) = (mantissa / divisor, mantissa % divisor);

        Ok(if remainder.abs() * 2 >= divisor { quotient + mantissa.signum() } else { quotient })
    }
}

/// Reads the next line into the buffer, returns amount of read bytes (zero at the end of input).
pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> ReadResult<usize> {
    buffer.clear();
    reader.read_line(buffer).map_err(ReadError::from)
}
