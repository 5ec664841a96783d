#[cfg(test)]
#[path = "../../tests/unit/tsplib/reader_test.rs"]
mod reader_test;

use crate::common::*;
use std::io::{BufReader, Read};
use tour_core::models::PointSet;

/// A trait to read points of a coordinate-only tsplib95 problem: every data line is an
/// `index x y` record. Please note that it is very basic implementation of the format specification:
/// header lines are not supported.
pub trait TsplibProblem {
    /// Reads points of tsplib95 problem.
    fn read_tsplib(self, encoding: CoordinateEncoding) -> ReadResult<PointSet>;
}

impl<R: Read> TsplibProblem for BufReader<R> {
    fn read_tsplib(self, encoding: CoordinateEncoding) -> ReadResult<PointSet> {
        TsplibReader::new(self, encoding).read_points()
    }
}

impl TsplibProblem for String {
    fn read_tsplib(self, encoding: CoordinateEncoding) -> ReadResult<PointSet> {
        TsplibReader::new(BufReader::new(self.as_bytes()), encoding).read_points()
    }
}

const EOF_MARKER: &str = "EOF";

struct TsplibReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    encoding: CoordinateEncoding,
    line_number: usize,
}

impl<R: Read> TsplibReader<R> {
    fn new(reader: BufReader<R>, encoding: CoordinateEncoding) -> Self {
        Self { buffer: String::new(), reader, encoding, line_number: 0 }
    }

    fn read_points(&mut self) -> ReadResult<PointSet> {
        let mut points = PointSet::default();

        while self.read_line()? > 0 {
            let line = self.buffer.trim();

            if line.is_empty() {
                continue;
            }

            if line == EOF_MARKER {
                break;
            }

            let fields =
                parse_fields(line, self.encoding).map_err(|err| err.with_context(format!("line {}", self.line_number)))?;

            if fields.len() < 3 {
                return Err(ReadError::Parse(format!(
                    "line {}: expecting 'index x y' record, got '{line}'",
                    self.line_number
                )));
            }

            points.push((fields[1], fields[2]));
        }

        Ok(points)
    }

    fn read_line(&mut self) -> ReadResult<usize> {
        self.line_number += 1;
        read_line(&mut self.reader, &mut self.buffer)
    }
}
