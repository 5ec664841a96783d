#[cfg(test)]
#[path = "../../tests/unit/sectioned/reader_test.rs"]
mod reader_test;

use crate::common::*;
use std::io::{BufReader, Read};
use tour_core::models::{Distance, PointSet, RouteBound};

/// A marker of the line which contains the maximum allowed route value, e.g. `MAX_ALLOWED_ROUTE: 100`.
pub const MAX_ALLOWED_ROUTE: &str = "MAX_ALLOWED_ROUTE";

/// A marker of the section with distance table values, one value per line in row-major order.
pub const EDGE_WEIGHT_SECTION: &str = "EDGE_WEIGHT_SECTION";

/// A marker of the section with display coordinates, one `index x y` record per line.
pub const DISPLAY_DATA_SECTION: &str = "DISPLAY_DATA_SECTION";

/// Data read from a sectioned file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionedData {
    /// Distance table values in row-major order, exactly `rows * cols` of them.
    pub distances: Vec<Distance>,
    /// Display coordinates, exactly `rows` of them.
    pub points: PointSet,
    /// A route bound if it is specified.
    pub route_bound: Option<RouteBound>,
}

/// A trait to read a sectioned problem with the expected shape of its distance table.
pub trait SectionedProblem {
    /// Reads sectioned problem.
    fn read_sectioned(self, rows: usize, cols: usize, encoding: CoordinateEncoding) -> ReadResult<SectionedData>;
}

impl<R: Read> SectionedProblem for BufReader<R> {
    fn read_sectioned(self, rows: usize, cols: usize, encoding: CoordinateEncoding) -> ReadResult<SectionedData> {
        SectionedReader::new(self, rows, cols, encoding).read_sections()
    }
}

impl SectionedProblem for String {
    fn read_sectioned(self, rows: usize, cols: usize, encoding: CoordinateEncoding) -> ReadResult<SectionedData> {
        SectionedReader::new(BufReader::new(self.as_bytes()), rows, cols, encoding).read_sections()
    }
}

/// Specifies which part of the file is being read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReadState {
    Scanning,
    ReadingDistances,
    ReadingPoints,
}

struct SectionedReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    rows: usize,
    cols: usize,
    encoding: CoordinateEncoding,
    line_number: usize,
}

impl<R: Read> SectionedReader<R> {
    fn new(reader: BufReader<R>, rows: usize, cols: usize, encoding: CoordinateEncoding) -> Self {
        Self { buffer: String::new(), reader, rows, cols, encoding, line_number: 0 }
    }

    fn read_sections(&mut self) -> ReadResult<SectionedData> {
        let expected_distances = self.rows * self.cols;

        let mut state = ReadState::Scanning;
        let mut distances = Vec::with_capacity(expected_distances);
        let mut points = PointSet::default();
        let mut route_bound = None;
        let (mut has_distances, mut has_points) = (false, false);

        while self.read_line()? > 0 {
            let line = self.buffer.trim();
            let at_line = |err: ReadError| err.with_context(format!("line {}", self.line_number));

            if line.is_empty() {
                continue;
            }

            if line.contains(MAX_ALLOWED_ROUTE) {
                route_bound = Some(parse_route_bound(line).map_err(at_line)?);
                continue;
            }

            state = match state {
                _ if line.contains(EDGE_WEIGHT_SECTION) => {
                    has_distances = true;
                    ReadState::ReadingDistances
                }
                _ if line.contains(DISPLAY_DATA_SECTION) => {
                    has_points = true;
                    ReadState::ReadingPoints
                }
                ReadState::Scanning => ReadState::Scanning,
                ReadState::ReadingDistances => {
                    let values = parse_fields(line, CoordinateEncoding::Int).map_err(at_line)?;

                    if let Some(value) = values.iter().find(|&&value| value < 0) {
                        return Err(at_line(ReadError::Parse(format!("negative edge weight: {value}"))));
                    }

                    if distances.len() + values.len() > expected_distances {
                        return Err(at_line(ReadError::Format(format!(
                            "more edge weights than expected {}x{} table",
                            self.rows, self.cols
                        ))));
                    }

                    distances.extend(values);
                    ReadState::ReadingDistances
                }
                ReadState::ReadingPoints => {
                    let fields = parse_fields(line, self.encoding).map_err(at_line)?;

                    if fields.len() < 3 {
                        return Err(at_line(ReadError::Parse(format!("expecting 'index x y' record, got '{line}'"))));
                    }

                    points.push((fields[1], fields[2]));

                    if fields[0] == self.rows as i64 - 1 { ReadState::Scanning } else { ReadState::ReadingPoints }
                }
            };
        }

        if !has_distances {
            return Err(ReadError::Format(format!("missing {EDGE_WEIGHT_SECTION}")));
        }

        if !has_points {
            return Err(ReadError::Format(format!("missing {DISPLAY_DATA_SECTION}")));
        }

        if distances.len() != expected_distances {
            return Err(ReadError::Format(format!(
                "expecting {}x{} edge weights, got {}",
                self.rows,
                self.cols,
                distances.len()
            )));
        }

        if points.len() != self.rows {
            return Err(ReadError::Format(format!("expecting {} display points, got {}", self.rows, points.len())));
        }

        Ok(SectionedData { distances, points, route_bound })
    }

    fn read_line(&mut self) -> ReadResult<usize> {
        self.line_number += 1;
        read_line(&mut self.reader, &mut self.buffer)
    }
}

fn parse_route_bound(line: &str) -> ReadResult<RouteBound> {
    let value = line
        .split_once(':')
        .map(|(_, value)| value.trim())
        .ok_or_else(|| ReadError::Parse(format!("expected colon separated string, got: '{line}'")))?;

    match parse_token(value, CoordinateEncoding::Int)? {
        max_route if max_route >= 0 => Ok(RouteBound::new(max_route)),
        max_route => Err(ReadError::Parse(format!("negative {MAX_ALLOWED_ROUTE}: {max_route}"))),
    }
}
