#[cfg(test)]
#[path = "../tests/unit/builder/builder_test.rs"]
mod builder_test;

use crate::common::*;
use crate::sectioned::SectionedProblem;
use crate::tsplib::TsplibProblem;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use tour_core::models::{DistanceMatrix, PointSet, RouteBound};
use tour_core::utils::GenericError;

/// Specifies a layout of the problem file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatrixFormat {
    /// Coordinate-only records, distances are calculated.
    Tsplib,
    /// Pre-computed distance table with display coordinates.
    Sectioned,
}

impl FromStr for MatrixFormat {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "tsplib" | "coordinates" => Ok(MatrixFormat::Tsplib),
            "sectioned" | "table" => Ok(MatrixFormat::Sectioned),
            _ => Err(format!("unknown matrix format: '{value}'").into()),
        }
    }
}

/// Problem data read from a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemData {
    /// A square distance matrix.
    pub matrix: DistanceMatrix,
    /// Points index-aligned with matrix rows.
    pub points: PointSet,
    /// A route bound, available for sectioned format only.
    pub route_bound: Option<RouteBound>,
}

/// Builds a distance matrix of the expected shape from a problem file.
#[derive(Clone, Debug)]
pub struct MatrixBuilder {
    rows: usize,
    cols: usize,
    format: MatrixFormat,
    encoding: CoordinateEncoding,
}

impl MatrixBuilder {
    /// Creates a new instance of `MatrixBuilder`.
    pub fn new(rows: usize, cols: usize, format: MatrixFormat, encoding: CoordinateEncoding) -> Self {
        Self { rows, cols, format, encoding }
    }

    /// Builds problem data from the file, errors are prefixed with the file path.
    pub fn build(&self, path: &Path) -> ReadResult<ProblemData> {
        let context = path.display();
        let file = File::open(path).map_err(|err| ReadError::from(err).with_context(&context))?;

        self.read(BufReader::new(file)).map_err(|err| err.with_context(&context))
    }

    /// Builds problem data from the reader.
    pub fn read<R: Read>(&self, reader: BufReader<R>) -> ReadResult<ProblemData> {
        if self.rows == 0 || self.rows != self.cols {
            return Err(ReadError::Format(format!(
                "expecting non-empty square matrix, got {}x{} shape",
                self.rows, self.cols
            )));
        }

        match self.format {
            MatrixFormat::Tsplib => {
                let points = reader.read_tsplib(self.encoding)?;

                if points.len() != self.rows {
                    return Err(ReadError::Format(format!("expecting {} points, got {}", self.rows, points.len())));
                }

                let matrix = create_euclidean_matrix(&points).map_err(|err| ReadError::Format(err.to_string()))?;

                Ok(ProblemData { matrix, points, route_bound: None })
            }
            MatrixFormat::Sectioned => {
                let data = reader.read_sectioned(self.rows, self.cols, self.encoding)?;
                let matrix =
                    DistanceMatrix::new(self.rows, data.distances).map_err(|err| ReadError::Format(err.to_string()))?;

                if let Some((i, j)) = matrix.find_asymmetry() {
                    return Err(ReadError::Format(if i == j {
                        format!("expecting zero diagonal, got [{i}][{j}] = {}", matrix.distance(i, j))
                    } else {
                        format!(
                            "expecting symmetric edge weights, got [{i}][{j}] = {} and [{j}][{i}] = {}",
                            matrix.distance(i, j),
                            matrix.distance(j, i)
                        )
                    }));
                }

                Ok(ProblemData { matrix, points: data.points, route_bound: data.route_bound })
            }
        }
    }
}

impl ProblemData {
    /// Returns the route bound or an error if the problem has none.
    pub fn require_route_bound(&self) -> Result<RouteBound, GenericError> {
        self.route_bound.ok_or_else(|| GenericError::from(format!("problem has no {}", crate::sectioned::MAX_ALLOWED_ROUTE)))
    }
}
