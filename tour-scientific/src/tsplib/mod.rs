//! Contains functionality to read coordinate-only problems in a subset of TSPLIB95 format.

mod reader;
pub use self::reader::TsplibProblem;
