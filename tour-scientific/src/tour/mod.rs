//! Contains functionality to read a known (reference) tour of a problem.

mod reader;
pub use self::reader::*;
