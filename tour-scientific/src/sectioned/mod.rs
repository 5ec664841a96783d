//! Contains functionality to read problems with a pre-computed distance table.

mod reader;
pub use self::reader::*;
