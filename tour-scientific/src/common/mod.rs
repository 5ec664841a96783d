//! Contains common text reading and writing functionality.

mod routing;
pub use self::routing::*;

mod text_reader;
pub use self::text_reader::*;

mod text_writer;
pub use self::text_writer::write_matrix_table;
