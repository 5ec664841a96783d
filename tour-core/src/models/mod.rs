//! A collection of models which describe routing problem data.

mod matrix;
pub use self::matrix::*;

mod problem;
pub use self::problem::*;
