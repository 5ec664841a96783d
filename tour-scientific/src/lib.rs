//! Scientific crate contains logic to read distance matrix problems from text files.
//!
//!
//! # Supported formats
//!
//! - **tsplib**: a coordinate-only subset of TSPLIB95 format, one `index x y` record per line,
//!   distances are rounded euclidean distances between points
//! - **sectioned**: a pre-computed distance table (`EDGE_WEIGHT_SECTION`), display coordinates
//!   (`DISPLAY_DATA_SECTION`) and an optional `MAX_ALLOWED_ROUTE` bound
//! - **tour**: a reference tour, one 1-indexed node per line
//!
//! Coordinates can be encoded as integers, floats or in a scientific notation with an implicit
//! decimal point, see [`common::CoordinateEncoding`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use tour_core as core;

mod builder;
pub use self::builder::*;

pub mod common;
pub mod sectioned;
pub mod tour;
pub mod tsplib;
