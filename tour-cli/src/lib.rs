//! A command line interface library: builds distance matrices from problem files, runs routing
//! strategies against a routing engine, and reports the resulting tours.
//!
//! # Orchestrators
//!
//! [`extensions::solve::TspSolver`] runs a selected set of strategies for a single vehicle,
//! [`extensions::solve::VrpSolver`] additionally installs a route length dimension derived from
//! the problem's `MAX_ALLOWED_ROUTE` bound and uses several vehicles. Each strategy gets a freshly
//! built routing model, so attempts do not influence each other.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

pub use tour_core as core;
pub use tour_scientific as scientific;

pub mod extensions;
