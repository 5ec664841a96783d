//! Core crate contains building blocks to orchestrate a routing engine over a distance matrix:
//! the problem models, an abstraction over the routing engine and a small reference engine.
//!
//! # Routing engine
//!
//! The search itself is treated as an external capability described by [`engine::RoutingEngine`].
//! A caller builds a [`models::RoutingProblem`] once, then creates a fresh [`engine::RoutingModel`]
//! per solve attempt, registers the distance callback, optionally adds a cumulative dimension and
//! solves it with [`engine::SearchParameters`].
//!
//! [`engine::reference::ReferenceEngine`] is a compact implementation of that capability which is
//! good enough for small and medium instances and for testing the orchestration layer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod engine;
pub mod models;
pub mod prelude;
pub mod utils;
