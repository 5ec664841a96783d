//! Contains strategy orchestrators and their reporting.

pub mod config;

mod report;
pub use self::report::*;

mod runner;

mod strategy;
pub use self::strategy::*;

mod tsp;
pub use self::tsp::TspSolver;

mod vrp;
pub use self::vrp::VrpSolver;
