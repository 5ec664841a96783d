//! Module provides various helper functionality.

pub mod plot;
pub mod solve;
