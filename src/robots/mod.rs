//! Robots.txt handling module
//!
//! This module provides functionality for fetching and evaluating robots.txt files.
//! Every fetch made by the pipeline is gated on these checks.

mod gate;
mod parser;

pub use gate::{RobotsDecision, RobotsGate};
pub use parser::ParsedRobots;
