//! Payment strategies - ranking heuristics and monthly budget allocation.

mod strategy_calculator;
mod strategy_model;

pub use strategy_calculator::*;
pub use strategy_model::*;

#[cfg(test)]
mod strategy_calculator_tests;
