//! Payment alerts - due-date risk classification for debts.

mod alerts_classifier;
mod alerts_format;
mod alerts_model;

pub use alerts_classifier::*;
pub use alerts_format::{format_amount, time_description};
pub use alerts_model::*;
