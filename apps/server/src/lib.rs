pub mod api;
pub mod config;
pub mod error;
pub mod models;
mod main_lib;
mod snapshot;

pub use main_lib::{build_state, init_tracing, AppState};
