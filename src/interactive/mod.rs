//! Interactive terminal UI

pub mod app;
pub mod rendering;

pub use app::{App, Statistics, run_tui};
