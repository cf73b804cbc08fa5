//! Command Line Interface (CLI) layer for logocut.
//!
//! `args` defines argument parsing and `runner` drives the load, transform and
//! save steps while printing progress lines. Embedders should call
//! `logocut::api` instead.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
