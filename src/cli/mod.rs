//! Command-line interface module.

mod args;
pub mod build;
pub mod check;
mod common;
pub mod registry;
mod report;
pub mod resolve;

pub use args::{Cli, Commands};
