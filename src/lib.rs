pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod input;
pub mod output;
pub mod report;

#[cfg(test)]
mod test_fixtures;

pub use error::{Result, VpatError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
