// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod discover;
pub mod error;
pub mod file;
pub mod git;
pub mod gui;
pub mod progress;
pub mod readme;
pub mod runner;
pub mod scrape;
pub mod session;

pub use error::{Error, Result, ValidationError};
pub use specs::package::PackageRecord;
