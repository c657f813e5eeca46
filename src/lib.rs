// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

#[cfg(feature = "cli")]
pub mod cli;
pub mod clean;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod export;
pub mod file;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod specs;
pub mod store;
