// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod glossary;
pub mod gui;
pub mod ingest;
pub mod model;
pub mod progress;
pub mod runner;
pub mod specs;
pub mod store;
pub mod table;
pub mod viz;

pub use error::{Error, Result};
pub use table::{Table, Value};
