// src/features/mod.rs
//! Derived team metrics.
//!
//! Input is a joined league-table + team-page `Table` (one row per team);
//! output is the same table with the advanced columns appended.

pub mod statistics;

pub use statistics::{METRIC_COLUMNS, REQUIRED_COLUMNS, calculate_all_advanced_stats};
