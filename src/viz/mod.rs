// src/viz/mod.rs
pub mod charts;
pub mod logos;

pub use charts::{ChartData, ChartSpec, ratings_chart, team_dashboard_charts};
pub use logos::logo_path;
