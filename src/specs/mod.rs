// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific parsing for the league site. Each spec owns one page and
//! encodes *where the ground truth lives in the HTML* and *how to extract it*.
//!
//! ## What lives here
//! - **Pure HTML parsing**: input is the page source, output is a typed record
//!   (`LeagueTable`, `TeamStats`) or a `ParseError`.
//! - **Selector / pattern choice**: header-text column lookup for the league table,
//!   text patterns for the team stat cards.
//!
//! ## What does **not** live here
//! - **Networking** (`ingest`), **caching/persistence** (`store`, `runner`),
//!   **metrics** (`features`), **GUI**.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → runner::load_* → ingest::{get_league_table_with, team_stats_with}
//!                                   ↘ core::net::Http::get → specs::<page>::parse
//! ```
//!
//! `ingest::{get_league_table, parse_team_page_wide}` are the one-shot forms
//! that build their own client.
//!
//! ## Testing notes
//! Specs are tested offline against inline HTML fixtures.
pub mod league_table;
pub mod team_page;
