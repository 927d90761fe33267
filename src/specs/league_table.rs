// src/specs/league_table.rs
//! Scraping *spec* for the league table page.
//!
//! Purpose:
//! - Read the first `<table>` on the league page and turn it into `LeagueTable`.
//! - Locate columns by their (Serbian) header text, not by position:
//!   `Ekipa` (team), `Bodovi` (points), `Pobede` (wins), `Porazi` (losses),
//!   `Poeni +` (scored), `Poeni -` (allowed).
//!
//! Non-Responsibilities:
//! - **No networking** (see `ingest::get_league_table`).
//! - **No caching / persistence.**

use crate::core::html::first_table;
use crate::core::sanitize::{clean_team_name, parse_int_cell};
use crate::error::ParseError;
use crate::model::{LeagueTable, Standing};

/// (label for error messages, header candidates in priority order)
const TEAM: (&str, &[&str]) = ("team (ekipa)", &["ekipa"]);
const POINTS: (&str, &[&str]) = ("points (bodovi)", &["bodovi"]);
const WINS: (&str, &[&str]) = ("wins (pobede)", &["pobede"]);
const LOSSES: (&str, &[&str]) = ("losses (porazi)", &["porazi"]);
const SCORED: (&str, &[&str]) = ("scored (poeni +)", &["poeni +", "+"]);
const ALLOWED: (&str, &[&str]) = ("allowed (poeni -)", &["poeni -", "-"]);

fn find(headers: &[String], candidates: &[&str]) -> Option<usize> {
    let lowered: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
    candidates
        .iter()
        .find_map(|cand| lowered.iter().position(|h| h.contains(cand)))
}

/// Parse the league page HTML. `source` is only used in error messages.
pub fn parse(doc: &str, source: &str) -> Result<LeagueTable, ParseError> {
    let raw = first_table(doc).ok_or_else(|| ParseError::NoTable(s!(source)))?;

    let specs = [TEAM, POINTS, WINS, LOSSES, SCORED, ALLOWED];
    let found: Vec<Option<usize>> = specs.iter().map(|(_, c)| find(&raw.headers, c)).collect();

    let missing: Vec<&str> = specs
        .iter()
        .zip(&found)
        .filter(|(_, ix)| ix.is_none())
        .map(|((label, _), _)| *label)
        .collect();
    if !missing.is_empty() {
        return Err(ParseError::MissingColumns {
            missing: missing.join(", "),
            available: raw.headers.clone(),
        });
    }

    let ix: Vec<usize> = found.into_iter().flatten().collect();
    let (team_ix, points_ix, wins_ix, losses_ix, scored_ix, allowed_ix) =
        (ix[0], ix[1], ix[2], ix[3], ix[4], ix[5]);
    let need = ix.iter().copied().max().unwrap_or(0) + 1;

    let mut standings = Vec::with_capacity(raw.rows.len());
    for row in raw.rows.iter().filter(|r| r.len() >= need) {
        let (team, abbr) = clean_team_name(&row[team_ix]);
        if team.is_empty() {
            continue;
        }
        standings.push(Standing {
            position: standings.len() as u32 + 1,
            team,
            abbr,
            points: parse_int_cell(&row[points_ix]),
            wins: parse_int_cell(&row[wins_ix]),
            losses: parse_int_cell(&row[losses_ix]),
            scored: parse_int_cell(&row[scored_ix]),
            allowed: parse_int_cell(&row[allowed_ix]),
        });
    }

    logd!("Spec: league table → {} rows from {}", standings.len(), source);
    Ok(LeagueTable { standings })
}
