// src/specs/team_page.rs
//! Scraping *spec* for a team page (`/teams/<slug>`).
//!
//! The page shows stat cards as plain text; after tag stripping each card reads
//! like
//!
//! ```text
//! FG Prosečno FGA 55.3 FGM 22.1 … Ukupno FGA 553 FGM 221
//! REB O/D Prosečno ORB 9.1 DRB 20.4 … Ukupno ORB 91 DRB 204
//! AST Prosečno 12.0 … Ukupno 120
//! ```
//!
//! `Prosečno` = per game, `Ukupno` = total. The `č` is matched loosely since the
//! site has served it mis-encoded before.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::html::visible_text;
use crate::error::ParseError;
use crate::model::{PerGame, Rebounds, Shooting, TeamStats};

const AVG: &str = r"Prose\S{1,3}no";

fn two_pair(section: &str, a: &str, m: &str) -> Regex {
    let pat = format!(
        r"(?s)(?:^|\s){section}\s+{AVG}\s+{a}\s+([\d.]+)\s+{m}\s+([\d.]+).*?Ukupno\s+{a}\s+([\d.]+)\s+{m}\s+([\d.]+)"
    );
    Regex::new(&pat).expect("team page pattern")
}

fn single(metric: &str) -> Regex {
    let pat = format!(r"(?s)(?:^|\s){metric}\s+{AVG}\s+([\d.]+).*?Ukupno\s+([\d.]+)");
    Regex::new(&pat).expect("team page pattern")
}

struct Patterns {
    fg: Regex,
    two: Regex,
    three: Regex,
    ft: Regex,
    reb: Regex,
    ast: Regex,
    tov: Regex,
    stl: Regex,
    blk: Regex,
    pfd: Regex,
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    fg: two_pair("FG", "FGA", "FGM"),
    two: two_pair("2P", "2PTA", "2PTM"),
    three: two_pair("3P", "3PTA", "3PTM"),
    ft: two_pair("FT", "FTA", "FTM"),
    reb: two_pair("REB O/D", "ORB", "DRB"),
    ast: single("AST"),
    tov: single("TO"),
    stl: single("STL"),
    blk: single("BLK"),
    pfd: single("PFD"),
});

fn nums<const N: usize>(c: &Captures<'_>) -> Option<[f64; N]> {
    let mut out = [0.0; N];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = c.get(i + 1)?.as_str().parse().ok()?;
    }
    Some(out)
}

fn shooting(re: &Regex, text: &str) -> Option<Shooting> {
    let [att_avg, made_avg, att_tot, made_tot] = nums::<4>(&re.captures(text)?)?;
    Some(Shooting { att_avg, made_avg, att_tot, made_tot })
}

fn per_game(re: &Regex, text: &str) -> Option<PerGame> {
    let [avg, tot] = nums::<2>(&re.captures(text)?)?;
    Some(PerGame { avg, tot })
}

/// Parse the visible text of a team page. `team`/`abbr` are supplied by the
/// caller (they come from the URL and the league table, not the page).
pub fn parse_text(text: &str, team: &str, abbr: Option<String>, source: &str) -> Result<TeamStats, ParseError> {
    let p = &*PATTERNS;

    let reb = p.reb.captures(text).and_then(|c| nums::<4>(&c)).map(
        |[orb_avg, drb_avg, orb_tot, drb_tot]| Rebounds { orb_avg, drb_avg, orb_tot, drb_tot },
    );

    let stats = TeamStats {
        team: s!(team),
        abbr,
        fg: shooting(&p.fg, text),
        two: shooting(&p.two, text),
        three: shooting(&p.three, text),
        ft: shooting(&p.ft, text),
        reb,
        ast: per_game(&p.ast, text),
        tov: per_game(&p.tov, text),
        stl: per_game(&p.stl, text),
        blk: per_game(&p.blk, text),
        pfd: per_game(&p.pfd, text),
    };

    // At minimum the field goal card must be there.
    if stats.fg.is_none() {
        return Err(ParseError::NoStatistics(s!(source)));
    }
    Ok(stats)
}

/// Parse team page HTML.
pub fn parse(doc: &str, team: &str, abbr: Option<String>, source: &str) -> Result<TeamStats, ParseError> {
    parse_text(&visible_text(doc), team, abbr, source)
}
