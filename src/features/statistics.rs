// src/features/statistics.rs
//
// Team box-score totals → advanced metrics.
//
// Every function here appends (or replaces) one or more numeric columns on a
// `Table` and is deterministic. Division is guarded: a zero/negative/null
// denominator gives a Null cell, never NaN or inf. A missing input *column*
// is an error for the whole table.

use crate::error::{FeatureError, MissingColumnError};
use crate::table::{Table, Value};

/// Raw columns `calculate_all_advanced_stats` needs.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Games", "Wins", "Scored", "Allowed",
    "FGM_Tot", "FGA_Tot", "2PM_Tot", "2PA_Tot", "3PM_Tot", "3PA_Tot", "FTM_Tot", "FTA_Tot",
    "ORB_Tot", "DRB_Tot", "AST_Tot", "TO_Tot", "STL_Tot", "BLK_Tot", "PFD_Tot",
];

/// Every column `calculate_all_advanced_stats` adds, in the order it adds them.
pub const METRIC_COLUMNS: &[&str] = &[
    "FG%", "2P%", "3P%", "FT%",
    "%Pts_2P", "%Pts_3P", "%Pts_FT",
    "2Pr", "3Pr", "FTr",
    "TRB_Tot", "TRB_Avg",
    "ASS_TO_Ratio",
    "eFG%", "TS%",
    "ORB%", "DRB%",
    "POSS_Tot",
    "Off_Rating", "Def_Rating", "TO%", "Net_Rating",
    "Pace",
    "AST_Rate", "STL_Rate", "BLK_Rate", "PFD_Rate",
    "Win_%",
    "Points_Diff", "Pts_Diff_Avg",
];

/// Optional column holding opponent possessions. When absent, a team's own
/// possession estimate stands in for its opponents' (the site doesn't publish
/// opponent box scores).
pub const OPP_POSSESSIONS: &str = "Opp_POSS_Tot";

/// Free-throw weight in the possession estimator.
const FT_FACTOR: f64 = 0.44;

type Col = Vec<Option<f64>>;

/// `n / d`, or None when either side is missing or `d <= 0`.
pub fn safe_div(n: Option<f64>, d: Option<f64>) -> Option<f64> {
    match (n, d) {
        (Some(n), Some(d)) if d > 0.0 && d.is_finite() => {
            let q = n / d;
            q.is_finite().then_some(q)
        }
        _ => None,
    }
}

fn scale(v: Option<f64>, k: f64) -> Option<f64> {
    v.map(|x| x * k)
}

/// Fetch columns after checking they all exist.
fn columns<const N: usize>(t: &Table, names: [&str; N], op: &'static str) -> Result<[Col; N], MissingColumnError> {
    t.require(&names, op)?;
    Ok(names.map(|n| t.numbers(n).unwrap_or_default()))
}

fn put(t: &mut Table, name: &str, values: impl IntoIterator<Item = Option<f64>>) {
    t.set_column(name, values.into_iter().map(Value::opt).collect());
}

fn ratio(t: &mut Table, num: &[Option<f64>], den: &[Option<f64>], k: f64, out: &str) {
    let v: Col = num.iter().zip(den).map(|(n, d)| scale(safe_div(*n, *d), k)).collect();
    put(t, out, v);
}

/// `FG%`, `2P%`, `3P%`, `FT%` as made / attempted in [0, 1].
pub fn shooting_percentages(t: &mut Table) -> Result<(), MissingColumnError> {
    let [fgm, fga, pm2, pa2, pm3, pa3, ftm, fta] = columns(
        t,
        ["FGM_Tot", "FGA_Tot", "2PM_Tot", "2PA_Tot", "3PM_Tot", "3PA_Tot", "FTM_Tot", "FTA_Tot"],
        "shooting_percentages",
    )?;
    ratio(t, &fgm, &fga, 1.0, "FG%");
    ratio(t, &pm2, &pa2, 1.0, "2P%");
    ratio(t, &pm3, &pa3, 1.0, "3P%");
    ratio(t, &ftm, &fta, 1.0, "FT%");
    Ok(())
}

/// Share of points from 2s, 3s and free throws.
pub fn shot_distribution(t: &mut Table) -> Result<(), MissingColumnError> {
    let [pm2, pm3, ftm, scored] =
        columns(t, ["2PM_Tot", "3PM_Tot", "FTM_Tot", "Scored"], "shot_distribution")?;
    let two: Col = pm2.iter().map(|v| scale(*v, 2.0)).collect();
    let three: Col = pm3.iter().map(|v| scale(*v, 3.0)).collect();
    ratio(t, &two, &scored, 1.0, "%Pts_2P");
    ratio(t, &three, &scored, 1.0, "%Pts_3P");
    ratio(t, &ftm, &scored, 1.0, "%Pts_FT");
    Ok(())
}

/// Attempt mix relative to field goal attempts.
pub fn shot_rates(t: &mut Table) -> Result<(), MissingColumnError> {
    let [pa2, pa3, fta, fga] = columns(t, ["2PA_Tot", "3PA_Tot", "FTA_Tot", "FGA_Tot"], "shot_rates")?;
    ratio(t, &pa2, &fga, 1.0, "2Pr");
    ratio(t, &pa3, &fga, 1.0, "3Pr");
    ratio(t, &fta, &fga, 1.0, "FTr");
    Ok(())
}

pub fn total_rebounds(t: &mut Table) -> Result<(), MissingColumnError> {
    let [orb, drb, games] = columns(t, ["ORB_Tot", "DRB_Tot", "Games"], "total_rebounds")?;
    let trb: Col = orb.iter().zip(&drb).map(|(o, d)| Some((*o)? + (*d)?)).collect();
    put(t, "TRB_Tot", trb.clone());
    ratio(t, &trb, &games, 1.0, "TRB_Avg");
    Ok(())
}

pub fn assist_to_turnover_ratio(t: &mut Table) -> Result<(), MissingColumnError> {
    let [ast, tov] = columns(t, ["AST_Tot", "TO_Tot"], "assist_to_turnover_ratio")?;
    ratio(t, &ast, &tov, 1.0, "ASS_TO_Ratio");
    Ok(())
}

/// `(2PM + 1.5·3PM) / FGA`. Range [0, 1.5].
pub fn effective_field_goal_percentage(t: &mut Table) -> Result<(), MissingColumnError> {
    let [pm2, pm3, fga] = columns(t, ["2PM_Tot", "3PM_Tot", "FGA_Tot"], "effective_field_goal_percentage")?;
    let num: Col = pm2.iter().zip(&pm3).map(|(a, b)| Some((*a)? + 1.5 * (*b)?)).collect();
    ratio(t, &num, &fga, 1.0, "eFG%");
    Ok(())
}

/// `Scored / (2·(FGA + 0.44·FTA))`.
pub fn true_shooting_percentage(t: &mut Table) -> Result<(), MissingColumnError> {
    let [scored, fga, fta] = columns(t, ["Scored", "FGA_Tot", "FTA_Tot"], "true_shooting_percentage")?;
    let den: Col = fga.iter().zip(&fta).map(|(a, f)| Some(2.0 * ((*a)? + FT_FACTOR * (*f)?))).collect();
    ratio(t, &scored, &den, 1.0, "TS%");
    Ok(())
}

/// League-wide per-game average of `col` (sum over teams / sum of games).
fn league_per_game(col: &[Option<f64>], games: &[Option<f64>]) -> Option<f64> {
    let (sum, g) = col
        .iter()
        .zip(games)
        .filter_map(|(v, g)| Some(((*v)?, (*g)?)))
        .fold((0.0, 0.0), |(s, n), (v, g)| (s + v, n + g));
    safe_div(Some(sum), Some(g))
}

/// `ORB% = 100·ORB / (ORB + Opp_DRB)`, `DRB% = 100·DRB / (DRB + Opp_ORB)`.
///
/// Opponent rebounds aren't published per team, so they're estimated as the
/// league per-game average times the team's games.
pub fn rebound_percentages(t: &mut Table) -> Result<(), MissingColumnError> {
    let [orb, drb, games] = columns(t, ["ORB_Tot", "DRB_Tot", "Games"], "rebound_percentages")?;
    let avg_drb = league_per_game(&drb, &games);
    let avg_orb = league_per_game(&orb, &games);

    let pct = |own: &[Option<f64>], opp_avg: Option<f64>| -> Col {
        own.iter()
            .zip(&games)
            .map(|(o, g)| {
                let opp = Some(opp_avg? * (*g)?);
                scale(safe_div(*o, Some((*o)? + opp?)), 100.0)
            })
            .collect()
    };
    let orb_pct = pct(&orb, avg_drb);
    let drb_pct = pct(&drb, avg_orb);
    put(t, "ORB%", orb_pct);
    put(t, "DRB%", drb_pct);
    Ok(())
}

/// `POSS_Tot = FGA − ORB + TOV + 0.44·FTA`.
pub fn possessions(t: &mut Table) -> Result<(), MissingColumnError> {
    let [fga, orb, tov, fta] = columns(t, ["FGA_Tot", "ORB_Tot", "TO_Tot", "FTA_Tot"], "possessions")?;
    let poss: Col = (0..t.row_count())
        .map(|i| Some(fga[i]? - orb[i]? + tov[i]? + FT_FACTOR * fta[i]?))
        .collect();
    put(t, "POSS_Tot", poss);
    Ok(())
}

/// Points scored per 100 possessions.
pub fn offensive_rating(t: &mut Table) -> Result<(), MissingColumnError> {
    let [scored, poss] = columns(t, ["Scored", "POSS_Tot"], "offensive_rating")?;
    ratio(t, &scored, &poss, 100.0, "Off_Rating");
    Ok(())
}

/// Points allowed per 100 opponent possessions.
pub fn defensive_rating(t: &mut Table) -> Result<(), MissingColumnError> {
    let opp_col = if t.has_column(OPP_POSSESSIONS) { OPP_POSSESSIONS } else { "POSS_Tot" };
    let [allowed, opp_poss] = columns(t, ["Allowed", opp_col], "defensive_rating")?;
    ratio(t, &allowed, &opp_poss, 100.0, "Def_Rating");
    Ok(())
}

/// `Off_Rating − Def_Rating`; Null if either is Null.
pub fn net_rating(t: &mut Table) -> Result<(), MissingColumnError> {
    let [off, def] = columns(t, ["Off_Rating", "Def_Rating"], "net_rating")?;
    let net: Col = off.iter().zip(&def).map(|(o, d)| Some((*o)? - (*d)?)).collect();
    put(t, "Net_Rating", net);
    Ok(())
}

/// Turnovers per 100 possessions.
pub fn turnover_percentage(t: &mut Table) -> Result<(), MissingColumnError> {
    let [tov, poss] = columns(t, ["TO_Tot", "POSS_Tot"], "turnover_percentage")?;
    ratio(t, &tov, &poss, 100.0, "TO%");
    Ok(())
}

/// Possessions per game.
pub fn pace(t: &mut Table) -> Result<(), MissingColumnError> {
    let [poss, games] = columns(t, ["POSS_Tot", "Games"], "pace")?;
    ratio(t, &poss, &games, 1.0, "Pace");
    Ok(())
}

/// `AST_Rate`, `STL_Rate`, `BLK_Rate`, `PFD_Rate`: count per 100 possessions.
pub fn rate_stats(t: &mut Table) -> Result<(), MissingColumnError> {
    let [ast, stl, blk, pfd, poss] =
        columns(t, ["AST_Tot", "STL_Tot", "BLK_Tot", "PFD_Tot", "POSS_Tot"], "rate_stats")?;
    ratio(t, &ast, &poss, 100.0, "AST_Rate");
    ratio(t, &stl, &poss, 100.0, "STL_Rate");
    ratio(t, &blk, &poss, 100.0, "BLK_Rate");
    ratio(t, &pfd, &poss, 100.0, "PFD_Rate");
    Ok(())
}

/// `Wins / Games` in [0, 1].
pub fn win_percentage(t: &mut Table) -> Result<(), MissingColumnError> {
    let [wins, games] = columns(t, ["Wins", "Games"], "win_percentage")?;
    ratio(t, &wins, &games, 1.0, "Win_%");
    Ok(())
}

/// `Points_Diff` and its per-game average.
pub fn point_differential(t: &mut Table) -> Result<(), MissingColumnError> {
    let [scored, allowed, games] = columns(t, ["Scored", "Allowed", "Games"], "point_differential")?;
    let diff: Col = scored.iter().zip(&allowed).map(|(s, a)| Some((*s)? - (*a)?)).collect();
    put(t, "Points_Diff", diff.clone());
    ratio(t, &diff, &games, 1.0, "Pts_Diff_Avg");
    Ok(())
}

/// Compute every advanced metric for a table of team rows.
///
/// Checks all `REQUIRED_COLUMNS` before doing any work. Returns a copy of the
/// input with `METRIC_COLUMNS` appended (existing columns of the same name are
/// overwritten, so feeding the output back in gives the same table).
pub fn calculate_all_advanced_stats(input: &Table) -> Result<Table, FeatureError> {
    input.require(REQUIRED_COLUMNS, "calculate_all_advanced_stats")?;
    if input.is_empty() {
        return Err(FeatureError::EmptyTable);
    }

    let mut t = input.clone();

    shooting_percentages(&mut t)?;
    shot_distribution(&mut t)?;
    shot_rates(&mut t)?;
    total_rebounds(&mut t)?;
    assist_to_turnover_ratio(&mut t)?;
    effective_field_goal_percentage(&mut t)?;
    true_shooting_percentage(&mut t)?;
    rebound_percentages(&mut t)?;

    possessions(&mut t)?;
    offensive_rating(&mut t)?;
    defensive_rating(&mut t)?;
    turnover_percentage(&mut t)?;
    net_rating(&mut t)?;

    pace(&mut t)?;
    rate_stats(&mut t)?;
    win_percentage(&mut t)?;
    point_differential(&mut t)?;

    logd!("Features: {} metrics for {} rows", METRIC_COLUMNS.len(), t.row_count());
    Ok(t)
}
