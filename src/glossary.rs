// src/glossary.rs
//
// Column descriptions for the dashboard glossary.

use crate::config::consts::TEAM_STATS_COLUMN_ORDER;

const GLOSSARY: &[(&str, &str)] = &[
    ("Team", "Team name"),
    ("Abbr", "Team abbreviation"),
    ("Position", "Position in the league standings"),
    ("Points", "League points"),
    ("Wins", "Number of wins"),
    ("Losses", "Number of losses"),
    ("Games", "Games played (Wins + Losses)"),
    ("Win_%", "Win percentage (Wins / Games)"),
    ("Scored", "Total points scored"),
    ("Allowed", "Total points allowed"),
    ("Points_Diff", "Point differential (Scored - Allowed)"),
    ("Pts_Scored_Avg", "Average points scored per game"),
    ("Pts_Allowed_Avg", "Average points allowed per game"),
    ("Pts_Diff_Avg", "Average point differential per game"),
    ("FG%", "Field goal percentage"),
    ("2P%", "2-point field goal percentage"),
    ("3P%", "3-point field goal percentage"),
    ("FT%", "Free throw percentage"),
    ("eFG%", "Effective field goal percentage, weights 3-pointers: (2PM + 1.5 * 3PM) / FGA"),
    ("TS%", "True shooting percentage, accounts for free throws: Scored / (2 * (FGA + 0.44 * FTA))"),
    ("%Pts_2P", "Share of points scored from 2-pointers"),
    ("%Pts_3P", "Share of points scored from 3-pointers"),
    ("%Pts_FT", "Share of points scored from free throws"),
    ("2Pr", "2-point attempt rate (2PA / FGA)"),
    ("3Pr", "3-point attempt rate (3PA / FGA)"),
    ("FTr", "Free throw rate (FTA / FGA)"),
    ("FGM_Tot", "Total field goals made"),
    ("FGA_Tot", "Total field goals attempted"),
    ("2PM_Tot", "Total 2-point field goals made"),
    ("2PA_Tot", "Total 2-point field goals attempted"),
    ("3PM_Tot", "Total 3-point field goals made"),
    ("3PA_Tot", "Total 3-point field goals attempted"),
    ("FTM_Tot", "Total free throws made"),
    ("FTA_Tot", "Total free throws attempted"),
    ("FGM_Avg", "Field goals made per game"),
    ("FGA_Avg", "Field goals attempted per game"),
    ("2PM_Avg", "2-point field goals made per game"),
    ("2PA_Avg", "2-point field goals attempted per game"),
    ("3PM_Avg", "3-point field goals made per game"),
    ("3PA_Avg", "3-point field goals attempted per game"),
    ("FTM_Avg", "Free throws made per game"),
    ("FTA_Avg", "Free throws attempted per game"),
    ("ORB_Tot", "Total offensive rebounds"),
    ("DRB_Tot", "Total defensive rebounds"),
    ("TRB_Tot", "Total rebounds"),
    ("ORB_Avg", "Offensive rebounds per game"),
    ("DRB_Avg", "Defensive rebounds per game"),
    ("TRB_Avg", "Total rebounds per game"),
    ("ORB%", "Offensive rebound percentage; opponent rebounds estimated from the league average"),
    ("DRB%", "Defensive rebound percentage; opponent rebounds estimated from the league average"),
    ("AST_Tot", "Total assists"),
    ("AST_Avg", "Assists per game"),
    ("TO_Tot", "Total turnovers"),
    ("TO_Avg", "Turnovers per game"),
    ("STL_Tot", "Total steals"),
    ("STL_Avg", "Steals per game"),
    ("BLK_Tot", "Total blocks"),
    ("BLK_Avg", "Blocks per game"),
    ("PFD_Tot", "Total personal fouls drawn"),
    ("PFD_Avg", "Personal fouls drawn per game"),
    ("POSS_Tot", "Estimated possessions: FGA - ORB + TO + 0.44 * FTA"),
    ("Pace", "Possessions per game"),
    ("Off_Rating", "Offensive rating, points scored per 100 possessions"),
    ("Def_Rating", "Defensive rating, points allowed per 100 opponent possessions"),
    ("Net_Rating", "Net rating (Off_Rating - Def_Rating)"),
    ("TO%", "Turnovers per 100 possessions"),
    ("AST_Rate", "Assists per 100 possessions"),
    ("STL_Rate", "Steals per 100 possessions"),
    ("BLK_Rate", "Blocks per 100 possessions"),
    ("PFD_Rate", "Fouls drawn per 100 possessions"),
    ("ASS_TO_Ratio", "Assist-to-turnover ratio"),
    ("Opp_POSS_Tot", "Opponent possessions, when the source provides them"),
];

pub fn describe(column: &str) -> Option<&'static str> {
    GLOSSARY.iter().find(|(c, _)| *c == column).map(|(_, d)| *d)
}

/// (entries in display column order, remaining entries) for rendering.
pub fn entries() -> (Vec<(&'static str, &'static str)>, Vec<(&'static str, &'static str)>) {
    let ordered = TEAM_STATS_COLUMN_ORDER
        .iter()
        .filter_map(|c| describe(c).map(|d| (*c, d)))
        .collect();
    let other = GLOSSARY
        .iter()
        .filter(|(c, _)| !TEAM_STATS_COLUMN_ORDER.contains(c))
        .copied()
        .collect();
    (ordered, other)
}
