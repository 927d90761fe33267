// src/config/consts.rs

// Net config
pub const TABLE_URL: &str = "https://cornliga.com/seasons/2025-26/leagues/north-liga";
pub const TEAMS_URL: &str = "https://cornliga.com/seasons/2025-26/leagues/north-liga/teams";
pub const USER_AGENT: &str = concat!("corn_stats/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 20;

pub const TEAMS: &[&str] = &[
    "ravens-belgrade",
    "belgrade-bulls",
    "kk-sljakeri",
    "kk-savski",
    "pistacci",
    "dva-telefona",
    "fireflies",
    "kk-tap-011",
    "kk-tufe",
    "phantom-troupe",
    "koza-nostra",
    "kk-bricklayers",
];

// Local data
pub const LEAGUE_TABLE_FILE: &str = "data/raw/tables/north_liga.csv";
pub const RAW_TEAM_STATS_FILE: &str = "data/raw/teams/raw_teams_stats.csv";
pub const ADV_TEAM_STATS_FILE: &str = "data/processed/teams/all_teams_stats.csv";
pub const LOGO_DIR: &str = "assets/logos";

// Logging
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Settings file (optional)
pub const SETTINGS_FILE: &str = "corn_stats.toml";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";

/// Display/export column order for the team stats table.
/// Columns not listed here are appended after these.
pub const TEAM_STATS_COLUMN_ORDER: &[&str] = &[
    // Basic info
    "Team",
    "Abbr",
    // League standings
    "Position",
    "Points",
    "Wins",
    "Losses",
    "Games",
    "Win_%",
    "Scored",
    "Allowed",
    "Points_Diff",
    "Pts_Scored_Avg",
    "Pts_Allowed_Avg",
    "Pts_Diff_Avg",
    // Shooting percentages
    "FG%",
    "2P%",
    "3P%",
    "FT%",
    "eFG%",
    "TS%",
    // Shot distribution
    "%Pts_2P",
    "%Pts_3P",
    "%Pts_FT",
    "2Pr",
    "3Pr",
    "FTr",
    // Totals (shooting)
    "FGM_Tot",
    "FGA_Tot",
    "2PM_Tot",
    "2PA_Tot",
    "3PM_Tot",
    "3PA_Tot",
    "FTM_Tot",
    "FTA_Tot",
    // Averages (shooting)
    "FGM_Avg",
    "FGA_Avg",
    "2PM_Avg",
    "2PA_Avg",
    "3PM_Avg",
    "3PA_Avg",
    "FTM_Avg",
    "FTA_Avg",
    // Rebounds
    "ORB_Tot",
    "DRB_Tot",
    "TRB_Tot",
    "ORB_Avg",
    "DRB_Avg",
    "TRB_Avg",
    "ORB%",
    "DRB%",
    // Other stats
    "AST_Tot",
    "AST_Avg",
    "TO_Tot",
    "TO_Avg",
    "STL_Tot",
    "STL_Avg",
    "BLK_Tot",
    "BLK_Avg",
    "PFD_Tot",
    "PFD_Avg",
    // Advanced metrics
    "POSS_Tot",
    "Pace",
    "Off_Rating",
    "Def_Rating",
    "Net_Rating",
    "TO%",
    "AST_Rate",
    "STL_Rate",
    "BLK_Rate",
    "PFD_Rate",
    "ASS_TO_Ratio",
];
