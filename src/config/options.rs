// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub data: DataPaths,
    pub export: ExportOptions,
}

/// Where the league lives on the web.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    pub table_url: String,
    pub teams_url: String,
    /// Team page slugs, appended to `teams_url`.
    pub teams: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            table_url: s!(TABLE_URL),
            teams_url: s!(TEAMS_URL),
            teams: TEAMS.iter().map(|t| s!(*t)).collect(),
            timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }
}

impl SourceOptions {
    pub fn team_url(&self, slug: &str) -> String {
        join!(self.teams_url.trim_end_matches('/'), "/", slug)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// On-disk CSV snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    pub league_table: PathBuf,
    pub raw_team_stats: PathBuf,
    pub team_stats: PathBuf,
    pub logo_dirs: Vec<PathBuf>,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            league_table: PathBuf::from(LEAGUE_TABLE_FILE),
            raw_team_stats: PathBuf::from(RAW_TEAM_STATS_FILE),
            team_stats: PathBuf::from(ADV_TEAM_STATS_FILE),
            logo_dirs: vec![PathBuf::from(LOGO_DIR)],
        }
    }
}

impl DataPaths {
    /// Every snapshot relative to `root` (tests, alternate data dirs).
    pub fn under(root: &Path) -> Self {
        let d = Self::default();
        Self {
            league_table: root.join(d.league_table),
            raw_team_stats: root.join(d.raw_team_stats),
            team_stats: root.join(d.team_stats),
            logo_dirs: d.logo_dirs.into_iter().map(|p| root.join(p)).collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/<stem>.<ext>`; any extension on `stem` is replaced by the format's.
    pub fn out_path(&self, stem: &str) -> PathBuf {
        let stem = Path::new(stem)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| s!("export"));
        self.out_dir.join(join!(&stem, ".", self.format.ext()))
    }

    /// Parse GUI text into the output directory.
    pub fn set_dir(&mut self, text: &str) {
        let t = text.trim();
        if !t.is_empty() {
            self.out_dir = PathBuf::from(t);
        }
    }
}
