// src/cli.rs
//
// Headless front end: same runner as the GUI, output to stdout or files.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::config::options::{AppOptions, ExportFormat};
use crate::config::settings;
use crate::model::LeagueTable;
use crate::progress::Progress;
use crate::table::Table;
use crate::{runner, store};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Corn Liga North team stats")]
pub struct Cli {
    /// Settings file (TOML); defaults to ./corn_stats.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Re-scrape the league table and every team page, then recompute metrics.
    Refresh {
        /// Only re-scrape team pages; keep the league table snapshot.
        #[arg(long)]
        teams_only: bool,
        /// Recompute metrics from the raw team snapshot without fetching.
        #[arg(long, conflicts_with = "teams_only")]
        offline: bool,
    },
    /// Print the league standings.
    Standings,
    /// Print team stats: one team transposed, or every team.
    Stats {
        /// Team name as shown in the standings.
        #[arg(long)]
        team: Option<String>,
    },
    /// Write a table to CSV/TSV.
    Export {
        #[arg(value_enum)]
        table: ExportTable,
        #[arg(long, value_enum)]
        format: Option<Format>,
        /// Output directory.
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long)]
        no_headers: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportTable {
    League,
    Teams,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

/// Progress lines on stderr.
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, slug: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, slug);
    }
}

fn print_table(t: &Table) {
    let (headers, rows) = t.to_string_grid();
    println!("{}", headers.join("\t"));
    for r in rows {
        println!("{}", r.join("\t"));
    }
}

fn load_options(path: Option<&PathBuf>) -> Result<AppOptions> {
    let opts = match path {
        Some(p) => settings::load_from(p),
        None => settings::load(),
    };
    opts.wrap_err("loading settings")
}

fn team_stats(opts: &AppOptions, league: &LeagueTable, force: bool) -> Result<Table> {
    let mut prog = CliProgress { done: 0, total: 0 };
    runner::load_team_stats(opts, league, force, &mut prog).wrap_err("loading team stats")
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut opts = load_options(cli.config.as_ref())?;

    match cli.command {
        Command::Refresh { teams_only, offline } => {
            if offline {
                let league = runner::load_league_table(&opts, false)?;
                let stats = runner::rebuild_from_raw(&opts, &league)?
                    .ok_or_else(|| eyre!("no raw snapshot at {}", opts.data.raw_team_stats.display()))?;
                eprintln!("Recomputed {} teams → {}", stats.row_count(), opts.data.team_stats.display());
                return Ok(());
            }
            let league = runner::load_league_table(&opts, !teams_only).wrap_err("loading league table")?;
            let stats = team_stats(&opts, &league, true)?;
            eprintln!(
                "League table: {} teams, team stats: {} teams → {}",
                league.len(),
                stats.row_count(),
                opts.data.team_stats.display()
            );
        }

        Command::Standings => {
            let league = runner::load_league_table(&opts, false).wrap_err("loading league table")?;
            print_table(&league.to_table());
        }

        Command::Stats { team } => {
            let league = runner::load_league_table(&opts, false).wrap_err("loading league table")?;
            let stats = team_stats(&opts, &league, false)?;
            match team {
                Some(name) => {
                    let row = stats.filter_eq("Team", &name);
                    if row.is_empty() {
                        return Err(eyre!("no team named '{name}'; known: {}", league.team_names().join(", ")));
                    }
                    for (col, v) in row.transpose_row(0) {
                        println!("{col}\t{v}");
                    }
                }
                None => print_table(&stats),
            }
        }

        Command::Export { table, format, out, no_headers } => {
            if let Some(f) = format {
                opts.export.format = f.into();
            }
            if let Some(dir) = out {
                opts.export.out_dir = dir;
            }
            if no_headers {
                opts.export.include_headers = false;
            }

            let league = runner::load_league_table(&opts, false).wrap_err("loading league table")?;
            let (stem, t) = match table {
                ExportTable::League => ("north_liga_table", league.to_table()),
                ExportTable::Teams => ("north_liga_team_stats", team_stats(&opts, &league, false)?),
            };
            let path = store::export_table(&opts.export, stem, &t)?;
            eprintln!("Exported {} rows → {}", t.row_count(), path.display());
        }
    }
    Ok(())
}
