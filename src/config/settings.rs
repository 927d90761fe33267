// src/config/settings.rs
//
// Optional `corn_stats.toml` next to the binary's working dir. Every key is
// optional; anything not given falls back to consts.rs.
//
//   [source]
//   table_url = "https://cornliga.com/seasons/2025-26/leagues/north-liga"
//   teams = ["ravens-belgrade", "kk-tufe"]
//
//   [export]
//   format = "tsv"

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::consts::SETTINGS_FILE;
use super::options::AppOptions;
use crate::error::{Error, Result};

pub fn load() -> Result<AppOptions> {
    load_from(Path::new(SETTINGS_FILE))
}

pub fn load_from(path: &Path) -> Result<AppOptions> {
    match fs::read_to_string(path) {
        Ok(text) => {
            let opts = parse(&text)
                .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
            logf!("Config: loaded {}", path.display());
            Ok(opts)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            logd!("Config: {} not found, using defaults", path.display());
            Ok(AppOptions::default())
        }
        Err(e) => Err(Error::Config(format!("failed to read {}: {}", path.display(), e))),
    }
}

pub fn parse(text: &str) -> std::result::Result<AppOptions, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::ExportFormat;

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(parse("").unwrap(), AppOptions::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let opts = parse(
            r#"
            [source]
            teams = ["kk-tufe"]
            timeout_secs = 5

            [export]
            format = "tsv"
            "#,
        )
        .unwrap();
        assert_eq!(opts.source.teams, vec![s!("kk-tufe")]);
        assert_eq!(opts.source.timeout_secs, 5);
        assert_eq!(opts.source.table_url, AppOptions::default().source.table_url);
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert!(opts.export.include_headers);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = std::env::temp_dir().join("corn_stats_settings_bad");
        let _ = fs::create_dir_all(&dir);
        let path = dir.join("corn_stats.toml");
        fs::write(&path, "[source\nteams = 3").unwrap();
        assert!(matches!(load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn missing_file_is_defaults() {
        let path = std::env::temp_dir().join("corn_stats_settings_none/nope.toml");
        assert_eq!(load_from(&path).unwrap(), AppOptions::default());
    }
}
