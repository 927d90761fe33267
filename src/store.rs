// src/store.rs
//
// CSV snapshots on disk.
//
// - `save_table` overwrites the whole file (parent dirs created).
// - `load_table` reads headers from the first line; cells go through
//   `Value::parse` (empty → Null, numeric → Num, else Text), except in
//   `TEXT_COLUMNS`, which stay text ("011" is an abbreviation, not 11).
// - `export_table` writes CSV/TSV per `ExportOptions` for the user.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::options::ExportOptions;
use crate::error::StoreError;
use crate::table::{Table, Value};

/// Identifier columns never parsed as numbers.
pub const TEXT_COLUMNS: &[&str] = &["Team", "Abbr"];

fn text_cell(cell: &str) -> Value {
    let t = cell.trim();
    if t.is_empty() { Value::Null } else { Value::Text(s!(t)) }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io { path: path.to_path_buf(), source }
}

fn csv_err(path: &Path) -> impl FnOnce(csv::Error) -> StoreError + '_ {
    move |source| StoreError::Csv { path: path.to_path_buf(), source }
}

fn ensure_parent(path: &Path) -> Result<(), StoreError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent).map_err(io_err(parent)),
        _ => Ok(()),
    }
}

/// Serialize `table` into any writer.
pub fn write_table<W: Write>(w: W, table: &Table, delim: u8, headers: bool) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new().delimiter(delim).from_writer(w);
    if headers {
        wtr.write_record(table.columns())?;
    }
    for row in table.rows() {
        wtr.write_record(row.iter().map(|v| v.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a snapshot, replacing any previous file.
pub fn save_table(path: &Path, table: &Table) -> Result<(), StoreError> {
    ensure_parent(path)?;
    let file = fs::File::create(path).map_err(io_err(path))?;
    write_table(file, table, b',', true).map_err(csv_err(path))?;
    logd!("Store: wrote {} rows to {}", table.row_count(), path.display());
    Ok(())
}

/// Read a snapshot written by `save_table`.
pub fn load_table(path: &Path) -> Result<Table, StoreError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_err(path))?;

    let columns: Vec<String> = rdr
        .headers()
        .map_err(csv_err(path))?
        .iter()
        .map(|h| s!(h.trim()))
        .collect();

    let is_text: Vec<bool> = columns.iter().map(|c| TEXT_COLUMNS.contains(&c.as_str())).collect();

    let mut table = Table::new(columns);
    for rec in rdr.records() {
        let rec = rec.map_err(csv_err(path))?;
        table.push_row(
            rec.iter()
                .enumerate()
                .map(|(i, cell)| match is_text.get(i) {
                    Some(true) => text_cell(cell),
                    _ => Value::parse(cell),
                })
                .collect(),
        );
    }
    logd!("Store: loaded {} rows from {}", table.row_count(), path.display());
    Ok(table)
}

/// Load if the file exists; `Ok(None)` when it doesn't.
pub fn load_if_present(path: &Path) -> Result<Option<Table>, StoreError> {
    if path.is_file() { load_table(path).map(Some) } else { Ok(None) }
}

/// Export a displayed table as `<out_dir>/<stem>.<csv|tsv>`.
pub fn export_table(opts: &ExportOptions, stem: &str, table: &Table) -> Result<PathBuf, StoreError> {
    let path = opts.out_path(stem);
    ensure_parent(&path)?;
    let file = fs::File::create(&path).map_err(io_err(&path))?;
    write_table(file, table, opts.format.delim(), opts.include_headers).map_err(csv_err(&path))?;
    logf!("Export: {} rows → {}", table.row_count(), path.display());
    Ok(path)
}

/// In-memory export (clipboard / preview).
pub fn to_export_string(table: &Table, delim: u8, headers: bool) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec can't fail short of OOM.
    if write_table(&mut buf, table, delim, headers).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&buf).into_owned()
}
