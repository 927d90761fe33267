// src/table.rs
//
// Column-named table with nullable cells. This is the contract shared by
// ingestion (producer), the feature engine, the CSV store and the charts.
//
// - Columns are ordered; lookup is by exact name.
// - Every row has exactly `columns.len()` cells (enforced by `push_row`).
// - Numeric cells are f64; missing/undefined values are `Value::Null`.

use std::collections::HashSet;
use std::fmt;

use crate::error::MissingColumnError;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Num(f64),
    Null,
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Num(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Build a numeric cell; NaN/inf become Null.
    pub fn num(v: f64) -> Self {
        if v.is_finite() { Value::Num(v) } else { Value::Null }
    }

    pub fn opt(v: Option<f64>) -> Self {
        v.map(Value::num).unwrap_or(Value::Null)
    }

    /// Parse a stored cell: empty → Null, number → Num, anything else → Text.
    pub fn parse(cell: &str) -> Self {
        let t = cell.trim();
        if t.is_empty() {
            return Value::Null;
        }
        match t.parse::<f64>() {
            Ok(v) if v.is_finite() => Value::Num(v),
            _ => Value::Text(s!(t)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::Text(s!(s)) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::Text(s) }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self { Value::num(v) }
}

impl From<Option<f64>> for Value {
    fn from(v: Option<f64>) -> Self { Value::opt(v) }
}

impl fmt::Display for Value {
    /// Storage form: integral numbers without a fraction, Null as empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Num(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", *v as i64),
            Value::Num(v) => write!(f, "{}", v),
            Value::Null => Ok(()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns, rows: Vec::new() }
    }

    pub fn columns(&self) -> &[String] { &self.columns }
    pub fn rows(&self) -> &[Vec<Value>] { &self.rows }
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Append a row; short rows are padded with Null, long rows truncated.
    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.columns.len(), Value::Null);
        self.rows.push(row);
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let ci = self.column_index(column)?;
        self.rows.get(row)?.get(ci)
    }

    /// Numeric view of a column. Text and Null cells become None.
    pub fn numbers(&self, column: &str) -> Option<Vec<Option<f64>>> {
        let ci = self.column_index(column)?;
        Some(self.rows.iter().map(|r| r[ci].as_f64()).collect())
    }

    /// Text view of a column; numeric cells are rendered.
    pub fn texts(&self, column: &str) -> Option<Vec<String>> {
        let ci = self.column_index(column)?;
        Some(self.rows.iter().map(|r| r[ci].to_string()).collect())
    }

    /// Fail with every name in `required` that this table lacks.
    pub fn require(&self, required: &[&str], operation: &'static str) -> Result<(), MissingColumnError> {
        let mut missing: Vec<String> = required
            .iter()
            .filter(|c| !self.has_column(c))
            .map(|c| s!(*c))
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        missing.sort();
        missing.dedup();
        let mut available = self.columns.clone();
        available.sort();
        Err(MissingColumnError { operation, missing, available })
    }

    /// Set (or replace) a whole column. `values.len()` must equal `row_count()`.
    pub fn set_column(&mut self, name: &str, values: Vec<Value>) {
        debug_assert_eq!(values.len(), self.rows.len(), "column {name} length mismatch");
        match self.column_index(name) {
            Some(ci) => {
                for (row, v) in self.rows.iter_mut().zip(values) {
                    row[ci] = v;
                }
            }
            None => {
                self.columns.push(s!(name));
                for (row, v) in self.rows.iter_mut().zip(values) {
                    row.push(v);
                }
            }
        }
    }

    pub fn drop_column(&mut self, name: &str) {
        if let Some(ci) = self.column_index(name) {
            self.columns.remove(ci);
            for row in &mut self.rows {
                row.remove(ci);
            }
        }
    }

    /// Known columns first (in `order`), then every remaining column in its
    /// current order.
    pub fn reorder(&self, order: &[&str]) -> Table {
        let mut idx: Vec<usize> = order.iter().filter_map(|c| self.column_index(c)).collect();
        let known: HashSet<&str> = order.iter().copied().collect();
        idx.extend(
            self.columns
                .iter()
                .enumerate()
                .filter(|(_, c)| !known.contains(c.as_str()))
                .map(|(i, _)| i),
        );
        self.project(&idx)
    }

    fn project(&self, idx: &[usize]) -> Table {
        Table {
            columns: idx.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|r| idx.iter().map(|&i| r[i].clone()).collect())
                .collect(),
        }
    }

    /// Rows whose `column` equals `text`.
    pub fn filter_eq(&self, column: &str, text: &str) -> Table {
        let Some(ci) = self.column_index(column) else {
            return Table::new(self.columns.clone());
        };
        Table {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|r| r[ci].as_str() == Some(text))
                .cloned()
                .collect(),
        }
    }

    /// Inner join on `key`. Left row order is kept; the right side's key column
    /// is not repeated and right columns already present on the left are skipped.
    pub fn inner_join(&self, right: &Table, key: &str) -> Result<Table, MissingColumnError> {
        self.require(&[key], "inner_join")?;
        right.require(&[key], "inner_join")?;
        let lk = self.column_index(key).unwrap_or_default();
        let rk = right.column_index(key).unwrap_or_default();

        let extra: Vec<usize> = right
            .columns
            .iter()
            .enumerate()
            .filter(|(i, c)| *i != rk && !self.has_column(c))
            .map(|(i, _)| i)
            .collect();

        let mut columns = self.columns.clone();
        columns.extend(extra.iter().map(|&i| right.columns[i].clone()));
        let mut out = Table::new(columns);

        for lrow in &self.rows {
            let lkey = &lrow[lk];
            if lkey.is_null() {
                continue;
            }
            for rrow in right.rows.iter().filter(|r| &r[rk] == lkey) {
                let mut row = lrow.clone();
                row.extend(extra.iter().map(|&i| rrow[i].clone()));
                out.rows.push(row);
            }
        }
        Ok(out)
    }

    /// One row as (column, value) pairs; used for the transposed team view.
    pub fn transpose_row(&self, row: usize) -> Vec<(String, Value)> {
        match self.rows.get(row) {
            Some(r) => self.columns.iter().cloned().zip(r.iter().cloned()).collect(),
            None => Vec::new(),
        }
    }

    /// Owned string grid (headers, rows) for display/export.
    pub fn to_string_grid(&self) -> (Vec<String>, Vec<Vec<String>>) {
        (
            self.columns.clone(),
            self.rows.iter().map(|r| r.iter().map(|v| v.to_string()).collect()).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut t = Table::new(cols!["Team", "Abbr", "Wins"]);
        t.push_row(vec!["Alpha".into(), "ALP".into(), 3.0.into()]);
        t.push_row(vec!["Beta".into(), "BET".into(), 1.0.into()]);
        t
    }

    #[test]
    fn parse_cells() {
        assert_eq!(Value::parse(""), Value::Null);
        assert_eq!(Value::parse(" 12 "), Value::Num(12.0));
        assert_eq!(Value::parse("0.55"), Value::Num(0.55));
        assert_eq!(Value::parse("KK Tufe"), Value::Text(s!("KK Tufe")));
        assert_eq!(Value::parse("NaN"), Value::Text(s!("NaN")));
    }

    #[test]
    fn display_drops_integral_fraction() {
        assert_eq!(Value::Num(12.0).to_string(), "12");
        assert_eq!(Value::Num(0.5).to_string(), "0.5");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn require_lists_all_missing() {
        let err = sample().require(&["Wins", "Games", "Scored"], "test").unwrap_err();
        assert_eq!(err.missing, vec![s!("Games"), s!("Scored")]);
        assert!(err.names("Games"));
    }

    #[test]
    fn set_column_replaces_in_place() {
        let mut t = sample();
        t.set_column("Wins", vec![Value::Num(9.0), Value::Null]);
        assert_eq!(t.columns().len(), 3);
        assert_eq!(t.get(0, "Wins"), Some(&Value::Num(9.0)));
        assert_eq!(t.get(1, "Wins"), Some(&Value::Null));
    }

    #[test]
    fn reorder_puts_known_first() {
        let t = sample().reorder(&["Wins", "Team", "Nope"]);
        assert_eq!(t.columns(), &cols!["Wins", "Team", "Abbr"]);
        assert_eq!(t.get(1, "Team"), Some(&Value::from("Beta")));
    }

    #[test]
    fn inner_join_on_abbr() {
        let mut right = Table::new(cols!["Team", "Abbr", "FGA_Tot"]);
        right.push_row(vec!["beta".into(), "BET".into(), 40.0.into()]);
        right.push_row(vec!["gamma".into(), "GAM".into(), 41.0.into()]);

        let joined = sample().inner_join(&right, "Abbr").unwrap();
        assert_eq!(joined.columns(), &cols!["Team", "Abbr", "Wins", "FGA_Tot"]);
        assert_eq!(joined.row_count(), 1);
        assert_eq!(joined.get(0, "Team"), Some(&Value::from("Beta")));
        assert_eq!(joined.get(0, "FGA_Tot"), Some(&Value::Num(40.0)));
    }
}
