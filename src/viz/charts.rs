// src/viz/charts.rs
//
// Chart descriptions built from a team stats table. Pure data: the GUI's chart
// component paints them, tests inspect them.
//
// - Rows whose plotted value(s) are Null are left out of the chart.
// - Hover columns are optional; the ones the table lacks are skipped.
// - A missing *plotted* column fails the chart with `MissingColumnError`.

use crate::error::MissingColumnError;
use crate::table::Table;

pub const TEAM_COL: &str = "Team";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScale {
    Blues,
    RedYellowGreen,
}

impl ColorScale {
    /// Color at `t` in [0, 1] (clamped).
    pub fn sample(self, t: f64) -> [u8; 3] {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };
        let stops: &[[u8; 3]] = match self {
            ColorScale::Blues => &[[222, 235, 247], [107, 174, 214], [8, 48, 107]],
            ColorScale::RedYellowGreen => &[[215, 48, 39], [254, 224, 139], [26, 152, 80]],
        };
        let seg = t * (stops.len() - 1) as f64;
        let i = (seg.floor() as usize).min(stops.len() - 2);
        let f = seg - i as f64;
        let (a, b) = (stops[i], stops[i + 1]);
        std::array::from_fn(|k| (a[k] as f64 + (b[k] as f64 - a[k] as f64) * f).round() as u8)
    }
}

/// Extra label/value pairs shown on hover.
pub type Hover = Vec<(String, String)>;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub hover: Hover,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub hover: Hover,
}

/// One stack layer; `values[i]` belongs to `categories[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: [u8; 3],
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    /// Horizontal bars, top to bottom. Colored by value on `scale`.
    Bars { bars: Vec<Bar>, scale: ColorScale },
    /// Team markers (logo when available).
    Scatter { points: Vec<Point> },
    /// Vertical stacked bars, left to right.
    Stacked { categories: Vec<String>, series: Vec<Series> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub data: ChartData,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        match &self.data {
            ChartData::Bars { bars, .. } => bars.is_empty(),
            ChartData::Scatter { points } => points.is_empty(),
            ChartData::Stacked { categories, .. } => categories.is_empty(),
        }
    }
}

/// Point-source palette for the shot distribution chart.
const SHOT_COLORS: [[u8; 3]; 3] = [[0x1f, 0x77, 0xb4], [0xff, 0x7f, 0x0e], [0x2c, 0xa0, 0x2c]];

fn hover_for(t: &Table, row: usize, cols: &[&str]) -> Hover {
    cols.iter()
        .filter_map(|c| t.get(row, c).map(|v| (s!(*c), fmt_cell(v.as_f64(), &v.to_string()))))
        .collect()
}

fn fmt_cell(num: Option<f64>, text: &str) -> String {
    match num {
        Some(v) if v.fract() != 0.0 => format!("{v:.3}"),
        _ => s!(text),
    }
}

fn labels(t: &Table) -> Vec<String> {
    t.texts(TEAM_COL).unwrap_or_default()
}

/// Horizontal bar per team, largest value on top.
pub fn bar_chart(
    t: &Table,
    value: &str,
    title: &str,
    scale: ColorScale,
    hover: &[&str],
) -> Result<ChartSpec, MissingColumnError> {
    t.require(&[TEAM_COL, value], "bar_chart")?;
    let names = labels(t);
    let values = t.numbers(value).unwrap_or_default();

    let mut bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .filter_map(|(r, v)| {
            Some(Bar { label: names[r].clone(), value: (*v)?, hover: hover_for(t, r, hover) })
        })
        .collect();
    bars.sort_by(|a, b| b.value.total_cmp(&a.value));

    Ok(ChartSpec {
        title: s!(title),
        x_label: s!(value),
        y_label: s!(TEAM_COL),
        data: ChartData::Bars { bars, scale },
    })
}

/// One point per team at (`x`, `y`).
pub fn scatter_chart(t: &Table, x: &str, y: &str, title: &str, hover: &[&str]) -> Result<ChartSpec, MissingColumnError> {
    t.require(&[TEAM_COL, x, y], "scatter_chart")?;
    let names = labels(t);
    let xs = t.numbers(x).unwrap_or_default();
    let ys = t.numbers(y).unwrap_or_default();

    let points = (0..t.row_count())
        .filter_map(|r| {
            Some(Point { label: names[r].clone(), x: xs[r]?, y: ys[r]?, hover: hover_for(t, r, hover) })
        })
        .collect();

    Ok(ChartSpec { title: s!(title), x_label: s!(x), y_label: s!(y), data: ChartData::Scatter { points } })
}

/// Stacked bar per team over `layers`, sorted by the first layer descending.
/// A team is left out if any of its layers is Null.
pub fn stacked_bar_chart(t: &Table, layers: &[&str], title: &str, y_label: &str) -> Result<ChartSpec, MissingColumnError> {
    let mut need = vec![TEAM_COL];
    need.extend_from_slice(layers);
    t.require(&need, "stacked_bar_chart")?;

    let names = labels(t);
    let cols: Vec<Vec<Option<f64>>> = layers.iter().map(|c| t.numbers(c).unwrap_or_default()).collect();

    let mut rows: Vec<(String, Vec<f64>)> = (0..t.row_count())
        .filter_map(|r| {
            let vals: Option<Vec<f64>> = cols.iter().map(|c| c[r]).collect();
            Some((names[r].clone(), vals?))
        })
        .collect();
    rows.sort_by(|a, b| b.1.first().unwrap_or(&0.0).total_cmp(a.1.first().unwrap_or(&0.0)));

    let series = layers
        .iter()
        .enumerate()
        .map(|(i, name)| Series {
            name: s!(*name),
            color: SHOT_COLORS[i % SHOT_COLORS.len()],
            values: rows.iter().map(|(_, v)| v[i]).collect(),
        })
        .collect();

    Ok(ChartSpec {
        title: s!(title),
        x_label: s!(TEAM_COL),
        y_label: s!(y_label),
        data: ChartData::Stacked { categories: rows.into_iter().map(|(n, _)| n).collect(), series },
    })
}

/// Offensive vs defensive rating (standings page).
pub fn ratings_chart(t: &Table) -> Result<ChartSpec, MissingColumnError> {
    scatter_chart(t, "Off_Rating", "Def_Rating", "Offensive vs Defensive Rating", &["Net_Rating"])
}

/// The seven team dashboard charts, in page order. Each entry fails on its own.
pub fn team_dashboard_charts(t: &Table) -> Vec<Result<ChartSpec, MissingColumnError>> {
    let points_col = if t.has_column("Pts_Scored_Avg") { "Pts_Scored_Avg" } else { "Scored" };
    vec![
        bar_chart(
            t,
            "Pace",
            "Pace (Possessions per Game)",
            ColorScale::Blues,
            &["Net_Rating", "Off_Rating", "Def_Rating"],
        ),
        scatter_chart(
            t,
            points_col,
            "FG%",
            "Points vs Field Goal Percentage",
            &["FGM_Tot", "FGA_Tot", "eFG%", "TS%"],
        ),
        scatter_chart(
            t,
            "2PA_Avg",
            "3PA_Avg",
            "Shooting Strategy: 2-Point vs 3-Point Attempts per Game",
            &["2P%", "3P%", "%Pts_2P", "%Pts_3P"],
        ),
        scatter_chart(t, "FTA_Avg", "FT%", "Free Throw Frequency vs Efficiency", &["FTM_Avg", "FTr", "%Pts_FT"]),
        stacked_bar_chart(
            t,
            &["%Pts_2P", "%Pts_3P", "%Pts_FT"],
            "Shot Distribution by Team (% of Total Points)",
            "Share of Points",
        ),
        scatter_chart(
            t,
            "ORB%",
            "DRB%",
            "Rebounding Profile: Offensive vs Defensive Rebound %",
            &["ORB_Tot", "DRB_Tot", "TRB_Tot", "TRB_Avg"],
        ),
        bar_chart(
            t,
            "Net_Rating",
            "Teams by Net Rating",
            ColorScale::RedYellowGreen,
            &["Off_Rating", "Def_Rating", "Win_%"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;

    fn table() -> Table {
        let mut t = Table::new(cols!["Team", "Pace", "Off_Rating", "Def_Rating", "Net_Rating"]);
        t.push_row(vec!["A".into(), 70.0.into(), 105.0.into(), 100.0.into(), 5.0.into()]);
        t.push_row(vec!["B".into(), 75.0.into(), Value::Null, 98.0.into(), Value::Null]);
        t.push_row(vec!["C".into(), 65.0.into(), 99.0.into(), 104.0.into(), (-5.0).into()]);
        t
    }

    #[test]
    fn bars_sorted_largest_first() {
        let c = bar_chart(&table(), "Pace", "Pace", ColorScale::Blues, &["Net_Rating", "Nope"]).unwrap();
        let ChartData::Bars { bars, .. } = c.data else { panic!("expected bars") };
        let order: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(order, ["B", "A", "C"]);
        assert_eq!(bars[1].hover, vec![(s!("Net_Rating"), s!("5"))]);
    }

    #[test]
    fn scatter_skips_null_points() {
        let c = ratings_chart(&table()).unwrap();
        let ChartData::Scatter { points } = c.data else { panic!("expected scatter") };
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.label != "B"));
    }

    #[test]
    fn missing_plotted_column_fails() {
        let err = scatter_chart(&table(), "ORB%", "DRB%", "x", &[]).unwrap_err();
        assert!(err.names("ORB%") && err.names("DRB%"));
    }

    #[test]
    fn color_scale_endpoints() {
        assert_eq!(ColorScale::RedYellowGreen.sample(0.0), [215, 48, 39]);
        assert_eq!(ColorScale::RedYellowGreen.sample(1.0), [26, 152, 80]);
        assert_eq!(ColorScale::Blues.sample(0.5), [107, 174, 214]);
        assert_eq!(ColorScale::Blues.sample(7.0), [8, 48, 107]);
    }
}
