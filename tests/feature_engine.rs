// tests/feature_engine.rs
//
// Properties of calculate_all_advanced_stats over hand-built team rows.
//
use corn_stats::error::FeatureError;
use corn_stats::features::statistics;
use corn_stats::features::{METRIC_COLUMNS, REQUIRED_COLUMNS, calculate_all_advanced_stats};
use corn_stats::table::{Table, Value};

/// Team row in REQUIRED_COLUMNS order.
#[derive(Clone, Copy)]
struct Raw {
    games: f64, wins: f64, scored: f64, allowed: f64,
    fgm: f64, fga: f64, pm2: f64, pa2: f64, pm3: f64, pa3: f64, ftm: f64, fta: f64,
    orb: f64, drb: f64, ast: f64, tov: f64, stl: f64, blk: f64, pfd: f64,
}

const SAMPLE: Raw = Raw {
    games: 1.0, wins: 1.0, scored: 60.0, allowed: 55.0,
    fgm: 25.0, fga: 50.0, pm2: 20.0, pa2: 35.0, pm3: 5.0, pa3: 15.0, ftm: 5.0, fta: 10.0,
    orb: 8.0, drb: 20.0, ast: 12.0, tov: 12.0, stl: 6.0, blk: 2.0, pfd: 11.0,
};

fn table(rows: &[(&str, Raw)]) -> Table {
    let mut cols = vec![String::from("Team")];
    cols.extend(REQUIRED_COLUMNS.iter().map(|c| c.to_string()));
    let mut t = Table::new(cols);
    for (name, b) in rows {
        let nums = [
            b.games, b.wins, b.scored, b.allowed, b.fgm, b.fga, b.pm2, b.pa2, b.pm3, b.pa3, b.ftm,
            b.fta, b.orb, b.drb, b.ast, b.tov, b.stl, b.blk, b.pfd,
        ];
        let mut row = vec![Value::from(*name)];
        row.extend(nums.map(Value::from));
        t.push_row(row);
    }
    t
}

fn num(t: &Table, row: usize, col: &str) -> Option<f64> {
    t.get(row, col).and_then(Value::as_f64)
}

#[test]
fn worked_example() {
    let out = calculate_all_advanced_stats(&table(&[("Ravens", SAMPLE)])).unwrap();

    let efg = num(&out, 0, "eFG%").unwrap();
    assert!((efg - 0.55).abs() < 1e-12, "eFG% = {efg}");

    let ts = num(&out, 0, "TS%").unwrap();
    assert!((ts - 60.0 / 108.8).abs() < 1e-12, "TS% = {ts}");

    let poss = num(&out, 0, "POSS_Tot").unwrap();
    assert!((poss - 58.4).abs() < 1e-9);
    assert!((num(&out, 0, "Pace").unwrap() - 58.4).abs() < 1e-9);
    assert!((num(&out, 0, "Off_Rating").unwrap() - 6000.0 / 58.4).abs() < 1e-9);
    assert!((num(&out, 0, "TO%").unwrap() - 1200.0 / 58.4).abs() < 1e-9);
    assert_eq!(num(&out, 0, "Win_%"), Some(1.0));
    assert_eq!(num(&out, 0, "TRB_Tot"), Some(28.0));
    assert_eq!(num(&out, 0, "Points_Diff"), Some(5.0));
    assert_eq!(num(&out, 0, "ASS_TO_Ratio"), Some(1.0));
    assert_eq!(num(&out, 0, "%Pts_FT"), Some(5.0 / 60.0));
}

#[test]
fn appends_every_metric_and_keeps_inputs() {
    let input = table(&[("A", SAMPLE)]);
    let out = calculate_all_advanced_stats(&input).unwrap();
    for c in input.columns() {
        assert!(out.has_column(c));
    }
    for m in METRIC_COLUMNS {
        assert!(out.has_column(m), "missing {m}");
    }
    assert_eq!(out.columns().len(), input.columns().len() + METRIC_COLUMNS.len());
}

#[test]
fn net_rating_is_difference() {
    let mut b = SAMPLE;
    b.allowed = 71.0;
    let out = calculate_all_advanced_stats(&table(&[("A", SAMPLE), ("B", b)])).unwrap();
    for r in 0..2 {
        let off = num(&out, r, "Off_Rating").unwrap();
        let def = num(&out, r, "Def_Rating").unwrap();
        let net = num(&out, r, "Net_Rating").unwrap();
        assert!((net - (off - def)).abs() < 1e-9);
    }
}

#[test]
fn shooting_bounds_hold() {
    let mut hot = SAMPLE;
    (hot.fgm, hot.fga, hot.pm2, hot.pa2, hot.pm3, hot.pa3) = (10.0, 10.0, 0.0, 0.0, 10.0, 10.0);
    hot.scored = 30.0;
    hot.ftm = 0.0;
    let out = calculate_all_advanced_stats(&table(&[("A", SAMPLE), ("Hot", hot)])).unwrap();
    for r in 0..2 {
        let efg = num(&out, r, "eFG%").unwrap();
        assert!((0.0..=1.5).contains(&efg));
        let ts = num(&out, r, "TS%").unwrap();
        assert!((0.0..=1.5).contains(&ts), "TS% = {ts}");
    }
    assert_eq!(num(&out, 1, "eFG%"), Some(1.5));

    // A consistent box score keeps TS% a proper share.
    let ts = num(&out, 0, "TS%").unwrap();
    assert!((0.0..=1.0).contains(&ts), "TS% = {ts}");
}

#[test]
fn zero_games_gives_null_rates() {
    let zero = Raw {
        games: 0.0, wins: 0.0, scored: 0.0, allowed: 0.0,
        fgm: 0.0, fga: 0.0, pm2: 0.0, pa2: 0.0, pm3: 0.0, pa3: 0.0, ftm: 0.0, fta: 0.0,
        orb: 0.0, drb: 0.0, ast: 0.0, tov: 0.0, stl: 0.0, blk: 0.0, pfd: 0.0,
    };
    let out = calculate_all_advanced_stats(&table(&[("A", SAMPLE), ("Idle", zero)])).unwrap();
    for c in ["Win_%", "Pace", "eFG%", "TS%", "Off_Rating", "Net_Rating", "TRB_Avg", "Pts_Diff_Avg", "FG%"] {
        assert_eq!(out.get(1, c), Some(&Value::Null), "{c} should be null");
    }
    // The other team is unaffected.
    assert!(num(&out, 0, "Pace").is_some());
}

#[test]
fn null_inputs_propagate() {
    let mut t = table(&[("A", SAMPLE), ("B", SAMPLE)]);
    let mut fga: Vec<Value> = t.numbers("FGA_Tot").unwrap().into_iter().map(Value::from).collect();
    fga[1] = Value::Null;
    t.set_column("FGA_Tot", fga);

    let out = calculate_all_advanced_stats(&t).unwrap();
    for c in ["eFG%", "FG%", "2Pr", "POSS_Tot", "Off_Rating", "Def_Rating", "Net_Rating", "Pace"] {
        assert_eq!(out.get(1, c), Some(&Value::Null), "{c} should be null");
        assert!(num(&out, 0, c).is_some());
    }
    // Metrics not touching FGA survive.
    assert_eq!(num(&out, 1, "Win_%"), Some(1.0));
}

#[test]
fn rebound_percentages_use_league_average() {
    let mut a = SAMPLE;
    (a.orb, a.drb, a.games) = (10.0, 40.0, 2.0);
    let mut b = SAMPLE;
    (b.orb, b.drb, b.games) = (5.0, 20.0, 1.0);
    let out = calculate_all_advanced_stats(&table(&[("A", a), ("B", b)])).unwrap();

    // league DRB/game = 60/3 = 20 → opp DRB for A = 40 → ORB% = 100·10/50
    assert!((num(&out, 0, "ORB%").unwrap() - 20.0).abs() < 1e-9);
    // league ORB/game = 15/3 = 5 → opp ORB for B = 5 → DRB% = 100·20/25
    assert!((num(&out, 1, "DRB%").unwrap() - 80.0).abs() < 1e-9);
}

#[test]
fn rerun_is_idempotent() {
    let input = table(&[("A", SAMPLE), ("B", SAMPLE)]);
    let once = calculate_all_advanced_stats(&input).unwrap();
    let again = calculate_all_advanced_stats(&input).unwrap();
    assert_eq!(once, again);
    assert_eq!(calculate_all_advanced_stats(&once).unwrap(), once);
}

#[test]
fn each_missing_column_is_named() {
    let full = table(&[("A", SAMPLE)]);
    for c in REQUIRED_COLUMNS {
        let mut t = full.clone();
        t.drop_column(c);
        match calculate_all_advanced_stats(&t) {
            Err(FeatureError::MissingColumn(e)) => {
                assert_eq!(e.missing, vec![c.to_string()]);
                assert!(!e.available.iter().any(|a| a == c));
            }
            other => panic!("dropping {c}: expected MissingColumn, got {other:?}"),
        }
    }
}

#[test]
fn all_missing_columns_reported_at_once() {
    let mut t = table(&[("A", SAMPLE)]);
    t.drop_column("Games");
    t.drop_column("TO_Tot");
    let Err(FeatureError::MissingColumn(e)) = calculate_all_advanced_stats(&t) else {
        panic!("expected MissingColumn");
    };
    assert!(e.names("Games") && e.names("TO_Tot"));
}

#[test]
fn empty_table_is_rejected() {
    let t = table(&[]);
    assert_eq!(calculate_all_advanced_stats(&t), Err(FeatureError::EmptyTable));
}

#[test]
fn opponent_possessions_used_when_present() {
    let mut t = table(&[("A", SAMPLE)]);
    t.set_column("Opp_POSS_Tot", vec![Value::Num(50.0)]);
    let out = calculate_all_advanced_stats(&t).unwrap();
    assert!((num(&out, 0, "Def_Rating").unwrap() - 110.0).abs() < 1e-9);
}

#[test]
fn metric_columns_follow_declared_order() {
    let input = table(&[("A", SAMPLE)]);
    let out = calculate_all_advanced_stats(&input).unwrap();
    let added: Vec<&str> = out.columns()[input.columns().len()..].iter().map(String::as_str).collect();
    assert_eq!(added, METRIC_COLUMNS);
}

#[test]
fn single_metric_names_its_own_inputs() {
    let mut t = table(&[("A", SAMPLE)]);
    let err = statistics::pace(&mut t).unwrap_err();
    assert_eq!(err.missing, vec![String::from("POSS_Tot")]);

    statistics::possessions(&mut t).unwrap();
    statistics::pace(&mut t).unwrap();
    assert!((num(&t, 0, "Pace").unwrap() - 58.4).abs() < 1e-9);
}
