// tests/ingest.rs
//
// The two ingestion entry points end to end: a local one-shot HTTP responder
// stands in for the league site; a closed port stands in for a dead network.
//
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use corn_stats::error::{FetchError, IngestError, ParseError};
use corn_stats::ingest::{get_league_table, parse_team_page_wide};
use corn_stats::model::TEAM_PAGE_COLUMNS;
use corn_stats::table::Value;

// Nothing listens on the discard port.
const DEAD: &str = "http://127.0.0.1:9";

const LEAGUE_PAGE: &str = r#"<html><body><table>
  <tr><th>#</th><th>Ekipa</th><th>Pobede</th><th>Porazi</th><th>Poeni +</th><th>Poeni -</th><th>Bodovi</th></tr>
  <tr><td>1</td><td>Ravens Belgrade<span>RAV</span></td><td>5</td><td>1</td><td>420</td><td>360</td><td>11</td></tr>
  <tr><td>2</td><td>KK Tap 011<span>011</span></td><td>1</td><td>5</td><td>350</td><td>410</td><td>7</td></tr>
</table></body></html>"#;

const TEAM_PAGE: &str = r#"<html><body>
  <div>FG Prosečno FGA 55.5 FGM 22.0 Ukupno FGA 111 FGM 44</div>
  <div>2P Prosečno 2PTA 40.0 2PTM 18.5 Ukupno 2PTA 80 2PTM 37</div>
  <div>AST Prosečno 11.5 Ukupno 23</div>
</body></html>"#;

/// Serve `body` once with `status`, return the base URL.
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let Ok((stream, _)) = listener.accept() else { return };
        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
            if line == "\r\n" {
                break;
            }
            line.clear();
        }
        let mut stream = reader.into_inner();
        let _ = write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
    });
    format!("http://{addr}")
}

#[test]
fn league_table_over_http() {
    let base = serve_once("200 OK", LEAGUE_PAGE);
    let lt = get_league_table(&format!("{base}/leagues/north-liga")).unwrap();
    assert_eq!(lt.team_names(), vec!["Ravens Belgrade", "KK Tap 011"]);
    assert_eq!(lt.standings[1].abbr.as_deref(), Some("011"));
}

#[test]
fn team_page_is_one_wide_row() {
    let base = serve_once("200 OK", LEAGUE_PAGE);
    let league = get_league_table(&base).unwrap();

    let base = serve_once("200 OK", TEAM_PAGE);
    let t = parse_team_page_wide(&format!("{base}/teams/ravens-belgrade"), Some(&league)).unwrap();

    assert_eq!(t.row_count(), 1);
    assert_eq!(t.columns(), TEAM_PAGE_COLUMNS);
    assert_eq!(t.get(0, "Team"), Some(&Value::from("ravens belgrade")));
    assert_eq!(t.get(0, "Abbr"), Some(&Value::from("RAV")));
    assert_eq!(t.get(0, "FGA_Tot"), Some(&Value::Num(111.0)));
    assert_eq!(t.get(0, "AST_Avg"), Some(&Value::Num(11.5)));
    // Cards the page doesn't have are Null, not zero.
    assert_eq!(t.get(0, "BLK_Tot"), Some(&Value::Null));
}

#[test]
fn team_page_without_league_has_null_abbr() {
    let base = serve_once("200 OK", TEAM_PAGE);
    let t = parse_team_page_wide(&format!("{base}/teams/kk-tap-011/"), None).unwrap();
    assert_eq!(t.get(0, "Team"), Some(&Value::from("kk tap 011")));
    assert_eq!(t.get(0, "Abbr"), Some(&Value::Null));
}

#[test]
fn unreachable_host_is_fetch_error() {
    let league = get_league_table(&format!("{DEAD}/table"));
    assert!(matches!(league, Err(IngestError::Fetch(FetchError::Request { .. }))), "{league:?}");

    let team = parse_team_page_wide(&format!("{DEAD}/teams/ravens-belgrade"), None);
    assert!(matches!(team, Err(IngestError::Fetch(FetchError::Request { .. }))), "{team:?}");
}

#[test]
fn http_error_status_is_fetch_error() {
    let base = serve_once("404 Not Found", "<p>nema</p>");
    match get_league_table(&base) {
        Err(IngestError::Fetch(FetchError::Status { status, .. })) => assert_eq!(status, 404),
        other => panic!("expected HTTP status error, got {other:?}"),
    }
}

#[test]
fn changed_layout_is_parse_error() {
    let base = serve_once("200 OK", "<html><body><p>Održavanje</p></body></html>");
    let url = format!("{base}/table");
    match get_league_table(&url) {
        Err(IngestError::Parse(ParseError::NoTable(src))) => assert_eq!(src, url),
        other => panic!("expected NoTable, got {other:?}"),
    }

    let base = serve_once("200 OK", "<html><body>Stranica nije pronađena</body></html>");
    let url = format!("{base}/teams/fireflies");
    match parse_team_page_wide(&url, None) {
        Err(IngestError::Parse(ParseError::NoStatistics(src))) => assert_eq!(src, url),
        other => panic!("expected NoStatistics, got {other:?}"),
    }
}
