// src/core/html.rs
//
// Thin helpers over `scraper` for the two shapes we read:
// a page's visible text, and the first <table> as a string grid.

use scraper::{ElementRef, Html, Selector, node::Node};

use super::sanitize::normalize_ws;

/// Headers + rows of an HTML table, cell text only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// All visible text of a document, text nodes separated by a single space.
/// Script/style/noscript content is skipped.
pub fn visible_text(doc: &str) -> String {
    let document = Html::parse_document(doc);
    let mut parts: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else { continue };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .map(|e| matches!(e.name(), "script" | "style" | "noscript" | "template"))
                .unwrap_or(false)
        });
        if hidden {
            continue;
        }
        let t = text.trim();
        if !t.is_empty() {
            parts.push(t);
        }
    }
    normalize_ws(&parts.join(" "))
}

/// Cell text the way a browser "copy" would give it: text nodes glued,
/// whitespace collapsed.
fn cell_text(cell: ElementRef<'_>) -> String {
    normalize_ws(&cell.text().collect::<String>())
}

/// First `<table>` in the document.
/// Headers come from `<th>` cells of the first row that has any; if no row has
/// `<th>`, the first `<td>` row becomes the header row.
pub fn first_table(doc: &str) -> Option<RawTable> {
    let document = Html::parse_document(doc);
    let (Ok(table_sel), Ok(tr_sel), Ok(th_sel), Ok(td_sel)) = (
        Selector::parse("table"),
        Selector::parse("tr"),
        Selector::parse("th"),
        Selector::parse("td"),
    ) else {
        return None;
    };

    let table = document.select(&table_sel).next()?;
    let mut out = RawTable::default();

    for tr in table.select(&tr_sel) {
        let ths: Vec<String> = tr.select(&th_sel).map(cell_text).collect();
        let tds: Vec<String> = tr.select(&td_sel).map(cell_text).collect();

        if out.headers.is_empty() && !ths.is_empty() && tds.is_empty() {
            out.headers = ths;
            continue;
        }
        if tds.is_empty() {
            continue;
        }
        // Row headers (<th> in a body row) count as leading cells.
        let mut row = ths;
        row.extend(tds);
        out.rows.push(row);
    }

    if out.headers.is_empty() && !out.rows.is_empty() {
        out.headers = out.rows.remove(0);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_text_skips_scripts() {
        let doc = "<html><head><script>var x = 1;</script><style>p{}</style></head>\
                   <body><p>FG   Prosečno</p><p>FGA <b>12.5</b></p></body></html>";
        assert_eq!(visible_text(doc), "FG Prosečno FGA 12.5");
    }

    #[test]
    fn first_table_with_thead() {
        let doc = r#"<table>
            <thead><tr><th>#</th><th>Ekipa</th><th>Bodovi</th></tr></thead>
            <tbody>
              <tr><td>1</td><td><span>Ravens Belgrade</span><span>RAV</span></td><td>10</td></tr>
              <tr><td>2</td><td>KK Tufe<span>TUF</span></td><td>8</td></tr>
            </tbody></table>"#;
        let t = first_table(doc).unwrap();
        assert_eq!(t.headers, vec!["#", "Ekipa", "Bodovi"]);
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0][1], "Ravens BelgradeRAV");
        assert_eq!(t.rows[1][1], "KK TufeTUF");
    }

    #[test]
    fn first_table_without_th_uses_first_row() {
        let doc = "<table><tr><td>A</td><td>B</td></tr><tr><td>1</td><td>2</td></tr></table>";
        let t = first_table(doc).unwrap();
        assert_eq!(t.headers, vec!["A", "B"]);
        assert_eq!(t.rows, vec![vec![s!("1"), s!("2")]]);
    }

    #[test]
    fn no_table() {
        assert!(first_table("<p>nothing</p>").is_none());
    }
}
