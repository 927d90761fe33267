// src/core/sanitize.rs
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Strip diacritics (NFD, drop combining marks) and trim; optionally lowercase.
/// "Šljakeri" → "sljakeri". Note: 'đ' has no decomposition and stays as is.
pub fn fold_diacritics(s: &str, to_lower: bool) -> String {
    let folded: String = s.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let t = folded.trim();
    if to_lower { t.to_lowercase() } else { s!(t) }
}

/// Comparison key for team names.
pub fn normalize_name(s: &str) -> String {
    fold_diacritics(s, true)
}

/// Split a league-table team cell into (name, abbreviation).
///
/// The site renders the short code right after the name without a space
/// ("Ravens BelgradeRAV"); a leading position number may also be glued on.
/// The abbreviation is the last 3 chars if they are uppercase letters/digits
/// (after diacritic folding) and the name part doesn't end in a space.
pub fn clean_team_name(raw: &str) -> (String, Option<String>) {
    let s = raw.trim().trim_start_matches(|c: char| c.is_ascii_digit()).trim();

    let chars: Vec<char> = s.chars().collect();
    let mut name = s;
    let mut abbr = None;

    if chars.len() >= 3 {
        let split = s.char_indices().nth(chars.len() - 3).map(|(i, _)| i).unwrap_or(0);
        let (before, tail) = s.split_at(split);
        let tail_folded = fold_diacritics(tail, false);
        let is_abbr = !before.is_empty()
            && !before.ends_with(' ')
            && tail_folded.chars().count() == 3
            && tail_folded
                .chars()
                .all(|ch| ch.is_ascii_digit() || (ch.is_alphabetic() && ch.is_uppercase()));
        if is_abbr {
            abbr = Some(s!(tail));
            name = before;
        }
    }

    (normalize_ws(name), abbr)
}

/// First signed integer in a cell ("+12", "−7 ", "34 (2)"); 0 if none.
/// U+2212 MINUS SIGN counts as '-'.
pub fn parse_int_cell(cell: &str) -> i64 {
    let s = cell.replace('\u{2212}', "-");
    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if !b.is_ascii_digit() {
            continue;
        }
        let neg = i > 0 && bytes[i - 1] == b'-';
        let end = bytes[i..].iter().position(|c| !c.is_ascii_digit()).map(|p| i + p).unwrap_or(bytes.len());
        let v: i64 = s[i..end].parse().unwrap_or(0);
        return if neg { -v } else { v };
    }
    0
}

/// "ravens-belgrade/" → "ravens belgrade" (last URL segment, dashes → spaces).
pub fn team_name_from_url(url: &str) -> String {
    let slug = url.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    slug.replace('-', " ")
}

/// "Ravens Belgrade" → "ravens-belgrade" (logo files, export names).
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_dash = false;
    for ch in fold_diacritics(name, true).chars() {
        if ch.is_alphanumeric() { out.push(ch); last_dash = false; }
        else if !last_dash && !out.is_empty() { out.push('-'); last_dash = true; }
    }
    s!(out.trim_end_matches('-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_glued_abbreviation() {
        assert_eq!(
            clean_team_name("1Ravens BelgradeRAV"),
            (s!("Ravens Belgrade"), Some(s!("RAV")))
        );
        assert_eq!(clean_team_name("KK ŠljakeriŠLJ"), (s!("KK Šljakeri"), Some(s!("ŠLJ"))));
        assert_eq!(clean_team_name("KK Tap 011T11"), (s!("KK Tap 011"), Some(s!("T11"))));
    }

    #[test]
    fn no_abbreviation() {
        assert_eq!(clean_team_name("Pistacci"), (s!("Pistacci"), None));
        assert_eq!(clean_team_name("Fire flies XYZ"), (s!("Fire flies XYZ"), None));
        assert_eq!(clean_team_name("AB"), (s!("AB"), None));
    }

    #[test]
    fn ints_with_unicode_minus() {
        assert_eq!(parse_int_cell("\u{2212}12"), -12);
        assert_eq!(parse_int_cell("+34"), 34);
        assert_eq!(parse_int_cell(" 7 (2)"), 7);
        assert_eq!(parse_int_cell("n/a"), 0);
    }

    #[test]
    fn names_and_slugs() {
        assert_eq!(normalize_name("  KK Šljakeri "), "kk sljakeri");
        assert_eq!(team_name_from_url("https://x/teams/kk-tap-011/"), "kk tap 011");
        assert_eq!(slugify("KK Šljakeri"), "kk-sljakeri");
        assert_eq!(slugify("Koza  Nostra!"), "koza-nostra");
    }
}
