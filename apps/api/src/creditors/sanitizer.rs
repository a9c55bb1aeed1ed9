//! Batch input sanitizer — reduces a pasted spreadsheet/CRM row to the
//! creditor code used for directory lookup.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Column headers that show up when a whole sheet is pasted.
pub const IGNORED_TOKENS: &[&str] = &["CREDITOR", "ACCOUNT", "BALANCE", "DEBT", "AMOUNT", "TOTAL"];

// Tab or a run of two or more whitespace characters separates spreadsheet columns.
static COLUMN_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t|\s{2,}").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Returns the canonical upper-case code for `line`, or `None` when the line
/// is noise and should be discarded.
pub fn sanitize(line: &str) -> Option<String> {
    let first_column = COLUMN_SEPARATOR.split(line).next().unwrap_or("").trim();

    let base = match first_column.find(|c: char| c.is_ascii_digit() || c == '$') {
        Some(idx) => &first_column[..idx],
        None => first_column,
    };

    let code = WHITESPACE_RUN.replace_all(base.trim(), " ").to_uppercase();

    if code.chars().count() < 2 || IGNORED_TOKENS.contains(&code.as_str()) {
        return None;
    }
    Some(code)
}

/// Sanitizes every line of a batch paste, keeping input order and duplicates.
pub fn sanitize_batch(raw_text: &str) -> Vec<String> {
    raw_text.lines().filter_map(sanitize).collect()
}

/// Unique codes (first-occurrence order) that the directory did not return.
pub fn unknown_codes<'a, I>(codes: &[String], found_abbreviations: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let found: HashSet<String> = found_abbreviations
        .into_iter()
        .map(|a| a.trim().to_uppercase())
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    codes
        .iter()
        .filter(|code| !found.contains(code.as_str()))
        .filter(|code| seen.insert(code.to_string()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_separated_amount_is_dropped() {
        assert_eq!(sanitize("CHASE BANK\t$500").as_deref(), Some("CHASE BANK"));
    }

    #[test]
    fn test_ignored_header_is_discarded() {
        assert_eq!(sanitize("TOTAL"), None);
        assert_eq!(sanitize("creditor"), None);
        assert_eq!(sanitize("Balance   1,200.00"), None);
    }

    #[test]
    fn test_two_characters_is_kept() {
        assert_eq!(sanitize("AB").as_deref(), Some("AB"));
        assert_eq!(sanitize("A"), None);
        assert_eq!(sanitize(""), None);
    }

    #[test]
    fn test_cut_at_first_digit_or_dollar() {
        assert_eq!(sanitize("capital one 4417").as_deref(), Some("CAPITAL ONE"));
        assert_eq!(sanitize("Discover $1,020").as_deref(), Some("DISCOVER"));
        assert_eq!(sanitize("1234 CHASE"), None);
    }

    #[test]
    fn test_double_space_acts_as_column_break() {
        assert_eq!(
            sanitize("synchrony bank  03/14/2025  $88").as_deref(),
            Some("SYNCHRONY BANK")
        );
    }

    #[test]
    fn test_single_spaces_collapse_and_uppercase() {
        assert_eq!(sanitize("wells fargo\tcard").as_deref(), Some("WELLS FARGO"));
    }

    #[test]
    fn test_batch_preserves_order_and_drops_noise() {
        let raw = "CREDITOR\tBALANCE\nchase\t$10\nX\nciti card  $20\n\nCHASE\t$30\nTOTAL\t$60\namex";
        assert_eq!(
            sanitize_batch(raw),
            vec!["CHASE", "CITI CARD", "CHASE", "AMEX"]
        );
    }

    #[test]
    fn test_batch_handles_crlf() {
        assert_eq!(sanitize_batch("chase\r\nciti\r\n"), vec!["CHASE", "CITI"]);
    }

    #[test]
    fn test_unknown_codes_are_unique_and_ordered() {
        let codes: Vec<String> = ["CHASE", "NAVY FED", "CITI", "NAVY FED", "ZELLE"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let unknown = unknown_codes(&codes, ["CHASE", "citi "]);
        assert_eq!(unknown, vec!["NAVY FED", "ZELLE"]);
    }
}
