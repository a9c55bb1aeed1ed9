//! CRM Parser — pulls the customer ID, name, affiliate and language out of a
//! profile blob pasted from the CRM.
//!
//! Pasted profiles are irregular. Nothing here fails: any field that cannot be
//! found falls back to its sentinel so downstream templates always have a value.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Placeholder for a missing customer ID or name.
pub const UNKNOWN: &str = "unknown";
pub const UNKNOWN_AFFILIATE: &str = "Unknown Affiliate";
pub const DEFAULT_LANGUAGE: &str = "English";

static LABELED_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Customer ID\s*(CORDOBA-[0-9]+)").unwrap());

static BARE_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"(CORDOBA-[0-9]+)").unwrap());

static PURCHASER_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*Purchaser\s+[0-9]+\s+Eligible.*").unwrap());

static CO_APPLICANT_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Co-Applicant:.*").unwrap());

// Most specific label first.
static AFFILIATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)Affiliate Marketing Company\s*(.*)",
        r"(?i)Marketing Company\s*(.*)",
        r"(?i)Assigned Company\s*(.*)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// Lines that carry a labeled field rather than the customer's name.
static FIELD_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(Customer ID|Affiliate Marketing Company|Marketing Company|Assigned Company|Language:)")
        .unwrap()
});

static LANGUAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Language:\s*(\w+)").unwrap());

/// Customer profile derived from a CRM paste. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedProfile {
    /// `CORDOBA-<digits>`, or [`UNKNOWN`].
    pub customer_id: String,
    /// Title-cased display name, or [`UNKNOWN`].
    pub customer_name: String,
    pub affiliate: String,
    pub language: String,
}

impl Default for ParsedProfile {
    fn default() -> Self {
        Self {
            customer_id: UNKNOWN.to_string(),
            customer_name: UNKNOWN.to_string(),
            affiliate: UNKNOWN_AFFILIATE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl ParsedProfile {
    pub fn has_customer_id(&self) -> bool {
        self.customer_id != UNKNOWN
    }
}

/// Parses a raw CRM paste into a [`ParsedProfile`].
pub fn parse(raw_text: &str) -> ParsedProfile {
    if raw_text.is_empty() {
        return ParsedProfile::default();
    }

    ParsedProfile {
        customer_id: extract_customer_id(raw_text).unwrap_or_else(|| UNKNOWN.to_string()),
        customer_name: extract_name(raw_text).unwrap_or_else(|| UNKNOWN.to_string()),
        affiliate: extract_affiliate(raw_text).unwrap_or_else(|| UNKNOWN_AFFILIATE.to_string()),
        language: extract_language(raw_text).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
    }
}

fn extract_customer_id(text: &str) -> Option<String> {
    LABELED_ID
        .captures(text)
        .or_else(|| BARE_ID.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// The name is whatever sits on the first non-blank line that is not a labeled
/// field, minus CRM boilerplate.
fn extract_name(text: &str) -> Option<String> {
    let first_line = text
        .split('\n')
        .map(str::trim)
        .find(|l| !l.is_empty() && !FIELD_LINE.is_match(l))?;

    let without_purchaser = PURCHASER_SUFFIX.replace(first_line, "");
    let cleaned = CO_APPLICANT_SUFFIX.replace(&without_purchaser, "");

    let name = title_case(&cleaned);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

fn extract_affiliate(text: &str) -> Option<String> {
    AFFILIATE_PATTERNS.iter().find_map(|pattern| {
        let captured = pattern.captures(text)?.get(1)?.as_str().trim();
        (captured.chars().count() > 1).then(|| captured.to_string())
    })
}

fn extract_language(text: &str) -> Option<String> {
    LANGUAGE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Lower-cases the text, then upper-cases the first letter of every
/// space-separated word. The result is trimmed.
pub fn title_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
