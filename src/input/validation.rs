use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Digits with at most one decimal point and at least one digit overall
    /// Matches: "12", "12.5", "12.", ".5"
    static ref NUMERIC_ENTRY: Regex = Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").unwrap();
}

/// Check whether a numeric field may hold `candidate`
///
/// Runs against the text the field would contain after a keystroke. Signs,
/// exponents, whitespace and a second decimal point are rejected.
pub fn is_valid_numeric_entry(candidate: &str) -> bool {
    candidate.is_empty() || NUMERIC_ENTRY.is_match(candidate)
}
