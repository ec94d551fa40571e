use crate::units::table::Unit;
use crate::units::types::{ParseOutcome, Quantity};
use log::debug;

/// Parse free text as a decimal number
///
/// Surrounding whitespace is ignored. Infinite and NaN spellings are treated
/// as invalid so that every parsed value is finite.
pub fn parse_number(text: &str) -> ParseOutcome {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ParseOutcome::Empty;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => ParseOutcome::Parsed(value),
        _ => ParseOutcome::Invalid(trimmed.to_string()),
    }
}

impl Quantity {
    /// Build a quantity from entry text and a unit suffix
    ///
    /// Unparseable text becomes 0 and an unknown suffix becomes the unscaled
    /// unit. Neither is an error.
    pub fn parse(text: &str, suffix: &str) -> Self {
        let outcome = parse_number(text);
        if let ParseOutcome::Invalid(ref raw) = outcome {
            debug!("Treating non-numeric input '{}' as 0", raw);
        }

        let unit = Unit::from_suffix(suffix).unwrap_or_else(|| {
            debug!("Unknown unit suffix '{}', using multiplier 1", suffix);
            Unit::NONE
        });

        Quantity::new(outcome.value(), unit)
    }
}

/// Normalized magnitude of `text` scaled by `suffix`
pub fn to_number(text: &str, suffix: &str) -> f64 {
    Quantity::parse(text, suffix).normalized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_outcomes() {
        assert_eq!(parse_number("12"), ParseOutcome::Parsed(12.0));
        assert_eq!(parse_number(" 1.5 "), ParseOutcome::Parsed(1.5));
        assert_eq!(parse_number(".5"), ParseOutcome::Parsed(0.5));
        assert_eq!(parse_number("-5"), ParseOutcome::Parsed(-5.0));
        assert_eq!(parse_number(""), ParseOutcome::Empty);
        assert_eq!(parse_number("   "), ParseOutcome::Empty);
        assert_eq!(
            parse_number("abc"),
            ParseOutcome::Invalid("abc".to_string())
        );
    }

    #[test]
    fn test_non_finite_text_is_invalid() {
        assert!(parse_number("inf").is_defaulted());
        assert!(parse_number("NaN").is_defaulted());
        assert!(parse_number("1e999").is_defaulted());
    }

    #[test]
    fn test_empty_is_zero_for_any_unit() {
        for unit in Unit::all() {
            assert_eq!(to_number("", unit.suffix()), 0.0);
        }
    }

    #[test]
    fn test_text_is_zero_for_any_unit() {
        for unit in Unit::all() {
            assert_eq!(to_number("abc", unit.suffix()), 0.0);
        }
    }

    #[test]
    fn test_scaled_values() {
        assert_eq!(to_number("2.5", "K"), 2500.0);
        assert_eq!(to_number("3", "M"), 3_000_000.0);
        assert_eq!(to_number("1.5", "B"), 1_500_000_000.0);
        assert_eq!(to_number("7", ""), 7.0);
    }

    #[test]
    fn test_unknown_suffix_is_unscaled() {
        assert_eq!(to_number("4", "Zz"), 4.0);
        let quantity = Quantity::parse("4", "Zz");
        assert_eq!(quantity.unit, Unit::NONE);
    }

    #[test]
    fn test_negative_values_propagate() {
        assert_eq!(to_number("-2", "K"), -2000.0);
    }
}
