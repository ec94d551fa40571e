use crate::units::table::Unit;
use serde::Serialize;

/// Result of reading a human-entered number
///
/// Anything other than `Parsed` counts as zero. Callers that only need the
/// number use [`ParseOutcome::value`]; callers that want to tell the user why
/// a field counted as zero can match on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// A finite decimal number
    Parsed(f64),
    /// Empty or whitespace-only text
    Empty,
    /// Text that is not a finite number (kept for diagnostics)
    Invalid(String),
}

impl ParseOutcome {
    /// The parsed number, or 0 when the text did not parse
    pub fn value(&self) -> f64 {
        match self {
            ParseOutcome::Parsed(v) => *v,
            ParseOutcome::Empty | ParseOutcome::Invalid(_) => 0.0,
        }
    }

    /// True when the value fell back to zero
    pub fn is_defaulted(&self) -> bool {
        !matches!(self, ParseOutcome::Parsed(_))
    }
}

/// A number paired with a magnitude unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// An unscaled quantity
    pub fn plain(value: f64) -> Self {
        Self::new(value, Unit::NONE)
    }

    /// `value × multiplier(unit)`, or 0 if the product overflows
    pub fn normalized(&self) -> f64 {
        let scaled = self.value * self.unit.multiplier();
        if scaled.is_finite() {
            scaled
        } else {
            0.0
        }
    }
}
