use lazy_static::lazy_static;
use serde::{Serialize, Serializer};
use std::fmt;

/// Magnitude suffixes in ascending order, index 0 is unscaled
pub const SUFFIXES: [&str; 26] = [
    "", "K", "M", "B", "T", "Qa", "Qi", "Sx", "Sp", "Oc", "N", "Dc", "Ud", "Dd", "Td", "Qua",
    "Qui", "Sxd", "Spd", "Ocd", "Nod", "Vg", "UVg", "DVg", "TVg", "QaVg",
];

lazy_static! {
    /// Multiplier per suffix index, each entry is exactly 1000x the previous one
    static ref MULTIPLIERS: Vec<f64> = {
        let mut table = Vec::with_capacity(SUFFIXES.len());
        let mut current = 1.0_f64;
        for _ in SUFFIXES.iter() {
            table.push(current);
            current *= 1000.0;
        }
        table
    };
}

/// An entry of the suffix table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Unit(usize);

impl Unit {
    /// The unscaled unit (empty suffix)
    pub const NONE: Unit = Unit(0);

    /// Exact, case-sensitive lookup
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        SUFFIXES.iter().position(|s| *s == suffix).map(Unit)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < SUFFIXES.len()).then_some(Unit(index))
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn suffix(self) -> &'static str {
        SUFFIXES[self.0]
    }

    pub fn multiplier(self) -> f64 {
        MULTIPLIERS[self.0]
    }

    /// Every unit in table order, as a dropdown would list them
    pub fn all() -> impl Iterator<Item = Unit> {
        (0..SUFFIXES.len()).map(Unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.suffix())
    }
}

/// Multiplier for a suffix, unknown suffixes scale by 1
pub fn multiplier(suffix: &str) -> f64 {
    Unit::from_suffix(suffix).map_or(1.0, Unit::multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_unit_is_unscaled() {
        assert_eq!(multiplier(""), 1.0);
        assert_eq!(Unit::NONE.suffix(), "");
        assert_eq!(Unit::default(), Unit::NONE);
    }

    #[test]
    fn test_each_step_is_a_thousand() {
        for index in 1..SUFFIXES.len() {
            assert_eq!(
                multiplier(SUFFIXES[index]),
                multiplier(SUFFIXES[index - 1]) * 1000.0,
                "step into '{}'",
                SUFFIXES[index]
            );
        }
    }

    #[test]
    fn test_known_suffixes() {
        assert_eq!(multiplier("K"), 1e3);
        assert_eq!(multiplier("M"), 1e6);
        assert_eq!(multiplier("B"), 1e9);
        assert_eq!(multiplier("T"), 1e12);
        assert!(multiplier("QaVg").is_finite());
    }

    #[test]
    fn test_unknown_suffix_defaults_to_one() {
        assert_eq!(multiplier("X"), 1.0);
        assert_eq!(multiplier("k"), 1.0); // lookup is case-sensitive
        assert_eq!(multiplier("B "), 1.0);
    }

    #[test]
    fn test_unit_lookup() {
        let unit = Unit::from_suffix("Qa").unwrap();
        assert_eq!(unit.index(), 5);
        assert_eq!(unit.suffix(), "Qa");
        assert_eq!(Unit::from_index(5), Some(unit));
        assert_eq!(Unit::from_index(SUFFIXES.len()), None);
        assert_eq!(Unit::all().count(), SUFFIXES.len());
        assert_eq!(unit.to_string(), "Qa");
    }

    #[test]
    fn test_unit_serializes_as_suffix() {
        let json = serde_json::to_string(&Unit::from_suffix("B").unwrap()).unwrap();
        assert_eq!(json, "\"B\"");
    }
}
