// Magnitude units and human-entered number parsing
// A quantity is a number paired with a power-of-1000 suffix ("1.5" + "B")

pub mod parser;
pub mod table;
pub mod types;

pub use parser::{parse_number, to_number};
pub use table::{multiplier, Unit, SUFFIXES};
pub use types::{ParseOutcome, Quantity};
