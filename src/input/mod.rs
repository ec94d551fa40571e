// Keystroke validation for numeric entry fields

pub mod field;
pub mod validation;

pub use field::EntryField;
pub use validation::is_valid_numeric_entry;
