// Time-to-goal calculation

pub mod calculator;
pub mod error;
pub mod formatter;


pub use calculator::*;
pub use error::CalcError;
pub use formatter::*;
