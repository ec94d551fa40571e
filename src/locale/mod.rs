// Static UI label dictionaries (English / Spanish)

pub mod dictionary;

pub use dictionary::*;
