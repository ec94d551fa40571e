pub mod calc;
pub mod config;
pub mod input;
pub mod locale;
pub mod shell;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
