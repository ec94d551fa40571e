// UI shell around the numeric core: form state, rendering and title animation
// The terminal front end is native-only; WASM front ends drive AppState directly

pub mod animation;
pub mod state;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;
pub mod view;

pub use animation::{hsv_to_rgb, FrameClock, Rgb, TitleAnimation};
pub use state::{AppState, Field, FieldState};
pub use view::{render, View, TITLE};
