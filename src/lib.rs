//! Composite Blocks core crate.
//!
//! Tiles the browser window with randomly sized square blocks on a grid, raises
//! two equal-width blocks above the rest and slides one of them back and forth
//! with a triangle wave (or, optionally, swaps the pair on a keyframed cycle).
//! Everything except `app` is plain Rust and runs under `cargo test` on the host.

use wasm_bindgen::prelude::*;

// Console logging routed through gloo on wasm; compiled out on the host so the
// core stays testable natively.
#[macro_export]
#[doc(hidden)]
macro_rules! console_log {
    ($($arg:expr),+ $(,)?) => {{
        #[cfg(target_arch = "wasm32")]
        gloo::console::log!($($arg),+);
        #[cfg(not(target_arch = "wasm32"))]
        { $(let _ = &$arg;)+ }
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! console_warn {
    ($($arg:expr),+ $(,)?) => {{
        #[cfg(target_arch = "wasm32")]
        gloo::console::warn!($($arg),+);
        #[cfg(not(target_arch = "wasm32"))]
        { $(let _ = &$arg;)+ }
    }};
}

pub mod app;
pub mod config;
pub mod error;
pub mod grid;
pub mod layer;
pub mod motion;
pub mod selection;
pub mod session;

pub use config::{DemoConfig, MotionMode};
pub use error::DemoError;
pub use grid::{Block, BlockId, Grid, can_fit, tile};
pub use layer::{Layer, NodeId, RectNode, Surface};
pub use motion::{Oscillator, SwapState, triangle_wave};
pub use selection::choose_pair;
pub use session::Session;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
