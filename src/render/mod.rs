//! Render-adjacent helpers (terminal preview only).

mod preview;

pub use preview::{render_preview, terminal_width};
