//! Aggregates the “business logic” layer.

pub mod accessor;
pub mod classify;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod palette;
pub mod rng;

// re-export frequently-used items for convenience
pub use accessor::Accessor;
pub use classify::{ClassifiedPoint, classify};
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{ClassifyConfig, ConfigBuilder};
pub use constants::{DEFAULT_KEY_PREFIX, STACK_LANE};
pub use error::{ChartError, ConfigError};
pub use palette::Palette;
