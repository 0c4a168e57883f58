//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use self::core::{
    accessor::Accessor,
    classify::{ClassifiedPoint, classify},
    config::{ClassifyConfig, ConfigBuilder},
    constants::STACK_LANE,
    error::{ChartError, ConfigError},
    palette::Palette,
};

pub use render::{render_preview, terminal_width};

/// Convenience function for the common record shape `{"y": <number>}` with
/// the built-in colour scales.
pub fn classify_measures(
    points: &[serde_json::Value],
    invert: bool,
) -> Result<Vec<ClassifiedPoint>, ConfigError> {
    let cfg = ClassifyConfig::builder()
        .value(Accessor::path("y"))
        .invert(invert)
        .build()?;
    classify(points, &cfg)
}
