//! Run-time configuration object + fluent builder.

use crate::core::{
    accessor::Accessor,
    constants::DEFAULT_KEY_PREFIX,
    error::ConfigError,
    palette::Palette,
};

/// Immutable parameters handed to the classifier.
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    /// How to extract the primary measure from each record.
    pub value: Accessor,
    /// How to extract the optional baseline; `None` skips baselines entirely.
    pub baseline: Option<Accessor>,
    /// Swap which scale serves which sign of measure.
    pub invert_palette: bool,
    pub positive_palette: Palette,
    pub negative_palette: Palette,
    /// Prefix for the per-call render keys (`"<prefix>-<n>"`).
    pub key_prefix: String,
}

impl ClassifyConfig {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        // builder defaults can never trip validation
        ConfigBuilder::new().build().unwrap()
    }
}

/// Fluent builder; every field has a usable default.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    value: Option<Accessor>,
    baseline: Option<Accessor>,
    invert_palette: bool,
    positive_palette: Option<Palette>,
    negative_palette: Option<Palette>,
    key_prefix: Option<String>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn value(mut self, a: impl Into<Accessor>) -> Self {
        self.value = Some(a.into());
        self
    }
    #[inline]
    pub fn baseline(mut self, a: impl Into<Accessor>) -> Self {
        self.baseline = Some(a.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn invert(mut self, yes: bool) -> Self {
        self.invert_palette = yes;
        self
    }
    #[inline]
    #[must_use]
    pub fn positive_palette(mut self, p: Palette) -> Self {
        self.positive_palette = Some(p);
        self
    }
    #[inline]
    #[must_use]
    pub fn negative_palette(mut self, p: Palette) -> Self {
        self.negative_palette = Some(p);
        self
    }
    #[inline]
    pub fn key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    pub fn build(self) -> Result<ClassifyConfig, ConfigError> {
        let positive_palette = self.positive_palette.unwrap_or_else(Palette::segmented_blue);
        let negative_palette = self.negative_palette.unwrap_or_else(Palette::negative_red);
        if positive_palette.is_empty() {
            return Err(ConfigError::EmptyPalette("positive_palette"));
        }
        if negative_palette.is_empty() {
            return Err(ConfigError::EmptyPalette("negative_palette"));
        }
        Ok(ClassifyConfig {
            value: self.value.unwrap_or_default(),
            baseline: self.baseline,
            invert_palette: self.invert_palette,
            positive_palette,
            negative_palette,
            key_prefix: self
                .key_prefix
                .unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_owned()),
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<ClassifyConfig, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
