//! A collection of constants.

/// Every measure occupies this single stacking lane; visual separation comes
/// from draw-order layering, not from distinct positions.
pub const STACK_LANE: u32 = 1;

/// Prefix for generated render keys when the caller does not pick one.
pub const DEFAULT_KEY_PREFIX: &str = "measure";

/// Narrowest bar budget the preview will draw with.
pub const MIN_PREVIEW_WIDTH: usize = 10;

/// Characters reserved for the label columns to the left of preview bars.
pub const PREVIEW_GUTTER: usize = 24;

/// Assumed terminal width when size detection fails.
pub const FALLBACK_TERM_WIDTH: usize = 80;
