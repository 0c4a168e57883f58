//! Terminal preview of classified measures.
//!
//! One proportional bar per measure, printed in emission order: the first
//! row is what a chart would draw furthest back. Strictly a debugging aid
//! for the CLI; real rendering belongs to the embedding framework.

use std::fmt::Write;

use terminal_size::{Width, terminal_size};

use crate::core::{
    classify::ClassifiedPoint,
    color::colorize,
    constants::{FALLBACK_TERM_WIDTH, MIN_PREVIEW_WIDTH, PREVIEW_GUTTER},
};

/// Current terminal width with an 80-column fallback.
#[inline]
#[must_use]
pub fn terminal_width() -> usize {
    terminal_size().map_or(FALLBACK_TERM_WIDTH, |(Width(w), _)| usize::from(w))
}

/// Render one bar row per measure into a string.
#[must_use]
pub fn render_preview(points: &[ClassifiedPoint], term_width: usize) -> String {
    let budget = term_width
        .saturating_sub(PREVIEW_GUTTER)
        .max(MIN_PREVIEW_WIDTH);
    let max_magnitude = points.iter().map(|p| p.value.abs()).fold(0.0_f64, f64::max);

    let mut out = String::new();
    for p in points {
        let chars = if max_magnitude > 0.0 {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let scaled = ((p.value.abs() / max_magnitude) * budget as f64).round() as usize;
            // zero-valued measures still get one tick so the row is visible
            scaled.max(1)
        } else {
            1
        };
        let bar = "█".repeat(chars);
        // writing into a String cannot fail
        writeln!(
            out,
            "{:>4}  {:>12.2}  {}",
            p.original_index,
            p.value,
            colorize(&p.color, &bar)
        )
        .unwrap();
    }
    out
}
