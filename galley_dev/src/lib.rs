// Copyright 2025 the Galley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Galley Dev
//!
//! This crate provides utilities for developing Galley: a deterministic
//! fixed-advance [`Measurer`] and a handful of text samples.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

use galley::{Measurer, TextMetrics};
use styled_runs::Style;

/// A deterministic measurer with fixed per-character advances.
///
/// Every character advances by `font_size * advance_factor`, multiplied by
/// [`BOLD_FACTOR`](Self::BOLD_FACTOR) for bold weights so that restyling a
/// range can move wrap points. Ascent is `0.8 * font_size` and descent
/// `0.2 * font_size`. The result is a pure function of the inputs, which
/// makes layout and editing behavior exactly predictable in tests.
///
/// With the default factor and a 16px font, every character is 8 units wide
/// and a line is 16 units tall.
#[derive(Copy, Clone, Debug)]
pub struct FixedMeasurer {
    /// Advance per character, as a fraction of the font size.
    pub advance_factor: f32,
}

impl Default for FixedMeasurer {
    fn default() -> Self {
        Self {
            advance_factor: 0.5,
        }
    }
}

impl FixedMeasurer {
    /// Advance multiplier applied to bold text.
    pub const BOLD_FACTOR: f32 = 1.25;
}

impl Measurer for FixedMeasurer {
    fn measure(&self, text: &str, style: &Style) -> TextMetrics {
        let mut advance = style.font_size * self.advance_factor;
        if style.font_weight.is_bold() {
            advance *= Self::BOLD_FACTOR;
        }
        TextMetrics {
            width: advance * text.chars().count() as f32,
            height: style.font_size,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}

/// A sample to be used for development.
#[derive(Debug)]
pub struct Sample {
    /// The name of the sample.
    pub name: &'static str,
    /// The text of the sample.
    pub text: &'static str,
}

/// A collection of text samples.
#[derive(Debug)]
pub struct TextSamples {
    /// A short single-line sample.
    pub short: Sample,
    /// A multi-paragraph sample with hard breaks.
    pub paragraphs: Sample,
    /// A sample with words too long for narrow wrap widths.
    pub long_words: Sample,
}

impl TextSamples {
    /// Creates a new collection of text samples.
    pub const fn new() -> Self {
        Self {
            short: Sample {
                name: "short",
                text: "Sphinx of black quartz, judge my vow",
            },
            paragraphs: Sample {
                name: "paragraphs",
                text: "The quick brown fox jumps over the lazy dog.\n\nPack my box with five dozen liquor jugs.\n",
            },
            long_words: Sample {
                name: "long_words",
                text: "pneumonoultramicroscopicsilicovolcanoconiosis and antidisestablishmentarianism",
            },
        }
    }
}

impl Default for TextSamples {
    fn default() -> Self {
        Self::new()
    }
}
