// Copyright 2025 the Galley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measurement adapter boundary.

use styled_runs::Style;

/// Metrics for a piece of text measured in a single style.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct TextMetrics {
    /// Advance width of the measured text.
    pub width: f32,
    /// Total height of the measured text.
    pub height: f32,
    /// Distance from the baseline to the top of the text.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the text.
    pub descent: f32,
}

/// Source of text measurements.
///
/// Implementations must be pure and deterministic: for the duration of a
/// layout pass the same `(text, style)` pair always measures the same, and
/// measurement never fails. An implementation backed by a real font stack is
/// expected to substitute a deterministic fallback metric for styles it
/// cannot resolve rather than error; `galley_dev::FixedMeasurer` is the
/// reference fallback, deriving metrics from the font size alone.
pub trait Measurer {
    /// Measures `text` rendered entirely in `style`.
    fn measure(&self, text: &str, style: &Style) -> TextMetrics;
}

impl<M: Measurer + ?Sized> Measurer for &M {
    fn measure(&self, text: &str, style: &Style) -> TextMetrics {
        (**self).measure(text, style)
    }
}
