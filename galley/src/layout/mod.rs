// Copyright 2025 the Galley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout types.
//!
//! A [`Layout`] is a derived, display-oriented view of a
//! [`Document`](styled_runs::Document): an ordered list of [`WrappedLine`]s,
//! each made of [`Segment`]s sharing one fully resolved style. Layouts are
//! regenerated whole by [`Layout::build`]; they are never patched
//! incrementally and never persisted.

mod line_break;

use core::cmp::Ordering;

use peniko::kurbo::Point;
use styled_runs::Style;

use crate::measure::Measurer;

/// Why a wrapped line ended where it did.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub enum BreakReason {
    /// The line was not broken; it is the final line of the layout.
    #[default]
    None,
    /// The line was broken by the width constraint (a soft wrap).
    Regular,
    /// The line was ended by a newline character in the text.
    Explicit,
}

/// A contiguous sub-span of a wrapped line sharing one resolved style.
#[derive(Clone, PartialEq, Debug)]
pub struct Segment {
    /// The segment's text.
    pub text: String,
    /// Horizontal offset from the start of the line's content.
    pub x: f32,
    /// Vertical offset of the baseline from the top of the line.
    pub y: f32,
    /// Measured advance width of the segment.
    pub width: f32,
    /// The resolved style of the segment.
    pub style: Style,
}

impl Segment {
    /// The length of the segment's text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Metrics for a wrapped line.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct LineMetrics {
    /// Height of the line: the maximum over its segments of
    /// `(ascent + descent) * line_height`.
    pub line_height: f32,
    /// Distance from the top of the line to its baseline.
    pub baseline: f32,
    /// Advance width of the line's content.
    pub width: f32,
    /// Horizontal alignment offset of the line's content.
    pub offset: f32,
    /// Vertical offset of the top of the line from the top of the layout.
    pub y: f32,
}

/// A single wrapped display line.
///
/// Line text holds exactly the document characters the line covers; the
/// newline character ending an [`Explicit`](BreakReason::Explicit) line is
/// implied by the break reason and not stored.
#[derive(Clone, PartialEq, Debug)]
pub struct WrappedLine {
    /// Index of the document run the line's first segment came from.
    pub source_run: usize,
    /// The line's text.
    pub text: String,
    /// The line's metrics.
    pub metrics: LineMetrics,
    /// The line's segments, in visual order.
    pub segments: Vec<Segment>,
    /// Why the line ended.
    pub break_reason: BreakReason,
}

impl WrappedLine {
    /// The length of the line's text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether this line was ended by the width constraint rather than by an
    /// authored newline or the end of the text.
    pub fn is_soft_wrapped(&self) -> bool {
        self.break_reason == BreakReason::Regular
    }

    /// Whether this line ends in an authored newline character.
    pub fn has_hard_break(&self) -> bool {
        self.break_reason == BreakReason::Explicit
    }

    /// Measured advance width of the first `column` characters of the line,
    /// relative to the start of the line's content.
    pub fn prefix_width<M: Measurer>(&self, measurer: &M, column: usize) -> f32 {
        let mut width = 0.0;
        let mut remaining = column;
        for segment in &self.segments {
            if remaining == 0 {
                break;
            }
            let len = segment.char_len();
            if remaining >= len {
                width += segment.width;
                remaining -= len;
            } else {
                let end = byte_offset(&segment.text, remaining);
                width += measurer
                    .measure(&segment.text[..end], &segment.style)
                    .width;
                remaining = 0;
            }
        }
        width
    }
}

/// A list of wrapped display lines derived from a document.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Layout {
    pub(crate) lines: Vec<WrappedLine>,
    pub(crate) base: Style,
    pub(crate) origin: Point,
    pub(crate) max_width: Option<f32>,
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl Layout {
    /// Returns the number of lines in the layout.
    ///
    /// Always at least one; an empty document produces a single placeholder
    /// line with one empty segment.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the layout holds no lines.
    ///
    /// This is never the case for a layout produced by [`Layout::build`].
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the line at the specified index.
    pub fn get(&self, index: usize) -> Option<&WrappedLine> {
        self.lines.get(index)
    }

    /// Returns an iterator over the lines in the layout.
    pub fn lines(&self) -> impl Iterator<Item = &WrappedLine> + '_ + Clone {
        self.lines.iter()
    }

    /// Returns the base style runs are resolved against.
    pub fn base(&self) -> &Style {
        &self.base
    }

    /// Returns the origin the layout was built at.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the wrapping width the layout was built with.
    pub fn max_width(&self) -> Option<f32> {
        self.max_width
    }

    /// Returns the advance width of the widest line.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the total height of the layout.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Reconstructs the document text from the wrapped lines.
    ///
    /// Soft wrap boundaries contribute nothing; a newline is emitted after
    /// every line ended by an authored break.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(&line.text);
            if line.break_reason == BreakReason::Explicit {
                text.push('\n');
            }
        }
        text
    }

    /// The length of the reconstructed document text in characters,
    /// counting one character per authored newline.
    pub fn char_len(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.char_len() + usize::from(line.has_hard_break()))
            .sum()
    }

    /// Returns the index of the line containing the given vertical offset,
    /// measured from the top of the layout.
    ///
    /// Offsets outside the layout clamp to the first or last line. An offset
    /// on a line boundary is contained by the later line.
    pub fn line_for_offset(&self, offset: f32) -> usize {
        if offset < 0.0 {
            return 0;
        }
        let result = self.lines.binary_search_by(|line| {
            if offset < line.metrics.y {
                Ordering::Greater
            } else if offset >= line.metrics.y + line.metrics.line_height {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        });
        match result {
            Ok(index) => index,
            Err(_) => self.lines.len().saturating_sub(1),
        }
    }
}

/// Byte index of the `chars`-th character of `text` (or `text.len()` past
/// the end).
pub(crate) fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i)
}
