// Copyright 2025 the Galley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line/column addressing over a layout.

use peniko::kurbo::Point;

use crate::layout::{BreakReason, Layout};
use crate::measure::Measurer;

/// A caret position in a layout, addressed by wrapped line and column.
///
/// Columns count characters from the start of the line's content. A column
/// equal to the line's character count addresses the end of the line; on a
/// soft-wrapped line that position is equivalent to column 0 of the next
/// line, and the latter is the canonical form.
///
/// Positions address a specific layout and are invalidated by any document
/// or layout mutation; re-derive them through [`Position::text_offset`] and
/// [`Position::from_text_offset`] across edits.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Debug)]
pub struct Position {
    /// Index of the wrapped line.
    pub line: usize,
    /// Character offset within the line's content.
    pub column: usize,
}

impl Position {
    /// The start of the layout.
    pub const ZERO: Self = Self { line: 0, column: 0 };

    /// Creates a position from a line index and a column.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Returns the position containing the given point.
    ///
    /// Points outside the layout clamp to the nearest line, then to the
    /// nearest column; a point past the middle of a character addresses the
    /// position after it.
    pub fn from_point<M: Measurer>(layout: &Layout, measurer: &M, point: Point) -> Self {
        let index = layout.line_for_offset((point.y - layout.origin().y) as f32);
        let Some(line) = layout.get(index) else {
            return Self::ZERO;
        };
        let x = (point.x - layout.origin().x) as f32 - line.metrics.offset;
        if x <= 0.0 {
            return Self::new(index, 0);
        }
        // Walk one segment at a time so each prefix measurement stays
        // scoped to the segment it falls in.
        let mut column = 0;
        let mut left = 0.0;
        let mut base = 0.0;
        for segment in &line.segments {
            for (i, c) in segment.text.char_indices() {
                let end = i + c.len_utf8();
                let right = base
                    + measurer
                        .measure(&segment.text[..end], &segment.style)
                        .width;
                if x < (left + right) * 0.5 {
                    return Self::new(index, column);
                }
                left = right;
                column += 1;
            }
            base += segment.width;
            left = base;
        }
        Self::new(index, column)
    }

    /// Returns the point at the top of the line at this position's column.
    ///
    /// Out-of-bounds lines and columns clamp to the end of the layout.
    pub fn to_point<M: Measurer>(&self, layout: &Layout, measurer: &M) -> Point {
        let index = self.line.min(layout.len().saturating_sub(1));
        let Some(line) = layout.get(index) else {
            return layout.origin();
        };
        let column = self.column.min(line.char_len());
        let x = line.metrics.offset + line.prefix_width(measurer, column);
        Point::new(
            layout.origin().x + f64::from(x),
            layout.origin().y + f64::from(line.metrics.y),
        )
    }

    /// Distance of this position from the start of the document, in
    /// characters of the underlying text.
    ///
    /// Crossing a hard break costs one character (the newline); crossing a
    /// soft wrap costs nothing.
    pub fn text_offset(&self, layout: &Layout) -> usize {
        let mut offset = 0;
        for (index, line) in layout.lines().enumerate() {
            if index == self.line {
                return offset + self.column.min(line.char_len());
            }
            offset += line.char_len() + usize::from(line.has_hard_break());
        }
        offset
    }

    /// Returns the position at the given distance from the start of the
    /// document, in characters of the underlying text.
    ///
    /// Out-of-bounds offsets clamp to the end of the layout. A position
    /// falling on a soft wrap boundary resolves to column 0 of the later
    /// line.
    pub fn from_text_offset(layout: &Layout, offset: usize) -> Self {
        let mut remaining = offset;
        for (index, line) in layout.lines().enumerate() {
            let len = line.char_len();
            match line.break_reason {
                BreakReason::Regular => {
                    if remaining < len {
                        return Self::new(index, remaining);
                    }
                    remaining -= len;
                }
                BreakReason::Explicit => {
                    if remaining <= len {
                        return Self::new(index, remaining);
                    }
                    remaining -= len + 1;
                }
                BreakReason::None => return Self::new(index, remaining.min(len)),
            }
        }
        Self::ZERO
    }

    /// Returns this position moved by `delta` characters of the underlying
    /// text, clamped to the layout.
    pub fn offset_by(&self, layout: &Layout, delta: isize) -> Self {
        let offset = self
            .text_offset(layout)
            .saturating_add_signed(delta)
            .min(layout.char_len());
        Self::from_text_offset(layout, offset)
    }

    /// Returns the canonical form of this position: clamped to the layout,
    /// with soft wrap boundaries resolved to column 0 of the later line.
    pub fn canonical(&self, layout: &Layout) -> Self {
        Self::from_text_offset(layout, self.text_offset(layout))
    }
}

/// Counts the characters between two positions.
///
/// The order of `from` and `to` does not matter. Hard breaks count one
/// character each; soft wrap boundaries count one extra character each when
/// `include_soft_breaks` is set and nothing otherwise.
pub fn chars_between(
    layout: &Layout,
    from: Position,
    to: Position,
    include_soft_breaks: bool,
) -> usize {
    let a = from.text_offset(layout);
    let b = to.text_offset(layout);
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut count = hi - lo;
    if include_soft_breaks {
        let start = Position::from_text_offset(layout, lo);
        let end = Position::from_text_offset(layout, hi);
        count += layout
            .lines()
            .skip(start.line)
            .take(end.line - start.line)
            .filter(|line| line.is_soft_wrapped())
            .count();
    }
    count
}
