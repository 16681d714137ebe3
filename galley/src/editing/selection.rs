// Copyright 2025 the Galley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::{Point, Rect};

use crate::layout::Layout;
use crate::measure::Measurer;
use crate::position::{chars_between, Position};

/// Defines a range within a layout.
///
/// The `anchor` is where the selection was initiated and the `focus` is the
/// current caret position; the focus may precede the anchor. A selection
/// whose endpoints coincide is collapsed and represents a caret.
#[derive(Copy, Clone, Default, Debug)]
pub struct Selection {
    anchor: Position,
    focus: Position,
    h_pos: Option<f32>,
}

impl From<Position> for Selection {
    fn from(position: Position) -> Self {
        Self::new(position, position)
    }
}

impl Selection {
    /// Minimum width of a selection rectangle, so that selected empty lines
    /// and newlines remain visible.
    pub const MIN_RECT_WIDTH: f64 = 4.0;

    /// Creates a new selection from the given anchor and focus positions.
    pub fn new(anchor: Position, focus: Position) -> Self {
        Self {
            anchor,
            focus,
            h_pos: None,
        }
    }

    /// Creates a new collapsed selection from the given point.
    pub fn from_point<M: Measurer>(layout: &Layout, measurer: &M, point: Point) -> Self {
        Position::from_point(layout, measurer, point).into()
    }

    /// Returns the anchor of the selection.
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Returns the focus of the selection.
    pub fn focus(&self) -> Position {
        self.focus
    }

    /// Returns true if the anchor and focus of the selection are the same.
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    /// Returns the endpoints of the selection in document order.
    pub fn normalized(&self) -> (Position, Position) {
        if self.anchor <= self.focus {
            (self.anchor, self.focus)
        } else {
            (self.focus, self.anchor)
        }
    }

    /// Returns a collapsed selection at the focus.
    pub fn collapse(&self) -> Self {
        Self {
            anchor: self.focus,
            focus: self.focus,
            h_pos: self.h_pos,
        }
    }

    /// Returns this selection moved (or extended) to the given position.
    pub fn maybe_extend(&self, focus: Position, extend: bool) -> Self {
        if extend {
            Self::new(self.anchor, focus)
        } else {
            focus.into()
        }
    }

    /// Returns this selection with the focus moved by `delta` characters of
    /// the underlying text, clamped to the layout.
    pub fn move_chars(&self, layout: &Layout, delta: isize, extend: bool) -> Self {
        if !extend && !self.is_collapsed() {
            // Plain horizontal movement on a range collapses to its edge.
            let (start, end) = self.normalized();
            return if delta < 0 { start.into() } else { end.into() };
        }
        self.maybe_extend(self.focus.offset_by(layout, delta), extend)
    }

    /// Returns this selection with the focus moved by `delta` visual lines,
    /// preserving the sticky horizontal position across successive calls.
    pub fn move_lines<M: Measurer>(
        &self,
        layout: &Layout,
        measurer: &M,
        delta: isize,
        extend: bool,
    ) -> Self {
        if layout.is_empty() {
            return *self;
        }
        let last = layout.len() - 1;
        if delta < 0 && self.focus.line == 0 {
            return self.maybe_extend(Position::ZERO, extend);
        }
        if delta > 0 && self.focus.line == last {
            let column = layout.get(last).map_or(0, |line| line.char_len());
            return self.maybe_extend(Position::new(last, column), extend);
        }
        let h_pos = self.h_pos.unwrap_or_else(|| {
            layout.get(self.focus.line).map_or(0.0, |line| {
                line.metrics.offset + line.prefix_width(measurer, self.focus.column)
            })
        });
        let target = self.focus.line.saturating_add_signed(delta).min(last);
        let y = layout
            .get(target)
            .map_or(0.0, |line| line.metrics.y + line.metrics.line_height * 0.5);
        let point = Point::new(
            layout.origin().x + f64::from(h_pos),
            layout.origin().y + f64::from(y),
        );
        let mut moved =
            self.maybe_extend(Position::from_point(layout, measurer, point), extend);
        moved.h_pos = Some(h_pos);
        moved
    }

    /// Counts the characters covered by the selection, one per authored
    /// newline and none for soft wrap boundaries.
    pub fn char_count(&self, layout: &Layout) -> usize {
        chars_between(layout, self.anchor, self.focus, false)
    }

    /// Returns a vector of rectangles representing the visual geometry of
    /// this selection for the given layout.
    ///
    /// This is a convenience method built on [`geometry_with`](Self::geometry_with).
    pub fn geometry<M: Measurer>(&self, layout: &Layout, measurer: &M) -> Vec<Rect> {
        let mut rects = Vec::new();
        self.geometry_with(layout, measurer, |rect| rects.push(rect));
        rects
    }

    /// Invokes `f` with the sequence of rectangles which represent the visual
    /// geometry of this selection for the given layout.
    ///
    /// This avoids allocation if the intent is to render the rectangles
    /// immediately. One rectangle is produced per intersected line; interior
    /// lines span their full content width, and lines whose covered content
    /// is empty (an empty line, or a trailing newline) still get a sliver of
    /// [`MIN_RECT_WIDTH`](Self::MIN_RECT_WIDTH).
    pub fn geometry_with<M: Measurer>(
        &self,
        layout: &Layout,
        measurer: &M,
        mut f: impl FnMut(Rect),
    ) {
        if self.is_collapsed() {
            return;
        }
        let (start, end) = self.normalized();
        let start = start.canonical(layout);
        let end = end.canonical(layout);
        let origin = layout.origin();
        for index in start.line..=end.line {
            let Some(line) = layout.get(index) else {
                continue;
            };
            let start_col = if index == start.line { start.column } else { 0 };
            let end_col = if index == end.line {
                end.column
            } else {
                line.char_len()
            };
            if end_col < start_col || (end_col == start_col && index == end.line) {
                continue;
            }
            let x0 = line.metrics.offset + line.prefix_width(measurer, start_col);
            let x1 = line.metrics.offset + line.prefix_width(measurer, end_col);
            let width = f64::from(x1 - x0).max(Self::MIN_RECT_WIDTH);
            let y0 = origin.y + f64::from(line.metrics.y);
            f(Rect::new(
                origin.x + f64::from(x0),
                y0,
                origin.x + f64::from(x0) + width,
                y0 + f64::from(line.metrics.line_height),
            ));
        }
    }

    /// Whether the selection differs from `other` in a way a consumer could
    /// observe, ignoring the sticky horizontal position.
    pub(crate) fn observably_differs(&self, other: &Self) -> bool {
        self.anchor != other.anchor || self.focus != other.focus
    }
}
