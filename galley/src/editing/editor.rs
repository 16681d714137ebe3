// Copyright 2025 the Galley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rich text editor and related types.

use peniko::kurbo::{Point, Rect};
use styled_runs::{Document, Style, StylePatch};

use crate::editing::Selection;
use crate::layout::Layout;
use crate::measure::Measurer;
use crate::position::Position;

/// Opaque representation of a generation.
///
/// Obtained from [`Editor::generation`].
// Overflow handling: the generations are only compared,
// so wrapping is fine. This could only fail if exactly
// `u32::MAX` generations happen between drawing
// operations. This is implausible and so can be ignored.
#[derive(PartialEq, Eq, Default, Clone, Copy, Debug)]
pub struct Generation(u32);

impl Generation {
    /// Make it not what it currently is.
    pub(crate) fn nudge(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// The observable outcome of an editing operation.
///
/// Consumers redraw when the contained generation differs from the one they
/// last rendered.
#[derive(Copy, Clone, Debug)]
pub struct EditResult {
    /// The caret position after the operation.
    pub cursor: Position,
    /// The selection after the operation.
    pub selection: Selection,
    /// The generation of the editor after the operation.
    pub generation: Generation,
}

/// Rich text editor over a styled [`Document`] and its derived [`Layout`].
///
/// The editor owns the document, the layout and the selection, and keeps
/// them consistent: every mutating operation rebuilds the layout whole and
/// re-derives the cursor and selection from character offsets taken before
/// the edit, so carets stay put when wrap points move.
///
/// Measurement is supplied per call as `&impl Measurer`; the editor holds no
/// font state. Positions passed in must address the editor's current layout:
/// that is a caller contract, checked with debug assertions only.
#[derive(Clone)]
pub struct Editor {
    document: Document,
    layout: Layout,
    selection: Selection,
    default_style: Style,
    /// Style to apply to the next insertion, recorded by a degenerate
    /// [`apply_style`](Self::apply_style) and cleared by any selection
    /// change.
    pending_style: Option<StylePatch>,
    origin: Point,
    max_width: Option<f32>,
    // Simple tracking of when the layout needs to be rebuilt before it can
    // be used for position calculations or for drawing. Not all operations
    // need a clean layout, and not all operations trigger a rebuild.
    layout_dirty: bool,
    generation: Generation,
}

impl Editor {
    /// Creates a new empty editor with the given default style.
    pub fn new(default_style: Style) -> Self {
        Self {
            document: Document::empty(),
            layout: Layout::default(),
            selection: Selection::default(),
            default_style,
            pending_style: None,
            origin: Point::ZERO,
            max_width: None,
            layout_dirty: true,
            // We don't use the `default` value to start with, as our consumers
            // will choose to use that as their initial value, but will probably need
            // to redraw if they haven't already.
            generation: Generation(1),
        }
    }

    /// Creates an editor over an existing document.
    pub fn from_document(document: Document, default_style: Style) -> Self {
        let mut editor = Self::new(default_style);
        editor.document = document;
        editor
    }

    // --- MARK: Editing operations ---

    /// Inserts `text` at `from`, first deleting the range up to `to` when
    /// one is given.
    ///
    /// A literal `'\n'` in `text` produces a hard line break. The insertion
    /// takes any pending style recorded by a degenerate
    /// [`apply_style`](Self::apply_style), consuming it; otherwise it
    /// inherits the style at the insertion point. The cursor lands after the
    /// inserted text.
    pub fn insert_text(
        &mut self,
        measurer: &impl Measurer,
        from: Position,
        to: Option<Position>,
        text: &str,
    ) -> EditResult {
        self.refresh_layout(measurer);
        debug_assert!(from.line < self.layout.len());
        let a = from.text_offset(&self.layout);
        let b = to.map_or(a, |to| to.text_offset(&self.layout));
        let (start, end) = (a.min(b), a.max(b));
        if start < end {
            self.document.remove(start..end);
        }
        let patch = self.pending_style.take();
        self.document.insert(start, text, patch.as_ref());
        self.rebuild_layout(measurer);
        let cursor = Position::from_text_offset(&self.layout, start + text.chars().count());
        self.selection = cursor.into();
        self.generation.nudge();
        self.result()
    }

    /// Deletes the range from `from` to `to`.
    ///
    /// With `to = None` this is a backspace: the single character before
    /// `from` is removed, which across a hard break is the newline itself
    /// and across a soft wrap is the last visible character of the previous
    /// line. Deleting everything leaves the empty placeholder document. The
    /// cursor lands at the start of the deleted range.
    pub fn delete_range(
        &mut self,
        measurer: &impl Measurer,
        from: Position,
        to: Option<Position>,
    ) -> EditResult {
        self.refresh_layout(measurer);
        debug_assert!(from.line < self.layout.len());
        let a = from.text_offset(&self.layout);
        let (start, end) = match to {
            Some(to) => {
                let b = to.text_offset(&self.layout);
                (a.min(b), a.max(b))
            }
            None => (a.saturating_sub(1), a),
        };
        if start < end {
            self.document.remove(start..end);
            self.rebuild_layout(measurer);
        }
        self.selection = Position::from_text_offset(&self.layout, start).into();
        self.generation.nudge();
        self.result()
    }

    /// Applies `patch` over the range from `from` to `to`, splitting runs at
    /// the range boundaries.
    ///
    /// Restyling may move wrap points; the selection endpoints are
    /// repositioned by character offset and keep their order. When the range
    /// is degenerate (`from == to`) no run is touched: the patch is combined
    /// into the pending style picked up by the next insertion.
    pub fn apply_style(
        &mut self,
        measurer: &impl Measurer,
        from: Position,
        to: Position,
        patch: &StylePatch,
    ) -> EditResult {
        self.refresh_layout(measurer);
        debug_assert!(from.line < self.layout.len() && to.line < self.layout.len());
        let a = from.text_offset(&self.layout);
        let b = to.text_offset(&self.layout);
        if a == b {
            let pending = match self.pending_style.take() {
                Some(existing) => existing.combine(patch),
                None => patch.clone(),
            };
            self.pending_style = Some(pending);
            self.generation.nudge();
            return self.result();
        }
        self.document.restyle(a.min(b)..a.max(b), patch);
        self.rebuild_layout(measurer);
        self.selection = Selection::new(
            Position::from_text_offset(&self.layout, a),
            Position::from_text_offset(&self.layout, b),
        );
        self.generation.nudge();
        self.result()
    }

    /// Inserts at the cursor, or replaces the selection.
    pub fn insert_or_replace_selection(
        &mut self,
        measurer: &impl Measurer,
        text: &str,
    ) -> EditResult {
        let (anchor, focus) = (self.selection.anchor(), self.selection.focus());
        self.insert_text(measurer, anchor, Some(focus), text)
    }

    /// Deletes the selection, if any.
    pub fn delete_selection(&mut self, measurer: &impl Measurer) -> EditResult {
        let (start, end) = self.selection.normalized();
        self.delete_range(measurer, start, Some(end))
    }

    /// Deletes the selection, or the character before the cursor (typical
    /// backspace behavior).
    pub fn backdelete(&mut self, measurer: &impl Measurer) -> EditResult {
        if self.selection.is_collapsed() {
            self.delete_range(measurer, self.selection.focus(), None)
        } else {
            self.delete_selection(measurer)
        }
    }

    /// Applies `patch` over the selection.
    ///
    /// On a collapsed selection this records the patch as the pending style
    /// for the next insertion.
    pub fn apply_style_to_selection(
        &mut self,
        measurer: &impl Measurer,
        patch: &StylePatch,
    ) -> EditResult {
        let (anchor, focus) = (self.selection.anchor(), self.selection.focus());
        self.apply_style(measurer, anchor, focus, patch)
    }

    // --- MARK: Cursor movement ---

    /// Moves the cursor one character back, or collapses the selection to
    /// its start.
    pub fn move_left(&mut self, measurer: &impl Measurer) {
        self.refresh_layout(measurer);
        let moved = self.selection.move_chars(&self.layout, -1, false);
        self.set_selection(moved);
    }

    /// Moves the cursor one character forward, or collapses the selection to
    /// its end.
    pub fn move_right(&mut self, measurer: &impl Measurer) {
        self.refresh_layout(measurer);
        let moved = self.selection.move_chars(&self.layout, 1, false);
        self.set_selection(moved);
    }

    /// Moves the cursor up one visual line, preserving the sticky horizontal
    /// position across consecutive vertical moves.
    pub fn move_up(&mut self, measurer: &impl Measurer) {
        self.refresh_layout(measurer);
        let moved = self.selection.move_lines(&self.layout, measurer, -1, false);
        self.set_selection(moved);
    }

    /// Moves the cursor down one visual line, preserving the sticky
    /// horizontal position across consecutive vertical moves.
    pub fn move_down(&mut self, measurer: &impl Measurer) {
        self.refresh_layout(measurer);
        let moved = self.selection.move_lines(&self.layout, measurer, 1, false);
        self.set_selection(moved);
    }

    /// Moves the cursor to the position containing the given point.
    pub fn move_to_point(&mut self, measurer: &impl Measurer, point: Point) {
        self.refresh_layout(measurer);
        let selection = Selection::from_point(&self.layout, measurer, point);
        self.set_selection(selection);
    }

    /// Extends the selection one character back.
    pub fn select_left(&mut self, measurer: &impl Measurer) {
        self.refresh_layout(measurer);
        let moved = self.selection.move_chars(&self.layout, -1, true);
        self.set_selection(moved);
    }

    /// Extends the selection one character forward.
    pub fn select_right(&mut self, measurer: &impl Measurer) {
        self.refresh_layout(measurer);
        let moved = self.selection.move_chars(&self.layout, 1, true);
        self.set_selection(moved);
    }

    /// Extends the selection one visual line up.
    pub fn select_up(&mut self, measurer: &impl Measurer) {
        self.refresh_layout(measurer);
        let moved = self.selection.move_lines(&self.layout, measurer, -1, true);
        self.set_selection(moved);
    }

    /// Extends the selection one visual line down.
    pub fn select_down(&mut self, measurer: &impl Measurer) {
        self.refresh_layout(measurer);
        let moved = self.selection.move_lines(&self.layout, measurer, 1, true);
        self.set_selection(moved);
    }

    /// Extends the selection to the position containing the given point.
    pub fn extend_selection_to_point(&mut self, measurer: &impl Measurer, point: Point) {
        self.refresh_layout(measurer);
        let focus = Position::from_point(&self.layout, measurer, point);
        let moved = self.selection.maybe_extend(focus, true);
        self.set_selection(moved);
    }

    /// Selects the whole document.
    pub fn select_all(&mut self, measurer: &impl Measurer) {
        self.refresh_layout(measurer);
        let end = Position::from_text_offset(&self.layout, self.layout.char_len());
        self.set_selection(Selection::new(Position::ZERO, end));
    }

    /// Collapses the selection to a caret at its focus.
    pub fn collapse_selection(&mut self) {
        let collapsed = self.selection.collapse();
        self.set_selection(collapsed);
    }

    // --- MARK: Configuration ---

    /// Replaces the whole document with the given plain text, styled by the
    /// default style.
    pub fn set_text(&mut self, text: &str) {
        self.document = Document::from_text(text);
        self.selection = Selection::default();
        self.pending_style = None;
        self.layout_dirty = true;
        self.generation.nudge();
    }

    /// Sets the wrapping width. `None` disables wrapping.
    pub fn set_width(&mut self, max_width: Option<f32>) {
        self.max_width = max_width;
        self.layout_dirty = true;
        self.generation.nudge();
    }

    /// Sets the origin the layout is built at.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
        self.layout_dirty = true;
        self.generation.nudge();
    }

    /// Sets the default style that document runs are resolved against. This
    /// includes the alignment used for short lines.
    pub fn set_default_style(&mut self, style: Style) {
        self.default_style = style;
        self.layout_dirty = true;
        self.generation.nudge();
    }

    // --- MARK: Queries ---

    /// Borrows the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The full document text, with one `'\n'` per hard break.
    pub fn text(&self) -> String {
        self.document.text()
    }

    /// The current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The current caret position, which is the focus of the selection.
    pub fn cursor(&self) -> Position {
        self.selection.focus()
    }

    /// The current generation, for change detection.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The text covered by the selection.
    pub fn selected_text(&mut self, measurer: &impl Measurer) -> String {
        self.refresh_layout(measurer);
        let (start, end) = self.selection.normalized();
        let range = start.text_offset(&self.layout)..end.text_offset(&self.layout);
        self.document.slice(range)
    }

    /// The number of characters covered by the selection, counting hard
    /// breaks and not soft wraps.
    pub fn selected_char_count(&mut self, measurer: &impl Measurer) -> usize {
        self.refresh_layout(measurer);
        self.selection.char_count(&self.layout)
    }

    /// The rectangles to highlight for the current selection.
    pub fn selection_geometry(&mut self, measurer: &impl Measurer) -> Vec<Rect> {
        self.refresh_layout(measurer);
        self.selection.geometry(&self.layout, measurer)
    }

    /// The rectangle to draw a caret of the given width at the cursor.
    pub fn cursor_geometry(&mut self, measurer: &impl Measurer, width: f32) -> Rect {
        self.refresh_layout(measurer);
        let focus = self.selection.focus();
        let point = focus.to_point(&self.layout, measurer);
        let height = self
            .layout
            .get(focus.line.min(self.layout.len().saturating_sub(1)))
            .map_or(0.0, |line| line.metrics.line_height);
        Rect::new(
            point.x,
            point.y,
            point.x + f64::from(width),
            point.y + f64::from(height),
        )
    }

    /// Borrows the layout, rebuilding it first if it is out of date.
    pub fn layout(&mut self, measurer: &impl Measurer) -> &Layout {
        self.refresh_layout(measurer);
        &self.layout
    }

    /// Borrows the layout if it is up to date.
    pub fn try_layout(&self) -> Option<&Layout> {
        (!self.layout_dirty).then_some(&self.layout)
    }

    // --- MARK: Internal ---

    /// Updates the selection, clearing any pending style and nudging the
    /// generation if something other than `h_pos` changed.
    fn set_selection(&mut self, selection: Selection) {
        if selection.observably_differs(&self.selection) {
            self.pending_style = None;
            self.generation.nudge();
        }
        self.selection = selection;
    }

    /// Rebuilds the layout if it is out of date, carrying the selection
    /// across by character offset.
    fn refresh_layout(&mut self, measurer: &impl Measurer) {
        if !self.layout_dirty {
            return;
        }
        let carried = (!self.layout.is_empty()).then(|| {
            (
                self.selection.anchor().text_offset(&self.layout),
                self.selection.focus().text_offset(&self.layout),
            )
        });
        self.rebuild_layout(measurer);
        let (anchor, focus) = carried.unwrap_or((0, 0));
        self.selection = Selection::new(
            Position::from_text_offset(&self.layout, anchor),
            Position::from_text_offset(&self.layout, focus),
        );
    }

    fn rebuild_layout(&mut self, measurer: &impl Measurer) {
        self.layout = Layout::build(
            measurer,
            self.origin,
            self.max_width,
            &self.document,
            &self.default_style,
        );
        self.layout_dirty = false;
    }

    fn result(&self) -> EditResult {
        EditResult {
            cursor: self.selection.focus(),
            selection: self.selection,
            generation: self.generation,
        }
    }
}
