// Copyright 2025 the Galley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Rect;

use super::utils::TestEnv;
use crate::editing::Selection;
use crate::position::Position;

#[test]
fn collapsed_selection_has_no_geometry() {
    let env = TestEnv::new();
    let layout = env.layout("abcd", None);

    let selection = Selection::from(Position::new(0, 2));
    assert!(selection.is_collapsed());
    assert!(selection.geometry(&layout, &env.measurer).is_empty());
}

#[test]
fn single_line_geometry_covers_the_range() {
    let env = TestEnv::new();
    let layout = env.layout("abcd", None);

    let selection = Selection::new(Position::new(0, 1), Position::new(0, 3));
    let rects = selection.geometry(&layout, &env.measurer);
    assert_eq!(rects, [Rect::new(8.0, 0.0, 24.0, 16.0)]);
}

#[test]
fn geometry_is_symmetric_in_its_endpoints() {
    let env = TestEnv::new();
    let layout = env.layout("hello world", Some(48.0));

    let a = Position::new(0, 2);
    let b = Position::new(1, 3);
    let forward = Selection::new(a, b).geometry(&layout, &env.measurer);
    let backward = Selection::new(b, a).geometry(&layout, &env.measurer);
    assert_eq!(forward, backward);
}

#[test]
fn multi_line_geometry_spans_full_interior_width() {
    let env = TestEnv::new();
    let layout = env.layout("hello world", Some(48.0));

    let selection = Selection::new(Position::new(0, 2), Position::new(1, 3));
    let rects = selection.geometry(&layout, &env.measurer);
    assert_eq!(
        rects,
        [
            // Start line: from the start column to the end of its content.
            Rect::new(16.0, 0.0, 48.0, 16.0),
            // End line: from column 0 to the end column.
            Rect::new(0.0, 16.0, 24.0, 32.0),
        ]
    );
}

#[test]
fn selected_empty_lines_get_a_visible_sliver() {
    let env = TestEnv::new();
    let layout = env.layout("a\n\nb", None);

    let selection = Selection::new(Position::ZERO, Position::new(2, 1));
    let rects = selection.geometry(&layout, &env.measurer);
    assert_eq!(rects.len(), 3);
    assert_eq!(rects[1].width(), Selection::MIN_RECT_WIDTH);
    assert_eq!(rects[1].y0, 16.0);
}

#[test]
fn selected_trailing_newline_gets_a_visible_sliver() {
    let env = TestEnv::new();
    let layout = env.layout("a\nb", None);

    // Only the newline after "a" is selected.
    let selection = Selection::new(Position::new(0, 1), Position::new(1, 0));
    let rects = selection.geometry(&layout, &env.measurer);
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].x0, 8.0);
    assert_eq!(rects[0].width(), Selection::MIN_RECT_WIDTH);
}

#[test]
fn geometry_respects_alignment_offsets() {
    let mut env = TestEnv::new();
    env.style.align = styled_runs::Alignment::Right;
    let layout = env.layout("ab", Some(80.0));

    let selection = Selection::new(Position::ZERO, Position::new(0, 2));
    let rects = selection.geometry(&layout, &env.measurer);
    assert_eq!(rects, [Rect::new(64.0, 0.0, 80.0, 16.0)]);
}

#[test]
fn char_count_ignores_soft_breaks() {
    let env = TestEnv::new();
    let layout = env.layout("hello world", Some(48.0));

    let selection = Selection::new(Position::ZERO, Position::new(1, 0));
    assert_eq!(selection.char_count(&layout), 6);
    let selection = Selection::new(Position::ZERO, Position::new(1, 5));
    assert_eq!(selection.char_count(&layout), 11);
}

#[test]
fn char_count_includes_hard_breaks() {
    let env = TestEnv::new();
    let layout = env.layout("ab\ncd", None);

    let selection = Selection::new(Position::ZERO, Position::new(1, 2));
    assert_eq!(selection.char_count(&layout), 5);
}

#[test]
fn normalization_orders_the_endpoints() {
    let selection = Selection::new(Position::new(1, 0), Position::new(0, 3));
    let (start, end) = selection.normalized();
    assert_eq!(start, Position::new(0, 3));
    assert_eq!(end, Position::new(1, 0));
    assert_eq!(selection.focus(), Position::new(0, 3));
    assert_eq!(selection.anchor(), Position::new(1, 0));
}

#[test]
fn maybe_extend_keeps_or_moves_the_anchor() {
    let selection = Selection::new(Position::ZERO, Position::new(0, 2));

    let extended = selection.maybe_extend(Position::new(0, 4), true);
    assert_eq!(extended.anchor(), Position::ZERO);
    assert_eq!(extended.focus(), Position::new(0, 4));

    let moved = selection.maybe_extend(Position::new(0, 4), false);
    assert!(moved.is_collapsed());
    assert_eq!(moved.focus(), Position::new(0, 4));
}

#[test]
fn collapse_lands_on_the_focus() {
    let selection = Selection::new(Position::ZERO, Position::new(0, 2));
    let collapsed = selection.collapse();
    assert!(collapsed.is_collapsed());
    assert_eq!(collapsed.focus(), Position::new(0, 2));
}
