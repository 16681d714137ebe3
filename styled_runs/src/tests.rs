// Copyright 2025 the Galley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Alignment, Color, Document, FontStyle, FontWeight, Style, StylePatch, TextRun};

fn patches(doc: &Document) -> Vec<(String, StylePatch)> {
    doc.runs()
        .iter()
        .map(|run| (run.text.clone(), run.style.clone()))
        .collect()
}

fn bold() -> StylePatch {
    StylePatch::new().font_weight(FontWeight::BOLD)
}

fn italic() -> StylePatch {
    StylePatch::new().font_style(FontStyle::Italic)
}

#[test]
fn merge_overrides_only_defined_fields() {
    let base = Style::default();
    let patch = StylePatch::new()
        .font_size(24.0)
        .underline(true)
        .color(Color::WHITE);
    let merged = base.merge(&patch);
    assert_eq!(merged.font_size, 24.0);
    assert!(merged.underline);
    assert_eq!(merged.color, Color::WHITE);
    // Untouched fields keep the base values.
    assert_eq!(merged.font_family, base.font_family);
    assert_eq!(merged.font_weight, base.font_weight);
    assert_eq!(merged.align, base.align);
    assert_eq!(merged.line_height, base.line_height);
}

#[test]
fn merge_of_empty_patch_is_identity() {
    let base = Style {
        font_size: 12.0,
        align: Alignment::Right,
        ..Style::default()
    };
    assert_eq!(base.merge(&StylePatch::new()), base);
}

#[test]
fn combine_agrees_with_sequential_merge() {
    let base = Style::default();
    let p1 = bold().font_size(20.0);
    let p2 = italic().font_size(32.0).underline(true);
    // Overlapping fields resolve last-writer-wins, so the equivalence holds
    // for overlapping patches as well as disjoint ones.
    assert_eq!(base.merge(&p1).merge(&p2), base.merge(&p1.combine(&p2)));
    assert_eq!(base.merge(&p2).merge(&p1), base.merge(&p2.combine(&p1)));
}

#[test]
fn combine_disjoint_fields_is_commutative() {
    let p1 = bold();
    let p2 = StylePatch::new().line_height(1.5);
    assert_eq!(p1.combine(&p2), p2.combine(&p1));
}

#[test]
fn font_weight_clamps() {
    assert_eq!(FontWeight::new(0.0).value(), 1.0);
    assert_eq!(FontWeight::new(2000.0).value(), 1000.0);
    assert!(FontWeight::new(800.0).is_bold());
    assert!(!FontWeight::NORMAL.is_bold());
}

#[test]
fn document_text_concatenates_runs() {
    let doc = Document::new(vec![
        TextRun::new("Hello, ", StylePatch::new()),
        TextRun::new("world", bold()),
        TextRun::new("!", StylePatch::new()),
    ]);
    assert_eq!(doc.text(), "Hello, world!");
    assert_eq!(doc.char_len(), 13);
    assert!(!doc.is_empty());
}

#[test]
fn empty_document_has_placeholder_run() {
    let doc = Document::empty();
    assert_eq!(doc.runs().len(), 1);
    assert!(doc.is_empty());
    assert_eq!(Document::new(Vec::new()), doc);
}

#[test]
fn insert_without_style_extends_run() {
    let mut doc = Document::from_text("acd");
    doc.insert(1, "b", None);
    assert_eq!(doc.text(), "abcd");
    assert_eq!(doc.runs().len(), 1);
}

#[test]
fn insert_with_matching_style_extends_run() {
    let mut doc = Document::new(vec![TextRun::new("ab", bold())]);
    doc.insert(2, "c", Some(&bold()));
    assert_eq!(doc.runs().len(), 1);
    assert_eq!(doc.text(), "abc");
}

#[test]
fn insert_with_new_style_splits_run() {
    let mut doc = Document::from_text("abcd");
    doc.insert(2, "XY", Some(&bold()));
    assert_eq!(
        patches(&doc),
        vec![
            ("ab".into(), StylePatch::new()),
            ("XY".into(), bold()),
            ("cd".into(), StylePatch::new()),
        ]
    );
}

#[test]
fn insert_with_new_style_at_run_edges_drops_empty_pieces() {
    let mut doc = Document::from_text("abc");
    doc.insert(0, "X", Some(&bold()));
    assert_eq!(doc.runs().len(), 2);
    assert_eq!(doc.text(), "Xabc");
    doc.insert(4, "Y", Some(&italic()));
    assert_eq!(doc.runs().len(), 3);
    assert_eq!(doc.text(), "XabcY");
}

#[test]
fn insert_into_placeholder_replaces_it() {
    let mut doc = Document::empty();
    doc.insert(0, "hi", Some(&bold()));
    assert_eq!(patches(&doc), vec![("hi".into(), bold())]);
}

#[test]
fn remove_splices_across_runs() {
    let mut doc = Document::new(vec![
        TextRun::new("abc", StylePatch::new()),
        TextRun::new("def", bold()),
        TextRun::new("ghi", StylePatch::new()),
    ]);
    doc.remove(2..7);
    assert_eq!(doc.text(), "abhi");
    assert_eq!(doc.runs().len(), 2);
}

#[test]
fn remove_everything_collapses_to_placeholder() {
    let mut doc = Document::new(vec![
        TextRun::new("abc", bold()),
        TextRun::new("def", StylePatch::new()),
    ]);
    doc.remove(0..6);
    assert!(doc.is_empty());
    assert_eq!(doc.runs().len(), 1);
    assert_eq!(doc.runs()[0].style, StylePatch::new());
}

#[test]
fn restyle_splits_at_boundaries() {
    let mut doc = Document::from_text("abcdef");
    doc.restyle(2..4, &bold());
    assert_eq!(
        patches(&doc),
        vec![
            ("ab".into(), StylePatch::new()),
            ("cd".into(), bold()),
            ("ef".into(), StylePatch::new()),
        ]
    );
}

#[test]
fn restyle_combines_into_existing_patches() {
    let mut doc = Document::new(vec![
        TextRun::new("abc", bold()),
        TextRun::new("def", italic()),
    ]);
    doc.restyle(1..5, &StylePatch::new().underline(true));
    let runs = patches(&doc);
    assert_eq!(runs.len(), 4);
    assert_eq!(runs[0], ("a".into(), bold()));
    assert_eq!(runs[1], ("bc".into(), bold().underline(true)));
    assert_eq!(runs[2], ("de".into(), italic().underline(true)));
    assert_eq!(runs[3], ("f".into(), italic()));
}

#[test]
fn runs_fully_inside_range_are_restyled_whole() {
    let mut doc = Document::new(vec![
        TextRun::new("ab", StylePatch::new()),
        TextRun::new("cd", bold()),
        TextRun::new("ef", StylePatch::new()),
    ]);
    doc.restyle(0..6, &StylePatch::new().underline(true));
    assert_eq!(doc.runs().len(), 3);
    for run in doc.runs() {
        assert_eq!(run.style.underline, Some(true));
    }
}

#[test]
fn mutation_does_not_coalesce_identical_neighbors() {
    let mut doc = Document::new(vec![
        TextRun::new("ab", bold()),
        TextRun::new("cd", bold()),
    ]);
    doc.insert(2, "x", None);
    assert_eq!(doc.runs().len(), 2);
    doc.coalesce();
    assert_eq!(patches(&doc), vec![("abxcd".into(), bold())]);
}

#[test]
fn slice_respects_char_offsets() {
    let doc = Document::new(vec![
        TextRun::new("héllo ", StylePatch::new()),
        TextRun::new("wörld", bold()),
    ]);
    assert_eq!(doc.slice(1..9), "éllo wör");
    assert_eq!(doc.slice(6..11), "wörld");
    assert_eq!(doc.char_len(), 11);
}

#[cfg(feature = "serde")]
#[test]
fn document_round_trips_through_serde() {
    let doc = Document::new(vec![
        TextRun::new("plain ", StylePatch::new()),
        TextRun::new("loud", bold().font_size(20.0)),
    ]);
    let json = serde_json::to_string(&doc).unwrap();
    let back: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
    // The persisted shape is the bare ordered run list.
    assert!(json.starts_with('['));
}
