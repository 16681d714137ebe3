// Copyright 2025 the Galley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The run-list document model.

use crate::StylePatch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A contiguous span of document text sharing one set of style overrides.
///
/// Runs are authored structure, not display structure; wrapping a run list
/// into lines is a layout concern and never feeds back into the model.
#[derive(Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextRun {
    /// The run's text.
    pub text: String,
    /// Style overrides applied on top of the layout's base style.
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: StylePatch,
}

impl TextRun {
    /// Creates a new run.
    pub fn new(text: impl Into<String>, style: StylePatch) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// The length of the run's text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// An ordered sequence of styled runs.
///
/// Concatenating all runs' text in order yields the full document text.
/// A document always contains at least one run; fully deleting all text
/// collapses it to a single empty placeholder run.
///
/// All offsets taken and returned by mutation primitives are character
/// offsets into the concatenated document text.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Document {
    runs: Vec<TextRun>,
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl Document {
    /// Creates an empty document holding the single placeholder run.
    pub fn empty() -> Self {
        Self {
            runs: vec![TextRun::default()],
        }
    }

    /// Creates a document from an initial run list.
    ///
    /// An empty list is replaced by the placeholder run.
    pub fn new(runs: Vec<TextRun>) -> Self {
        if runs.is_empty() {
            Self::empty()
        } else {
            Self { runs }
        }
    }

    /// Creates a document with a single unstyled run.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![TextRun::new(text, StylePatch::new())],
        }
    }

    /// The runs of the document, in order.
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// The full document text.
    pub fn text(&self) -> String {
        let mut text = String::with_capacity(self.runs.iter().map(|r| r.text.len()).sum());
        for run in &self.runs {
            text.push_str(&run.text);
        }
        text
    }

    /// The length of the document text in characters.
    pub fn char_len(&self) -> usize {
        self.runs.iter().map(TextRun::char_len).sum()
    }

    /// Whether the document contains no text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| run.text.is_empty())
    }

    /// Returns the text of the character range `start..end`.
    pub fn slice(&self, range: core::ops::Range<usize>) -> String {
        let mut out = String::new();
        let mut acc = 0;
        for run in &self.runs {
            let len = run.char_len();
            let start = range.start.clamp(acc, acc + len);
            let end = range.end.clamp(acc, acc + len);
            if start < end {
                let bs = byte_offset(&run.text, start - acc);
                let be = byte_offset(&run.text, end - acc);
                out.push_str(&run.text[bs..be]);
            }
            acc += len;
        }
        out
    }

    /// Inserts `text` at the character offset `offset`.
    ///
    /// With no `style`, or when `style` equals the patch of the run under the
    /// offset, the run is extended in place. Otherwise the run is split
    /// around the insertion and a new run carrying `style` is placed between
    /// the pieces.
    ///
    /// `offset` must be at most [`char_len`](Self::char_len).
    pub fn insert(&mut self, offset: usize, text: &str, style: Option<&StylePatch>) {
        debug_assert!(
            offset <= self.char_len(),
            "insertion offset {offset} out of bounds"
        );
        if text.is_empty() {
            return;
        }
        let (index, local) = self.locate(offset);
        let run = &mut self.runs[index];
        let at = byte_offset(&run.text, local);
        match style {
            Some(patch) if *patch != run.style => {
                let after = run.text.split_off(at);
                let before = core::mem::take(&mut run.text);
                let style = core::mem::take(&mut run.style);
                let mut pieces = Vec::with_capacity(3);
                if !before.is_empty() {
                    pieces.push(TextRun::new(before, style.clone()));
                }
                pieces.push(TextRun::new(text, patch.clone()));
                if !after.is_empty() {
                    pieces.push(TextRun::new(after, style));
                }
                self.runs.splice(index..=index, pieces);
            }
            _ => run.text.insert_str(at, text),
        }
    }

    /// Removes the character range `start..end`, splicing across runs.
    ///
    /// Runs emptied by the removal are dropped; a fully emptied document
    /// collapses to the single placeholder run.
    pub fn remove(&mut self, range: core::ops::Range<usize>) {
        debug_assert!(
            range.start <= range.end && range.end <= self.char_len(),
            "removal range {range:?} out of bounds"
        );
        if range.is_empty() {
            return;
        }
        let mut acc = 0;
        self.runs.retain_mut(|run| {
            let len = run.char_len();
            let start = range.start.clamp(acc, acc + len);
            let end = range.end.clamp(acc, acc + len);
            acc += len;
            if start < end {
                let bs = byte_offset(&run.text, start - (acc - len));
                let be = byte_offset(&run.text, end - (acc - len));
                run.text.replace_range(bs..be, "");
            }
            !run.text.is_empty()
        });
        if self.runs.is_empty() {
            self.runs.push(TextRun::default());
        }
    }

    /// Combines `patch` into every run intersected by the character range
    /// `start..end`.
    ///
    /// Intersected runs are split at the range boundaries (up to pre, inside
    /// and post pieces); only the inside pieces are restyled. Runs fully
    /// inside the range are restyled whole.
    pub fn restyle(&mut self, range: core::ops::Range<usize>, patch: &StylePatch) {
        debug_assert!(
            range.start <= range.end && range.end <= self.char_len(),
            "restyle range {range:?} out of bounds"
        );
        if range.is_empty() || patch.is_empty() {
            return;
        }
        let mut out = Vec::with_capacity(self.runs.len() + 2);
        let mut acc = 0;
        for run in self.runs.drain(..) {
            let len = run.char_len();
            let start = range.start.clamp(acc, acc + len);
            let end = range.end.clamp(acc, acc + len);
            if start >= end {
                out.push(run);
            } else {
                let bs = byte_offset(&run.text, start - acc);
                let be = byte_offset(&run.text, end - acc);
                if bs > 0 {
                    out.push(TextRun::new(&run.text[..bs], run.style.clone()));
                }
                out.push(TextRun::new(&run.text[bs..be], run.style.combine(patch)));
                if be < run.text.len() {
                    out.push(TextRun::new(&run.text[be..], run.style.clone()));
                }
            }
            acc += len;
        }
        self.runs = out;
    }

    /// Merges adjacent runs with identical patches and drops empty runs.
    ///
    /// Never called implicitly by the mutation primitives.
    pub fn coalesce(&mut self) {
        let mut out: Vec<TextRun> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if run.text.is_empty() {
                continue;
            }
            match out.last_mut() {
                Some(last) if last.style == run.style => last.text.push_str(&run.text),
                _ => out.push(run),
            }
        }
        if out.is_empty() {
            out.push(TextRun::default());
        }
        self.runs = out;
    }

    /// Finds the run containing the character offset, preferring the end of
    /// an earlier run over the start of a later one at boundaries.
    fn locate(&self, offset: usize) -> (usize, usize) {
        let mut acc = 0;
        for (index, run) in self.runs.iter().enumerate() {
            let len = run.char_len();
            if offset <= acc + len {
                return (index, offset - acc);
            }
            acc += len;
        }
        let last = self.runs.len() - 1;
        (last, self.runs[last].char_len())
    }
}

/// Byte index of the `chars`-th character of `text` (or `text.len()` past
/// the end).
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i)
}
