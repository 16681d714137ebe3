// Copyright 2025 the Galley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy line breaking.

use peniko::kurbo::Point;
use styled_runs::{Alignment, Document, Style};

use super::{BreakReason, Layout, LineMetrics, Segment, WrappedLine};
use crate::measure::{Measurer, TextMetrics};

/// A segment being accumulated for the line in progress.
#[derive(Clone, Debug)]
struct PendingSegment {
    run_index: usize,
    style: Style,
    text: String,
    metrics: TextMetrics,
}

/// The line in progress.
#[derive(Default, Debug)]
struct LineState {
    segments: Vec<PendingSegment>,
}

impl LineState {
    fn width(&self) -> f32 {
        self.segments.iter().map(|seg| seg.metrics.width).sum()
    }

    fn has_chars(&self) -> bool {
        self.segments.iter().any(|seg| !seg.text.is_empty())
    }

    fn ends_in_space(&self) -> bool {
        self.segments
            .last()
            .is_some_and(|seg| seg.text.ends_with(' '))
    }

    /// Width of the line if `token` were appended with the given style.
    fn width_if_appended<M: Measurer>(
        &self,
        measurer: &M,
        run_index: usize,
        style: &Style,
        token: &str,
    ) -> f32 {
        match self.segments.last() {
            Some(seg) if seg.run_index == run_index && seg.style == *style => {
                let mut joined = seg.text.clone();
                joined.push_str(token);
                self.width() - seg.metrics.width + measurer.measure(&joined, style).width
            }
            _ => self.width() + measurer.measure(token, style).width,
        }
    }

    fn append<M: Measurer>(&mut self, measurer: &M, run_index: usize, style: &Style, token: &str) {
        match self.segments.last_mut() {
            Some(seg) if seg.run_index == run_index && seg.style == *style => {
                seg.text.push_str(token);
                seg.metrics = measurer.measure(&seg.text, style);
            }
            _ => self.segments.push(PendingSegment {
                run_index,
                style: style.clone(),
                text: String::from(token),
                metrics: measurer.measure(token, style),
            }),
        }
    }

    /// Splits off everything after the last space in the line, keeping the
    /// space. Returns `None` if the line contains no space.
    fn split_after_last_space<M: Measurer>(
        &mut self,
        measurer: &M,
    ) -> Option<Vec<PendingSegment>> {
        let (index, space) = self
            .segments
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, seg)| seg.text.rfind(' ').map(|at| (i, at)))?;
        let mut carried: Vec<PendingSegment> = self.segments.drain(index + 1..).collect();
        let seg = &mut self.segments[index];
        let after = seg.text.split_off(space + 1);
        seg.metrics = measurer.measure(&seg.text, &seg.style);
        if !after.is_empty() {
            carried.insert(
                0,
                PendingSegment {
                    run_index: seg.run_index,
                    style: seg.style.clone(),
                    metrics: measurer.measure(&after, &seg.style),
                    text: after,
                },
            );
        }
        Some(carried)
    }
}

struct LineBreaker<'a, M: Measurer> {
    measurer: &'a M,
    max_width: f32,
    lines: Vec<WrappedLine>,
    line: LineState,
    current_run: usize,
    current_style: Style,
}

impl<M: Measurer> LineBreaker<'_, M> {
    /// Spaces never trigger a wrap decision; a trailing space may overflow
    /// the width constraint and stays on its line.
    fn append_space(&mut self) {
        let style = self.current_style.clone();
        self.line
            .append(self.measurer, self.current_run, &style, " ");
    }

    fn append_word(&mut self, token: &str) {
        let style = self.current_style.clone();
        let fits = self
            .line
            .width_if_appended(self.measurer, self.current_run, &style, token)
            <= self.max_width;
        if fits || !self.line.has_chars() {
            // A word wider than the constraint alone is placed on its own
            // line without character-level breaking.
            self.line
                .append(self.measurer, self.current_run, &style, token);
            return;
        }
        if self.line.ends_in_space() {
            self.finish_line(BreakReason::Regular, Vec::new());
            self.line
                .append(self.measurer, self.current_run, &style, token);
            return;
        }
        // The overflowing token continues a word started earlier (a style
        // change mid-word does not constitute a break opportunity). Carry
        // the trailing partial word over to the next line whole.
        match self.line.split_after_last_space(self.measurer) {
            Some(carried) => {
                self.finish_line(BreakReason::Regular, carried);
                self.append_word(token);
            }
            // No space anywhere in the line: an unbreakable overlong word.
            None => self
                .line
                .append(self.measurer, self.current_run, &style, token),
        }
    }

    fn finish_line(&mut self, reason: BreakReason, carried: Vec<PendingSegment>) {
        let state = core::mem::replace(&mut self.line, LineState { segments: carried });
        let line = self.build_line(state, reason);
        self.lines.push(line);
    }

    fn build_line(&self, state: LineState, reason: BreakReason) -> WrappedLine {
        let segments: Vec<PendingSegment> = state
            .segments
            .into_iter()
            .filter(|seg| !seg.text.is_empty())
            .collect();
        let source_run = segments
            .first()
            .map_or(self.current_run, |seg| seg.run_index);
        // A line's metrics are those of its tallest content; empty lines are
        // sized by measuring a single space in the current style.
        let (mut ascent, mut natural, mut line_height) = (0.0_f32, 0.0_f32, 0.0_f32);
        if segments.is_empty() {
            let m = self.measurer.measure(" ", &self.current_style);
            ascent = m.ascent;
            natural = m.ascent + m.descent;
            line_height = natural * self.current_style.line_height;
        } else {
            for seg in &segments {
                ascent = ascent.max(seg.metrics.ascent);
                natural = natural.max(seg.metrics.ascent + seg.metrics.descent);
                line_height = line_height.max(
                    (seg.metrics.ascent + seg.metrics.descent) * seg.style.line_height,
                );
            }
        }
        // Half-leading: extra line height is split evenly above and below.
        let baseline = (line_height - natural) * 0.5 + ascent;
        let mut text = String::new();
        let mut x = 0.0;
        let mut out = Vec::with_capacity(segments.len());
        for seg in segments {
            let width = seg.metrics.width;
            text.push_str(&seg.text);
            out.push(Segment {
                text: seg.text,
                x,
                y: baseline,
                width,
                style: seg.style,
            });
            x += width;
        }
        WrappedLine {
            source_run,
            text,
            metrics: LineMetrics {
                line_height,
                baseline,
                width: x,
                offset: 0.0,
                y: 0.0,
            },
            segments: out,
            break_reason: reason,
        }
    }
}

impl Layout {
    /// Wraps `document` into display lines.
    ///
    /// Runs are resolved against `base`, split on newline characters (each
    /// producing an [`Explicit`](BreakReason::Explicit) break), and greedily
    /// word-wrapped to `max_width` layout units. `None` disables wrapping.
    ///
    /// The result is a pure function of the inputs: building twice with the
    /// same document, style and measurer yields an identical layout.
    pub fn build<M: Measurer>(
        measurer: &M,
        origin: Point,
        max_width: Option<f32>,
        document: &Document,
        base: &Style,
    ) -> Self {
        let mut breaker = LineBreaker {
            measurer,
            max_width: max_width.unwrap_or(f32::INFINITY),
            lines: Vec::new(),
            line: LineState::default(),
            current_run: 0,
            current_style: base.clone(),
        };
        for (run_index, run) in document.runs().iter().enumerate() {
            breaker.current_run = run_index;
            breaker.current_style = base.merge(&run.style);
            for (i, piece) in run.text.split('\n').enumerate() {
                if i > 0 {
                    breaker.finish_line(BreakReason::Explicit, Vec::new());
                }
                for token in Tokens::new(piece) {
                    if token == " " {
                        breaker.append_space();
                    } else {
                        breaker.append_word(token);
                    }
                }
            }
        }
        breaker.finish_line(BreakReason::None, Vec::new());

        let mut lines = breaker.lines;
        if lines.len() == 1 && lines[0].text.is_empty() {
            // Fully empty document: the single placeholder line carries one
            // empty segment in the default style.
            let baseline = lines[0].metrics.baseline;
            lines[0].segments.push(Segment {
                text: String::new(),
                x: 0.0,
                y: baseline,
                width: 0.0,
                style: base.clone(),
            });
        }

        let mut y = 0.0;
        let mut width = 0.0_f32;
        for line in &mut lines {
            line.metrics.y = y;
            y += line.metrics.line_height;
            width = width.max(line.metrics.width);
        }
        let container = match max_width {
            Some(w) if w.is_finite() => w,
            _ => width,
        };
        for line in &mut lines {
            let slack = (container - line.metrics.width).max(0.0);
            line.metrics.offset = match base.align {
                Alignment::Left => 0.0,
                Alignment::Center => slack * 0.5,
                Alignment::Right => slack,
            };
        }

        Self {
            lines,
            base: base.clone(),
            origin,
            max_width,
            width,
            height: y,
        }
    }
}

/// Iterator over the word tokens of a hard line segment: maximal runs of
/// non-space characters and single spaces, in order.
struct Tokens<'a> {
    text: &'a str,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.text.is_empty() {
            return None;
        }
        let end = if self.text.starts_with(' ') {
            1
        } else {
            self.text.find(' ').unwrap_or(self.text.len())
        };
        let (token, rest) = self.text.split_at(end);
        self.text = rest;
        Some(token)
    }
}
