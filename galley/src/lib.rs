// Copyright 2025 the Galley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich text layout and editing.
//!
//! Galley turns a [`styled_runs::Document`] into a list of word-wrapped
//! [`WrappedLine`]s, addresses the wrapped text with line/column
//! [`Position`]s, and applies edits (insertion, deletion, partial-range
//! restyling) while keeping the cursor and selection stable across
//! re-wrapping.
//!
//! Text measurement is abstracted behind the [`Measurer`] trait; galley
//! never touches fonts or glyphs itself, and painting the produced layout is
//! the host's concern.
//!
//! The engine is single threaded and synchronous: every operation on
//! [`Editor`] runs to completion, regenerating the whole layout, before
//! returning. [`Position`] values are only meaningful against the layout
//! that produced them; any mutating call invalidates previously obtained
//! positions.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

pub use styled_runs;

mod measure;
mod position;

pub mod editing;
pub mod layout;

#[cfg(test)]
mod tests;

pub use editing::{BlinkState, EditResult, Editor, Generation, Selection};
pub use layout::{BreakReason, Layout, LineMetrics, Segment, WrappedLine};
pub use measure::{Measurer, TextMetrics};
pub use position::{chars_between, Position};
