// Copyright 2025 the Galley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled text runs and partial style patches.
//!
//! - [`Style`] is a fully resolved, immutable style record.
//! - [`StylePatch`] carries the same fields as optional overrides and merges
//!   into a [`Style`] field by field.
//! - [`Document`] is the authoritative model: an ordered sequence of
//!   [`TextRun`]s whose concatenated text is the document text.
//!
//! The document is mutated at character-offset granularity by a small set of
//! primitives ([`Document::insert`], [`Document::remove`],
//! [`Document::restyle`]) which split and splice runs as needed. Adjacent
//! runs with identical patches are never coalesced implicitly; callers that
//! want a minimal run list can ask for one with [`Document::coalesce`].
//!
//! ## Indices
//!
//! All offsets are expressed in **characters** (Unicode scalar values), not
//! bytes. Grapheme clusters are not considered.
//!
//! ## Persistence
//!
//! With the `serde` feature enabled, [`Document`], [`TextRun`] and
//! [`StylePatch`] derive `Serialize`/`Deserialize`; the ordered
//! `{text, style}` record list is the only persisted shape.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

mod document;
mod style;

#[cfg(test)]
mod tests;

pub use document::{Document, TextRun};
pub use style::{Alignment, FontStyle, FontWeight, Style, StylePatch};

pub use peniko::Color;
