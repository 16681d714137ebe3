// Copyright 2025 the Galley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rich text editor over a styled document and its layout.
//!
//! [`Editor`] owns the document, the derived layout, and the selection, and
//! exposes the editing operations as plain methods returning [`EditResult`]
//! deltas. It performs no drawing and decodes no host events; cursor blink
//! timing lives in the host-owned [`BlinkState`].

mod blink;
mod editor;
mod selection;

pub use blink::BlinkState;
pub use editor::{EditResult, Editor, Generation};
pub use selection::Selection;
