// Copyright 2025 the Galley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The resolved style record and partial style patches.

use peniko::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Visual weight class of a font, on the usual `100..=900` scale.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight of regular text.
    pub const NORMAL: Self = Self(400.0);

    /// Weight of bold text.
    pub const BOLD: Self = Self(700.0);

    /// Creates a new weight, clamped to `1.0..=1000.0`.
    pub fn new(weight: f32) -> Self {
        Self(weight.clamp(1.0, 1000.0))
    }

    /// Returns the raw weight value.
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether this weight is bold or heavier.
    pub fn is_bold(self) -> bool {
        self.0 >= Self::BOLD.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Visual style or 'slant' of a font.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FontStyle {
    /// An upright font.
    #[default]
    Normal,
    /// A font that is inclined to the right.
    Italic,
}

/// Horizontal alignment of wrapped lines within the layout width.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alignment {
    /// Align content to the left edge.
    #[default]
    Left,
    /// Align each line centered within the container.
    Center,
    /// Align content to the right edge.
    Right,
}

/// A fully resolved style record.
///
/// Every field has a concrete value; partial overrides are expressed with
/// [`StylePatch`] and resolved through [`Style::merge`].
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Style {
    /// Font family name.
    pub font_family: String,
    /// Font size in layout units per em.
    pub font_size: f32,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Font style.
    pub font_style: FontStyle,
    /// Underline decoration.
    pub underline: bool,
    /// Strikethrough decoration.
    pub strikethrough: bool,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Color for rendering text.
    pub color: Color,
    /// Line height multiplier.
    pub line_height: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font_family: String::from("sans-serif"),
            font_size: 16.0,
            font_weight: FontWeight::default(),
            font_style: FontStyle::default(),
            underline: false,
            strikethrough: false,
            align: Alignment::default(),
            color: Color::BLACK,
            line_height: 1.0,
        }
    }
}

impl Style {
    /// Returns a copy of this style with every field defined by `patch`
    /// replaced by the patch's value.
    ///
    /// Pure and total; fields absent from the patch are kept.
    pub fn merge(&self, patch: &StylePatch) -> Self {
        Self {
            font_family: patch
                .font_family
                .clone()
                .unwrap_or_else(|| self.font_family.clone()),
            font_size: patch.font_size.unwrap_or(self.font_size),
            font_weight: patch.font_weight.unwrap_or(self.font_weight),
            font_style: patch.font_style.unwrap_or(self.font_style),
            underline: patch.underline.unwrap_or(self.underline),
            strikethrough: patch.strikethrough.unwrap_or(self.strikethrough),
            align: patch.align.unwrap_or(self.align),
            color: patch.color.unwrap_or(self.color),
            line_height: patch.line_height.unwrap_or(self.line_height),
        }
    }
}

/// A partial style override.
///
/// Carries the same fields as [`Style`], each optional. Patches merge into a
/// style with [`Style::merge`] and layer over each other with
/// [`StylePatch::combine`].
#[derive(Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StylePatch {
    /// Font family override.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub font_family: Option<String>,
    /// Font size override.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub font_size: Option<f32>,
    /// Font weight override.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub font_weight: Option<FontWeight>,
    /// Font style override.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub font_style: Option<FontStyle>,
    /// Underline decoration override.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub underline: Option<bool>,
    /// Strikethrough decoration override.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub strikethrough: Option<bool>,
    /// Horizontal alignment override.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub align: Option<Alignment>,
    /// Color override.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub color: Option<Color>,
    /// Line height multiplier override.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub line_height: Option<f32>,
}

impl StylePatch {
    /// Creates an empty patch that overrides nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font family override.
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Sets the font size override.
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Sets the font weight override.
    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Sets the font style override.
    pub fn font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    /// Sets the underline decoration override.
    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Sets the strikethrough decoration override.
    pub fn strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = Some(strikethrough);
        self
    }

    /// Sets the alignment override.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    /// Sets the color override.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the line height multiplier override.
    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    /// Whether this patch overrides nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layers `over` on top of this patch, returning the combined patch.
    ///
    /// Fields defined by `over` win; for any style `s`,
    /// `s.merge(&a).merge(&b) == s.merge(&a.combine(&b))`.
    pub fn combine(&self, over: &Self) -> Self {
        Self {
            font_family: over.font_family.clone().or_else(|| self.font_family.clone()),
            font_size: over.font_size.or(self.font_size),
            font_weight: over.font_weight.or(self.font_weight),
            font_style: over.font_style.or(self.font_style),
            underline: over.underline.or(self.underline),
            strikethrough: over.strikethrough.or(self.strikethrough),
            align: over.align.or(self.align),
            color: over.color.or(self.color),
            line_height: over.line_height.or(self.line_height),
        }
    }
}
