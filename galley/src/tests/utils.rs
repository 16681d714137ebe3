// Copyright 2025 the Galley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Point;
use styled_runs::{Document, Style};

use crate::editing::Editor;
use crate::layout::Layout;
use crate::measure::{Measurer, TextMetrics};

/// Deterministic fixed-advance measurer for tests.
///
/// Every character advances by half the font size, multiplied by 1.25 for
/// bold weights so that restyling a range can move wrap points. This mirrors
/// `galley_dev::FixedMeasurer`; it is defined here as well so the dev crate
/// never enters the lib-test dependency graph.
#[derive(Copy, Clone, Debug)]
pub(crate) struct FixedMeasurer;

impl Measurer for FixedMeasurer {
    fn measure(&self, text: &str, style: &Style) -> TextMetrics {
        let mut advance = style.font_size * 0.5;
        if style.font_weight.is_bold() {
            advance *= 1.25;
        }
        TextMetrics {
            width: advance * text.chars().count() as f32,
            height: style.font_size,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}

/// Test fixture building layouts and editors over a [`FixedMeasurer`].
///
/// With the default style (16px) every character is 8 units wide (10 when
/// bold) and every line is 16 units tall, so expected geometry can be
/// written down exactly.
pub(crate) struct TestEnv {
    pub(crate) measurer: FixedMeasurer,
    pub(crate) style: Style,
}

impl TestEnv {
    pub(crate) fn new() -> Self {
        Self {
            measurer: FixedMeasurer,
            style: Style::default(),
        }
    }

    pub(crate) fn layout(&self, text: &str, max_width: Option<f32>) -> Layout {
        self.layout_of(&Document::from_text(text), max_width)
    }

    pub(crate) fn layout_of(&self, document: &Document, max_width: Option<f32>) -> Layout {
        Layout::build(&self.measurer, Point::ZERO, max_width, document, &self.style)
    }

    pub(crate) fn editor(&self, text: &str) -> Editor {
        let mut editor = Editor::new(self.style.clone());
        editor.set_text(text);
        editor
    }
}

pub(crate) fn line_texts(layout: &Layout) -> Vec<&str> {
    layout.lines().map(|line| line.text.as_str()).collect()
}

#[test]
fn fixed_measurer_metrics_are_exact() {
    let env = TestEnv::new();
    let metrics = env.measurer.measure("abcd", &env.style);
    assert_eq!(metrics.width, 32.0);
    assert_eq!(metrics.ascent, 12.8);
    assert_eq!(metrics.descent, 3.2);

    let mut bold = env.style.clone();
    bold.font_weight = styled_runs::FontWeight::BOLD;
    assert_eq!(env.measurer.measure("abcd", &bold).width, 40.0);
}
