// SPDX-License-Identifier: MPL-2.0
//! Text measurement through Iced's paragraph layout.
//!
//! Heights are the bounds Iced computes when it shapes and wraps the text
//! with the same font, line height, shaping and wrapping the alert view
//! renders labels with.

use crate::application::port::TextMeasure;
use iced::advanced::graphics::text::Paragraph;
use iced::advanced::text::{Alignment, LineHeight, Paragraph as _, Shaping, Text, Wrapping};
use iced::alignment::Vertical;
use iced::{Font, Pixels, Size};

/// Shaping of alert labels.
pub const LABEL_SHAPING: Shaping = Shaping::Advanced;

/// Wrapping of alert labels.
pub const LABEL_WRAPPING: Wrapping = Wrapping::Word;

/// Measures text the way Iced lays it out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphMetrics {
    font: Font,
    line_height: LineHeight,
}

impl Default for ParagraphMetrics {
    fn default() -> Self {
        Self {
            font: Font::DEFAULT,
            line_height: LineHeight::default(),
        }
    }
}

impl ParagraphMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Shaped paragraph of `content` wrapped to `max_width`.
    ///
    /// A width that is not positive and finite disables wrapping.
    #[must_use]
    pub fn paragraph(&self, content: &str, font_size: f32, max_width: f32) -> Paragraph {
        let width = if max_width.is_finite() && max_width > 0.0 {
            max_width
        } else {
            f32::INFINITY
        };

        Paragraph::with_text(Text {
            content,
            bounds: Size::new(width, f32::INFINITY),
            size: Pixels(font_size),
            line_height: self.line_height,
            font: self.font,
            align_x: Alignment::Center,
            align_y: Vertical::Top,
            shaping: LABEL_SHAPING,
            wrapping: LABEL_WRAPPING,
        })
    }
}

impl TextMeasure for ParagraphMetrics {
    fn measure_height(&self, text: &str, font_size: f32, max_width: f32) -> f32 {
        self.paragraph(text, font_size, max_width).min_bounds().height
    }
}
