// SPDX-License-Identifier: MPL-2.0
//! Font-agnostic text measurement.
//!
//! Estimates wrapped text height from average glyph advances, with greedy
//! word wrapping and a relative line height of 1.3. It ignores the actual
//! font, so heights can be off by a line for text dominated by very wide or
//! very narrow glyphs. Hosts that render with Iced measure through
//! [`ParagraphMetrics`](super::paragraph_metrics::ParagraphMetrics) instead;
//! this one serves headless hosts and benchmarks.
//!
//! Characters of display width 2 count as one em and may break anywhere;
//! everything else counts as a fraction of an em and breaks on whitespace.
//! Words longer than the available width are broken between characters.

use crate::application::port::TextMeasure;
use unicode_width::UnicodeWidthChar;

/// Iced's default relative line height.
pub const DEFAULT_LINE_HEIGHT: f32 = 1.3;

/// Average advance of a narrow glyph, in ems.
pub const NARROW_ADVANCE: f32 = 0.55;

/// Advance of a wide (CJK, full-width) glyph, in ems.
pub const WIDE_ADVANCE: f32 = 1.0;

/// Advance of a space, in ems.
pub const SPACE_ADVANCE: f32 = 0.3;

/// Heuristic text measurer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedTextMetrics {
    line_height: f32,
    narrow_advance: f32,
    wide_advance: f32,
    space_advance: f32,
}

impl Default for EstimatedTextMetrics {
    fn default() -> Self {
        Self {
            line_height: DEFAULT_LINE_HEIGHT,
            narrow_advance: NARROW_ADVANCE,
            wide_advance: WIDE_ADVANCE,
            space_advance: SPACE_ADVANCE,
        }
    }
}

impl EstimatedTextMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the relative line height.
    #[must_use]
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Number of lines `text` wraps to.
    #[must_use]
    pub fn line_count(&self, text: &str, font_size: f32, max_width: f32) -> usize {
        text.split('\n')
            .map(|paragraph| self.paragraph_lines(paragraph, font_size, max_width))
            .sum()
    }

    fn advance(&self, ch: char) -> f32 {
        if is_wide(ch) {
            self.wide_advance
        } else {
            self.narrow_advance
        }
    }

    fn word_width(&self, word: &str, font_size: f32) -> f32 {
        word.chars().map(|ch| self.advance(ch)).sum::<f32>() * font_size
    }

    fn paragraph_lines(&self, paragraph: &str, font_size: f32, max_width: f32) -> usize {
        if !max_width.is_finite() || max_width <= 0.0 {
            return 1;
        }

        let space = self.space_advance * font_size;
        let mut lines = 1;
        let mut line = 0.0_f32;
        let mut pending_space = false;

        for segment in segments(paragraph) {
            let word = match segment {
                Segment::Space => {
                    pending_space = line > 0.0;
                    continue;
                }
                Segment::Word(word) => word,
            };

            let width = self.word_width(word, font_size);
            let lead = if pending_space { space } else { 0.0 };
            pending_space = false;

            if line > 0.0 && line + lead + width > max_width {
                lines += 1;
                line = 0.0;
            } else {
                line += lead;
            }

            if width <= max_width {
                line += width;
                continue;
            }

            // Too long for any line: break between characters.
            for ch in word.chars() {
                let advance = self.advance(ch) * font_size;
                if line > 0.0 && line + advance > max_width {
                    lines += 1;
                    line = 0.0;
                }
                line += advance;
            }
        }

        lines
    }
}

impl TextMeasure for EstimatedTextMetrics {
    fn measure_height(&self, text: &str, font_size: f32, max_width: f32) -> f32 {
        self.line_count(text, font_size, max_width) as f32 * font_size * self.line_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Space,
    Word(&'a str),
}

/// Splits a paragraph into words and whitespace runs. Wide characters are
/// words on their own since lines may break between any two of them.
fn segments(paragraph: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut word_start: Option<usize> = None;

    for (index, ch) in paragraph.char_indices() {
        if ch.is_whitespace() || is_wide(ch) {
            if let Some(start) = word_start.take() {
                segments.push(Segment::Word(&paragraph[start..index]));
            }
            if ch.is_whitespace() {
                if segments.last() != Some(&Segment::Space) {
                    segments.push(Segment::Space);
                }
            } else {
                segments.push(Segment::Word(&paragraph[index..index + ch.len_utf8()]));
            }
        } else if word_start.is_none() {
            word_start = Some(index);
        }
    }

    if let Some(start) = word_start {
        segments.push(Segment::Word(&paragraph[start..]));
    }

    segments
}

/// Returns `true` for characters rendered at full em width.
fn is_wide(ch: char) -> bool {
    UnicodeWidthChar::width(ch) == Some(2)
}
