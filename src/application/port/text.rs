// SPDX-License-Identifier: MPL-2.0
//! Text measurement port.

/// Measures wrapped text.
pub trait TextMeasure {
    /// Height of `text` rendered at `font_size` and wrapped to `max_width`.
    fn measure_height(&self, text: &str, font_size: f32, max_width: f32) -> f32;
}

/// Measured height of an optional label, `0.0` when absent or empty.
pub fn measure_text_height(
    measure: &(impl TextMeasure + ?Sized),
    text: Option<&str>,
    font_size: f32,
    max_width: f32,
) -> f32 {
    measure_label(measure, text, font_size, max_width).unwrap_or(0.0)
}

/// Measured height of an optional label, `None` when absent or empty.
///
/// This is the form the layout engine consumes: `None` also tells it the
/// label does not take part in the vertical layout.
pub fn measure_label(
    measure: &(impl TextMeasure + ?Sized),
    text: Option<&str>,
    font_size: f32,
    max_width: f32,
) -> Option<f32> {
    text.filter(|t| !t.is_empty())
        .map(|t| measure.measure_height(t, font_size, max_width))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One line per 10 characters, 20 units per line.
    struct FixedLines;

    impl TextMeasure for FixedLines {
        fn measure_height(&self, text: &str, _font_size: f32, _max_width: f32) -> f32 {
            let lines = text.chars().count().div_ceil(10);
            lines as f32 * 20.0
        }
    }

    #[test]
    fn absent_text_measures_zero() {
        assert_eq!(measure_text_height(&FixedLines, None, 16.0, 100.0), 0.0);
        assert_eq!(measure_text_height(&FixedLines, Some(""), 16.0, 100.0), 0.0);
        assert_eq!(measure_label(&FixedLines, Some(""), 16.0, 100.0), None);
    }

    #[test]
    fn present_text_is_delegated() {
        assert_eq!(
            measure_text_height(&FixedLines, Some("twelve chars"), 16.0, 100.0),
            40.0
        );
    }
}
