// SPDX-License-Identifier: MPL-2.0
//! Hex color parsing and solid color images.
//!
//! Two parsers are provided:
//!
//! - [`hex_color`] never fails. Strings of unsupported length produce
//!   [`palette::SENTINEL`] (a near-black olive) and a warning in the log, so
//!   a typo in a hard-coded color shows up on screen instead of aborting.
//! - [`try_hex_color`] is strict and is used for user-provided settings.
//!
//! Both accept `RGB` and `RRGGBB`, with or without a leading `#`.

use crate::error::{Error, Result};
use crate::ui::design_tokens::palette;
use iced::widget::image::Handle;
use iced::Color;
use image_rs::{Rgba, RgbaImage};

/// Parses a hex color, falling back to [`palette::SENTINEL`].
#[must_use]
pub fn hex_color(hex: &str) -> Color {
    hex_color_with_alpha(hex, 1.0)
}

/// Parses a hex color with an explicit alpha.
#[must_use]
pub fn hex_color_with_alpha(hex: &str, alpha: f32) -> Color {
    let trimmed = hex.trim_matches(|c: char| !c.is_alphanumeric());
    let value = scan_hex(trimmed);

    let (r, g, b) = match trimmed.chars().count() {
        3 => ((value >> 8) * 17, (value >> 4 & 0xF) * 17, (value & 0xF) * 17),
        6 => (value >> 16, value >> 8 & 0xFF, value & 0xFF),
        _ => {
            log::warn!("Unsupported hex color {hex:?}, using fallback color");
            return Color {
                a: alpha,
                ..palette::SENTINEL
            };
        }
    };

    channels_to_color(r, g, b, alpha)
}

/// Parses a hex color, rejecting anything but 3 or 6 hex digits.
///
/// # Errors
///
/// Returns [`Error::Color`] when the string is not a valid color.
pub fn try_hex_color(hex: &str) -> Result<Color> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    let valid_length = matches!(digits.len(), 3 | 6);
    if !valid_length || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::Color(format!("invalid hex color {hex:?}")));
    }

    Ok(hex_color(digits))
}

/// Formats a color as `#RRGGBB`, ignoring alpha.
#[must_use]
pub fn to_hex(color: Color) -> String {
    let [r, g, b, _] = color.into_rgba8();
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Multiplies the alpha of `color` by `opacity`.
#[must_use]
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

/// Raw RGBA bytes of a `width` × `height` image filled with `color`.
#[must_use]
pub fn solid_pixels(color: Color, width: u32, height: u32) -> Vec<u8> {
    RgbaImage::from_pixel(width, height, Rgba(color.into_rgba8())).into_raw()
}

/// Image handle filled with `color`, or `None` for an empty size.
#[must_use]
pub fn solid_image(color: Color, width: u32, height: u32) -> Option<Handle> {
    if width == 0 || height == 0 {
        return None;
    }
    Some(Handle::from_rgba(
        width,
        height,
        solid_pixels(color, width, height),
    ))
}

/// One-pixel image of `color`, meant to be stretched.
#[must_use]
pub fn single_pixel(color: Color) -> Handle {
    Handle::from_rgba(1, 1, solid_pixels(color, 1, 1))
}

/// Reads the leading hexadecimal digits as one value.
///
/// An optional `0x` prefix is skipped, scanning stops at the first non-hex
/// character and overflow saturates.
fn scan_hex(s: &str) -> u32 {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    digits
        .chars()
        .map_while(|c| c.to_digit(16))
        .try_fold(0_u32, |acc, digit| acc.checked_mul(16)?.checked_add(digit))
        .unwrap_or(u32::MAX)
}

#[allow(clippy::cast_precision_loss)] // channels are at most 255
fn channels_to_color(r: u32, g: u32, b: u32, alpha: f32) -> Color {
    Color::from_rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Color, expected: Color) {
        let close = |a: f32, b: f32| (a - b).abs() < 1e-6;
        assert!(
            close(actual.r, expected.r)
                && close(actual.g, expected.g)
                && close(actual.b, expected.b)
                && close(actual.a, expected.a),
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn parses_six_digit_hex() {
        assert_close(hex_color("#1EB8F3"), palette::ACCENT);
        assert_close(hex_color("FF0A0A"), palette::DESTRUCTIVE);
        assert_close(hex_color("#eaeaea"), palette::HAIRLINE);
    }

    #[test]
    fn parses_three_digit_hex() {
        assert_close(hex_color("#333"), palette::TEXT);
        assert_close(hex_color("#F00"), Color::from_rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn trims_surrounding_punctuation() {
        assert_close(hex_color("  #333333;"), palette::TEXT);
    }

    #[test]
    fn unsupported_length_falls_back_to_sentinel() {
        assert_close(hex_color("#12345"), palette::SENTINEL);
        assert_close(hex_color("#FF0A0A80"), palette::SENTINEL);
        assert_close(hex_color(""), palette::SENTINEL);
    }

    #[test]
    fn non_hex_digits_stop_the_scan() {
        // Six characters, but nothing scans: black rather than the sentinel.
        assert_close(hex_color("GGGGGG"), Color::BLACK);
    }

    #[test]
    fn alpha_is_preserved() {
        assert_close(
            hex_color_with_alpha("#000", 0.4),
            Color::from_rgba(0.0, 0.0, 0.0, 0.4),
        );
        assert_eq!(hex_color_with_alpha("#1", 0.3).a, 0.3);
    }

    #[test]
    fn strict_parser_rejects_malformed_input() {
        assert!(try_hex_color("#1EB8F3").is_ok());
        assert!(try_hex_color("abc").is_ok());
        assert!(matches!(try_hex_color("#12345"), Err(Error::Color(_))));
        assert!(matches!(try_hex_color("#GGGGGG"), Err(Error::Color(_))));
        assert!(matches!(try_hex_color("red"), Err(Error::Color(_))));
    }

    #[test]
    fn to_hex_round_trips_palette() {
        assert_eq!(to_hex(palette::ACCENT), "#1EB8F3");
        assert_eq!(to_hex(hex_color("#ff0a0a")), "#FF0A0A");
    }

    #[test]
    fn faded_multiplies_alpha() {
        let half = faded(hex_color_with_alpha("#000", 0.4), 0.5);
        assert!((half.a - 0.2).abs() < 1e-6);
        assert_eq!(faded(palette::WHITE, 2.0).a, 1.0);
    }

    #[test]
    fn solid_pixels_fill_every_pixel() {
        let pixels = solid_pixels(palette::DESTRUCTIVE, 2, 3);
        assert_eq!(pixels.len(), 2 * 3 * 4);
        assert!(pixels.chunks(4).all(|px| px == [255, 10, 10, 255]));
    }

    #[test]
    fn solid_image_rejects_empty_size() {
        assert!(solid_image(palette::WHITE, 0, 1).is_none());
        assert!(solid_image(palette::WHITE, 1, 1).is_some());
    }

    #[test]
    fn scan_hex_saturates_on_overflow() {
        assert_eq!(scan_hex("FFFFFFFFFF"), u32::MAX);
        assert_eq!(scan_hex("0x1F"), 31);
        assert_eq!(scan_hex("1Fz9"), 31);
    }
}
