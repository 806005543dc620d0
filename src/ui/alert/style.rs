// SPDX-License-Identifier: MPL-2.0
//! Colors and font sizes of an alert.
//!
//! Every [`Alert`](super::Alert) owns its own [`StyleConfig`]. The
//! process-wide default returned by [`StyleConfig::global`] is only read by
//! [`AlertBuilder`](super::AlertBuilder) when no style is injected, so
//! changing it never affects alerts that already exist.

use crate::ui::design_tokens::{palette, radius, typography};
use iced::Color;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Per-alert style knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    /// Accent bar along the container top.
    pub hair_color: Color,
    pub title_font: f32,
    pub message_font: f32,
    pub button_font: f32,
    pub title_color: Color,
    pub message_color: Color,
    pub button_text_color: Color,
    /// Default text color of destructive buttons.
    pub destructive_color: Color,
    /// Dividers between buttons.
    pub hairline_color: Color,
    /// Pressed button background.
    pub highlight_color: Color,
    pub container_background: Color,
    pub scrim_color: Color,
    pub corner_radius: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            hair_color: palette::ACCENT,
            title_font: typography::TITLE,
            message_font: typography::MESSAGE,
            button_font: typography::BUTTON,
            title_color: palette::TEXT,
            message_color: palette::TEXT,
            button_text_color: palette::TEXT,
            destructive_color: palette::DESTRUCTIVE,
            hairline_color: palette::HAIRLINE,
            highlight_color: palette::HAIRLINE,
            container_background: palette::WHITE,
            scrim_color: palette::BLACK,
            corner_radius: radius::CONTAINER,
        }
    }
}

fn global_cell() -> &'static RwLock<StyleConfig> {
    static GLOBAL: OnceLock<RwLock<StyleConfig>> = OnceLock::new();
    GLOBAL.get_or_init(|| RwLock::new(StyleConfig::default()))
}

impl StyleConfig {
    /// Snapshot of the process-wide default style.
    #[must_use]
    pub fn global() -> Self {
        *global_cell()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the process-wide default. Existing alerts keep their style.
    pub fn set_global(style: Self) {
        *global_cell()
            .write()
            .unwrap_or_else(PoisonError::into_inner) = style;
        log::debug!("Global alert style updated");
    }

    #[must_use]
    pub fn with_hair_color(mut self, color: Color) -> Self {
        self.hair_color = color;
        self
    }

    #[must_use]
    pub fn with_destructive_color(mut self, color: Color) -> Self {
        self.destructive_color = color;
        self
    }

    #[must_use]
    pub fn with_button_text_color(mut self, color: Color) -> Self {
        self.button_text_color = color;
        self
    }

    /// Sets title, message and button font sizes at once.
    #[must_use]
    pub fn with_fonts(mut self, title: f32, message: f32, button: f32) -> Self {
        self.title_font = title;
        self.message_font = message;
        self.button_font = button;
        self
    }

    /// Text color of a button, given its destructive flag.
    #[must_use]
    pub fn button_color(&self, destructive: bool, destructive_color: Color) -> Color {
        if destructive {
            destructive_color
        } else {
            self.button_text_color
        }
    }
}
