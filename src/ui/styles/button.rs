// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::color::faded;
use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Style of an alert button.
///
/// The button has no background of its own; while pressed it is filled
/// with `highlight`. `opacity` is the container opacity of the current
/// animation frame.
pub fn alert(
    text_color: Color,
    highlight: Color,
    opacity: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Pressed => Some(Background::Color(faded(highlight, opacity))),
            _ => None,
        };

        button::Style {
            background,
            text_color: faded(text_color, opacity),
            border: Border::default(),
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Style of the demo window's launch buttons.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => faded(palette::ACCENT, 0.85),
        button::Status::Disabled => palette::HAIRLINE,
        _ => palette::ACCENT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::CONTAINER.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}
