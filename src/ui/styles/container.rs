// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::color::faded;
use iced::border::Radius;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window dimming layer behind the alert.
pub fn scrim(color: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha.clamp(0.0, 1.0),
            ..color
        })),
        ..Default::default()
    }
}

/// Rounded alert surface.
pub fn alert_surface(
    background: Color,
    corner_radius: f32,
    opacity: f32,
) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(background, opacity))),
        border: Border {
            radius: corner_radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Colored bar along the top edge of the alert.
pub fn accent_bar(
    color: Color,
    corner_radius: f32,
    opacity: f32,
) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(color, opacity))),
        border: Border {
            radius: Radius {
                top_left: corner_radius,
                top_right: corner_radius,
                bottom_right: 0.0,
                bottom_left: 0.0,
            },
            ..Default::default()
        },
        ..Default::default()
    }
}
