// SPDX-License-Identifier: MPL-2.0
//! Rendering of a mounted alert.
//!
//! The layer is a full-window scrim with the alert container centered on
//! top. Every piece of the container is placed at its computed frame inside
//! a fixed-size stack. The current animation scale is applied to frames and
//! font sizes, and the current opacity is folded into the colors.

use super::controller::{Alert, Message};
use crate::domain::alert::Frame;
use crate::infrastructure::paragraph_metrics::{LABEL_SHAPING, LABEL_WRAPPING};
use crate::ui::color::faded;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, center, container, opaque, stack, text, Space, Stack};
use iced::{ContentFit, Element, Length, Padding};

/// Smallest font size rendered while the container is scaled down.
const MIN_RENDERED_FONT: f32 = 1.0;

/// Alert layer to stack above the host content, `None` while idle.
pub fn view(alert: &Alert) -> Option<Element<'_, Message>> {
    let mounted = alert.mounted()?;
    let style = alert.style();
    let spec = alert.spec();
    let layout = &mounted.layout;
    let scale = mounted.visual.scale.max(0.0);
    let alpha = mounted.visual.container_alpha;
    let font = |size: f32| (size * scale).max(MIN_RENDERED_FONT);

    let mut layers = Stack::new()
        .width(Length::Fixed(layout.width * scale))
        .height(Length::Fixed(layout.height * scale));

    layers = layers.push(place(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::accent_bar(
                style.hair_color,
                style.corner_radius * scale,
                alpha,
            )),
        layout.accent_bar.scaled(scale),
    ));

    if let Some(title) = spec.title().filter(|t| !t.is_empty()) {
        layers = layers.push(place(
            text(title)
                .size(font(style.title_font))
                .color(faded(style.title_color, alpha))
                .shaping(LABEL_SHAPING)
                .wrapping(LABEL_WRAPPING)
                .align_x(Horizontal::Center)
                .width(Length::Fill),
            layout.title.scaled(scale),
        ));
    }

    if let Some(message) = spec.message().filter(|m| !m.is_empty()) {
        layers = layers.push(place(
            text(message)
                .size(font(style.message_font))
                .color(faded(style.message_color, alpha))
                .shaping(LABEL_SHAPING)
                .wrapping(LABEL_WRAPPING)
                .align_x(Horizontal::Center)
                .width(Length::Fill),
            layout.message.scaled(scale),
        ));
    }

    for mounted_button in &mounted.buttons {
        let tag = mounted_button.button.tag();
        let Some(frame) = layout.button(tag) else {
            continue;
        };
        let label = text(mounted_button.button.title())
            .size(font(style.button_font))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .height(Length::Fill);

        layers = layers.push(place(
            button(label)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(0)
                .style(styles::button::alert(
                    mounted_button.color,
                    style.highlight_color,
                    alpha,
                ))
                .on_press(Message::ButtonPressed(tag)),
            frame.frame.scaled(scale),
        ));
    }

    for hairline in &layout.hairlines {
        layers = layers.push(place(
            Image::<Handle>::new(mounted.hairline.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Fill)
                .opacity(alpha),
            hairline.frame.scaled(scale),
        ));
    }

    let dialog = container(layers)
        .clip(true)
        .style(styles::container::alert_surface(
            style.container_background,
            style.corner_radius * scale,
            alpha,
        ));

    let scrim = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::scrim(
            style.scrim_color,
            mounted.visual.scrim_alpha,
        ));

    Some(stack![opaque(scrim), center(dialog)].into())
}

/// Positions `content` at `frame` inside the container stack.
fn place<'a>(content: impl Into<Element<'a, Message>>, frame: Frame) -> Element<'a, Message> {
    container(
        container(content)
            .width(Length::Fixed(frame.width))
            .height(Length::Fixed(frame.height)),
    )
    .padding(Padding {
        top: frame.y,
        right: 0.0,
        bottom: 0.0,
        left: frame.x,
    })
    .into()
}
