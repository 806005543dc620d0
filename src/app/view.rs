// SPDX-License-Identifier: MPL-2.0
//! Demo window layout: launch buttons, callback log and alert layers.

use super::{App, Demo, Message};
use crate::ui::alert;
use crate::ui::design_tokens::{palette, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, center, column, text, Column, Stack};
use iced::{Alignment, Element, Length};

const SPACING: f32 = 16.0;
const BUTTON_WIDTH: f32 = 220.0;
const LOG_FONT: f32 = 13.0;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let launchers = Demo::ALL.into_iter().fold(
            Column::new().spacing(SPACING).align_x(Alignment::Center),
            |column, demo| {
                column.push(
                    button(
                        text(demo.label())
                            .align_x(Horizontal::Center)
                            .width(Length::Fill),
                    )
                    .width(Length::Fixed(BUTTON_WIDTH))
                    .padding(10)
                    .style(styles::button::primary)
                    .on_press(Message::Launch(demo)),
                )
            },
        );

        let events = self.events.borrow();
        let log = events.iter().fold(Column::new().spacing(4), |column, entry| {
            column.push(text(entry.clone()).size(LOG_FONT).color(palette::TEXT))
        });

        let content = center(
            column![
                text("Iced Alert").size(typography::TITLE).color(palette::TEXT),
                launchers,
                log,
            ]
            .spacing(SPACING * 2.0)
            .align_x(Alignment::Center),
        );

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(content);
        for &id in self.host.layers() {
            let Some(mounted) = self.alerts.iter().find(|alert| alert.id() == id) else {
                continue;
            };
            if let Some(layer) = alert::view(mounted) {
                layers = layers.push(layer.map(move |message| Message::Alert(id, message)));
            }
        }

        layers.into()
    }
}
