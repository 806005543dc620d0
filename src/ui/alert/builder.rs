// SPDX-License-Identifier: MPL-2.0
//! Fluent construction of alerts.

use super::controller::{Alert, ClickedCallback, DismissCallback, PresentCallback};
use super::style::StyleConfig;
use crate::application::port::Host;
use crate::domain::alert::AlertSpec;
use iced::Color;
use std::collections::BTreeSet;

/// Builder returned by [`Alert::builder`].
///
/// ```
/// use iced_alert::ui::alert::Alert;
///
/// let alert = Alert::builder("Exit")
///     .title("Notice")
///     .message("Session expired")
///     .other_button("Retry")
///     .build();
///
/// assert_eq!(alert.button_count(), 2);
/// assert_eq!(alert.cancel_button_index(), 0);
/// ```
#[must_use]
pub struct AlertBuilder {
    spec: AlertSpec,
    style: Option<StyleConfig>,
    hair_color: Option<Color>,
    destructive_indices: Option<BTreeSet<usize>>,
    destructive_color: Option<Color>,
    on_clicked: Option<ClickedCallback>,
    will_present: Option<PresentCallback>,
    did_present: Option<PresentCallback>,
    will_dismiss: Option<DismissCallback>,
    did_dismiss: Option<DismissCallback>,
}

impl Alert {
    /// Starts building an alert with the given cancel button title.
    pub fn builder(cancel_button_title: impl Into<String>) -> AlertBuilder {
        AlertBuilder::new(cancel_button_title)
    }
}

impl AlertBuilder {
    pub fn new(cancel_button_title: impl Into<String>) -> Self {
        Self {
            spec: AlertSpec::new(cancel_button_title),
            style: None,
            hair_color: None,
            destructive_indices: None,
            destructive_color: None,
            on_clicked: None,
            will_present: None,
            did_present: None,
            will_dismiss: None,
            did_dismiss: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.spec = self.spec.with_title(title);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.spec = self.spec.with_message(message);
        self
    }

    pub fn other_button(mut self, title: impl Into<String>) -> Self {
        self.spec = self.spec.with_other_button(title);
        self
    }

    pub fn other_buttons<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec = self.spec.with_other_buttons(titles);
        self
    }

    /// Accent bar color of this alert only.
    pub fn hair_color(mut self, color: Color) -> Self {
        self.hair_color = Some(color);
        self
    }

    /// Uses `style` instead of [`StyleConfig::global`].
    pub fn style(mut self, style: StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Tags of the buttons drawn with the destructive color.
    pub fn destructive_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.destructive_indices = Some(indices.into_iter().collect());
        self
    }

    pub fn destructive_color(mut self, color: Color) -> Self {
        self.destructive_color = Some(color);
        self
    }

    pub fn on_clicked(mut self, callback: impl FnMut(&Alert, usize) + 'static) -> Self {
        self.on_clicked = Some(Box::new(callback));
        self
    }

    pub fn will_present(mut self, callback: impl FnMut(&Alert) + 'static) -> Self {
        self.will_present = Some(Box::new(callback));
        self
    }

    pub fn did_present(mut self, callback: impl FnMut(&Alert) + 'static) -> Self {
        self.did_present = Some(Box::new(callback));
        self
    }

    pub fn will_dismiss(mut self, callback: impl FnMut(&Alert, usize) + 'static) -> Self {
        self.will_dismiss = Some(Box::new(callback));
        self
    }

    pub fn did_dismiss(mut self, callback: impl FnMut(&Alert, usize) + 'static) -> Self {
        self.did_dismiss = Some(Box::new(callback));
        self
    }

    /// Builds an idle alert.
    ///
    /// The global style is read here, once, unless a style was injected.
    #[must_use]
    pub fn build(self) -> Alert {
        let mut style = self.style.unwrap_or_else(StyleConfig::global);
        if let Some(color) = self.hair_color {
            style.hair_color = color;
        }

        let mut alert = Alert::new(self.spec, style);
        if let Some(color) = self.destructive_color {
            alert.set_destructive_color(color);
        }
        alert.set_destructive_indices(self.destructive_indices);

        if let Some(callback) = self.on_clicked {
            alert.set_on_clicked(callback);
        }
        if let Some(callback) = self.will_present {
            alert.set_will_present(callback);
        }
        if let Some(callback) = self.did_present {
            alert.set_did_present(callback);
        }
        if let Some(callback) = self.will_dismiss {
            alert.set_will_dismiss(callback);
        }
        if let Some(callback) = self.did_dismiss {
            alert.set_did_dismiss(callback);
        }
        alert
    }

    /// Builds the alert and shows it right away.
    #[must_use]
    pub fn show(self, host: &mut impl Host) -> Alert {
        let mut alert = self.build();
        alert.show(host);
        alert
    }
}
