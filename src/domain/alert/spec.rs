// SPDX-License-Identifier: MPL-2.0
//! Alert content.

use super::button::{cancel_button_index, Button, ButtonRole};

/// Textual content of an alert.
///
/// The content is fixed once the alert has been shown; only destructive
/// styling may change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertSpec {
    title: Option<String>,
    message: Option<String>,
    cancel_button_title: String,
    other_button_titles: Vec<String>,
}

impl AlertSpec {
    /// Creates content with only the mandatory cancel button.
    #[must_use]
    pub fn new(cancel_button_title: impl Into<String>) -> Self {
        Self {
            title: None,
            message: None,
            cancel_button_title: cancel_button_title.into(),
            other_button_titles: Vec::new(),
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Appends one button after the ones already declared.
    #[must_use]
    pub fn with_other_button(mut self, title: impl Into<String>) -> Self {
        self.other_button_titles.push(title.into());
        self
    }

    /// Appends several buttons in declaration order.
    #[must_use]
    pub fn with_other_buttons<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.other_button_titles
            .extend(titles.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn cancel_button_title(&self) -> &str {
        &self.cancel_button_title
    }

    #[must_use]
    pub fn other_button_titles(&self) -> &[String] {
        &self.other_button_titles
    }

    /// Returns `true` when a non-empty title is set.
    #[must_use]
    pub fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Returns `true` when a non-empty message is set.
    #[must_use]
    pub fn has_message(&self) -> bool {
        self.message.as_deref().is_some_and(|m| !m.is_empty())
    }

    /// Cancel button plus every other button.
    #[must_use]
    pub fn button_count(&self) -> usize {
        1 + self.other_button_titles.len()
    }

    /// Tag carried by the cancel button.
    #[must_use]
    pub fn cancel_button_index(&self) -> usize {
        cancel_button_index(self.button_count())
    }

    /// Builds one button per title, ordered by tag (display order).
    #[must_use]
    pub fn buttons(&self) -> Vec<Button> {
        let count = self.button_count();

        let mut buttons = Vec::with_capacity(count);
        buttons.push(Button::new(
            self.cancel_button_title.clone(),
            ButtonRole::Cancel,
            count,
        ));
        buttons.extend(
            self.other_button_titles
                .iter()
                .enumerate()
                .map(|(index, title)| Button::new(title.clone(), ButtonRole::Other(index), count)),
        );

        buttons.sort_by_key(Button::tag);
        buttons
    }
}
