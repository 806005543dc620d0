// SPDX-License-Identifier: MPL-2.0
//! Alert buttons and tag assignment.
//!
//! The tag of a button is the index reported to the caller when that
//! button is tapped. It also decides where the button is drawn:
//!
//! - up to two buttons: the cancel button is tag 0 (left or alone), the
//!   other button is tag 1 (right);
//! - three or more buttons: the other buttons take tags `0..N-1` in
//!   declaration order and the cancel button comes last.

use std::collections::BTreeSet;

/// What a button was declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    /// The mandatory cancel button.
    Cancel,
    /// An additional button, with its declaration index.
    Other(usize),
}

/// Returns the tag of the cancel button for a given button count.
#[must_use]
pub fn cancel_button_index(button_count: usize) -> usize {
    if button_count <= 2 {
        0
    } else {
        button_count - 1
    }
}

/// Returns the tag a button receives among `button_count` buttons.
#[must_use]
pub fn assign_tag(role: ButtonRole, button_count: usize) -> usize {
    match role {
        ButtonRole::Cancel => cancel_button_index(button_count),
        ButtonRole::Other(index) if button_count <= 2 => index + 1,
        ButtonRole::Other(index) => index,
    }
}

/// One tappable button of an alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    title: String,
    tag: usize,
    is_cancel: bool,
    is_destructive: bool,
}

impl Button {
    pub(super) fn new(title: String, role: ButtonRole, button_count: usize) -> Self {
        Self {
            title,
            tag: assign_tag(role, button_count),
            is_cancel: role == ButtonRole::Cancel,
            is_destructive: false,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn tag(&self) -> usize {
        self.tag
    }

    #[must_use]
    pub fn is_cancel(&self) -> bool {
        self.is_cancel
    }

    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.is_destructive
    }

    /// Recomputes the destructive flag from the current index set.
    ///
    /// Returns `true` if the flag changed.
    pub fn apply_destructive(&mut self, indices: Option<&BTreeSet<usize>>) -> bool {
        let destructive = indices.is_some_and(|set| set.contains(&self.tag));
        let changed = destructive != self.is_destructive;
        self.is_destructive = destructive;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_index_follows_button_count() {
        assert_eq!(cancel_button_index(1), 0);
        assert_eq!(cancel_button_index(2), 0);
        assert_eq!(cancel_button_index(3), 2);
        assert_eq!(cancel_button_index(6), 5);
    }

    #[test]
    fn other_buttons_shift_in_row_layout() {
        assert_eq!(assign_tag(ButtonRole::Other(0), 2), 1);
    }

    #[test]
    fn other_buttons_keep_declaration_order_when_stacked() {
        let tags: Vec<usize> = (0..4).map(|i| assign_tag(ButtonRole::Other(i), 5)).collect();
        assert_eq!(tags, vec![0, 1, 2, 3]);
        assert_eq!(assign_tag(ButtonRole::Cancel, 5), 4);
    }

    #[test]
    fn destructive_flag_tracks_index_set() {
        let mut button = Button::new("Delete".into(), ButtonRole::Other(0), 2);
        assert_eq!(button.tag(), 1);
        let set: BTreeSet<usize> = [1].into_iter().collect();

        assert!(button.apply_destructive(Some(&set)));
        assert!(button.is_destructive());
        assert!(!button.apply_destructive(Some(&set)));

        assert!(button.apply_destructive(None));
        assert!(!button.is_destructive());
    }
}
