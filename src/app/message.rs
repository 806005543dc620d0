// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags of the demo.

use crate::domain::alert::AlertId;
use crate::ui::alert;
use iced::{window, Size};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open one of the reference alerts.
    Launch(Demo),
    /// Forwarded to the alert with this ID.
    Alert(AlertId, alert::Message),
    /// The window opened; its size is queried next.
    WindowOpened(window::Id),
    WindowResized(Size),
}

/// Reference alerts of the demo window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// Cancel button only.
    OneButton,
    /// Cancel and one other button, cancel marked destructive after showing.
    TwoButtons,
    /// Stacked buttons with an orange accent set through the global style.
    ThreeButtons,
}

impl Demo {
    pub const ALL: [Demo; 3] = [Demo::OneButton, Demo::TwoButtons, Demo::ThreeButtons];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Demo::OneButton => "Alert with 1 button",
            Demo::TwoButtons => "Alert with 2 buttons",
            Demo::ThreeButtons => "Alert with 3 buttons",
        }
    }
}

/// Runtime flags passed from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Settings file to read instead of the default location.
    pub config_path: Option<PathBuf>,
}
