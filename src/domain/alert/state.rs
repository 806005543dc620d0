// SPDX-License-Identifier: MPL-2.0
//! Presentation lifecycle states.

/// Where an alert is in its show/dismiss cycle.
///
/// ```text
/// Idle ──show──▶ Presenting ──animation done──▶ Shown
///  ▲                                              │
///  └──animation done── Dismissing ◀──tap──────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationState {
    /// Not mounted.
    #[default]
    Idle,
    /// Mounted, entrance animation running.
    Presenting,
    /// Mounted and interactive.
    Shown,
    /// Exit animation running, unmounted when it completes.
    Dismissing,
}

impl PresentationState {
    /// Returns `true` while the alert is part of the view tree.
    #[must_use]
    pub fn is_mounted(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Returns `true` while a transition is in flight.
    #[must_use]
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Presenting | Self::Dismissing)
    }

    /// Returns `true` when button taps should be honoured.
    #[must_use]
    pub fn accepts_taps(self) -> bool {
        matches!(self, Self::Shown)
    }
}
