// SPDX-License-Identifier: MPL-2.0
//! Host surface port.
//!
//! The host is whatever owns the top-level view: it tells the alert how big
//! the screen is, keeps track of which alerts are mounted above the rest of
//! the content, and provides the clock animations are measured against.

use super::text::TextMeasure;
use crate::domain::alert::AlertId;
use std::time::Instant;

/// Size of the root surface in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Top-level surface an alert mounts itself into.
///
/// Text measurement is part of the host because only the host knows the
/// fonts it renders with.
pub trait Host: TextMeasure {
    /// Size of the mountable surface, or `None` when there is nothing to
    /// mount into (no window yet, window closed).
    fn root_size(&self) -> Option<SurfaceSize>;

    /// Adds the alert layer above the current content.
    fn mount(&mut self, id: AlertId);

    /// Removes the alert layer.
    fn unmount(&mut self, id: AlertId);

    /// Current time of the animation clock.
    fn now(&self) -> Instant;
}
