// SPDX-License-Identifier: MPL-2.0
//! Entrance and exit animations.
//!
//! A [`Transition`] interpolates between two [`VisualState`]s over a fixed
//! duration. It holds no timer: the owner samples it with the timestamp of
//! each animation frame and checks [`Transition::is_finished`] to run the
//! completion step.

use crate::ui::design_tokens::{motion, opacity};
use std::time::{Duration, Instant};

/// Animated properties of a mounted alert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Scrim opacity.
    pub scrim_alpha: f32,
    /// Container opacity.
    pub container_alpha: f32,
    /// Container scale around the window center.
    pub scale: f32,
}

impl VisualState {
    /// State when the entrance animation starts.
    pub const PRESENT_START: Self = Self {
        scrim_alpha: opacity::TRANSPARENT,
        container_alpha: opacity::CONTAINER_ENTER,
        scale: motion::PRESENT_START_SCALE,
    };

    /// Fully presented state.
    pub const SHOWN: Self = Self {
        scrim_alpha: opacity::SCRIM,
        container_alpha: opacity::OPAQUE,
        scale: 1.0,
    };

    /// State when the exit animation ends.
    pub const DISMISS_END: Self = Self {
        scrim_alpha: opacity::TRANSPARENT,
        container_alpha: opacity::TRANSPARENT,
        scale: motion::DISMISS_END_SCALE,
    };

    /// Linear interpolation. Alphas are clamped, scale is not.
    #[must_use]
    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a * (1.0 - t) + b * t;
        Self {
            scrim_alpha: mix(self.scrim_alpha, to.scrim_alpha).clamp(0.0, 1.0),
            container_alpha: mix(self.container_alpha, to.container_alpha).clamp(0.0, 1.0),
            scale: mix(self.scale, to.scale),
        }
    }
}

/// Timing curve mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// Under-damped spring settling within the duration.
    Spring {
        /// Damping ratio, below 1.0 overshoots.
        damping: f32,
        /// Initial velocity, in distances per duration.
        velocity: f32,
    },
    /// Cubic ease-in-out.
    EaseInOut,
}

/// Residual amplitude of the spring at the end of its duration.
const SPRING_SETTLE: f32 = 1e-3;

impl Curve {
    /// Curve of the entrance animation.
    pub const PRESENT: Self = Self::Spring {
        damping: motion::SPRING_DAMPING,
        velocity: motion::SPRING_VELOCITY,
    };

    /// Maps `progress` in `[0, 1]` to eased progress.
    ///
    /// Both curves start at 0 and end exactly at 1. The spring may exceed 1
    /// in between.
    #[must_use]
    pub fn apply(self, progress: f32) -> f32 {
        let u = progress.clamp(0.0, 1.0);
        if u >= 1.0 {
            return 1.0;
        }

        match self {
            Self::Spring { damping, velocity } => {
                let damping = damping.clamp(0.01, 0.99);
                let natural = -SPRING_SETTLE.ln() / damping;
                let decay = damping * natural;
                let damped = natural * (1.0 - damping * damping).sqrt();
                let envelope = (-decay * u).exp();
                let phase = damped * u;

                1.0 - envelope * (phase.cos() + (decay - velocity) / damped * phase.sin())
            }
            Self::EaseInOut => {
                if u < 0.5 {
                    4.0 * u * u * u
                } else {
                    1.0 - (-2.0 * u + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Which way the alert is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Present,
    /// Exit triggered by the button carrying `tag`.
    Dismiss { tag: usize },
}

/// One in-flight animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    kind: TransitionKind,
    from: VisualState,
    to: VisualState,
    curve: Curve,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    /// Entrance animation starting at `now`.
    #[must_use]
    pub fn present(now: Instant) -> Self {
        Self {
            kind: TransitionKind::Present,
            from: VisualState::PRESENT_START,
            to: VisualState::SHOWN,
            curve: Curve::PRESENT,
            started_at: now,
            duration: motion::PRESENT_DURATION,
        }
    }

    /// Exit animation starting at `now` from the current visual state.
    #[must_use]
    pub fn dismiss(tag: usize, from: VisualState, now: Instant) -> Self {
        Self {
            kind: TransitionKind::Dismiss { tag },
            from,
            to: VisualState::DISMISS_END,
            curve: Curve::EaseInOut,
            started_at: now,
            duration: motion::DISMISS_DURATION,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Visual state at `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> VisualState {
        self.from.lerp(&self.to, self.curve.apply(self.progress(now)))
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    /// Final visual state.
    #[must_use]
    pub fn target(&self) -> VisualState {
        self.to
    }
}
