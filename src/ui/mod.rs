// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`alert`] - The modal alert: style, presentation controller and view
//! - [`color`] - Hex color parsing and solid color images
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, typography, motion)

pub mod alert;
pub mod color;
pub mod design_tokens;
pub mod styles;
