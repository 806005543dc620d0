// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds of the style settings.
//!
//! # Categories
//!
//! - **Colors**: Hex forms of the built-in palette
//! - **Fonts**: Font size bounds
//! - **Corners**: Corner radius bounds

use crate::ui::design_tokens::{radius, typography};

// ==========================================================================
// Color Defaults
// ==========================================================================

/// Default accent bar color.
pub const DEFAULT_HAIR_COLOR: &str = "#1EB8F3";

/// Default title, message and button text color.
pub const DEFAULT_TEXT_COLOR: &str = "#333333";

/// Default destructive button color.
pub const DEFAULT_DESTRUCTIVE_COLOR: &str = "#FF0A0A";

/// Default hairline and highlight color.
pub const DEFAULT_HAIRLINE_COLOR: &str = "#EAEAEA";

// ==========================================================================
// Font Defaults
// ==========================================================================

/// Smallest font size accepted from settings.
pub const MIN_FONT_SIZE: f32 = typography::MIN_SIZE;

/// Largest font size accepted from settings.
pub const MAX_FONT_SIZE: f32 = typography::MAX_SIZE;

// ==========================================================================
// Corner Defaults
// ==========================================================================

/// Default container corner radius.
pub const DEFAULT_CORNER_RADIUS: f32 = radius::CONTAINER;

/// Minimum corner radius.
pub const MIN_CORNER_RADIUS: f32 = radius::NONE;

/// Maximum corner radius.
pub const MAX_CORNER_RADIUS: f32 = 24.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_FONT_SIZE > 0.0);
    assert!(MIN_FONT_SIZE < MAX_FONT_SIZE);
    assert!(typography::TITLE >= MIN_FONT_SIZE && typography::TITLE <= MAX_FONT_SIZE);
    assert!(typography::MESSAGE >= MIN_FONT_SIZE && typography::MESSAGE <= MAX_FONT_SIZE);
    assert!(typography::BUTTON >= MIN_FONT_SIZE && typography::BUTTON <= MAX_FONT_SIZE);

    assert!(MIN_CORNER_RADIUS < MAX_CORNER_RADIUS);
    assert!(DEFAULT_CORNER_RADIUS >= MIN_CORNER_RADIUS);
    assert!(DEFAULT_CORNER_RADIUS <= MAX_CORNER_RADIUS);
};
