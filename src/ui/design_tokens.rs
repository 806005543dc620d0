// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Static design constants of the alert view. Runtime-overridable values
(colors and font sizes) start from these tokens through
[`StyleConfig::default`](crate::ui::alert::StyleConfig::default).

## Organization

- **Palette**: Base colors
- **Opacity**: Scrim and container opacity levels
- **Typography**: Font sizes of title, message and buttons
- **Radius**: Container corner radius
- **Motion**: Durations, spring parameters and transition scales

Geometry (margins, insets, button height) lives with the layout engine in
[`crate::domain::alert`].

## Examples

```
use iced_alert::ui::design_tokens::{opacity, palette};
use iced::Color;

let scrim = Color {
    a: opacity::SCRIM,
    ..palette::BLACK
};
assert_eq!(scrim.a, 0.4);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// `#1EB8F3`, accent bar along the container top.
    pub const ACCENT: Color = Color::from_rgb(30.0 / 255.0, 184.0 / 255.0, 243.0 / 255.0);

    /// `#333333`, title, message and button text.
    pub const TEXT: Color = Color::from_rgb(51.0 / 255.0, 51.0 / 255.0, 51.0 / 255.0);

    /// `#FF0A0A`, destructive button text.
    pub const DESTRUCTIVE: Color = Color::from_rgb(1.0, 10.0 / 255.0, 10.0 / 255.0);

    /// `#EAEAEA`, hairlines and pressed button background.
    pub const HAIRLINE: Color = Color::from_rgb(234.0 / 255.0, 234.0 / 255.0, 234.0 / 255.0);

    /// Color returned for hex strings of unsupported length.
    pub const SENTINEL: Color = Color::from_rgb(1.0 / 255.0, 1.0 / 255.0, 0.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Scrim once the alert is fully presented.
    pub const SCRIM: f32 = 0.4;
    /// Container opacity when the entrance animation starts.
    pub const CONTAINER_ENTER: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Title font size.
    pub const TITLE: f32 = 20.0;

    /// Message font size.
    pub const MESSAGE: f32 = 16.0;

    /// Button title font size.
    pub const BUTTON: f32 = 18.0;

    /// Smallest font size accepted from configuration.
    pub const MIN_SIZE: f32 = 6.0;

    /// Largest font size accepted from configuration.
    pub const MAX_SIZE: f32 = 96.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    /// Alert container corners.
    pub const CONTAINER: f32 = 4.0;
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    use std::time::Duration;

    /// Entrance animation length.
    pub const PRESENT_DURATION: Duration = Duration::from_millis(500);

    /// Exit animation length.
    pub const DISMISS_DURATION: Duration = Duration::from_millis(300);

    /// Damping ratio of the entrance spring (1.0 = critically damped).
    pub const SPRING_DAMPING: f32 = 0.6;

    /// Initial velocity of the entrance spring, in distances per duration.
    pub const SPRING_VELOCITY: f32 = 1.0;

    /// Container scale when the entrance animation starts.
    pub const PRESENT_START_SCALE: f32 = 0.7;

    /// Container scale when the exit animation ends.
    pub const DISMISS_END_SCALE: f32 = 0.8;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SCRIM > 0.0 && opacity::SCRIM < 1.0);
    assert!(opacity::CONTAINER_ENTER > 0.0 && opacity::CONTAINER_ENTER < 1.0);

    // Typography validation
    assert!(typography::TITLE > typography::BUTTON);
    assert!(typography::BUTTON > typography::MESSAGE);
    assert!(typography::MIN_SIZE < typography::MESSAGE);
    assert!(typography::MAX_SIZE > typography::TITLE);

    // Motion validation
    assert!(motion::SPRING_DAMPING > 0.0 && motion::SPRING_DAMPING < 1.0);
    assert!(motion::PRESENT_START_SCALE > 0.0 && motion::PRESENT_START_SCALE < 1.0);
    assert!(motion::DISMISS_END_SCALE > 0.0 && motion::DISMISS_END_SCALE < 1.0);

    // Color validation
    assert!(palette::ACCENT.b >= 0.0 && palette::ACCENT.b <= 1.0);
};
