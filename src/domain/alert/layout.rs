// SPDX-License-Identifier: MPL-2.0
//! Alert geometry.
//!
//! All frames are expressed relative to the top-left corner of the alert
//! container. The engine is a pure function of [`LayoutInput`]: computing
//! twice with the same input yields the same [`AlertLayout`], which lets the
//! controller re-run it freely (window resize, restyling).
//!
//! ```text
//! ┌──────────────────────────────┐  ← accent bar (4)
//! │            title             │  ← TITLE_TOP
//! │                              │  ← TITLE_GAP
//! │           message            │
//! │                              │  ← MESSAGE_BOTTOM_GAP
//! ├──────────────┬───────────────┤  ← hairlines
//! │    cancel    │     other     │  ← BUTTON_HEIGHT
//! └──────────────┴───────────────┘
//! ```

/// Horizontal space left on both sides of the container, in total.
pub const CONTAINER_MARGIN: f32 = 80.0;
/// Offset of the title from the container top.
pub const TITLE_TOP: f32 = 20.0;
/// Gap between the title and the message.
pub const TITLE_GAP: f32 = 20.0;
/// Extra height added to every measured label.
pub const LABEL_PADDING: f32 = 2.0;
/// Gap between the message and the buttons.
pub const MESSAGE_BOTTOM_GAP: f32 = 20.0;
/// Height of one button.
pub const BUTTON_HEIGHT: f32 = 50.0;
/// Height of the colored bar along the container top.
pub const ACCENT_BAR_HEIGHT: f32 = 4.0;
/// Horizontal inset of the labels on each side.
pub const CONTENT_INSET: f32 = 15.0;
/// Thickness of the dividers between buttons.
pub const HAIRLINE_THICKNESS: f32 = 0.5;

/// Width of the alert container for a root surface of `root_width`.
#[must_use]
pub fn container_width(root_width: f32) -> f32 {
    (root_width - CONTAINER_MARGIN).max(0.0)
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns a copy scaled by `factor` around the origin.
    #[must_use]
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.width * factor,
            self.height * factor,
        )
    }
}

/// How the buttons are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonArrangement {
    /// One full-width button.
    Single,
    /// Two half-width buttons side by side.
    Row,
    /// Full-width buttons stacked by tag, cancel last.
    Stacked,
}

impl ButtonArrangement {
    #[must_use]
    pub fn for_count(button_count: usize) -> Self {
        match button_count {
            0 | 1 => Self::Single,
            2 => Self::Row,
            _ => Self::Stacked,
        }
    }
}

/// Frame of the button carrying `tag`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonFrame {
    pub tag: usize,
    pub frame: Frame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HairlineOrientation {
    Horizontal,
    Vertical,
}

/// Divider drawn along the leading edge of a button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hairline {
    pub tag: usize,
    pub orientation: HairlineOrientation,
    pub frame: Frame,
}

/// Everything the engine needs besides constants.
///
/// Text heights are the raw measurements for the content width
/// ([`LayoutInput::content_width`]); `None` means the label is absent or
/// empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    pub container_width: f32,
    pub title_text_height: Option<f32>,
    pub message_text_height: Option<f32>,
    pub button_count: usize,
    pub button_height: f32,
}

impl LayoutInput {
    /// Input for a container of `container_width` with default button height.
    #[must_use]
    pub fn new(container_width: f32, button_count: usize) -> Self {
        Self {
            container_width,
            title_text_height: None,
            message_text_height: None,
            button_count,
            button_height: BUTTON_HEIGHT,
        }
    }

    #[must_use]
    pub fn with_title_height(mut self, height: Option<f32>) -> Self {
        self.title_text_height = height;
        self
    }

    #[must_use]
    pub fn with_message_height(mut self, height: Option<f32>) -> Self {
        self.message_text_height = height;
        self
    }

    /// Width available to the labels.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        content_width(self.container_width)
    }
}

fn content_width(container_width: f32) -> f32 {
    (container_width - 2.0 * CONTENT_INSET).max(0.0)
}

/// Computed geometry of one alert.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertLayout {
    pub width: f32,
    pub height: f32,
    pub accent_bar: Frame,
    pub title: Frame,
    pub message: Frame,
    pub button_area: Frame,
    pub arrangement: ButtonArrangement,
    /// Ordered by tag.
    pub buttons: Vec<ButtonFrame>,
    /// One per button, ordered by tag.
    pub hairlines: Vec<Hairline>,
}

impl AlertLayout {
    /// Runs the layout engine.
    #[must_use]
    pub fn compute(input: &LayoutInput) -> Self {
        let width = input.container_width.max(0.0);
        let text_width = content_width(width);
        let has_title = input.title_text_height.is_some();
        let has_message = input.message_text_height.is_some();

        let title_height = label_height(input.title_text_height);
        let message_top = message_top(has_title, title_height);
        let message_height = label_height(input.message_text_height);
        let area_height = button_area_height(input.button_count, input.button_height);
        let height = container_height(
            has_title,
            has_message,
            message_top,
            message_height,
            input.button_count,
            input.button_height,
        );

        let button_area = Frame::new(0.0, height - area_height, width, area_height);
        let arrangement = ButtonArrangement::for_count(input.button_count);
        let (buttons, hairlines) =
            button_frames(arrangement, input.button_count, &button_area, input.button_height);

        Self {
            width,
            height,
            accent_bar: Frame::new(0.0, 0.0, width, ACCENT_BAR_HEIGHT),
            title: Frame::new(CONTENT_INSET, TITLE_TOP, text_width, title_height),
            message: Frame::new(CONTENT_INSET, message_top, text_width, message_height),
            button_area,
            arrangement,
            buttons,
            hairlines,
        }
    }

    /// Frame of the button carrying `tag`, if any.
    #[must_use]
    pub fn button(&self, tag: usize) -> Option<&ButtonFrame> {
        self.buttons.iter().find(|b| b.tag == tag)
    }
}

/// Height of a label given its raw measurement.
#[must_use]
pub fn label_height(measured: Option<f32>) -> f32 {
    measured.map_or(0.0, |h| h + LABEL_PADDING)
}

/// Top of the message label.
#[must_use]
pub fn message_top(has_title: bool, title_height: f32) -> f32 {
    if has_title {
        TITLE_TOP + title_height + TITLE_GAP
    } else {
        TITLE_TOP
    }
}

/// Height of the strip holding the buttons.
#[must_use]
pub fn button_area_height(button_count: usize, button_height: f32) -> f32 {
    if button_count > 2 {
        button_height * button_count as f32
    } else {
        button_height
    }
}

/// Total container height.
#[must_use]
pub fn container_height(
    has_title: bool,
    has_message: bool,
    message_top: f32,
    message_height: f32,
    button_count: usize,
    button_height: f32,
) -> f32 {
    let top = if has_title || has_message {
        message_top
    } else {
        ACCENT_BAR_HEIGHT
    };
    let gap = if has_message { MESSAGE_BOTTOM_GAP } else { 0.0 };

    top + message_height + gap + button_area_height(button_count, button_height)
}

fn button_frames(
    arrangement: ButtonArrangement,
    button_count: usize,
    area: &Frame,
    button_height: f32,
) -> (Vec<ButtonFrame>, Vec<Hairline>) {
    let mut buttons = Vec::with_capacity(button_count);
    let mut hairlines = Vec::with_capacity(button_count);

    match arrangement {
        ButtonArrangement::Single | ButtonArrangement::Row => {
            let button_width = if arrangement == ButtonArrangement::Single {
                area.width
            } else {
                area.width / 2.0
            };

            for tag in 0..button_count.max(1) {
                let x = area.width / 2.0 * tag as f32;
                let frame = Frame::new(x, area.bottom() - button_height, button_width, button_height);
                buttons.push(ButtonFrame { tag, frame });

                hairlines.push(if tag == 0 {
                    Hairline {
                        tag,
                        orientation: HairlineOrientation::Horizontal,
                        frame: Frame::new(0.0, frame.y, area.width, HAIRLINE_THICKNESS),
                    }
                } else {
                    Hairline {
                        tag,
                        orientation: HairlineOrientation::Vertical,
                        frame: Frame::new(x, area.y, HAIRLINE_THICKNESS, area.height),
                    }
                });
            }
        }
        ButtonArrangement::Stacked => {
            for tag in 0..button_count {
                let y = area.y + button_height * tag as f32;
                buttons.push(ButtonFrame {
                    tag,
                    frame: Frame::new(0.0, y, area.width, button_height),
                });
                hairlines.push(Hairline {
                    tag,
                    orientation: HairlineOrientation::Horizontal,
                    frame: Frame::new(0.0, y, area.width, HAIRLINE_THICKNESS),
                });
            }
        }
    }

    (buttons, hairlines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 295.0; // 375pt screen

    #[test]
    fn container_width_subtracts_margins() {
        assert_eq!(container_width(375.0), 295.0);
        assert_eq!(container_width(40.0), 0.0);
    }

    #[test]
    fn single_button_spans_container() {
        let layout = AlertLayout::compute(&LayoutInput::new(WIDTH, 1));

        assert_eq!(layout.arrangement, ButtonArrangement::Single);
        assert_eq!(layout.height, ACCENT_BAR_HEIGHT + BUTTON_HEIGHT);
        assert_eq!(layout.buttons.len(), 1);
        assert_eq!(
            layout.buttons[0].frame,
            Frame::new(0.0, ACCENT_BAR_HEIGHT, WIDTH, BUTTON_HEIGHT)
        );
        assert_eq!(
            layout.hairlines[0].orientation,
            HairlineOrientation::Horizontal
        );
    }

    #[test]
    fn two_buttons_share_a_row() {
        let input = LayoutInput::new(WIDTH, 2)
            .with_title_height(Some(24.0))
            .with_message_height(Some(38.0));
        let layout = AlertLayout::compute(&input);

        assert_eq!(layout.arrangement, ButtonArrangement::Row);
        let cancel = layout.button(0).unwrap().frame;
        let other = layout.button(1).unwrap().frame;
        assert_eq!(cancel.x, 0.0);
        assert_eq!(cancel.width, WIDTH / 2.0);
        assert_eq!(other.x, WIDTH / 2.0);
        assert_eq!(cancel.y, other.y);
        assert_eq!(other.bottom(), layout.height);

        let divider = layout.hairlines[1];
        assert_eq!(divider.orientation, HairlineOrientation::Vertical);
        assert_eq!(divider.frame.x, WIDTH / 2.0);
        assert_eq!(divider.frame.height, BUTTON_HEIGHT);
    }

    #[test]
    fn stacked_buttons_are_ordered_by_tag() {
        let layout = AlertLayout::compute(&LayoutInput::new(WIDTH, 4));

        assert_eq!(layout.arrangement, ButtonArrangement::Stacked);
        assert_eq!(layout.button_area.height, BUTTON_HEIGHT * 4.0);
        for (index, button) in layout.buttons.iter().enumerate() {
            assert_eq!(button.tag, index);
            assert_eq!(button.frame.width, WIDTH);
            assert_eq!(
                button.frame.y,
                layout.button_area.y + BUTTON_HEIGHT * index as f32
            );
            assert_eq!(layout.hairlines[index].frame.y, button.frame.y);
        }
        assert_eq!(layout.buttons.last().unwrap().frame.bottom(), layout.height);
    }

    #[test]
    fn title_and_message_heights_include_padding() {
        let input = LayoutInput::new(WIDTH, 2)
            .with_title_height(Some(24.0))
            .with_message_height(Some(38.0));
        let layout = AlertLayout::compute(&input);

        assert_eq!(layout.title.height, 26.0);
        assert_eq!(layout.title.y, TITLE_TOP);
        assert_eq!(layout.message.y, TITLE_TOP + 26.0 + TITLE_GAP);
        assert_eq!(layout.message.height, 40.0);
        assert_eq!(layout.message.width, WIDTH - 30.0);
        assert_eq!(
            layout.height,
            layout.message.y + 40.0 + MESSAGE_BOTTOM_GAP + BUTTON_HEIGHT
        );
    }

    #[test]
    fn message_without_title_starts_at_title_top() {
        let input = LayoutInput::new(WIDTH, 1).with_message_height(Some(18.0));
        let layout = AlertLayout::compute(&input);

        assert_eq!(layout.title.height, 0.0);
        assert_eq!(layout.message.y, TITLE_TOP);
        assert_eq!(
            layout.height,
            TITLE_TOP + 20.0 + MESSAGE_BOTTOM_GAP + BUTTON_HEIGHT
        );
    }

    #[test]
    fn title_without_message_has_no_bottom_gap() {
        let input = LayoutInput::new(WIDTH, 1).with_title_height(Some(24.0));
        let layout = AlertLayout::compute(&input);

        assert_eq!(layout.message.height, 0.0);
        assert_eq!(layout.height, TITLE_TOP + 26.0 + TITLE_GAP + BUTTON_HEIGHT);
    }

    #[test]
    fn compute_is_idempotent() {
        let input = LayoutInput::new(WIDTH, 3)
            .with_title_height(Some(24.0))
            .with_message_height(Some(57.0));

        assert_eq!(AlertLayout::compute(&input), AlertLayout::compute(&input));
    }

    #[test]
    fn frame_scaling_scales_every_component() {
        let frame = Frame::new(10.0, 20.0, 30.0, 40.0).scaled(0.5);
        assert_eq!(frame, Frame::new(5.0, 10.0, 15.0, 20.0));
    }
}
