// SPDX-License-Identifier: MPL-2.0
//! Alert domain types.
//!
//! Everything here is a pure function of the alert content and the measured
//! text metrics. The UI layer feeds measured heights in and renders the
//! resulting geometry; nothing in this module knows about Iced.

mod button;
mod id;
mod layout;
mod spec;
mod state;

pub use button::{assign_tag, cancel_button_index, Button, ButtonRole};
pub use id::AlertId;
pub use layout::{
    container_width, AlertLayout, ButtonArrangement, ButtonFrame, Frame, Hairline,
    HairlineOrientation, LayoutInput, ACCENT_BAR_HEIGHT, BUTTON_HEIGHT, CONTAINER_MARGIN,
    CONTENT_INSET, HAIRLINE_THICKNESS, LABEL_PADDING, MESSAGE_BOTTOM_GAP, TITLE_GAP, TITLE_TOP,
};
pub use spec::AlertSpec;
pub use state::PresentationState;
