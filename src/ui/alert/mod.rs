// SPDX-License-Identifier: MPL-2.0
//! Modal alert for Iced applications.
//!
//! An [`Alert`] is created through [`Alert::builder`], shown through a
//! [`Host`](crate::application::port::Host) and driven by the application's
//! `update`/`subscription`/`view`:
//!
//! ```ignore
//! // update
//! Message::Alert(msg) => alert.update(msg, &mut host),
//! // subscription
//! alert.subscription().map(Message::Alert)
//! // view
//! stack![content].push_maybe(alert::view(&alert).map(|e| e.map(Message::Alert)))
//! ```

mod builder;
mod controller;
mod style;
mod transition;
mod view;

pub use builder::AlertBuilder;
pub use controller::{
    Alert, ClickedCallback, DismissCallback, Message, MountedButton, PresentCallback, ShowError,
};
pub use style::StyleConfig;
pub use transition::{Curve, Transition, TransitionKind, VisualState};
pub use view::view;
