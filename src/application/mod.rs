// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! Holds the ports through which the alert talks to its host toolkit. The
//! presentation controller in [`crate::ui::alert`] depends on these traits
//! only, so it can be driven by the Iced window in production and by a fake
//! host in tests.

pub mod port;
