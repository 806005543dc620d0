// SPDX-License-Identifier: MPL-2.0
//! Centralized styles of the alert and the demo window.

pub mod button;
pub mod container;
