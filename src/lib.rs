// SPDX-License-Identifier: MPL-2.0
//! `iced_alert` is an animated modal alert for applications built with the
//! Iced GUI framework.
//!
//! An alert shows an optional title and message above one or more buttons,
//! dims the window behind it, and reports which button was tapped through
//! callbacks fired around its entrance and exit animations.
//!
//! # Layers
//!
//! - [`domain`] - Alert content, button tags, lifecycle states and geometry
//! - [`application`] - Ports implemented by the host application
//! - [`infrastructure`] - Bundled port adapters (text metrics)
//! - [`ui`] - Style, presentation controller and Iced view
//! - [`config`] - Style settings file
//! - [`app`] - Demo application

#![doc(html_root_url = "https://docs.rs/iced_alert/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
