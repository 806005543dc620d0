// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`host`]: Root surface accessor, mount/unmount and animation clock
//! - [`text`]: Text measurement with word wrapping
//!
//! # Design Notes
//!
//! - Traits use domain types and plain numbers only (no Iced types)
//! - Everything runs on the UI thread; no `Send`/`Sync` bounds
//!
//! # Example
//!
//! ```ignore
//! use iced_alert::application::port::{Host, SurfaceSize};
//!
//! fn container_width(host: &impl Host) -> Option<f32> {
//!     host.root_size().map(|size| size.width - 80.0)
//! }
//! ```

pub mod host;
pub mod text;

pub use host::{Host, SurfaceSize};
pub use text::{measure_label, measure_text_height, TextMeasure};
