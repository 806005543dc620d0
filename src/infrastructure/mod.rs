// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters implementing the application ports.
//!
//! - [`paragraph_metrics`]: [`ParagraphMetrics`](paragraph_metrics::ParagraphMetrics),
//!   a [`TextMeasure`](crate::application::port::TextMeasure) backed by Iced's
//!   own text layout
//! - [`text_metrics`]: [`EstimatedTextMetrics`](text_metrics::EstimatedTextMetrics),
//!   a font-agnostic fallback

pub mod paragraph_metrics;
pub mod text_metrics;
