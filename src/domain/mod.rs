// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core alert logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`alert`]: Alert content ([`AlertSpec`](alert::AlertSpec)), button tag
//!   assignment ([`Button`](alert::Button)), presentation states
//!   ([`PresentationState`](alert::PresentationState)) and the pure layout
//!   engine ([`AlertLayout`](alert::AlertLayout))

pub mod alert;
