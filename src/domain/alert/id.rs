// SPDX-License-Identifier: MPL-2.0
//! Alert identity.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identifier of an alert instance.
///
/// Hosts use it to keep track of which alert layers are mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(u64);

impl AlertId {
    /// Creates a new unique alert ID.
    #[must_use]
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = AlertId::new();
        let b = AlertId::new();
        assert_ne!(a, b);
    }
}
