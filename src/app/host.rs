// SPDX-License-Identifier: MPL-2.0
//! The demo window as an alert host.

use crate::application::port::{Host, SurfaceSize, TextMeasure};
use crate::domain::alert::AlertId;
use crate::infrastructure::paragraph_metrics::ParagraphMetrics;
use std::time::Instant;

/// Root surface of the demo: its size and the mounted alert layers,
/// bottom to top.
#[derive(Debug, Default)]
pub struct WindowHost {
    size: Option<SurfaceSize>,
    layers: Vec<AlertId>,
    metrics: ParagraphMetrics,
}

impl WindowHost {
    #[must_use]
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = Some(size);
    }

    /// Mounted alerts, bottom to top.
    #[must_use]
    pub fn layers(&self) -> &[AlertId] {
        &self.layers
    }
}

impl TextMeasure for WindowHost {
    fn measure_height(&self, text: &str, font_size: f32, max_width: f32) -> f32 {
        self.metrics.measure_height(text, font_size, max_width)
    }
}

impl Host for WindowHost {
    fn root_size(&self) -> Option<SurfaceSize> {
        self.size
    }

    fn mount(&mut self, id: AlertId) {
        if !self.layers.contains(&id) {
            self.layers.push(id);
        }
    }

    fn unmount(&mut self, id: AlertId) {
        self.layers.retain(|layer| *layer != id);
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_follow_mount_order() {
        let mut host = WindowHost::new(SurfaceSize::new(800.0, 600.0));
        let (a, b) = (AlertId::new(), AlertId::new());

        host.mount(a);
        host.mount(b);
        host.mount(a);
        assert_eq!(host.layers(), &[a, b]);

        host.unmount(a);
        assert_eq!(host.layers(), &[b]);
    }

    #[test]
    fn labels_are_measured_with_iced_layout() {
        let host = WindowHost::new(SurfaceSize::new(800.0, 600.0));
        let text = "WWWW ".repeat(6);
        assert_eq!(
            host.measure_height(&text, 16.0, 265.0),
            ParagraphMetrics::new().measure_height(&text, 16.0, 265.0)
        );
    }

    #[test]
    fn default_host_has_no_root() {
        assert!(WindowHost::default().root_size().is_none());
    }
}
