// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for alert layout.
//!
//! Measures the performance of:
//! - Text measurement through Iced's paragraph layout and the estimator
//! - Geometry computation for row and stacked buttons
//! - A full layout pass as run on show and on window resize

use criterion::{criterion_group, criterion_main, Criterion};
use iced_alert::application::port::{measure_label, TextMeasure};
use iced_alert::domain::alert::{container_width, AlertLayout, AlertSpec, LayoutInput};
use iced_alert::infrastructure::paragraph_metrics::ParagraphMetrics;
use iced_alert::infrastructure::text_metrics::EstimatedTextMetrics;
use std::hint::black_box;

const ROOT_WIDTH: f32 = 375.0;
const MESSAGE: &str = "Your account was signed in on another device. \
                       Please make sure your account is secure.";

fn bench_measure_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("alert_layout");
    let metrics = EstimatedTextMetrics::default();
    let width = container_width(ROOT_WIDTH) - 30.0;

    group.bench_function("measure_latin_message", |b| {
        b.iter(|| black_box(metrics.measure_height(black_box(MESSAGE), 16.0, width)));
    });

    group.bench_function("measure_cjk_message", |b| {
        b.iter(|| {
            black_box(metrics.measure_height(
                black_box("您的账号已在其他设备登录，请您注意账号安全。"),
                16.0,
                width,
            ))
        });
    });

    let paragraphs = ParagraphMetrics::default();
    group.bench_function("paragraph_latin_message", |b| {
        b.iter(|| black_box(paragraphs.measure_height(black_box(MESSAGE), 16.0, width)));
    });

    group.finish();
}

fn bench_compute_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("alert_layout");

    for button_count in [2_usize, 6] {
        let input = LayoutInput::new(container_width(ROOT_WIDTH), button_count)
            .with_title_height(Some(26.0))
            .with_message_height(Some(41.6));

        group.bench_function(format!("compute_{button_count}_buttons"), |b| {
            b.iter(|| black_box(AlertLayout::compute(black_box(&input))));
        });
    }

    group.finish();
}

fn bench_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("alert_layout");
    let metrics = ParagraphMetrics::default();
    let spec = AlertSpec::new("Exit")
        .with_title("Notice")
        .with_message(MESSAGE)
        .with_other_buttons(["Sign in again", "Change password"]);

    group.bench_function("measure_and_compute", |b| {
        b.iter(|| {
            let input = LayoutInput::new(
                container_width(black_box(ROOT_WIDTH)),
                spec.button_count(),
            );
            let width = input.content_width();
            let input = input
                .with_title_height(measure_label(&metrics, spec.title(), 20.0, width))
                .with_message_height(measure_label(&metrics, spec.message(), 16.0, width));
            black_box(AlertLayout::compute(&input))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_measure_text,
    bench_compute_geometry,
    bench_full_pass
);
criterion_main!(benches);
