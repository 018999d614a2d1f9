// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for selection handling.
//!
//! Measures the performance of:
//! - Toggling indices in a large selection
//! - Building the render model for a large image list

use criterion::{criterion_group, criterion_main, Criterion};
use image_selector::host::{ImageDescriptor, RenderData};
use image_selector::selection::Selection;
use image_selector::ui::selector::{Message, State};
use std::hint::black_box;

const IMAGE_COUNT: usize = 1_000;

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    group.bench_function("toggle_on_and_off", |b| {
        b.iter(|| {
            let mut selection = Selection::new();
            for index in 0..IMAGE_COUNT {
                selection.toggle(black_box(index));
            }
            for index in (0..IMAGE_COUNT).rev() {
                selection.toggle(black_box(index));
            }
            black_box(&selection);
        });
    });

    group.finish();
}

fn bench_figures(c: &mut Criterion) {
    let mut group = c.benchmark_group("selector");

    let mut state = State::default();
    state.apply_render_data(RenderData {
        images: (0..IMAGE_COUNT)
            .map(|i| ImageDescriptor::new(format!("{i}.png"), format!("image {i}")))
            .collect(),
        ..RenderData::default()
    });
    for index in (0..IMAGE_COUNT).step_by(3) {
        state.handle_message(Message::Toggle(index));
    }

    group.bench_function("figures", |b| {
        b.iter(|| black_box(state.figures()));
    });

    group.finish();
}

criterion_group!(benches, bench_toggle, bench_figures);
criterion_main!(benches);
