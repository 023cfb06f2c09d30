//! Performance benchmarks for picker rendering
//!
//! Measures line building for listings of different sizes and a full frame
//! draw into a `TestBackend`.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use braindump::adapters::mock::InMemoryDirectories;
use braindump::models::Entry;
use braindump::picker::{Movement, PickerController, PickerEvent};
use braindump::ui::{build_picker_lines, render_picker, RenderOptions};
use ratatui::{backend::TestBackend, Terminal};

/// Generate a listing with a mix of directories and files
fn generate_entries(count: usize) -> Vec<Entry> {
    (0..count)
        .map(|i| {
            if i % 3 == 0 {
                Entry::dir(format!("directory-{:05}", i), format!("/bench/directory-{:05}", i))
                    .with_mode(0o755)
            } else {
                Entry::file(format!("file-{:05}.txt", i), format!("/bench/file-{:05}.txt", i))
                    .with_mode(0o644)
                    .with_size(i as u64 * 37)
            }
        })
        .collect()
}

fn picker_at_middle(count: usize) -> PickerController<InMemoryDirectories> {
    let mut controller =
        PickerController::with_entries("/bench", generate_entries(count), InMemoryDirectories::new());
    controller.handle_event(PickerEvent::Resize { rows: 40 });
    for _ in 0..count / 2 {
        controller.handle_event(PickerEvent::Navigate(Movement::Down));
    }
    controller
}

/// Benchmark line building for different listing sizes
fn bench_build_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("picker_build_lines");
    let options = RenderOptions {
        show_permissions: true,
    };

    for size in [10, 100, 1_000, 10_000].iter() {
        let controller = picker_at_middle(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_entries", size)),
            &controller,
            |b, controller| {
                b.iter(|| {
                    let lines = build_picker_lines(black_box(controller), options, 120);
                    black_box(lines)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a full frame draw
fn bench_full_frame(c: &mut Criterion) {
    let controller = picker_at_middle(1_000);
    let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();

    c.bench_function("picker_full_frame_120x48", |b| {
        b.iter(|| {
            terminal
                .draw(|frame| render_picker(frame, &controller, RenderOptions::default()))
                .unwrap();
        });
    });
}

criterion_group!(benches, bench_build_lines, bench_full_frame);
criterion_main!(benches);
