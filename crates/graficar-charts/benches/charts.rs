//! Benchmark tests for chart aggregation and painting.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graficar_charts::{
    compute_slices, stack_segments, Category, CategoryTotals, PeriodEntry, StackedBarChart,
};
use graficar_core::scale::calculate_ticks;
use graficar_core::{Rect, RecordingCanvas, TickScale, Widget};

fn categories() -> Vec<Category> {
    vec![
        Category::new("activities", "Activities", "primary-500"),
        Category::new("content", "Content", "success-500"),
        Category::new("review", "Review", "warning-500"),
    ]
}

fn week() -> Vec<PeriodEntry> {
    ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        .iter()
        .enumerate()
        .map(|(i, label)| {
            PeriodEntry::new(*label)
                .with_value("activities", i as f64 * 1.5)
                .with_value("content", (7 - i) as f64)
                .with_value("review", 2.0)
        })
        .collect()
}

fn bench_calculate_ticks(c: &mut Criterion) {
    c.bench_function("calculate_ticks", |b| {
        b.iter(|| calculate_ticks(black_box(47.0)))
    });
}

fn bench_stack_segments(c: &mut Criterion) {
    let cats = categories();
    let entry = PeriodEntry::new("Mon")
        .with_value("activities", 4.0)
        .with_value("content", 2.0)
        .with_value("review", 6.0);
    let scale = TickScale::from_max_value(12.0);

    c.bench_function("stack_segments", |b| {
        b.iter(|| stack_segments(black_box(&cats), black_box(&entry), &scale, 240.0, 3.0))
    });
}

fn bench_compute_slices(c: &mut Criterion) {
    let cats = categories();
    let totals = CategoryTotals::from_entries(&cats, &week());

    c.bench_function("compute_slices", |b| {
        b.iter(|| compute_slices(black_box(&cats), black_box(&totals)))
    });
}

fn bench_bar_chart_paint(c: &mut Criterion) {
    let mut chart = StackedBarChart::new(categories()).data(week());
    chart.layout(Rect::new(0.0, 0.0, 480.0, 260.0));

    c.bench_function("bar_chart_paint_week", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            chart.paint(&mut canvas);
            canvas.command_count()
        })
    });
}

criterion_group!(
    benches,
    bench_calculate_ticks,
    bench_stack_segments,
    bench_compute_slices,
    bench_bar_chart_paint
);
criterion_main!(benches);
