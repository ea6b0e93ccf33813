use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use interact_core::{Candle, CandleHistory, ChartView, PlotGeometry};

fn gen_history(n: usize) -> CandleHistory {
    (0..n)
        .map(|i| {
            let o = 100.0 + (i as f64 * 0.01).sin() * 20.0;
            Candle { t: i as f64, o, h: o + 1.5, l: o - 1.5, c: o + 0.3, v: 2.0 }
        })
        .collect()
}

fn bench_autoscale(c: &mut Criterion) {
    let mut group = c.benchmark_group("autoscale_visible");
    for &bar_width in &[2i32, 8, 32] {
        let history = gen_history(200_000);
        group.bench_with_input(BenchmarkId::from_parameter(format!("bar{bar_width}")), &bar_width, |b, &bw| {
            b.iter_batched(
                || ChartView::new(history.clone(), PlotGeometry::new(1920, 1080, 16), bw),
                |mut view| {
                    view.pan_px(500);
                    black_box(view.autoscale_visible())
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_autoscale);
criterion_main!(benches);
