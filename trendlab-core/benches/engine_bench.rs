use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trendlab_core::domain::Bar;
use trendlab_core::engine::{Engine, EngineConfig};

fn synthetic_bars(n: usize) -> Vec<Bar> {
    let mut bars = Vec::with_capacity(n);
    let mut price = 100.0;
    let mut ts = 0i64;
    for i in 0..n {
        let open = price;
        let drift = ((i % 97) as f64 - 48.0) / 4000.0;
        price *= 1.0 + drift;
        let close = price;
        let (high, low) = if close >= open { (close + 0.05, open - 0.05) } else { (open + 0.05, close - 0.05) };
        bars.push(Bar { timestamp: ts, open, high, low, close, volume: 1000.0 + (i % 50) as f64 * 10.0 });
        ts += 60;
    }
    bars
}

fn bench_engine_throughput(c: &mut Criterion) {
    let bars = synthetic_bars(50_000);
    c.bench_function("engine_50k_bars", |b| {
        b.iter(|| {
            let mut engine = Engine::new(EngineConfig::default());
            for bar in &bars {
                engine.on_bar(black_box(bar));
            }
            black_box(engine.report(bars.last().unwrap().close, 1))
        });
    });
}

criterion_group!(benches, bench_engine_throughput);
criterion_main!(benches);
