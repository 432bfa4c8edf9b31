//! Fast fixed-point path vs float-then-round reference
//!
//! The fixed-point path exists for speed on FPU-less targets; this bench
//! keeps the host-side gap honest and catches regressions that sneak a
//! float into the hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stepconv_core::{verify::DISTANCE_BATTERY, Converter, MachineConfig};

fn bench_conversions(criterion: &mut Criterion) {
    let converter = Converter::verified(MachineConfig::andantex_a30()).unwrap();

    let mut group = criterion.benchmark_group("hundredths_to_steps");
    group.bench_function("fast", |b| {
        b.iter(|| {
            for &v in DISTANCE_BATTERY {
                black_box(converter.hundredths_to_steps(black_box(v)));
            }
        })
    });
    group.bench_function("slow", |b| {
        b.iter(|| {
            for &v in DISTANCE_BATTERY {
                black_box(converter.slow_hundredths_to_steps(black_box(v)));
            }
        })
    });
    group.finish();

    let mut group = criterion.benchmark_group("steps_to_hundredths");
    group.bench_function("fast", |b| {
        b.iter(|| {
            for &v in DISTANCE_BATTERY {
                black_box(converter.steps_to_hundredths(black_box(v)));
            }
        })
    });
    group.bench_function("slow", |b| {
        b.iter(|| {
            for &v in DISTANCE_BATTERY {
                black_box(converter.slow_steps_to_hundredths(black_box(v)));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_conversions);
criterion_main!(benches);
