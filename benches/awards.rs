use criterion::{black_box, criterion_group, criterion_main, Criterion};

use westmarch_xp::{award_raw35, combine_els, get_pot30};

fn bench_awards(c: &mut Criterion) {
    c.bench_function("award_raw35 full grid", |b| {
        b.iter(|| {
            let mut total = 0i64;
            for level in 1..=20 {
                for el in 1..=20 {
                    total += award_raw35(black_box(level), black_box(el as f64));
                }
            }
            total
        })
    });

    c.bench_function("get_pot30 table hit", |b| {
        b.iter(|| get_pot30(black_box(10), black_box(10)))
    });

    c.bench_function("get_pot30 extrapolated", |b| {
        b.iter(|| get_pot30(black_box(25), black_box(45)))
    });

    c.bench_function("combine_els mixed pack", |b| {
        let els = vec![4.0, 4.0, 6.0, 7.0, 9.0, 12.0];
        b.iter(|| combine_els(black_box(&els)))
    });
}

criterion_group!(benches, bench_awards);
criterion_main!(benches);
