use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use orderstat::select::{select, select_mom, select_radix_msd, select_radix_word, DEFAULT_RADIX_THRESHOLD};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_keys(n: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n).map(|_| rng.gen()).collect()
}

fn bench_selectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_median");
    for &n in &[1_000usize, 100_000, 1_000_000] {
        let data = random_keys(n);
        let k = n / 2;

        group.bench_with_input(BenchmarkId::new("introselect", n), &data, |b, data| {
            b.iter(|| {
                let mut arr = data.clone();
                black_box(select(&mut arr, k, Some(7)).unwrap())
            })
        });
        group.bench_with_input(BenchmarkId::new("median_of_medians", n), &data, |b, data| {
            b.iter(|| {
                let mut arr = data.clone();
                black_box(select_mom(&mut arr, 0, n, k, 5).unwrap())
            })
        });
        group.bench_with_input(BenchmarkId::new("radix_msd", n), &data, |b, data| {
            b.iter(|| {
                let mut arr = data.clone();
                black_box(select_radix_msd(&mut arr, 0, n, k, DEFAULT_RADIX_THRESHOLD).unwrap())
            })
        });
        group.bench_with_input(BenchmarkId::new("radix_word", n), &data, |b, data| {
            b.iter(|| {
                let mut arr = data.clone();
                black_box(select_radix_word(&mut arr, 0, n, k).unwrap())
            })
        });
        group.bench_with_input(BenchmarkId::new("std_select_nth_unstable", n), &data, |b, data| {
            b.iter(|| {
                let mut arr = data.clone();
                black_box(*arr.select_nth_unstable(k).1)
            })
        });
    }
    group.finish();
}

fn bench_descending(c: &mut Criterion) {
    let n = 100_000u32;
    let data: Vec<u32> = (0..n).rev().collect();
    c.bench_function("introselect_descending_100k", |b| {
        b.iter(|| {
            let mut arr = data.clone();
            black_box(select(&mut arr, (n / 2) as usize, Some(7)).unwrap())
        })
    });
}

criterion_group!(benches, bench_selectors, bench_descending);
criterion_main!(benches);
