use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use editdistance::{compute_all_optimal_paths, compute_distance, CostConfig};

fn random_lowercase(rng: &mut StdRng, len: usize) -> String {
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

fn mutate(rng: &mut StdRng, s: &str, num_changes: usize) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    for _ in 0..num_changes {
        let idx = rng.gen_range(0..chars.len());
        chars[idx] = rng.gen_range(b'a'..=b'z') as char;
    }
    chars.into_iter().collect()
}

fn pairs() -> Vec<(String, String)> {
    let mut rng = StdRng::seed_from_u64(42);
    let base = random_lowercase(&mut rng, 16);
    let mut pairs = vec![
        ("kitten".to_string(), "sitting".to_string()),
        ("abcdef".to_string(), "abcdef".to_string()),
        ("abcdef".to_string(), "ghijkl".to_string()),
        ("hello".to_string(), "helo".to_string()),
        (String::new(), String::new()),
        ("a".repeat(20), "a".repeat(20)),
        ("a".repeat(20), "b".repeat(20)),
    ];
    pairs.push((base.clone(), mutate(&mut rng, &base, 1)));
    pairs.push((base.clone(), mutate(&mut rng, &base, 4)));
    pairs.push((base.clone(), mutate(&mut rng, &base, 8)));
    pairs
}

fn bench_compute_distance(c: &mut Criterion) {
    let pairs = pairs();
    c.bench_function("compute_distance over pair set", |bencher| {
        let config = CostConfig::unit();
        bencher.iter(|| {
            for (a, b) in &pairs {
                black_box(compute_distance(black_box(a), black_box(b), &config));
            }
        });
    });
}

fn bench_compute_all_optimal_paths(c: &mut Criterion) {
    let config = CostConfig::unit();
    c.bench_function("all paths kitten/sitting", |bencher| {
        bencher.iter(|| {
            black_box(compute_all_optimal_paths(
                black_box("kitten"),
                black_box("sitting"),
                &config,
            ))
        });
    });
    c.bench_function("all paths with heavy ties", |bencher| {
        bencher.iter(|| {
            black_box(compute_all_optimal_paths(
                black_box("aaaaaa"),
                black_box("aaa"),
                &config,
            ))
        });
    });
}

criterion_group!(benches, bench_compute_distance, bench_compute_all_optimal_paths);
criterion_main!(benches);
