use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hog::core::GameConfig;
use hog::dice::StandardRack;
use hog::eval::{average_win_rate, EvalConfig};
use hog::game::play;
use hog::strategy::{always_roll, FinalStrategy};

fn bench_single_game(c: &mut Criterion) {
    let strategy = FinalStrategy::default();
    let baseline = always_roll(5);
    let config = GameConfig::default();
    let mut seed = 0u64;

    c.bench_function("play_final_vs_always_roll_5", |b| {
        b.iter(|| {
            seed += 1;
            let mut rack = StandardRack::new(seed);
            black_box(play(&strategy, &baseline, &mut rack, &config).unwrap())
        })
    });
}

fn bench_win_rate(c: &mut Criterion) {
    let strategy = FinalStrategy::default();
    let baseline = always_roll(5);

    let mut group = c.benchmark_group("average_win_rate");
    for parallel in [false, true] {
        let config = EvalConfig::new().with_samples(200).with_parallel(parallel);
        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_function(label, |b| {
            b.iter(|| black_box(average_win_rate(&strategy, &baseline, &config).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_game, bench_win_rate);
criterion_main!(benches);
