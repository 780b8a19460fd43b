use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand_chacha::ChaCha8Rng;

use farflung_arena::heuristic::ShipRatio;
use farflung_arena::search::{alpha_beta, minimax};
use farflung_core::GameState;

fn bench_alpha_beta(c: &mut Criterion) {
    let (state, _) = GameState::generate(6, Some(42), true).unwrap();

    c.bench_function("alpha_beta_depth_3", |b| {
        b.iter(|| alpha_beta::<ChaCha8Rng>(black_box(&state), 3, &ShipRatio, None))
    });
}

fn bench_minimax(c: &mut Criterion) {
    let (state, _) = GameState::generate(6, Some(42), true).unwrap();

    // Same tree without pruning; the gap against alpha_beta_depth_3 is
    // the pruning win.
    c.bench_function("minimax_depth_3", |b| {
        b.iter(|| minimax::<ChaCha8Rng>(black_box(&state), 3, &ShipRatio, None))
    });
}

criterion_group!(benches, bench_alpha_beta, bench_minimax);
criterion_main!(benches);
