use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use farflung_core::GameState;

fn bench_transition(c: &mut Criterion) {
    let (state, _) = GameState::generate(12, Some(42), true).unwrap();
    let mv = state.moves()[1];

    c.bench_function("transition_single_ply", |b| {
        b.iter(|| black_box(&state).next(black_box(mv)).unwrap())
    });
}

fn bench_move_enumeration(c: &mut Criterion) {
    // Mid-game state with several owned planets and fleets in flight.
    let (mut state, _) = GameState::generate(12, Some(42), true).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..40 {
        if state.finished() {
            break;
        }
        let moves = state.moves();
        let mv = *moves.choose(&mut rng).unwrap();
        state = state.next(mv).unwrap();
    }

    c.bench_function("move_enumeration", |b| {
        b.iter(|| black_box(&state).moves())
    });
}

fn bench_scripted_game(c: &mut Criterion) {
    c.bench_function("scripted_game_100_plies", |b| {
        b.iter(|| {
            let (mut state, _) = GameState::generate(8, Some(42), true).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            for _ in 0..100 {
                if state.finished() {
                    break;
                }
                let moves = state.moves();
                let mv = *moves.choose(&mut rng).unwrap();
                state = state.next(mv).unwrap();
            }
            black_box(state)
        })
    });
}

criterion_group!(benches, bench_transition, bench_move_enumeration, bench_scripted_game);
criterion_main!(benches);
