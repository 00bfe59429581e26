use criterion::{black_box, criterion_group, criterion_main, Criterion};
use order_chaos_bot::{Bot, BotConfig, Role, SelfPlayRunner, WinnabilityTracker};

fn midgame_board() -> [u8; 36] {
    let mut board = [0u8; 36];
    for (index, code) in [(0, 1), (7, 1), (14, 2), (3, 2), (9, 2), (21, 1), (28, 1), (33, 2)] {
        board[index] = code;
    }
    board
}

fn bench_tracker_update(c: &mut Criterion) {
    let board = midgame_board();

    c.bench_function("tracker.update(midgame)", |b| {
        b.iter(|| {
            let mut tracker = WinnabilityTracker::new().expect("registry");
            black_box(tracker.update(black_box(&board)).expect("update"));
        })
    });
}

fn bench_make_move(c: &mut Criterion) {
    let board = midgame_board();
    let mut bot = Bot::new(BotConfig::default()).expect("bot");
    bot.load_board(&board).expect("load");
    bot.check_winning(&board).expect("check");
    bot.set_first_move(false);

    c.bench_function("bot.make_move(chaos)", |b| {
        b.iter(|| black_box(bot.make_move(black_box(&board), Role::Chaos).expect("move")))
    });
    c.bench_function("bot.make_move(order)", |b| {
        b.iter(|| black_box(bot.make_move(black_box(&board), Role::Order).expect("move")))
    });
}

fn bench_selfplay(c: &mut Criterion) {
    c.bench_function("selfplay.play(high vs high)", |b| {
        b.iter(|| {
            let config = BotConfig::default();
            let record = SelfPlayRunner::new(config.clone(), config, black_box(7))
                .expect("runner")
                .play()
                .expect("match");
            black_box(record.moves.len());
        })
    });
}

criterion_group!(benches, bench_tracker_update, bench_make_move, bench_selfplay);
criterion_main!(benches);
