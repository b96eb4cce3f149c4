use criterion::{black_box, criterion_group, criterion_main, Criterion};

use robo_rally::{
    Board, BoardConfig, Command, CommandCard, GameController, Heading, PlayerId, Position,
};

fn programmed_board(players: u16) -> Board {
    let placements = (0..players).map(|i| (format!("P{i}"), Position::new(i, i), Heading::East));
    let mut board = Board::new(BoardConfig::new("bench").with_size(16, 16), placements).unwrap();
    let program = [
        Command::Forward,
        Command::Right,
        Command::FastForward,
        Command::Left,
        Command::Forward,
    ];
    for id in PlayerId::all(usize::from(players)) {
        let p = board.player_mut(id).unwrap();
        for (step, command) in program.iter().enumerate() {
            p.program_mut(step).set_card(Some(CommandCard::new(*command)));
        }
    }
    board
}

fn bench_activation(c: &mut Criterion) {
    c.bench_function("full_round_8_players", |b| {
        let mut setup = GameController::with_seed(0);
        let mut game = GameController::with_seed(42);
        b.iter_batched(
            || {
                let mut board = programmed_board(8);
                setup.finish_programming_phase(&mut board);
                board
            },
            |mut board| {
                game.execute_programs(&mut board);
                black_box(board.move_counter())
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_activation);
criterion_main!(benches);
