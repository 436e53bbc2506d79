use rand::rngs::SmallRng;
use rand::SeedableRng;

use mnk_game::ai::minimax::MinimaxBot;
use mnk_game::ai::simple::RandomBot;
use mnk_game::board::{Board, Cell};
use mnk_game::order::ShuffleOrder;
use mnk_game::util::bot_game;
use mnk_game::util::game_stats::average_game_stats;

#[test]
fn minimax_never_loses_to_random() {
    let mut seed = 0;
    let result = bot_game::run(
        || Board::new(3, 3),
        || MinimaxBot::new(9, ShuffleOrder::new(SmallRng::seed_from_u64(1))),
        || {
            seed += 1;
            RandomBot::new(SmallRng::seed_from_u64(seed))
        },
        5,
        true,
        |_, _| {},
    );

    println!("{:?}", result);
    assert_eq!(result.game_count, 10);
    assert_eq!(result.wdl_l.loss, 0, "minimax lost against random play");
    assert_eq!(result.wdl_l.sum(), 10);
}

#[test]
fn minimax_self_play_draws() {
    let replay = bot_game::play_single_game(
        Board::new(3, 3),
        Cell::Opponent,
        &mut MinimaxBot::new(9, ShuffleOrder::new(SmallRng::seed_from_u64(2))),
        &mut MinimaxBot::new(9, ShuffleOrder::new(SmallRng::seed_from_u64(3))),
    );

    assert_eq!(replay.moves.len(), 9);
    assert_eq!(replay.outcome.pov(Cell::Opponent), mnk_game::wdl::OutcomeWDL::Draw);
}

#[test]
fn random_game_stats() {
    let stats = average_game_stats(&Board::new(3, 3), Cell::Opponent, RandomBot::new(SmallRng::seed_from_u64(0)), 200);
    println!("{:?}", stats);
    assert!((5.0..=9.0).contains(&stats.game_length));
    assert!(stats.available_moves > 1.0 && stats.available_moves <= 9.0);
}
