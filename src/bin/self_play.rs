use std::path::Path;

use rand::thread_rng;
use tracing_subscriber::EnvFilter;

use mnk_game::ai::minimax::MinimaxBot;
use mnk_game::ai::simple::RandomBot;
use mnk_game::board::Cell;
use mnk_game::error::ConfigError;
use mnk_game::game::GameConfig;
use mnk_game::order::ShuffleOrder;
use mnk_game::util::bot_game;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "game.toml".to_owned());
    let config = GameConfig::load_or_default(Path::new(&path))?;
    let start = config.board()?;
    println!("{:?}", config);

    // one game of the engine against itself, printing every position
    let replay = bot_game::play_single_game(
        start.clone(),
        Cell::Opponent,
        &mut MinimaxBot::new(config.depth, ShuffleOrder::new(thread_rng())),
        &mut MinimaxBot::new(config.depth, ShuffleOrder::new(thread_rng())),
    );

    let mut board = start.clone();
    let mut mark = Cell::Opponent;
    println!("{}", board);
    for &mv in &replay.moves {
        board.set(mv, mark);
        println!("{} plays {}", mark, mv);
        println!("{}", board);
        mark = mark.other();
    }
    println!("{:?}", replay.outcome);

    // the engine against random play
    let result = bot_game::run(
        || start.clone(),
        || MinimaxBot::new(config.depth, ShuffleOrder::new(thread_rng())),
        || RandomBot::new(thread_rng()),
        20,
        true,
        |wdl, replay| println!("{:?} after {} moves, total {:?}", replay.outcome, replay.moves.len(), wdl),
    );
    println!("{:?}", result);

    Ok(())
}
