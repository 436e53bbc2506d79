//! Utilities to run bots against each other and report the results.
use std::fmt::Write;
use std::fmt::{Debug, Formatter};
use std::time::Instant;

use tracing::info;

use crate::ai::Bot;
use crate::board::{Board, Cell, Coord, Outcome};
use crate::wdl::WDL;

/// Run `bot_l` against `bot_r` on the board given by `start`.
///
/// `games_per_side` games are run, except if `both_sides` is true, in
/// which case a match consists of two games per start position where the bots switch marks.
/// In the first game of each pair `bot_l` plays [Cell::Opponent], which also moves first.
#[must_use]
pub fn run<L: Bot, R: Bot>(
    start: impl Fn() -> Board,
    mut bot_l: impl FnMut() -> L,
    mut bot_r: impl FnMut() -> R,
    games_per_side: u32,
    both_sides: bool,
    mut callback: impl FnMut(WDL<u32>, &Replay),
) -> BotGameResult {
    let debug_l = debug_to_string(&bot_l());
    let debug_r = debug_to_string(&bot_r());

    let game_count = if both_sides { 2 * games_per_side } else { games_per_side };
    let mut partial_wdl = WDL::<u32>::default();
    let mut replays = vec![];

    for game_i in 0..game_count {
        let flip = both_sides && game_i % 2 == 1;
        let mark_l = if flip { Cell::Player } else { Cell::Opponent };

        let replay = play_single_game(start(), mark_l, &mut bot_l(), &mut bot_r());
        partial_wdl += replay.outcome.pov(replay.mark_l).to_wdl();
        callback(partial_wdl, &replay);

        replays.push(replay);
    }

    let total_time_l = replays.iter().map(|r| r.total_time_l).sum::<f32>();
    let total_time_r = replays.iter().map(|r| r.total_time_r).sum::<f32>();
    let move_count_l = replays.iter().map(|r| r.move_count_l).sum::<u32>();
    let move_count_r = replays.iter().map(|r| r.move_count_r).sum::<u32>();

    let result = BotGameResult {
        game_count,
        average_game_length: replays.iter().map(|r| r.moves.len() as f32).sum::<f32>() / game_count as f32,
        wdl_l: replays.iter().map(|r| r.outcome.pov(r.mark_l).to_wdl()).sum(),
        time_l: total_time_l / move_count_l.max(1) as f32,
        time_r: total_time_r / move_count_r.max(1) as f32,
        debug_l,
        debug_r,
        replays,
    };
    info!(games = game_count, wdl_l = ?result.wdl_l, "bot game finished");
    result
}

/// Play a single game from `start`, where `bot_l` places `mark_l`.
/// [Cell::Opponent] always moves first.
pub fn play_single_game(start: Board, mark_l: Cell, bot_l: &mut impl Bot, bot_r: &mut impl Bot) -> Replay {
    let mut board = start.clone();
    let mut mark = Cell::Opponent;

    let mut total_time_l = 0.0;
    let mut total_time_r = 0.0;
    let mut move_count_l: u32 = 0;
    let mut move_count_r: u32 = 0;
    let mut moves = vec![];

    loop {
        match board.outcome() {
            None => {
                let start_time = Instant::now();
                let selected = if mark == mark_l {
                    let mv = bot_l.select_move(&board, mark);
                    total_time_l += start_time.elapsed().as_secs_f32();
                    move_count_l += 1;
                    mv
                } else {
                    let mv = bot_r.select_move(&board, mark);
                    total_time_r += start_time.elapsed().as_secs_f32();
                    move_count_r += 1;
                    mv
                };

                // the board is not done, so both bots must return a move
                let mv = selected.unwrap_or_else(|_| panic!("Bot failed to pick a move on\n{}", board));
                board
                    .play(mv, mark)
                    .unwrap_or_else(|e| panic!("Bot played invalid move {}: {}", mv, e));

                moves.push(mv);
                mark = mark.other();
            }
            Some(outcome) => {
                return Replay {
                    start,
                    mark_l,
                    moves,
                    outcome,
                    total_time_l,
                    total_time_r,
                    move_count_l,
                    move_count_r,
                    debug_l: debug_to_string(bot_l),
                    debug_r: debug_to_string(bot_r),
                };
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Replay {
    pub start: Board,
    pub mark_l: Cell,

    pub moves: Vec<Coord>,
    pub outcome: Outcome,

    pub total_time_l: f32,
    pub total_time_r: f32,
    pub move_count_l: u32,
    pub move_count_r: u32,

    pub debug_l: String,
    pub debug_r: String,
}

/// Structure returned by the function [`run`].
pub struct BotGameResult {
    pub game_count: u32,
    pub replays: Vec<Replay>,

    pub average_game_length: f32,
    pub wdl_l: WDL<u32>,

    //time per move in seconds
    pub time_l: f32,
    pub time_r: f32,

    pub debug_l: String,
    pub debug_r: String,
}

impl Debug for BotGameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BotGameResult {{")?;
        writeln!(
            f,
            "  {} games, average length {}",
            self.game_count, self.average_game_length
        )?;
        writeln!(f, "  left      {:?}", self.wdl_l)?;
        writeln!(f, "  time_l:   {:.4}, time_r: {:.4}", self.time_l, self.time_r)?;
        writeln!(f, "  left:     {}", self.debug_l)?;
        writeln!(f, "  right:    {}", self.debug_r)?;
        writeln!(f, "}}")?;

        Ok(())
    }
}

fn debug_to_string(d: &impl Debug) -> String {
    let mut s = String::new();
    // writing to a String cannot fail
    let _ = write!(&mut s, "{:?}", d);
    s
}
