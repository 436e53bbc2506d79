use mnk_game::board::{Board, Cell};
use mnk_game::util::game_stats;

pub fn perft_main(cases: Vec<(Board, Vec<u64>)>) {
    for (board, expected_perfts) in cases {
        println!("Testing perft on {} (win {})", board.compact(), board.win_length());
        println!("{}", board);

        for (depth, &expected_perft) in expected_perfts.iter().enumerate() {
            let perft = game_stats::perft(&board, Cell::Opponent, depth as u32);
            println!("   depth {} -> {} =? {}", depth, expected_perft, perft);
            assert_eq!(expected_perft, perft)
        }
    }
}

#[test]
fn ttt() {
    perft_main(vec![(
        Board::new(3, 3),
        vec![1, 9, 72, 504, 3024, 15120, 54720, 148176, 200448, 127872],
    )]);
}

#[test]
fn no_early_wins() {
    // no line can be completed in the first 2 * win_length - 2 moves, so these are plain falling factorials
    perft_main(vec![
        (Board::with_win_length(3, 4, 3).unwrap(), vec![1, 12, 132, 1320, 11880]),
        (Board::new(4, 4), vec![1, 16, 240, 3360, 43680, 524160]),
    ]);
}

#[test]
fn done_board() {
    let board: Board = "OOO/XX./...".parse().unwrap();
    perft_main(vec![(board, vec![1, 0, 0])]);
}
