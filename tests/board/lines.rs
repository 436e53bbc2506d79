use internal_iterator::InternalIterator;
use itertools::Itertools;

use mnk_game::board::{Board, Cell, Coord};
use mnk_game::lines::Diagonal;

fn chars(cells: &[Cell]) -> String {
    cells.iter().map(|c| c.to_char()).collect()
}

#[test]
fn scan_order_5x5() {
    let board = Board::new(5, 5);
    let lens = board.lines().map(|l| l.len()).collect::<Vec<_>>();

    // only the two main diagonals are long enough to hold a win
    assert_eq!(lens, vec![5; 5 + 5 + 2]);

    let board = Board::with_win_length(5, 5, 4).unwrap();
    assert_eq!(board.lines().count(), 5 + 5 + 3 + 3);
}

#[test]
fn first_complete_line_in_scan_order() {
    // column 4 and a short descending diagonal are both complete, the column is scanned first
    let board = Board::parse_with_win_length("..X.O/.X..O/X...O/....O", 3).unwrap();
    assert_eq!(board.lines().find_map(|l| l.winner()), Some(Cell::Opponent));

    let board = Board::parse_with_win_length("..X.O/.X..O/X...O/.....", 3).unwrap();
    assert_eq!(board.lines().find_map(|l| l.winner()), Some(Cell::Player));
}

#[test]
fn diagonal_coords_tall_board() {
    // a b
    // c d
    // e f
    let board = Board::new(3, 2);

    let descending = (0..4)
        .map(|s| board.diagonal_coords(Diagonal::Descending, s).collect_vec())
        .collect_vec();
    assert_eq!(
        descending,
        vec![
            vec![Coord::new(0, 0)],
            vec![Coord::new(0, 1), Coord::new(1, 0)],
            vec![Coord::new(1, 1), Coord::new(2, 0)],
            vec![Coord::new(2, 1)],
        ]
    );

    let ascending = (0..4)
        .map(|s| board.diagonal_coords(Diagonal::Ascending, s).collect_vec())
        .collect_vec();
    assert_eq!(
        ascending,
        vec![
            vec![Coord::new(0, 1)],
            vec![Coord::new(0, 0), Coord::new(1, 1)],
            vec![Coord::new(1, 0), Coord::new(2, 1)],
            vec![Coord::new(2, 0)],
        ]
    );
}

#[test]
fn line_views_read_the_board() {
    let board: Board = "XO./.X./O.X".parse().unwrap();
    let rows = board.rows().iter().map(|l| chars(l.cells())).collect_vec();
    assert_eq!(rows, vec!["XO.", ".X.", "O.X"]);

    let descending = board.diagonals(Diagonal::Descending, 3).unwrap();
    assert_eq!(descending.iter().map(|l| chars(l.cells())).collect_vec(), vec![".XO"]);

    let ascending = board.diagonals(Diagonal::Ascending, 3).unwrap();
    assert_eq!(ascending.iter().map(|l| chars(l.cells())).collect_vec(), vec!["XXX"]);
}
