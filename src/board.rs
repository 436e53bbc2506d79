use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use nom::Finish;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::minimax::terminal_state;
use crate::error::{BoardDone, ConfigError, ParseBoardError, PlayError};
use crate::order::MoveOrder;

/// The state of a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    Empty,
    /// The human side, minimizing in the search.
    Player,
    /// The automated side, maximizing in the search.
    Opponent,
}

/// The absolute outcome for a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    /// Won by either [Cell::Player] or [Cell::Opponent], never [Cell::Empty].
    WonBy(Cell),
    Draw,
}

/// A `(row, col)` coordinate on a board, also used as the move type.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// A rectangular grid of cells together with its win length.
///
/// A row or column wins only when it is completely filled with one mark. The win length
/// decides which diagonal segments count: those at least that long, again only when full.
///
/// The dimensions are fixed at construction. Boards are plain values:
/// cloning produces a fully independent grid, which is how the search explores children.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    win_length: usize,
    cells: Vec<Cell>,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The opposing mark. Panics for [Cell::Empty], which has no opposing side.
    pub fn other(self) -> Cell {
        match self {
            Cell::Player => Cell::Opponent,
            Cell::Opponent => Cell::Player,
            Cell::Empty => panic!("Cell::Empty has no opposing side"),
        }
    }

    /// `1` if `self == pov`, `-1` otherwise.
    pub fn sign<V: num_traits::One + std::ops::Neg<Output = V>>(self, pov: Cell) -> V {
        if self == pov {
            V::one()
        } else {
            -V::one()
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Player => 'X',
            Cell::Opponent => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Player),
            'O' | 'o' => Some(Cell::Opponent),
            _ => None,
        }
    }
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl Board {
    /// Create an empty board where a line of `min(rows, cols)` marks wins.
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Board dimensions must be positive, got {}x{}", rows, cols);
        Board {
            rows,
            cols,
            win_length: rows.min(cols),
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Create an empty board with an explicit win length in `1..=max(rows, cols)`.
    pub fn with_win_length(rows: usize, cols: usize, win_length: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::InvalidDimensions { rows, cols });
        }
        let max = rows.max(cols);
        if win_length == 0 || win_length > max {
            return Err(ConfigError::InvalidWinLength {
                length: win_length,
                max,
            });
        }

        let mut board = Board::new(rows, cols);
        board.win_length = win_length;
        Ok(board)
    }

    /// Parse the text form of a board (see [FromStr]) with an explicit win length.
    pub fn parse_with_win_length(s: &str, win_length: usize) -> Result<Self, ParseBoardError> {
        let parsed: Board = s.parse()?;
        let mut board = Board::with_win_length(parsed.rows, parsed.cols, win_length)
            .map_err(|e| ParseBoardError::WinLength(e.to_string()))?;
        board.cells = parsed.cells;
        Ok(board)
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn index(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "Coord {} out of bounds for {}x{} board",
            coord,
            self.rows,
            self.cols
        );
        coord.row * self.cols + coord.col
    }

    /// Reset every cell to [Cell::Empty], keeping the dimensions and win length.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Panics if `coord` is out of bounds.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[self.index(coord)]
    }

    /// Overwrite a single cell without any game rule checks, see [Board::play] for that.
    /// Panics if `coord` is out of bounds.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        let index = self.index(coord);
        self.cells[index] = cell;
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows).cartesian_product(0..cols).map(|(row, col)| Coord::new(row, col))
    }

    /// The empty coordinates in row-major order.
    pub fn empty_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(move |&coord| self.get(coord).is_empty())
    }

    /// All empty coordinates, permuted by `order`.
    ///
    /// With [ShuffleOrder](crate::order::ShuffleOrder) every permutation is equally likely,
    /// this is what breaks ties between equally good moves in the search.
    pub fn empty_cells(&self, order: &mut impl MoveOrder) -> Vec<Coord> {
        let mut moves = self.empty_coords().collect_vec();
        order.permute(&mut moves);
        moves
    }

    /// Pick a uniformly random empty cell.
    pub fn random_empty_cell(&self, rng: &mut impl Rng) -> Result<Coord, BoardDone> {
        if self.is_done() {
            return Err(BoardDone);
        }
        let moves = self.empty_coords().collect_vec();
        // the board is not done, so there is at least one empty cell
        moves.choose(rng).copied().ok_or(BoardDone)
    }

    /// The mark to move next in a game opened by `first`, assuming the marks alternate.
    pub fn next_mark(&self, first: Cell) -> Cell {
        if self.count(first) == self.count(first.other()) {
            first
        } else {
            first.other()
        }
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn outcome(&self) -> Option<Outcome> {
        terminal_state(self).outcome()
    }

    pub fn is_done(&self) -> bool {
        terminal_state(self).is_terminal
    }

    /// Whether `coord` is a legal move on this board.
    pub fn is_available_move(&self, coord: Coord) -> Result<bool, BoardDone> {
        if self.is_done() {
            return Err(BoardDone);
        }
        Ok(self.contains(coord) && self.get(coord).is_empty())
    }

    /// Place `mark` on `coord`, checking the game rules.
    pub fn play(&mut self, coord: Coord, mark: Cell) -> Result<(), PlayError> {
        if mark.is_empty() {
            return Err(PlayError::EmptyMark);
        }
        if !self.contains(coord) {
            return Err(PlayError::OutOfBounds(coord));
        }
        if !self.is_available_move(coord)? {
            return Err(PlayError::Occupied(coord));
        }

        self.set(coord, mark);
        Ok(())
    }

    /// Clone this board and play `mark` at `coord` on the copy.
    pub fn clone_and_play(&self, coord: Coord, mark: Cell) -> Result<Board, PlayError> {
        let mut next = self.clone();
        next.play(coord, mark)?;
        Ok(next)
    }

    /// The single-line text form, rows separated by `/`.
    pub fn compact(&self) -> String {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.to_char()).collect::<String>())
            .join("/")
    }
}

mod parse {
    use nom::branch::alt;
    use nom::bytes::complete::tag;
    use nom::character::complete::anychar;
    use nom::combinator::{eof, map_opt};
    use nom::multi::{many1, separated_list1};
    use nom::sequence::terminated;
    use nom::IResult;

    use super::Cell;

    fn cell(input: &str) -> IResult<&str, Cell> {
        map_opt(anychar, Cell::from_char)(input)
    }

    fn separator(input: &str) -> IResult<&str, &str> {
        alt((tag("/"), tag("\r\n"), tag("\n")))(input)
    }

    pub(super) fn grid(input: &str) -> IResult<&str, Vec<Vec<Cell>>> {
        terminated(separated_list1(separator, many1(cell)), eof)(input)
    }
}

/// Parses rows of `.`, `X` and `O` separated by `/` or newlines, for example `"X../.O./..X"`.
/// The win length is set to `min(rows, cols)`, use [Board::parse_with_win_length] to pick another one.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grid = match parse::grid(s.trim()).finish() {
            Ok((_, grid)) => grid,
            Err(e) => return Err(ParseBoardError::Syntax(e.input.to_string())),
        };

        let expected = grid[0].len();
        if let Some((row, r)) = grid.iter().find_position(|r| r.len() != expected) {
            return Err(ParseBoardError::Ragged {
                row,
                len: r.len(),
                expected,
            });
        }

        let mut board = Board::new(grid.len(), expected);
        board.cells = grid.into_iter().flatten().collect();
        Ok(board)
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
