//! Line views over a [Board]: rows, columns and the two diagonal families.
//!
//! Lines are derived on demand and never stored. For an `R x C` board the diagonal
//! families each have `R + C - 1` segments before filtering:
//! * [Diagonal::Descending] segment `s` reads the cells with `row + col == s`, top to bottom.
//! * [Diagonal::Ascending] segment `s` reads the same traversal on the board with its columns
//!     mirrored, so it contains the cells with constant `row - col`.
use std::ops::ControlFlow;

use internal_iterator::InternalIterator;
use itertools::Itertools;

use crate::board::{Board, Cell, Coord};
use crate::error::ConfigError;

/// One of the two diagonal directions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Diagonal {
    Descending,
    Ascending,
}

/// An ordered sequence of cells read along a row, column or diagonal.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Line {
    cells: Vec<Cell>,
}

impl Diagonal {
    pub const BOTH: [Diagonal; 2] = [Diagonal::Descending, Diagonal::Ascending];
}

impl Line {
    pub fn new(cells: Vec<Cell>) -> Self {
        Line { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The mark filling this entire line, if any.
    pub fn winner(&self) -> Option<Cell> {
        let first = *self.cells.first()?;
        if first != Cell::Empty && self.cells.iter().all(|&c| c == first) {
            Some(first)
        } else {
            None
        }
    }
}

impl Board {
    fn line_at(&self, coords: impl Iterator<Item = Coord>) -> Line {
        Line::new(coords.map(|c| self.get(c)).collect())
    }

    /// The rows, each read left to right.
    pub fn rows(&self) -> Vec<Line> {
        (0..self.row_count())
            .map(|row| self.line_at((0..self.col_count()).map(|col| Coord::new(row, col))))
            .collect()
    }

    /// The columns, each read top to bottom.
    pub fn columns(&self) -> Vec<Line> {
        (0..self.col_count())
            .map(|col| self.line_at((0..self.row_count()).map(|row| Coord::new(row, col))))
            .collect()
    }

    /// The coordinates of diagonal segment `s` in the given direction.
    pub fn diagonal_coords(&self, direction: Diagonal, s: usize) -> impl Iterator<Item = Coord> {
        let (rows, cols) = (self.row_count(), self.col_count());
        assert!(s < rows + cols - 1, "Diagonal segment {} out of bounds", s);

        let start = s.saturating_sub(cols - 1);
        let end = s.min(rows - 1);
        (start..=end).map(move |row| {
            let col = s - row;
            match direction {
                Diagonal::Descending => Coord::new(row, col),
                Diagonal::Ascending => Coord::new(row, cols - 1 - col),
            }
        })
    }

    /// All `R + C - 1` diagonal segments in `direction`, including the short corner ones.
    pub fn all_diagonals(&self, direction: Diagonal) -> Vec<Line> {
        (0..self.row_count() + self.col_count() - 1)
            .map(|s| self.line_at(self.diagonal_coords(direction, s)))
            .collect()
    }

    /// The diagonal segments in `direction` that are at least `min_length` cells long.
    /// `min_length` must be in `1..=max(rows, cols)`.
    pub fn diagonals(&self, direction: Diagonal, min_length: usize) -> Result<Vec<Line>, ConfigError> {
        let max = self.row_count().max(self.col_count());
        if min_length == 0 || min_length > max {
            return Err(ConfigError::InvalidLineLength {
                length: min_length,
                max,
            });
        }

        Ok(self
            .all_diagonals(direction)
            .into_iter()
            .filter(|line| line.len() >= min_length)
            .collect_vec())
    }

    /// All lines that can hold a win, in scan order:
    /// rows, columns, descending diagonals, ascending diagonals.
    /// Diagonals shorter than the win length are skipped.
    pub fn lines(&self) -> Lines<'_> {
        Lines { board: self }
    }
}

/// Internal iterator over [Board::lines], building each line only when it is reached.
#[derive(Debug)]
pub struct Lines<'a> {
    board: &'a Board,
}

impl<'a> InternalIterator for Lines<'a> {
    type Item = Line;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        let board = self.board;
        let (rows, cols) = (board.row_count(), board.col_count());

        for row in 0..rows {
            f(board.line_at((0..cols).map(|col| Coord::new(row, col))))?;
        }
        for col in 0..cols {
            f(board.line_at((0..rows).map(|row| Coord::new(row, col))))?;
        }
        for direction in Diagonal::BOTH {
            for s in 0..rows + cols - 1 {
                let line = board.line_at(board.diagonal_coords(direction, s));
                if line.len() >= board.win_length() {
                    f(line)?;
                }
            }
        }

        ControlFlow::Continue(())
    }
}
