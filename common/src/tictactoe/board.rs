use std::fmt;
use std::str::FromStr;

use crate::error::{GameError, InvalidMove};

use super::types::{Cell, GameResult, Mark};
use super::win_detector::{CELL_COUNT, check_win_with_line, classify, has_line};

pub const BOARD_SIZE: usize = 3;

/// Snapshot of a 3x3 game. Successors are independent copies, so search
/// branches never share storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardState {
    cells: [Cell; CELL_COUNT],
    turn: Mark,
    moves_by_o: u32,
    result: GameResult,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
            turn: Mark::X,
            moves_by_o: 0,
            result: GameResult::Undecided,
        }
    }

    /// Builds a position from raw cells, deriving whose turn it is from the
    /// mark counts. Positions no game can reach are rejected: both players
    /// holding a line, or a move played after a line was completed.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Result<Self, GameError> {
        let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = cells.iter().filter(|&&c| c == Cell::O).count();

        let turn = match x_count.checked_sub(o_count) {
            Some(0) => Mark::X,
            Some(1) => Mark::O,
            _ => {
                return Err(GameError::InvalidPosition(format!(
                    "X={}, O={} (X must equal O or lead by one)",
                    x_count, o_count
                )));
            }
        };

        let x_won = has_line(&cells, Mark::X);
        let o_won = has_line(&cells, Mark::O);
        if x_won && o_won {
            return Err(GameError::InvalidPosition(
                "both X and O have a line".to_string(),
            ));
        }
        // The winner must have made the last move.
        if (x_won && turn != Mark::O) || (o_won && turn != Mark::X) {
            let winner = if x_won { Mark::X } else { Mark::O };
            return Err(GameError::InvalidPosition(format!(
                "{} has a line but {} moved afterwards",
                winner,
                winner.opponent()
            )));
        }

        Ok(Self {
            cells,
            turn,
            moves_by_o: o_count as u32,
            result: classify(&cells),
        })
    }

    /// Places `mark` at `index` and hands the turn to the other player.
    /// The receiver is left untouched; a rejected move changes nothing.
    pub fn apply_move(&self, index: usize, mark: Mark) -> Result<BoardState, GameError> {
        if self.result.is_terminal() {
            return Err(InvalidMove::GameOver.into());
        }
        if index >= CELL_COUNT {
            return Err(InvalidMove::OutOfRange(index).into());
        }
        if !self.cells[index].is_empty() {
            return Err(InvalidMove::Occupied(index).into());
        }
        if mark != self.turn {
            return Err(InvalidMove::WrongTurn {
                expected: self.turn,
                attempted: mark,
            }
            .into());
        }

        Ok(self.place(index))
    }

    /// Unchecked successor used by the search, which only ever visits empty
    /// cells of undecided states.
    pub(crate) fn place(&self, index: usize) -> BoardState {
        let mut next = *self;
        next.cells[index] = self.turn.to_cell();
        next.result = classify(&next.cells);
        next.advance_turn()
    }

    pub(crate) fn advance_turn(mut self) -> BoardState {
        if self.turn == Mark::O {
            self.moves_by_o += 1;
        }
        self.turn = self.turn.opponent();
        self
    }

    /// Ascending order; the search relies on it for tie-breaking.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn evaluate_terminal(&self) -> (bool, GameResult) {
        let result = classify(&self.cells);
        (result.is_terminal(), result)
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        check_win_with_line(&self.cells).map(|(_, line)| line)
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn moves_by_o(&self) -> u32 {
        self.moves_by_o
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_terminal(&self) -> bool {
        self.result.is_terminal()
    }
}

/// Accepts `X`, `O` and `.`, `-` or `E` for empty cells. Whitespace and `/`
/// are ignored, so `"XX./OO./..."` is a valid board.
impl FromStr for BoardState {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;

        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let cell = match ch.to_ascii_uppercase() {
                'X' => Cell::X,
                'O' => Cell::O,
                '.' | '-' | 'E' => Cell::Empty,
                other => {
                    return Err(GameError::InvalidPosition(format!(
                        "unexpected character '{}' in '{}'",
                        other, s
                    )));
                }
            };
            if count == CELL_COUNT {
                return Err(GameError::InvalidPosition(format!(
                    "more than {} cells in '{}'",
                    CELL_COUNT, s
                )));
            }
            cells[count] = cell;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(GameError::InvalidPosition(format!(
                "expected {} cells, got {} in '{}'",
                CELL_COUNT, count, s
            )));
        }

        Self::from_cells(cells)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::X => 'X',
                    Cell::O => 'O',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
