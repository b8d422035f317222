use thiserror::Error;

use crate::tictactoe::Mark;

/// Why a move was rejected. The board is never modified by a rejected move.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("cell {0} is outside the board (expected 0..=8)")]
    OutOfRange(usize),

    #[error("cell {0} is already occupied")]
    Occupied(usize),

    #[error("it is {expected}'s turn, not {attempted}'s")]
    WrongTurn { expected: Mark, attempted: Mark },

    #[error("the game is already over")]
    GameOver,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid mode selection {0} (expected 1 or 2)")]
    InvalidMode(i64),

    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),

    /// Contract violation by the caller, not a game event.
    #[error("illegal invocation: {0}")]
    IllegalInvocation(&'static str),

    #[error("invalid position: {0}")]
    InvalidPosition(String),
}
