use crate::error::{GameError, InvalidMove};
use crate::log;

use super::board::BoardState;
use super::bot_controller::best_move;
use super::types::{GameMode, GameResult, Mark, Status};

/// Owns the live match. Created in `AwaitingMode`; moves only forward
/// through `Running` to `Ended`.
#[derive(Debug)]
pub struct GameController {
    board: BoardState,
    mode: Option<GameMode>,
    status: Status,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    pub fn new() -> Self {
        Self {
            board: BoardState::new(),
            mode: None,
            status: Status::AwaitingMode,
        }
    }

    pub fn start(&mut self, mode: GameMode) -> Result<(), GameError> {
        if self.status != Status::AwaitingMode {
            return Err(GameError::IllegalInvocation("match already started"));
        }

        self.mode = Some(mode);
        self.board = BoardState::new();
        self.status = Status::Running;
        log!("Match started ({})", mode);
        Ok(())
    }

    pub fn apply_human_move(&mut self, index: usize) -> Result<(), GameError> {
        let mode = self.running_mode()?;
        if mode == GameMode::HumanVsEngine && self.board.turn() == Mark::O {
            return Err(GameError::IllegalInvocation(
                "human move submitted on the engine's turn",
            ));
        }

        let mark = self.board.turn();
        self.board = self.board.apply_move(index, mark)?;
        log!("{} played cell {}", mark, index);
        self.settle();
        Ok(())
    }

    /// Lets the engine play O. Returns the chosen cell.
    pub fn apply_engine_move(&mut self) -> Result<usize, GameError> {
        if !self.is_engine_turn_pending() {
            return Err(GameError::IllegalInvocation(
                "engine move requested when it is not the engine's turn",
            ));
        }

        let index = best_move(&self.board);
        self.board = self.board.apply_move(index, Mark::O)?;
        log!("Engine played cell {}", index);
        self.settle();
        Ok(index)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn current_board(&self) -> &BoardState {
        &self.board
    }

    pub fn turn(&self) -> Mark {
        self.board.turn()
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn is_single_player(&self) -> bool {
        self.mode.is_some_and(|mode| mode.is_single_player())
    }

    pub fn is_engine_turn_pending(&self) -> bool {
        self.status == Status::Running && self.is_single_player() && self.board.turn() == Mark::O
    }

    /// `Some` only once the match has ended.
    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            Status::Ended => Some(self.board.result()),
            Status::AwaitingMode | Status::Running => None,
        }
    }

    fn running_mode(&self) -> Result<GameMode, GameError> {
        match (self.status, self.mode) {
            (Status::Running, Some(mode)) => Ok(mode),
            (Status::Ended, _) => Err(InvalidMove::GameOver.into()),
            _ => Err(GameError::IllegalInvocation("move submitted before start")),
        }
    }

    fn settle(&mut self) {
        let (is_terminal, result) = self.board.evaluate_terminal();
        if is_terminal {
            self.status = Status::Ended;
            match result.winner() {
                Some(mark) => log!("Match ended: {} wins", mark),
                None => log!("Match ended in a draw"),
            }
        }
    }
}
