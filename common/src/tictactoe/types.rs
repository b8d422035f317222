use std::fmt;

use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_cell(&self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameResult {
    #[default]
    Undecided,
    XWins,
    OWins,
    Draw,
}

impl GameResult {
    pub fn is_terminal(&self) -> bool {
        *self != GameResult::Undecided
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::XWins => Some(Mark::X),
            GameResult::OWins => Some(Mark::O),
            GameResult::Undecided | GameResult::Draw => None,
        }
    }

    pub(crate) fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::X => GameResult::XWins,
            Mark::O => GameResult::OWins,
        }
    }
}

/// Lifecycle of a match, coarser than [`GameResult`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    AwaitingMode,
    Running,
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    HumanVsEngine,
    HumanVsHuman,
}

impl GameMode {
    pub fn is_single_player(&self) -> bool {
        *self == GameMode::HumanVsEngine
    }
}

/// Menu selection: `1` plays against the engine, `2` against another human.
impl TryFrom<i64> for GameMode {
    type Error = GameError;

    fn try_from(selection: i64) -> Result<Self, Self::Error> {
        match selection {
            1 => Ok(GameMode::HumanVsEngine),
            2 => Ok(GameMode::HumanVsHuman),
            other => Err(GameError::InvalidMode(other)),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::HumanVsEngine => write!(f, "human vs engine"),
            GameMode::HumanVsHuman => write!(f, "human vs human"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selection_accepts_one_and_two() {
        assert_eq!(GameMode::try_from(1), Ok(GameMode::HumanVsEngine));
        assert_eq!(GameMode::try_from(2), Ok(GameMode::HumanVsHuman));
    }

    #[test]
    fn test_mode_selection_rejects_everything_else() {
        for selection in [-1, 0, 3, 9, i64::MAX] {
            assert_eq!(
                GameMode::try_from(selection),
                Err(GameError::InvalidMode(selection))
            );
        }
    }

    #[test]
    fn test_opponent_flips_mark() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_only_decided_results_are_terminal() {
        assert!(!GameResult::Undecided.is_terminal());
        assert!(GameResult::XWins.is_terminal());
        assert!(GameResult::OWins.is_terminal());
        assert!(GameResult::Draw.is_terminal());
        assert_eq!(GameResult::Draw.winner(), None);
        assert_eq!(GameResult::OWins.winner(), Some(Mark::O));
    }
}
