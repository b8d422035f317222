use crate::log_debug;

use super::board::BoardState;
use super::types::{GameResult, Mark};

pub const SCORE_MIN: i32 = i32::MIN;
pub const SCORE_MAX: i32 = i32::MAX;

const WIN_SCORE: i32 = 10;

/// Score of a finished game from O's point of view. Every move O needed is
/// subtracted, so quicker wins and slower losses score higher.
pub fn terminal_score(state: &BoardState) -> i32 {
    let base = match state.result() {
        GameResult::XWins => -WIN_SCORE,
        GameResult::OWins => WIN_SCORE,
        GameResult::Draw | GameResult::Undecided => 0,
    };
    base - state.moves_by_o() as i32
}

/// Value of `state` with O maximizing and X minimizing, searched to the end
/// of the game with alpha-beta pruning.
pub fn minimax(state: &BoardState, mut alpha: i32, mut beta: i32) -> i32 {
    if state.is_terminal() {
        return terminal_score(state);
    }

    let moves = state.empty_cells();

    match state.turn() {
        Mark::O => {
            for index in moves {
                let child = state.place(index);
                alpha = alpha.max(minimax(&child, alpha, beta));
                if beta <= alpha {
                    break;
                }
            }
            alpha
        }
        Mark::X => {
            for index in moves {
                let child = state.place(index);
                beta = beta.min(minimax(&child, alpha, beta));
                if beta <= alpha {
                    break;
                }
            }
            beta
        }
    }
}

/// Score of every move available to O, in ascending cell order. Each child is
/// searched with a full window.
pub fn move_scores(state: &BoardState) -> Vec<(usize, i32)> {
    state
        .empty_cells()
        .into_iter()
        .map(|index| {
            let child = state.place(index);
            (index, minimax(&child, SCORE_MIN, SCORE_MAX))
        })
        .collect()
}

/// Best cell for O. Ties go to the lowest index.
///
/// # Panics
///
/// If it is not O's turn or the game is already decided.
pub fn best_move(state: &BoardState) -> usize {
    assert_eq!(state.turn(), Mark::O, "engine asked to move for X");
    assert!(!state.is_terminal(), "engine asked to move on a finished game");

    let scores = move_scores(state);

    let mut chosen = None;
    let mut best_score = SCORE_MIN;

    for &(index, score) in &scores {
        if chosen.is_none() || score > best_score {
            best_score = score;
            chosen = Some(index);
        }
    }

    let Some(index) = chosen else {
        unreachable!("undecided state has an empty cell");
    };

    log_debug!(
        "Engine scores {:?}, picking cell {} ({})",
        scores,
        index,
        best_score
    );

    index
}
