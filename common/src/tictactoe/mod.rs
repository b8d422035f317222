mod board;
mod bot_controller;
mod game_controller;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, BoardState};
pub use bot_controller::{SCORE_MAX, SCORE_MIN, best_move, minimax, move_scores, terminal_score};
pub use game_controller::GameController;
pub use types::{Cell, GameMode, GameResult, Mark, Status};
pub use win_detector::{CELL_COUNT, LINES, check_win, check_win_with_line, has_line};
