use common::tictactoe::{BOARD_SIZE, BoardState, Cell, GameController, GameResult, Status};

use crate::config::{DisplayConfig, MIN_SCREEN_WIDTH};

const BANNER: [&str; 6] = [
    "████████╗██╗ ██████╗    ████████╗ █████╗  ██████╗    ████████╗ ██████╗ ███████╗",
    "╚══██╔══╝██║██╔════╝    ╚══██╔══╝██╔══██╗██╔════╝    ╚══██╔══╝██╔═══██╗██╔════╝",
    "   ██║   ██║██║            ██║   ███████║██║            ██║   ██║   ██║█████╗  ",
    "   ██║   ██║██║            ██║   ██╔══██║██║            ██║   ██║   ██║██╔══╝  ",
    "   ██║   ██║╚██████╗       ██║   ██║  ██║╚██████╗       ██║   ╚██████╔╝███████╗",
    "   ╚═╝   ╚═╝ ╚═════╝       ╚═╝   ╚═╝  ╚═╝ ╚═════╝       ╚═╝    ╚═════╝ ╚══════╝",
];

const GRID_PADDING: &str = "               ";
const ROW_DIVIDER: &str = "-----------";

pub const INPUT_PROMPT: &str = "INPUT: ";

pub fn result_label(result: GameResult) -> &'static str {
    match result {
        GameResult::XWins => "X-WON",
        GameResult::OWins => "O-WON",
        GameResult::Draw => "DRAW",
        GameResult::Undecided => "DNF",
    }
}

pub fn clear_screen(display: &DisplayConfig) -> String {
    if display.clear_screen {
        "\n".repeat(display.clear_lines)
    } else {
        String::new()
    }
}

pub fn render_menu(display: &DisplayConfig) -> String {
    let mut out = border(display);
    for line in BANNER {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("Choose an opponent\n");
    out.push_str("1 -> SINGLE PLAYER MODE\n");
    out.push_str("2 -> TWO PLAYER MODE\n");
    out.push_str(&border(display));
    out.push('\n');
    out.push_str(INPUT_PROMPT);
    out.push('\n');
    out
}

/// Full screen for a started match. `notice` is shown under the board,
/// typically why the last input was rejected.
pub fn render_match(
    controller: &GameController,
    display: &DisplayConfig,
    notice: Option<&str>,
) -> String {
    let board = controller.current_board();
    let mut out = border(display);

    let mode_line = if controller.is_single_player() {
        "SINGLE PLAYER GAME"
    } else {
        "TWO PLAYER GAME"
    };
    out.push_str(mode_line);
    out.push('\n');

    match controller.result() {
        Some(result) => {
            out.push_str(&format!("GAME OVER : {}\n", result_label(result)));
            out.push_str(&render_grid(board, false, board.winning_line()));
        }
        None => {
            out.push_str(&format!("{}'s turn\n", controller.turn()));
            out.push_str(&render_grid(board, display.show_cell_hints, None));
        }
    }

    out.push_str(&border(display));
    if let Some(notice) = notice {
        out.push_str(notice);
        out.push('\n');
    }
    if controller.status() == Status::Running && !controller.is_engine_turn_pending() {
        out.push('\n');
        out.push_str(INPUT_PROMPT);
        out.push('\n');
    }
    out
}

/// Cells of `highlight` are bracketed, e.g. `[X]`.
pub fn render_grid(board: &BoardState, show_hints: bool, highlight: Option<[usize; 3]>) -> String {
    let mut out = String::new();

    for row in 0..BOARD_SIZE {
        out.push_str(GRID_PADDING);
        for col in 0..BOARD_SIZE {
            let index = row * BOARD_SIZE + col;
            let symbol = match board.cells()[index] {
                Cell::X => 'X',
                Cell::O => 'O',
                Cell::Empty if show_hints => char::from_digit(index as u32, 10).unwrap_or(' '),
                Cell::Empty => ' ',
            };
            if col > 0 {
                out.push('|');
            }
            if highlight.is_some_and(|line| line.contains(&index)) {
                out.push_str(&format!("[{}]", symbol));
            } else {
                out.push_str(&format!(" {} ", symbol));
            }
        }
        out.push('\n');
        if row + 1 < BOARD_SIZE {
            out.push_str(GRID_PADDING);
            out.push_str(ROW_DIVIDER);
            out.push('\n');
        }
    }

    out
}

/// Never narrower than the banner, even for an unvalidated config.
fn border(display: &DisplayConfig) -> String {
    let mut line = "=".repeat(display.screen_width.max(MIN_SCREEN_WIDTH));
    line.push('\n');
    line
}
