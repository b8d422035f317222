use super::types::{Cell, GameResult, Mark};

pub const CELL_COUNT: usize = 9;

/// Checked in this order: rows, columns, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Cell; CELL_COUNT]) -> Option<Mark> {
    check_win_with_line(cells).map(|(mark, _)| mark)
}

pub fn check_win_with_line(cells: &[Cell; CELL_COUNT]) -> Option<(Mark, [usize; 3])> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = cells[a].mark()?;
        if cells[b] == cells[a] && cells[c] == cells[a] {
            Some((mark, line))
        } else {
            None
        }
    })
}

/// Whether `mark` holds any complete line, regardless of the other player.
pub fn has_line(cells: &[Cell; CELL_COUNT], mark: Mark) -> bool {
    let cell = mark.to_cell();
    LINES
        .iter()
        .any(|line| line.iter().all(|&index| cells[index] == cell))
}

pub fn classify(cells: &[Cell; CELL_COUNT]) -> GameResult {
    if let Some(mark) = check_win(cells) {
        return GameResult::won_by(mark);
    }

    if cells.iter().all(|cell| !cell.is_empty()) {
        GameResult::Draw
    } else {
        GameResult::Undecided
    }
}
