use std::io::{BufRead, Write};

use common::tictactoe::{GameController, GameMode, GameResult, Status};
use common::{GameError, log_debug};

use crate::client_error::ClientError;
use crate::config::DisplayConfig;
use crate::input::{parse_number, read_line};
use crate::render::{clear_screen, render_match, render_menu};

/// Shows the title menu and reads the opponent choice.
pub fn select_mode<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    display: &DisplayConfig,
) -> Result<GameMode, ClientError> {
    write!(output, "{}{}", clear_screen(display), render_menu(display))?;
    output.flush()?;

    let line = read_line(input)?.ok_or(ClientError::InputClosed)?;
    let selection = parse_number(&line).ok_or(ClientError::InvalidSelection(line))?;
    Ok(GameMode::try_from(selection)?)
}

/// Drives a started match until it ends: render, then either let the engine
/// move or read a cell from `input`. Rejected moves are reported and asked
/// for again.
pub fn run_match<R: BufRead, W: Write>(
    controller: &mut GameController,
    input: &mut R,
    output: &mut W,
    display: &DisplayConfig,
) -> Result<GameResult, ClientError> {
    let mut notice: Option<String> = None;

    loop {
        write!(
            output,
            "{}{}",
            clear_screen(display),
            render_match(controller, display, notice.as_deref())
        )?;
        output.flush()?;

        match controller.status() {
            Status::Ended => {
                return controller.result().ok_or(ClientError::Game(
                    GameError::IllegalInvocation("ended match without a result"),
                ));
            }
            Status::AwaitingMode => {
                return Err(GameError::IllegalInvocation("match loop entered before start").into());
            }
            Status::Running => {}
        }

        if controller.is_engine_turn_pending() {
            controller.apply_engine_move()?;
            notice = None;
            continue;
        }

        let line = read_line(input)?.ok_or(ClientError::InputClosed)?;
        let Some(number) = parse_number(&line) else {
            log_debug!("Ignoring non-numeric input {:?}", line);
            notice = Some(format!("'{}' is not a cell number", line.trim()));
            continue;
        };

        let Ok(index) = usize::try_from(number) else {
            notice = Some(format!("cell {} is outside the board (expected 0..=8)", number));
            continue;
        };

        notice = match controller.apply_human_move(index) {
            Ok(()) => None,
            Err(GameError::InvalidMove(reason)) => Some(reason.to_string()),
            Err(err) => return Err(err.into()),
        };
    }
}
