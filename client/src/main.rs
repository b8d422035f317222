mod client_error;
mod config;
mod input;
mod match_runner;
mod render;

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use common::GameError;
use common::logger::{self, LogLevel};
use common::log;
use common::tictactoe::GameController;

use client_error::ClientError;
use config::{Config, get_config_manager, get_config_path};
use match_runner::{run_match, select_mode};
use render::result_label;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a friend or an unbeatable engine")]
struct Args {
    /// YAML config file; defaults to tictactoe_config.yaml next to the executable.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log engine decisions as well as match events.
    #[arg(long)]
    verbose: bool,
}

fn init_logging(args: &Args, config: &Config) -> io::Result<()> {
    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    let level = if args.verbose || config.logging.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    match &config.logging.file {
        Some(path) => logger::init_file_logger(prefix, level, Path::new(path)),
        None => {
            logger::init_logger(prefix, level);
            Ok(())
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(get_config_path);
    let config = get_config_manager(&config_path).get_config()?;
    init_logging(&args, &config)?;
    log!("Loaded config from {}", config_path);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let mode = match select_mode(&mut input, &mut output, &config.display) {
        Ok(mode) => mode,
        Err(
            err @ (ClientError::Game(GameError::InvalidMode(_))
            | ClientError::InvalidSelection(_)
            | ClientError::InputClosed),
        ) => {
            log!("Aborting startup: {}", err);
            writeln!(output, "\n\nINVALID TRY AGAIN\n")?;
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    let mut controller = GameController::new();
    controller.start(mode)?;

    let result = run_match(&mut controller, &mut input, &mut output, &config.display)?;
    log!("Game over: {}", result_label(result));

    Ok(ExitCode::SUCCESS)
}
