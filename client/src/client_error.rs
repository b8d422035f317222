use common::GameError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{0}' is not a menu option")]
    InvalidSelection(String),

    #[error("input closed unexpectedly")]
    InputClosed,
}
