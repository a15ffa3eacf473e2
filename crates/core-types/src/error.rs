// In crates/core-types/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown trading strategy: {0}")]
    UnknownStrategy(String),

    #[error("Unknown trader: {0}")]
    UnknownTrader(String),

    #[error("Failed to emit trade message: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
