use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: \"root\" is reserved and cannot be used as an item")]
    ReservedItem { line: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
