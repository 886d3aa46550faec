use thiserror::Error;

use crate::formatter::FormatterError;

/// Errors from the surfaces around the tokenizer. Tokenizing itself cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Format error: {0}")]
    Format(#[from] FormatterError),
}

pub type InternalResult<T> = Result<T, Error>;
