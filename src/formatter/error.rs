use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatterError {
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
