//! # basic-tokenizer
//!
//! A character-level lexer that turns any string into a lazily produced sequence of
//! classified tokens: punctuation, whitespace and line breaks, runs of ASCII letters,
//! runs of ASCII digits, and a single-character catch-all for everything else.
//!
//! The token stream is lossless (the token texts concatenate back to the input) and
//! total (no input makes tokenization fail).
//!
//! * [`tokenizer`]: tokens and the [`Tokenizer`](tokenizer::Tokenizer) cursor
//! * [`formatter`]: text and JSON token listings
//! * [`config`]: JSON configuration for the `basic-tokenizer` binary
//! * [`error`]: errors of the I/O, config and formatting surfaces

pub mod config;
pub mod error;
pub mod formatter;
pub mod tokenizer;

// Re-exports
pub use error::*;
pub use tokenizer::{tokenize, Token, TokenKind, Tokenizer};

#[cfg(test)]
mod tests {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    #[ctor::ctor]
    fn init_tests() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }
}
