//! Token listings for people and tools.
//!
//! [`FormatterVisitor`] drains a [`Tokenizer`](crate::tokenizer::Tokenizer) and renders
//! each token as a text line or a JSON object, depending on [`FormatterConfig`].

pub mod config;
pub mod error;
pub mod visitor;

pub use config::{FormatterConfig, OutputFormat};
pub use error::FormatterError;
pub use visitor::FormatterVisitor;
