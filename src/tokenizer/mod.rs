//! # Tokenizer Component
//!
//! Character-level lexical analysis: any string becomes a sequence of classified
//! [`Token`]s. The tokenizer knows nothing about the grammar of what it reads; it only
//! recognizes punctuation, whitespace, line breaks, letter runs and digit runs.
//!
//! ## Design Principles
//!
//! * **Lossless**: concatenating the text of every token rebuilds the input exactly.
//! * **Total**: every character maps to some token. Characters outside the known
//!   classes become single-character [`TokenKind::Unrecognized`] tokens, so
//!   tokenization never fails.
//! * **Lazy**: tokens are produced one per [`Tokenizer::advance`] call.
//!
//! ## Component Structure
//!
//! * [`token`]: [`Token`], [`TokenKind`] and the fixed token constants
//! * [`symbol`]: punctuation parsing
//! * [`whitespace`]: spaces, tabs and line endings
//! * [`run`]: letter runs, digit runs and the unrecognized fallback
//! * [`cursor`]: the [`Tokenizer`] state machine
//!
//! ## Usage Example
//!
//! ```rust
//! use basic_tokenizer::tokenizer::{tokenize, Token, TokenKind};
//!
//! let tokens = tokenize("foo_bar: 42\r\n");
//! assert_eq!(tokens[0], Token::letters("foo"));
//! assert_eq!(tokens[6].kind(), TokenKind::CarriageReturnNewLine);
//!
//! let rebuilt: String = tokens.iter().map(Token::text).collect();
//! assert_eq!(rebuilt, "foo_bar: 42\r\n");
//! ```

pub mod cursor;
pub mod run;
pub mod symbol;
pub mod token;
pub mod whitespace;

pub use cursor::{tokenize, Span, State, Tokenizer};
pub use token::{Token, TokenKind};
