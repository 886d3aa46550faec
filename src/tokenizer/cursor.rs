//! # Tokenizer Cursor
//!
//! [`Tokenizer`] walks its input one token at a time. Callers call
//! [`advance`](Tokenizer::advance) and then read [`current`](Tokenizer::current) until
//! `advance` returns `false`:
//!
//! ```
//! use basic_tokenizer::tokenizer::{Tokenizer, TokenKind};
//!
//! let mut tokenizer = Tokenizer::new("foo: 42");
//! let mut kinds = Vec::new();
//! while tokenizer.advance() {
//!     if let Some(token) = tokenizer.current() {
//!         kinds.push(token.kind());
//!     }
//! }
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Letters, TokenKind::Colon, TokenKind::Space, TokenKind::Digits]
//! );
//! ```
//!
//! The cursor moves through three states, see [`State`]. Once exhausted it stays
//! exhausted: further `advance` calls keep returning `false`.

use std::{fmt, iter::FusedIterator};

use nom::branch::alt;
use strum_macros::Display;

use super::{
    run::{parse_digits, parse_letters, parse_unrecognized},
    symbol::parse_symbol,
    token::{ParserResult, Token},
    whitespace::parse_whitespace,
};

/// Parses the next token from `input`. Fails only when `input` is empty.
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_token(input: &str) -> ParserResult<'_, Token<'_>> {
    alt((
        parse_symbol,
        parse_whitespace,
        parse_letters,
        parse_digits,
        // Catch-all, must stay last
        parse_unrecognized,
    ))(input)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum State {
    /// `advance` has not been called yet.
    NotStarted,
    /// The last `advance` produced a token.
    Scanning,
    /// The input is used up. Terminal.
    Exhausted,
}

/// Where a token was found in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// 1-based
    pub line: usize,
    /// 1-based, counted in characters
    pub column: usize,
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line: {}, column: {}, start: {}, end: {}",
            self.line, self.column, self.start, self.end
        )
    }
}

/// A forward-only cursor producing one [`Token`] per [`advance`](Self::advance).
///
/// The input is borrowed for the tokenizer's lifetime and never modified. Tokens
/// borrow from the same input, so they outlive the tokenizer that produced them.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a str,
    offset: usize,
    state: State,
    current: Option<Token<'a>>,
    current_span: Option<Span>,
    line: usize,
    column: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            offset: 0,
            state: State::NotStarted,
            current: None,
            current_span: None,
            line: 1,   // 1-based
            column: 1, // 1-based
        }
    }

    /// Absent input is tokenized as the empty string.
    pub fn from_optional(text: Option<&'a str>) -> Self {
        Self::new(text.unwrap_or_default())
    }

    pub fn has_started(&self) -> bool {
        self.state != State::NotStarted
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The token produced by the last successful [`advance`](Self::advance). `None`
    /// before the first advance and after the input is exhausted.
    pub fn current(&self) -> Option<Token<'a>> {
        self.current
    }

    /// Position of [`current`](Self::current), when there is one.
    pub fn current_span(&self) -> Option<Span> {
        self.current_span
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Moves to the next token. Returns `false` at the end of the input, after which
    /// [`current`](Self::current) is `None`.
    pub fn advance(&mut self) -> bool {
        match self.state {
            State::Exhausted => return false,
            State::NotStarted => {
                tracing::debug!(len = self.text.len(), "tokenizer started");
                self.state = State::Scanning;
            }
            State::Scanning => {}
        }

        let remaining = &self.text[self.offset..];
        if remaining.is_empty() {
            self.finish();
            return false;
        }

        match parse_token(remaining) {
            Ok((rest, token)) => {
                let start = self.offset;
                self.offset = self.text.len() - rest.len();
                let span = Span {
                    start,
                    end: self.offset,
                    line: self.line,
                    column: self.column,
                };
                self.update_position(&token);

                tracing::trace!(kind = %token.kind(), text = ?token.text(), %span, "token");
                self.current = Some(token);
                self.current_span = Some(span);
                true
            }
            Err(e) => {
                // Unreachable while parse_unrecognized accepts any character.
                tracing::error!("no token could be read at offset {}: {:?}", self.offset, e);
                self.finish();
                false
            }
        }
    }

    fn finish(&mut self) {
        if self.state != State::Exhausted {
            tracing::debug!(line = self.line, "tokenizer exhausted");
        }
        self.state = State::Exhausted;
        self.current = None;
        self.current_span = None;
    }

    fn update_position(&mut self, token: &Token<'_>) {
        if token.kind().is_line_break() {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += token.char_len();
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            self.current
        } else {
            None
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Drains a fresh [`Tokenizer`] over `text`.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    Tokenizer::new(text).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tokenizer::token::{
        TokenKind, CARRIAGE_RETURN, CARRIAGE_RETURN_NEW_LINE, COLON, SPACE, UNDERSCORE,
    };

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text).iter().map(Token::kind).collect()
    }

    #[test]
    fn test_lifecycle() {
        let mut tokenizer = Tokenizer::new("a");
        assert!(!tokenizer.has_started());
        assert_eq!(tokenizer.state(), State::NotStarted);
        assert_eq!(tokenizer.current(), None);

        assert!(tokenizer.advance());
        assert!(tokenizer.has_started());
        assert_eq!(tokenizer.state(), State::Scanning);
        assert_eq!(tokenizer.current(), Some(Token::letters("a")));

        assert!(!tokenizer.advance());
        assert_eq!(tokenizer.state(), State::Exhausted);
        assert_eq!(tokenizer.current(), None);
        assert_eq!(tokenizer.current_span(), None);
        assert!(tokenizer.has_started());
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let mut tokenizer = Tokenizer::new("x1");
        while tokenizer.advance() {}
        for _ in 0..3 {
            assert!(!tokenizer.advance());
            assert_eq!(tokenizer.current(), None);
            assert_eq!(tokenizer.offset(), 2);
        }
    }

    #[test]
    fn test_empty_and_absent_input() {
        let mut tokenizer = Tokenizer::new("");
        assert!(!tokenizer.advance());
        assert!(tokenizer.has_started());
        assert_eq!(tokenizer.current(), None);
        assert!(!tokenizer.advance());
        assert_eq!(tokenizer.state(), State::Exhausted);
        assert_eq!(tokenizer.current(), None);
        assert_eq!(tokenizer.offset(), 0);

        let mut tokenizer = Tokenizer::from_optional(None);
        assert!(!tokenizer.advance());
        assert_eq!(tokenizer.state(), State::Exhausted);

        let mut tokenizer = Tokenizer::from_optional(Some("{"));
        assert!(tokenizer.advance());
    }

    #[test]
    fn test_greedy_runs() {
        assert_eq!(
            tokenize("abc123"),
            vec![Token::letters("abc"), Token::digits("123")]
        );
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(tokenize("\r\n"), vec![CARRIAGE_RETURN_NEW_LINE]);
        assert_eq!(
            tokenize("\rX"),
            vec![CARRIAGE_RETURN, Token::letters("X")]
        );
        assert_eq!(tokenize("\r"), vec![CARRIAGE_RETURN]);
        assert_eq!(
            kinds("\r\r\n\n"),
            vec![
                TokenKind::CarriageReturn,
                TokenKind::CarriageReturnNewLine,
                TokenKind::NewLine
            ]
        );
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(tokenize("@"), vec![Token::unrecognized("@")]);
        assert_eq!(
            kinds("a;é"),
            vec![
                TokenKind::Letters,
                TokenKind::Unrecognized,
                TokenKind::Unrecognized
            ]
        );
    }

    #[test]
    fn test_mixed_scenario() {
        assert_eq!(
            tokenize("foo_bar: 42\r\n"),
            vec![
                Token::letters("foo"),
                UNDERSCORE,
                Token::letters("bar"),
                COLON,
                SPACE,
                Token::digits("42"),
                CARRIAGE_RETURN_NEW_LINE,
            ]
        );
    }

    #[test]
    fn test_spans() {
        let mut tokenizer = Tokenizer::new("ab cd\r\nxé1");
        let mut spans = Vec::new();
        while tokenizer.advance() {
            spans.push(tokenizer.current_span().unwrap());
        }

        let positions: Vec<_> = spans
            .iter()
            .map(|s| (s.start, s.end, s.line, s.column))
            .collect();
        assert_eq!(
            positions,
            vec![
                (0, 2, 1, 1),  // ab
                (2, 3, 1, 3),  // space
                (3, 5, 1, 4),  // cd
                (5, 7, 1, 6),  // \r\n
                (7, 8, 2, 1),  // x
                (8, 10, 2, 2), // é
                (10, 11, 2, 3), // 1
            ]
        );
    }

    #[test]
    fn test_lone_carriage_return_ends_line() {
        let mut tokenizer = Tokenizer::new("a\rb");
        tokenizer.advance();
        tokenizer.advance();
        tokenizer.advance();
        let span = tokenizer.current_span().unwrap();
        assert_eq!((span.line, span.column), (2, 1));
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut tokenizer = Tokenizer::new("1");
        assert_eq!(tokenizer.next(), Some(Token::digits("1")));
        assert_eq!(tokenizer.next(), None);
        assert_eq!(tokenizer.next(), None);
    }

    #[test]
    fn test_tokens_outlive_tokenizer() {
        let input = String::from("key: value");
        let token = {
            let mut tokenizer = Tokenizer::new(&input);
            tokenizer.advance();
            tokenizer.current().unwrap()
        };
        assert_eq!(token.text(), "key");
    }

    #[test]
    fn test_parse_token_fails_only_on_empty_input() {
        assert!(parse_token("").is_err());
        for input in ["{", " ", "\r", "a", "7", "\u{0}", "🦀"] {
            assert!(parse_token(input).is_ok(), "input {:?}", input);
        }
    }
}
