//! # Whitespace Token Handling
//!
//! Whitespace is never discarded: every space, tab and line break becomes its own token
//! so the input can be rebuilt exactly from the token stream.
//!
//! ## Line Endings
//!
//! `\r\n` is tried before a lone `\r`, so a Windows line ending is always read as one
//! [`TokenKind::CarriageReturnNewLine`](super::token::TokenKind::CarriageReturnNewLine)
//! token. A `\r` followed by anything else (or by the end of input) is a
//! [`CARRIAGE_RETURN`] on its own and the next character is left for the next token.
//! Runs of spaces are not merged; each space is one token.

use nom::{
    branch::alt, bytes::complete::tag, character::complete::char, combinator::value,
    error::context,
};

use super::token::{ParserResult, Token, CARRIAGE_RETURN, CARRIAGE_RETURN_NEW_LINE, NEW_LINE, SPACE, TAB};

/// Parses a single space, tab or line break.
///
/// # Examples
///
/// ```
/// # use basic_tokenizer::tokenizer::whitespace::parse_whitespace;
/// # use basic_tokenizer::tokenizer::token::CARRIAGE_RETURN_NEW_LINE;
/// let (rest, token) = parse_whitespace("\r\nnext").unwrap();
/// assert_eq!(token, CARRIAGE_RETURN_NEW_LINE);
/// assert_eq!(rest, "next");
/// ```
pub fn parse_whitespace(input: &str) -> ParserResult<'_, Token<'_>> {
    context(
        "whitespace",
        alt((
            value(SPACE, char(' ')),
            value(TAB, char('\t')),
            parse_line_break,
        )),
    )(input)
}

/// Parses `\n`, `\r\n` or a lone `\r`.
pub fn parse_line_break(input: &str) -> ParserResult<'_, Token<'_>> {
    context(
        "line break",
        alt((
            value(NEW_LINE, char('\n')),
            value(CARRIAGE_RETURN_NEW_LINE, tag("\r\n")),
            value(CARRIAGE_RETURN, char('\r')),
        )),
    )(input)
}
