//! # Letter and Digit Runs
//!
//! Letters and digits are read greedily: a run keeps going until the first character
//! of another class, so `abc123` is one letters token and one digits token. Both
//! classes are ASCII-only. Anything no other parser accepts is read here as a
//! single-character [`TokenKind::Unrecognized`](super::token::TokenKind::Unrecognized)
//! token, which makes tokenization total.

use nom::{
    bytes::complete::take_while1,
    character::complete::anychar,
    combinator::{map, recognize},
    error::context,
};

use super::token::{ParserResult, Token};

/// `A`-`Z` or `a`-`z`.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// `0`-`9`.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Parses the longest run of ASCII letters at the start of `input`.
///
/// # Examples
///
/// ```
/// # use basic_tokenizer::tokenizer::run::parse_letters;
/// # use basic_tokenizer::tokenizer::token::Token;
/// let (rest, token) = parse_letters("abc123").unwrap();
/// assert_eq!(token, Token::letters("abc"));
/// assert_eq!(rest, "123");
/// ```
pub fn parse_letters(input: &str) -> ParserResult<'_, Token<'_>> {
    context("letters", map(take_while1(is_letter), Token::letters))(input)
}

/// Parses the longest run of ASCII digits at the start of `input`.
pub fn parse_digits(input: &str) -> ParserResult<'_, Token<'_>> {
    context("digits", map(take_while1(is_digit), Token::digits))(input)
}

/// Reads exactly one character, whatever it is. Fails only on empty input.
pub fn parse_unrecognized(input: &str) -> ParserResult<'_, Token<'_>> {
    context(
        "unrecognized character",
        map(recognize(anychar), Token::unrecognized),
    )(input)
}
