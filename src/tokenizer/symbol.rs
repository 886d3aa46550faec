//! # Symbol Token Handling
//!
//! The seventeen punctuation characters (brackets, quotes, slashes and friends) each map
//! to exactly one fixed [`Token`]. Every symbol is a single character, so there is no
//! longest-match ordering to worry about.

use nom::{character::complete::one_of, combinator::map_opt, error::context};

use super::token::{classify_char, ParserResult, Token};

/// Every character [`parse_symbol`] accepts.
pub const SYMBOLS: &str = "{}[]()_.-+,:'\"\\/*";

/// Parses one punctuation character into its fixed token.
///
/// # Examples
///
/// ```
/// # use basic_tokenizer::tokenizer::symbol::parse_symbol;
/// # use basic_tokenizer::tokenizer::token::COLON;
/// let (rest, token) = parse_symbol(": 42").unwrap();
/// assert_eq!(token, COLON);
/// assert_eq!(rest, " 42");
/// ```
pub fn parse_symbol(input: &str) -> ParserResult<'_, Token<'_>> {
    context(
        "symbol",
        map_opt(one_of(SYMBOLS), |c| Token::fixed(classify_char(c))),
    )(input)
}
