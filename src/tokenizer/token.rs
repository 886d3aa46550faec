//! # Token Types
//!
//! A [`Token`] pairs the exact text it was read from with a [`TokenKind`]. Tokens borrow
//! their text from the tokenized input, so they are cheap to copy and compare by value.
//!
//! The twenty-two kinds with a fixed spelling (punctuation, whitespace, line breaks) are
//! exported once as constants such as [`LEFT_CURLY_BRACKET`]. [`TokenKind::Letters`],
//! [`TokenKind::Digits`] and [`TokenKind::Unrecognized`] are built from the input with
//! [`Token::letters`], [`Token::digits`] and [`Token::unrecognized`].

use std::fmt;

use nom::{error::VerboseError, IResult};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

use super::run::{is_digit, is_letter};

/// The closed set of token categories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
pub enum TokenKind {
    LeftCurlyBracket,
    RightCurlyBracket,
    LeftSquareBracket,
    RightSquareBracket,
    LeftParenthesis,
    RightParenthesis,
    Underscore,
    Period,
    Dash,
    Plus,
    Comma,
    Colon,
    SingleQuote,
    DoubleQuote,
    Backslash,
    ForwardSlash,
    Asterisk,
    Space,
    Tab,
    NewLine,
    CarriageReturn,
    CarriageReturnNewLine,
    /// A maximal run of ASCII letters.
    Letters,
    /// A maximal run of ASCII digits.
    Digits,
    /// Any single character outside the other classes.
    Unrecognized,
}

impl TokenKind {
    /// The fixed spelling of this kind, or `None` for kinds read from the input.
    pub fn literal(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::LeftCurlyBracket => "{",
            TokenKind::RightCurlyBracket => "}",
            TokenKind::LeftSquareBracket => "[",
            TokenKind::RightSquareBracket => "]",
            TokenKind::LeftParenthesis => "(",
            TokenKind::RightParenthesis => ")",
            TokenKind::Underscore => "_",
            TokenKind::Period => ".",
            TokenKind::Dash => "-",
            TokenKind::Plus => "+",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::SingleQuote => "'",
            TokenKind::DoubleQuote => "\"",
            TokenKind::Backslash => "\\",
            TokenKind::ForwardSlash => "/",
            TokenKind::Asterisk => "*",
            TokenKind::Space => " ",
            TokenKind::Tab => "\t",
            TokenKind::NewLine => "\n",
            TokenKind::CarriageReturn => "\r",
            TokenKind::CarriageReturnNewLine => "\r\n",
            TokenKind::Letters | TokenKind::Digits | TokenKind::Unrecognized => return None,
        };
        Some(text)
    }

    pub fn is_line_break(self) -> bool {
        matches!(
            self,
            TokenKind::NewLine | TokenKind::CarriageReturn | TokenKind::CarriageReturnNewLine
        )
    }

    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Space | TokenKind::Tab) || self.is_line_break()
    }
}

/// One classified fragment of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'a> {
    kind: TokenKind,
    text: &'a str,
}

pub const LEFT_CURLY_BRACKET: Token<'static> = Token::fixed_literal(TokenKind::LeftCurlyBracket, "{");
pub const RIGHT_CURLY_BRACKET: Token<'static> = Token::fixed_literal(TokenKind::RightCurlyBracket, "}");
pub const LEFT_SQUARE_BRACKET: Token<'static> = Token::fixed_literal(TokenKind::LeftSquareBracket, "[");
pub const RIGHT_SQUARE_BRACKET: Token<'static> = Token::fixed_literal(TokenKind::RightSquareBracket, "]");
pub const LEFT_PARENTHESIS: Token<'static> = Token::fixed_literal(TokenKind::LeftParenthesis, "(");
pub const RIGHT_PARENTHESIS: Token<'static> = Token::fixed_literal(TokenKind::RightParenthesis, ")");
pub const UNDERSCORE: Token<'static> = Token::fixed_literal(TokenKind::Underscore, "_");
pub const PERIOD: Token<'static> = Token::fixed_literal(TokenKind::Period, ".");
pub const DASH: Token<'static> = Token::fixed_literal(TokenKind::Dash, "-");
pub const PLUS: Token<'static> = Token::fixed_literal(TokenKind::Plus, "+");
pub const COMMA: Token<'static> = Token::fixed_literal(TokenKind::Comma, ",");
pub const COLON: Token<'static> = Token::fixed_literal(TokenKind::Colon, ":");
pub const SINGLE_QUOTE: Token<'static> = Token::fixed_literal(TokenKind::SingleQuote, "'");
pub const DOUBLE_QUOTE: Token<'static> = Token::fixed_literal(TokenKind::DoubleQuote, "\"");
pub const BACKSLASH: Token<'static> = Token::fixed_literal(TokenKind::Backslash, "\\");
pub const FORWARD_SLASH: Token<'static> = Token::fixed_literal(TokenKind::ForwardSlash, "/");
pub const ASTERISK: Token<'static> = Token::fixed_literal(TokenKind::Asterisk, "*");
pub const SPACE: Token<'static> = Token::fixed_literal(TokenKind::Space, " ");
pub const TAB: Token<'static> = Token::fixed_literal(TokenKind::Tab, "\t");
pub const NEW_LINE: Token<'static> = Token::fixed_literal(TokenKind::NewLine, "\n");
pub const CARRIAGE_RETURN: Token<'static> = Token::fixed_literal(TokenKind::CarriageReturn, "\r");
pub const CARRIAGE_RETURN_NEW_LINE: Token<'static> =
    Token::fixed_literal(TokenKind::CarriageReturnNewLine, "\r\n");

impl<'a> Token<'a> {
    const fn fixed_literal(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    /// The shared constant for a fixed-spelling kind.
    pub fn fixed(kind: TokenKind) -> Option<Token<'static>> {
        kind.literal()
            .map(|text| Token::fixed_literal(kind, text))
    }

    pub fn letters(text: &'a str) -> Self {
        debug_assert!(!text.is_empty() && text.chars().all(is_letter));
        Self {
            kind: TokenKind::Letters,
            text,
        }
    }

    pub fn digits(text: &'a str) -> Self {
        debug_assert!(!text.is_empty() && text.chars().all(is_digit));
        Self {
            kind: TokenKind::Digits,
            text,
        }
    }

    pub fn unrecognized(text: &'a str) -> Self {
        debug_assert_eq!(text.chars().count(), 1);
        Self {
            kind: TokenKind::Unrecognized,
            text,
        }
    }

    /// Pairs `kind` with `text`, or returns `None` if the pair could never be produced
    /// by the tokenizer.
    pub fn checked(kind: TokenKind, text: &'a str) -> Option<Self> {
        if let Some(literal) = kind.literal() {
            return (literal == text).then_some(Self { kind, text });
        }

        let valid = match kind {
            TokenKind::Letters => !text.is_empty() && text.chars().all(is_letter),
            TokenKind::Digits => !text.is_empty() && text.chars().all(is_digit),
            TokenKind::Unrecognized => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => classify_char(c) == TokenKind::Unrecognized,
                    _ => false,
                }
            }
            _ => false,
        };
        valid.then_some(Self { kind, text })
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Number of characters (Unicode scalar values) in the token text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// The kind a token starting with `c` would have. `\r` reports
/// [`TokenKind::CarriageReturn`] since the following character is not known here.
pub fn classify_char(c: char) -> TokenKind {
    match c {
        '{' => TokenKind::LeftCurlyBracket,
        '}' => TokenKind::RightCurlyBracket,
        '[' => TokenKind::LeftSquareBracket,
        ']' => TokenKind::RightSquareBracket,
        '(' => TokenKind::LeftParenthesis,
        ')' => TokenKind::RightParenthesis,
        '_' => TokenKind::Underscore,
        '.' => TokenKind::Period,
        '-' => TokenKind::Dash,
        '+' => TokenKind::Plus,
        ',' => TokenKind::Comma,
        ':' => TokenKind::Colon,
        '\'' => TokenKind::SingleQuote,
        '"' => TokenKind::DoubleQuote,
        '\\' => TokenKind::Backslash,
        '/' => TokenKind::ForwardSlash,
        '*' => TokenKind::Asterisk,
        ' ' => TokenKind::Space,
        '\t' => TokenKind::Tab,
        '\n' => TokenKind::NewLine,
        '\r' => TokenKind::CarriageReturn,
        c if is_letter(c) => TokenKind::Letters,
        c if is_digit(c) => TokenKind::Digits,
        _ => TokenKind::Unrecognized,
    }
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;
