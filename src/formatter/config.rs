use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::tokenizer::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KIND<TAB>TEXT` line per token.
    #[default]
    Text,
    /// A JSON array of token objects.
    Json,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormatterConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Prefix each token with its position.
    #[serde(default)]
    pub include_spans: bool,

    /// Kinds left out of the listing.
    #[serde(default)]
    pub skip_kinds: Vec<TokenKind>,

    /// Leave out spaces, tabs and line breaks.
    #[serde(default)]
    pub skip_whitespace: bool,
}

impl FormatterConfig {
    pub fn skips(&self, kind: TokenKind) -> bool {
        (self.skip_whitespace && kind.is_whitespace()) || self.skip_kinds.contains(&kind)
    }
}
