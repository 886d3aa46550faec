use std::fmt::Write as _;

use serde::Serialize;

use crate::formatter::config::{FormatterConfig, OutputFormat};
use crate::formatter::error::FormatterError;
use crate::tokenizer::{Span, Token, TokenKind, Tokenizer};

#[derive(Debug, Serialize)]
struct TokenEntry<'a> {
    kind: TokenKind,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    span: Option<Span>,
}

pub struct FormatterVisitor {
    config: FormatterConfig,
    output: String,
}

impl FormatterVisitor {
    pub fn new(config: FormatterConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// Drains `tokenizer` and renders every token not listed in
    /// [`FormatterConfig::skip_kinds`].
    #[tracing::instrument(level = "debug", skip(self, tokenizer), fields(format = %self.config.format))]
    pub fn format_tokens(&mut self, tokenizer: &mut Tokenizer<'_>) -> Result<String, FormatterError> {
        self.output.clear();
        let mut entries = Vec::new();
        let mut skipped = 0usize;

        while tokenizer.advance() {
            let Some(token) = tokenizer.current() else {
                break;
            };
            if self.config.skips(token.kind()) {
                skipped += 1;
                continue;
            }
            let span = tokenizer.current_span().filter(|_| self.config.include_spans);

            match self.config.format {
                OutputFormat::Text => self.write_line(&token, span)?,
                OutputFormat::Json => entries.push(TokenEntry {
                    kind: token.kind(),
                    text: token.text(),
                    span,
                }),
            }
        }

        if self.config.format == OutputFormat::Json {
            self.output = serde_json::to_string_pretty(&entries)?;
            self.output.push('\n');
        }

        tracing::debug!(skipped, "token listing finished");
        Ok(std::mem::take(&mut self.output))
    }

    fn write_line(&mut self, token: &Token<'_>, span: Option<Span>) -> Result<(), FormatterError> {
        if let Some(span) = span {
            write!(self.output, "{}:{}\t", span.line, span.column)?;
        }
        writeln!(self.output, "{}\t{:?}", token.kind(), token.text())?;
        Ok(())
    }
}
