use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{formatter::FormatterConfig, Error, InternalResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default)]
    pub formatter: FormatterConfig,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            formatter: FormatterConfig::default(),
        }
    }
}

impl ToolConfig {
    /// Loads `path`, or the defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            from_file(path)
        } else {
            tracing::debug!("config file {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let file = File::open(path)
        .map_err(|e| Error::Config(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_log_filter() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::{formatter::OutputFormat, tokenizer::TokenKind};

    #[test]
    fn test_defaults_from_empty_object() {
        let config: ToolConfig = from_str("{}").unwrap();
        assert_eq!(config, ToolConfig::default());
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.formatter.format, OutputFormat::Text);
    }

    #[test]
    fn test_full_config() {
        let config: ToolConfig = from_str(
            r#"{
                "log_filter": "basic_tokenizer=trace",
                "formatter": {
                    "format": "json",
                    "include_spans": true,
                    "skip_kinds": ["Space", "CarriageReturnNewLine"]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.log_filter, "basic_tokenizer=trace");
        assert_eq!(config.formatter.format, OutputFormat::Json);
        assert!(config.formatter.include_spans);
        assert_eq!(
            config.formatter.skip_kinds,
            vec![TokenKind::Space, TokenKind::CarriageReturnNewLine]
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result: InternalResult<ToolConfig> =
            from_str(r#"{"formatter": {"skip_kinds": ["Semicolon"]}}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"formatter": {{"include_spans": true}}}}"#).unwrap();

        let config = ToolConfig::load_or_default(file.path()).unwrap();
        assert!(config.formatter.include_spans);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ToolConfig::load_or_default(dir.path().join("missing.json")).unwrap();
        assert_eq!(config, ToolConfig::default());
    }
}
