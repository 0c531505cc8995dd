//! Filter configuration: which sender counts as the mobile-money service and
//! which body phrases mark a transaction.
//!
//! Loaded from a JSON file such as:
//!
//! ```json
//! { "sender": "M-Money", "keywords": ["transferred to", "payment of", "received"] }
//! ```
//!
//! Either key may be omitted; omitted keys take the built-in defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sender identifier used when none is configured.
pub const DEFAULT_SENDER: &str = "M-Money";

/// Body phrases used when none are configured.
pub const DEFAULT_KEYWORDS: [&str; 3] = ["transferred to", "payment of", "received"];

/// Sender identifier and trigger phrases for classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Exact, case-sensitive sender identifier.
    #[serde(default = "default_sender")]
    pub sender: String,

    /// Phrases matched case-insensitively against the message body.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

fn default_sender() -> String {
    DEFAULT_SENDER.to_string()
}

fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            sender: default_sender(),
            keywords: default_keywords(),
        }
    }
}

impl FilterConfig {
    /// Creates a config from a sender and a set of keywords.
    pub fn new<I, S>(sender: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterConfig {
            sender: sender.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads and validates a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        let config: FilterConfig =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: display,
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configs that could never match or would match every body.
    ///
    /// The sender is not trimmed: whitespace is part of the identifier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sender.is_empty() {
            return Err(ConfigError::EmptySender);
        }
        if self.keywords.is_empty() {
            return Err(ConfigError::NoKeywords);
        }
        if let Some(pos) = self.keywords.iter().position(|k| k.trim().is_empty()) {
            return Err(ConfigError::BlankKeyword(pos));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = FilterConfig::default();
        assert_eq!(config.sender, "M-Money");
        assert_eq!(
            config.keywords,
            vec!["transferred to", "payment of", "received"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FilterConfig = serde_json::from_str(r#"{"sender":"MTN MoMo"}"#).unwrap();
        assert_eq!(config.sender, "MTN MoMo");
        assert_eq!(config.keywords.len(), 3);
    }

    #[test]
    fn test_validate_rejects_empty_sender() {
        let config = FilterConfig::new("", ["received"]);
        assert!(matches!(config.validate(), Err(ConfigError::EmptySender)));
    }

    #[test]
    fn test_validate_rejects_no_keywords() {
        let config = FilterConfig::new("M-Money", Vec::<String>::new());
        assert!(matches!(config.validate(), Err(ConfigError::NoKeywords)));
    }

    #[test]
    fn test_validate_rejects_blank_keyword() {
        let config = FilterConfig::new("M-Money", ["received", "  "]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BlankKeyword(1))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"sender":"Airtel","keywords":["sent to"]}}"#).unwrap();

        let config = FilterConfig::from_file(file.path()).unwrap();
        assert_eq!(config, FilterConfig::new("Airtel", ["sent to"]));
    }

    #[test]
    fn test_from_file_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = FilterConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = FilterConfig::from_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
