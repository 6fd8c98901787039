//! # Terminal Configuration
//!
//! Settings a register host applies when it creates a terminal.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`GROCERY_*`)
//! 2. JSON document handed over by the host
//! 3. Defaults (this file)
//!
//! Configuration is read once when the terminal is built; changing it later
//! means building a new terminal.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_terminal_code;

/// Environment variable overriding [`TerminalConfig::terminal_code`].
pub const ENV_TERMINAL_CODE: &str = "GROCERY_TERMINAL_CODE";

/// Environment variable overriding [`TerminalConfig::duplicate_codes`].
/// Accepts `reject` or `first_match_wins`.
pub const ENV_DUPLICATE_CODES: &str = "GROCERY_DUPLICATE_CODES";

/// What a terminal does with a catalog that repeats a product code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicateCodePolicy {
    /// `set_catalog` fails with `CoreError::DuplicateCode`.
    #[default]
    Reject,

    /// The catalog is accepted and lookups return the first match.
    FirstMatchWins,
}

impl DuplicateCodePolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reject" => Some(DuplicateCodePolicy::Reject),
            "first_match_wins" | "firstmatchwins" => Some(DuplicateCodePolicy::FirstMatchWins),
            _ => None,
        }
    }
}

/// Terminal configuration.
///
/// Every field has a default, so `{}` is a valid document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TerminalConfig {
    /// Label printed on receipts, e.g. "LANE-01".
    pub terminal_code: Option<String>,

    /// Handling of repeated product codes in a catalog.
    pub duplicate_codes: DuplicateCodePolicy,
}

impl TerminalConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::config::{DuplicateCodePolicy, TerminalConfig};
    ///
    /// let config = TerminalConfig::from_json_str(
    ///     r#"{"terminalCode":"LANE-01","duplicateCodes":"firstMatchWins"}"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(config.terminal_code.as_deref(), Some("LANE-01"));
    /// assert_eq!(config.duplicate_codes, DuplicateCodePolicy::FirstMatchWins);
    /// ```
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let config: TerminalConfig =
            serde_json::from_str(json).map_err(|e| CoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `GROCERY_*` environment variables on top of this config.
    pub fn with_env_overrides(self) -> CoreResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key/value source on top of this config.
    ///
    /// Unknown duplicate policies are a configuration error rather than
    /// being silently ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(code) = lookup(ENV_TERMINAL_CODE) {
            debug!(terminal_code = %code, "Terminal code overridden");
            self.terminal_code = Some(code);
        }

        if let Some(raw) = lookup(ENV_DUPLICATE_CODES) {
            self.duplicate_codes = DuplicateCodePolicy::parse(&raw).ok_or_else(|| {
                CoreError::Config(format!("{ENV_DUPLICATE_CODES} has unknown value '{raw}'"))
            })?;
        }

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> CoreResult<()> {
        if let Some(code) = &self.terminal_code {
            validate_terminal_code(code)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TerminalConfig::default();
        assert_eq!(config.terminal_code, None);
        assert_eq!(config.duplicate_codes, DuplicateCodePolicy::Reject);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = TerminalConfig::from_json_str("{}").unwrap();
        assert_eq!(config, TerminalConfig::default());
    }

    #[test]
    fn test_malformed_document_is_config_error() {
        let err = TerminalConfig::from_json_str("{\"duplicateCodes\":\"sometimes\"}").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_blank_terminal_code_is_rejected() {
        let err = TerminalConfig::from_json_str(r#"{"terminalCode":"  "}"#).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_overrides() {
        let config = TerminalConfig::default()
            .with_overrides(|key| match key {
                ENV_TERMINAL_CODE => Some("LANE-07".to_string()),
                ENV_DUPLICATE_CODES => Some("first_match_wins".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.terminal_code.as_deref(), Some("LANE-07"));
        assert_eq!(config.duplicate_codes, DuplicateCodePolicy::FirstMatchWins);
    }

    #[test]
    fn test_unknown_policy_override_is_rejected() {
        let err = TerminalConfig::default()
            .with_overrides(|key| (key == ENV_DUPLICATE_CODES).then(|| "maybe".to_string()))
            .unwrap_err();

        assert!(matches!(err, CoreError::Config(_)));
    }
}
