//! Diagram configuration.
//!
//! The defaults reproduce the classic editor: states are named `q0`, `q1`,
//! ..., labels are at most three characters, and new transitions accept `a`.
//!
//! # Example
//!
//! ```rust
//! use fsm_diagram::config::DiagramConfigBuilder;
//!
//! let config = DiagramConfigBuilder::new()
//!     .default_prefix("s")
//!     .max_label_len(4)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.default_name(7), "s7");
//! ```

pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PREFIX: &str = "q";
pub const DEFAULT_MAX_LABEL_LEN: usize = 3;
pub const DEFAULT_ACCEPT: &str = "a";

/// Settings shared by the registries of one diagram.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Prefix of synthesized state names. Names starting with it are reserved.
    pub default_prefix: String,

    /// Longest valid state name, in characters
    pub max_label_len: usize,

    /// Accept set given to newly created transitions
    pub default_accept: String,
}

impl DiagramConfig {
    /// Name synthesized for a state with the given index.
    pub fn default_name(&self, state_index: u32) -> String {
        format!("{}{}", self.default_prefix, state_index)
    }

    /// Check the rules [`DiagramConfigBuilder::build`] enforces. A config
    /// deserialized from a host file or snapshot has skipped them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        if self.max_label_len == 0 {
            return Err(ConfigError::ZeroLabelLength);
        }
        if self.default_accept.is_empty() {
            return Err(ConfigError::EmptyDefaultAccept);
        }
        Ok(())
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            default_prefix: DEFAULT_PREFIX.to_string(),
            max_label_len: DEFAULT_MAX_LABEL_LEN,
            default_accept: DEFAULT_ACCEPT.to_string(),
        }
    }
}

/// Builder for [`DiagramConfig`]
pub struct DiagramConfigBuilder {
    config: DiagramConfig,
}

impl DiagramConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: DiagramConfig::default(),
        }
    }

    /// Set the reserved default-name prefix
    pub fn default_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.default_prefix = prefix.into();
        self
    }

    /// Set the maximum label length
    pub fn max_label_len(mut self, len: usize) -> Self {
        self.config.max_label_len = len;
        self
    }

    /// Set the accept set of new transitions
    pub fn default_accept(mut self, accept: impl Into<String>) -> Self {
        self.config.default_accept = accept.into();
        self
    }

    pub fn build(self) -> Result<DiagramConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for DiagramConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_classic_editor() {
        let config = DiagramConfig::default();
        assert_eq!(config.default_prefix, "q");
        assert_eq!(config.max_label_len, 3);
        assert_eq!(config.default_accept, "a");
        assert_eq!(config.default_name(12), "q12");
    }

    #[test]
    fn builder_rejects_empty_prefix() {
        let result = DiagramConfigBuilder::new().default_prefix("").build();
        assert_eq!(result, Err(ConfigError::EmptyPrefix));
    }

    #[test]
    fn builder_rejects_zero_label_length() {
        let result = DiagramConfigBuilder::new().max_label_len(0).build();
        assert_eq!(result, Err(ConfigError::ZeroLabelLength));
    }

    #[test]
    fn builder_rejects_empty_default_accept() {
        let result = DiagramConfigBuilder::new().default_accept("").build();
        assert_eq!(result, Err(ConfigError::EmptyDefaultAccept));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: DiagramConfig = serde_json::from_str(r#"{"default_prefix":"n"}"#).unwrap();
        assert_eq!(config.default_prefix, "n");
        assert_eq!(config.max_label_len, 3);
        assert_eq!(config.default_accept, "a");
    }

    #[test]
    fn deserialized_config_can_be_invalid() {
        let config: DiagramConfig =
            serde_json::from_str(r#"{"default_prefix":"","max_label_len":0}"#).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::EmptyPrefix));

        let config: DiagramConfig = serde_json::from_str(r#"{"max_label_len":0}"#).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::ZeroLabelLength));

        assert!(DiagramConfig::default().validate().is_ok());
    }
}
