//! Validator and generator settings parsed from environment variables.
//!
//! Read once at startup and passed by value into the components that need
//! them. LLM provider settings live in [`crate::llm::config`].

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_VALIDATION_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_VALIDATION_MAX_TOKENS: u32 = 300;
pub const DEFAULT_GENERATION_MAX_TOKENS: u32 = 1000;

/// Settings for the remote deep-validation fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Deadline for the whole remote call; expiry fails open.
    pub timeout: Duration,
    pub max_tokens: u32,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_VALIDATION_TIMEOUT_SECS),
            max_tokens: DEFAULT_VALIDATION_MAX_TOKENS,
        }
    }
}

impl ValidatorConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// - `VALIDATION_TIMEOUT_SECS`: default 5
    /// - `VALIDATION_MAX_TOKENS`: default 300
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            timeout: Duration::from_secs(parse_or(&lookup, "VALIDATION_TIMEOUT_SECS", DEFAULT_VALIDATION_TIMEOUT_SECS)),
            max_tokens: parse_or(&lookup, "VALIDATION_MAX_TOKENS", DEFAULT_VALIDATION_MAX_TOKENS),
        }
    }
}

/// Settings for markup generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub max_tokens: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { max_tokens: DEFAULT_GENERATION_MAX_TOKENS }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// - `GENERATION_MAX_TOKENS`: default 1000
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self { max_tokens: parse_or(&lookup, "GENERATION_MAX_TOKENS", DEFAULT_GENERATION_MAX_TOKENS) }
    }
}

/// Process environment lookup; unset and non-UTF-8 values read as absent.
pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse `key` through `lookup`, falling back to `default` when absent or
/// unparseable.
pub(crate) fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
