//! Remote deep validation for markup no local rule recognises.
//!
//! DESIGN
//! ======
//! Asks the LLM for a strict `{"is_valid", "feedback"}` JSON object and trusts
//! whatever it says. Every failure fails open: missing credentials, non-200
//! status, transport or parse errors, and timeouts all yield an accepted
//! verdict whose feedback names the reason. Nothing is retried.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::{FallbackCheck, Verdict};
use crate::config::ValidatorConfig;
use crate::llm::{ChatRequest, LlmChat, LlmError, Message};

/// Why a deep check could not be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    ApiKeyMissing,
    ApiError,
    Exception,
    Timeout,
}

impl SkipReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ApiKeyMissing => "API key missing",
            Self::ApiError => "API error",
            Self::Exception => "exception",
            Self::Timeout => "timeout",
        }
    }

    fn from_llm_error(e: &LlmError) -> Self {
        match e {
            LlmError::ApiResponse { .. } => Self::ApiError,
            LlmError::Timeout => Self::Timeout,
            _ => Self::Exception,
        }
    }
}

/// Accepted verdict for a deep check that could not run.
#[must_use]
pub fn fail_open(reason: SkipReason) -> Verdict {
    Verdict::pass(format!("Could not perform deep validation ({})", reason.as_str()))
}

#[derive(Debug, Deserialize)]
struct RemoteVerdict {
    is_valid: bool,
    feedback: String,
}

/// [`FallbackCheck`] backed by an LLM. Disabled when built without a client.
pub struct RemoteChecker {
    llm: Option<Arc<dyn LlmChat>>,
    config: ValidatorConfig,
}

impl RemoteChecker {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>, config: ValidatorConfig) -> Self {
        Self { llm, config }
    }

    /// Checker with no client; every call fails open as "API key missing".
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(None, ValidatorConfig::default())
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.llm.is_some()
    }

    async fn ask(&self, llm: &dyn LlmChat, markup: &str) -> Result<Verdict, SkipReason> {
        let request = ChatRequest {
            system: String::new(),
            messages: vec![Message::user(build_prompt(markup))],
            max_tokens: self.config.max_tokens,
            temperature: Some(0.0),
            json_object: true,
        };

        let response = llm.chat(&request).await.map_err(|e| {
            let reason = SkipReason::from_llm_error(&e);
            warn!(error = %e, code = e.error_code(), reason = reason.as_str(), "validate: deep check failed");
            reason
        })?;

        let remote = parse_remote_verdict(&response.text).map_err(|e| {
            warn!(error = %e, "validate: deep check reply was not a verdict");
            SkipReason::Exception
        })?;
        info!(
            valid = remote.valid,
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "validate: deep check complete"
        );
        Ok(remote)
    }
}

#[async_trait::async_trait]
impl FallbackCheck for RemoteChecker {
    async fn check(&self, markup: &str) -> Verdict {
        let Some(llm) = self.llm.as_deref() else {
            debug!("validate: no LLM configured, skipping deep check");
            return fail_open(SkipReason::ApiKeyMissing);
        };

        match tokio::time::timeout(self.config.timeout, self.ask(llm, markup)).await {
            Ok(Ok(verdict)) => verdict,
            Ok(Err(reason)) => fail_open(reason),
            Err(_) => {
                warn!(timeout_secs = self.config.timeout.as_secs_f64(), "validate: deep check timed out");
                fail_open(SkipReason::Timeout)
            }
        }
    }
}

fn build_prompt(markup: &str) -> String {
    format!(
        "Validate if the following Mermaid diagram code is syntactically correct.\n\
         Return ONLY a JSON object with two fields:\n\
         1. \"is_valid\": a boolean (true/false)\n\
         2. \"feedback\": a string with validation feedback\n\
         \n\
         Mermaid code:\n\
         ```\n\
         {markup}\n\
         ```"
    )
}

fn parse_remote_verdict(text: &str) -> Result<Verdict, serde_json::Error> {
    let remote: RemoteVerdict = serde_json::from_str(text.trim())?;
    Ok(Verdict { valid: remote.is_valid, feedback: remote.feedback })
}

#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;
