//! Markup validation: dispatch by diagram kind, then structural checks.
//!
//! DESIGN
//! ======
//! The first non-blank line picks a kind (see [`DiagramKind::classify`]), and
//! that kind's rule in [`rules::RULES`] produces the verdict. Markup no rule
//! recognises goes to a [`FallbackCheck`] exactly once. Validation never
//! errors: the worst case is an accepted verdict that explains why no deep
//! check ran.

pub mod remote;
pub mod rules;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ValidatorConfig;
use crate::diagram::DiagramKind;
use crate::llm::LlmChat;
pub use remote::RemoteChecker;

/// Markup shorter than this many characters is rejected outright.
pub const MIN_MARKUP_CHARS: usize = 10;

// =============================================================================
// VERDICT
// =============================================================================

/// Outcome of a validation call. "Valid with caveats" is `valid: true` with
/// explanatory feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub valid: bool,
    pub feedback: String,
}

impl Verdict {
    #[must_use]
    pub fn pass(feedback: impl Into<String>) -> Self {
        Self { valid: true, feedback: feedback.into() }
    }

    #[must_use]
    pub fn fail(feedback: impl Into<String>) -> Self {
        Self { valid: false, feedback: feedback.into() }
    }
}

// =============================================================================
// FALLBACK SEAM
// =============================================================================

/// Second-opinion check for markup that no local rule recognises.
///
/// Implementations must not fail: infrastructure trouble becomes an accepted
/// verdict.
#[async_trait::async_trait]
pub trait FallbackCheck: Send + Sync {
    async fn check(&self, markup: &str) -> Verdict;
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Run the local checks only. `None` means no marker matched and the markup
/// needs the fallback.
#[must_use]
pub fn check_local(markup: &str) -> Option<Verdict> {
    if markup.chars().count() < MIN_MARKUP_CHARS {
        return Some(Verdict::fail("Generated code is too short or empty"));
    }
    let kind = DiagramKind::classify(markup)?;
    let verdict = rules::checker_for(kind)(markup);
    debug!(%kind, valid = verdict.valid, "validate: local check");
    Some(verdict)
}

/// Validator dispatcher. Holds no mutable state, so one instance can serve
/// concurrent callers.
pub struct Validator {
    fallback: Box<dyn FallbackCheck>,
}

impl Validator {
    pub fn new(fallback: impl FallbackCheck + 'static) -> Self {
        Self { fallback: Box::new(fallback) }
    }

    /// Validator whose fallback asks `llm`, or is disabled when `llm` is `None`.
    #[must_use]
    pub fn with_llm(llm: Option<Arc<dyn LlmChat>>, config: ValidatorConfig) -> Self {
        Self::new(RemoteChecker::new(llm, config))
    }

    /// Validate `markup`, consulting the fallback only when no marker matched.
    pub async fn validate(&self, markup: &str) -> Verdict {
        if let Some(verdict) = check_local(markup) {
            return verdict;
        }
        debug!("validate: no marker matched, using fallback");
        self.fallback.check(markup).await
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
