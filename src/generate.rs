//! Markup generation: free-text description → Mermaid markup via the LLM.
//!
//! DESIGN
//! ======
//! Generation never fails from the caller's point of view: without a client,
//! or when the provider errors or replies with nothing, the caller gets a
//! small template diagram of the requested kind. The result is untrusted and
//! should go through [`crate::validate::Validator`] before use.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::GeneratorConfig;
use crate::diagram::DiagramKind;
use crate::llm::{ChatRequest, LlmChat, LlmError, Message};

const GENERATION_TEMPERATURE: f32 = 0.1;

pub struct Generator {
    llm: Option<Arc<dyn LlmChat>>,
    config: GeneratorConfig,
}

impl Generator {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>, config: GeneratorConfig) -> Self {
        Self { llm, config }
    }

    /// Generate markup for a picker label such as `"Gantt Chart"`. Unknown
    /// labels produce a sequence diagram.
    pub async fn generate_labelled(&self, description: &str, label: &str) -> String {
        let kind = DiagramKind::from_label(label).unwrap_or_else(|| {
            warn!(label, "generate: unknown diagram label, using sequence");
            DiagramKind::from_label_or_default(label)
        });
        self.generate(description, kind).await
    }

    /// Generate markup for `description`, falling back to the kind's template.
    pub async fn generate(&self, description: &str, kind: DiagramKind) -> String {
        let Some(llm) = self.llm.as_deref() else {
            info!(%kind, "generate: no LLM configured, using template");
            return template(kind).to_string();
        };

        match self.request_markup(llm, description, kind).await {
            Ok(markup) if !markup.is_empty() => markup,
            Ok(_) => {
                warn!(%kind, "generate: empty reply, using template");
                template(kind).to_string()
            }
            Err(e) => {
                warn!(%kind, error = %e, code = e.error_code(), "generate: LLM call failed, using template");
                template(kind).to_string()
            }
        }
    }

    async fn request_markup(&self, llm: &dyn LlmChat, description: &str, kind: DiagramKind) -> Result<String, LlmError> {
        let request = ChatRequest {
            system: system_prompt(kind),
            messages: vec![Message::user(user_prompt(description, kind))],
            max_tokens: self.config.max_tokens,
            temperature: Some(GENERATION_TEMPERATURE),
            json_object: false,
        };
        let response = llm.chat(&request).await?;
        if response.hit_token_limit() {
            warn!(%kind, max_tokens = self.config.max_tokens, "generate: reply stopped at the token limit, markup may be truncated");
        }
        info!(
            %kind,
            model = %response.model,
            output_tokens = response.output_tokens,
            "generate: markup received"
        );
        Ok(strip_code_fence(&response.text).to_string())
    }
}

// =============================================================================
// PROMPTS
// =============================================================================

fn system_prompt(kind: DiagramKind) -> String {
    format!(
        "You are an expert in technical diagrams and Mermaid syntax. Your job is to accurately convert \
         text descriptions into valid Mermaid diagrams. Follow these rules:\n\
         - Identify the diagram type (e.g., sequence, flowchart, class, ER, state, or Gantt).\n\
         - Analyze the provided description to extract key entities, relationships, and interactions.\n\
         - Generate the correct Mermaid code by structuring it logically and maintaining readability.\n\
         - Avoid unnecessary explanations; output only the Mermaid syntax, starting directly with '{}'.",
        kind.header()
    )
}

fn user_prompt(description: &str, kind: DiagramKind) -> String {
    format!(
        "Convert the following description into a valid Mermaid diagram of type '{label}'.\n\
         Return ONLY the Mermaid code without any explanation, markdown formatting, or code blocks.\n\
         Start with '{header}'.\n\
         \n\
         Description: {description}",
        label = kind.label(),
        header = kind.header(),
    )
}

/// Trim `text` and drop a surrounding markdown code fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (e.g. "mermaid") on the opening fence line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

// =============================================================================
// TEMPLATES
// =============================================================================

/// Minimal diagram of `kind`, used when generation is unavailable.
#[must_use]
pub fn template(kind: DiagramKind) -> &'static str {
    match kind {
        DiagramKind::Sequence => {
            "sequenceDiagram
    participant User
    participant System
    User->>System: Action
    System->>User: Response"
        }
        DiagramKind::Flowchart => {
            "flowchart TD
    A[Start] --> B[Process]
    B --> C[End]"
        }
        DiagramKind::Class => {
            "classDiagram
    class Example {
        +attribute: type
        +method(): return_type
    }"
        }
        DiagramKind::EntityRelationship => {
            "erDiagram
    ENTITY1 ||--o{ ENTITY2 : relationship"
        }
        DiagramKind::State => {
            "stateDiagram-v2
    [*] --> State1
    State1 --> [*]"
        }
        DiagramKind::Gantt => {
            "gantt
    title Example Gantt
    section Section
    Task1 :a1, 2023-01-01, 30d
    Task2 :after a1, 20d"
        }
    }
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
