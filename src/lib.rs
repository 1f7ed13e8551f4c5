//! Diagram builder: turn descriptions into Mermaid markup and sanity-check it.
//!
//! The validation core lives in [`validate`]: markup is classified by the
//! marker on its first non-blank line and checked by that kind's structural
//! rule, with an LLM second opinion for anything unrecognised. [`generate`]
//! produces markup from free text; [`llm`] holds the provider clients both
//! of them share.

pub mod config;
pub mod diagram;
pub mod generate;
pub mod llm;
pub mod validate;

pub use diagram::DiagramKind;
pub use generate::Generator;
pub use validate::{Validator, Verdict};
