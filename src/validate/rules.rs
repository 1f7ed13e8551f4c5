//! Structural checks, one per diagram kind.
//!
//! Each rule is a presence test over the raw markup. Rules run in order and
//! stop at the first miss, so feedback names exactly one problem. They catch
//! gross malformation only and accept plenty of markup a renderer would
//! reject.

use std::sync::OnceLock;

use regex::Regex;

use super::Verdict;
use crate::diagram::DiagramKind;

/// A structural checker over the full markup text.
pub type Checker = fn(&str) -> Verdict;

/// Checker registered for a diagram kind.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: DiagramKind,
    pub check: Checker,
}

/// Rules in classification priority order, indexed by `DiagramKind as usize`.
pub const RULES: [Rule; 6] = [
    Rule { kind: DiagramKind::Sequence, check: check_sequence },
    Rule { kind: DiagramKind::Flowchart, check: check_flowchart },
    Rule { kind: DiagramKind::Class, check: check_class },
    Rule { kind: DiagramKind::EntityRelationship, check: check_er },
    Rule { kind: DiagramKind::State, check: check_state },
    Rule { kind: DiagramKind::Gantt, check: check_gantt },
];

/// Look up the checker for `kind`.
#[must_use]
pub fn checker_for(kind: DiagramKind) -> Checker {
    RULES[kind as usize].check
}

// =============================================================================
// CHECKERS
// =============================================================================

pub fn check_sequence(markup: &str) -> Verdict {
    if !re_participant().is_match(markup) {
        return Verdict::fail("Sequence diagram should define at least one participant");
    }
    if !re_message_arrow().is_match(markup) {
        return Verdict::fail("Sequence diagram should have at least one message/action");
    }
    Verdict::pass("Sequence diagram looks valid")
}

pub fn check_flowchart(markup: &str) -> Verdict {
    if !re_flow_node().is_match(markup) {
        return Verdict::fail("Flowchart should define at least one node");
    }
    if !markup.contains("-->") {
        return Verdict::fail("Flowchart should have at least one connection");
    }
    Verdict::pass("Flowchart looks valid")
}

pub fn check_class(markup: &str) -> Verdict {
    if !re_class_body().is_match(markup) {
        return Verdict::fail("Class diagram should define at least one class");
    }
    Verdict::pass("Class diagram looks valid")
}

pub fn check_er(markup: &str) -> Verdict {
    if !re_er_relationship().is_match(markup) {
        return Verdict::fail("ER diagram should define at least one relationship");
    }
    Verdict::pass("ER diagram looks valid")
}

pub fn check_state(markup: &str) -> Verdict {
    if !re_state_start().is_match(markup) && !re_state_end().is_match(markup) {
        return Verdict::fail("State diagram should have at least a start or end state");
    }
    Verdict::pass("State diagram looks valid")
}

pub fn check_gantt(markup: &str) -> Verdict {
    if !re_gantt_title().is_match(markup) {
        return Verdict::fail("Gantt chart should have a title");
    }
    if !re_gantt_section().is_match(markup) {
        return Verdict::fail("Gantt chart should have at least one section");
    }
    Verdict::pass("Gantt chart looks valid")
}

// =============================================================================
// PATTERNS
// =============================================================================

fn cached(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static pattern compiles"))
}

fn re_participant() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"(?i)participant\s+\w+")
}

fn re_message_arrow() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"[-=]>>")
}

/// Identifier followed by a `[]`, `()`, `{}` or `<>` delimited label.
fn re_flow_node() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"\w+\s*(\[.*?\]|\(.*?\)|\{.*?\}|<.*?>)")
}

fn re_class_body() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"class\s+\w+\s*\{")
}

/// `ENTITY |x--x{ ENTITY`, where each `x` is an optional `|` or `o`.
fn re_er_relationship() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"\w+\s+\|[|o]?--[|o]?\{\s+\w+")
}

fn re_state_start() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"\[\*\]\s*-->")
}

fn re_state_end() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"-->\s*\[\*\]")
}

fn re_gantt_title() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"(?i)title\s+")
}

fn re_gantt_section() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"(?i)section\s+")
}

#[cfg(test)]
#[path = "rules_test.rs"]
mod tests;
