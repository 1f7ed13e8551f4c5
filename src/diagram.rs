//! Supported diagram kinds and their Mermaid markers.
//!
//! A kind is recognised solely by its marker appearing on the first non-blank
//! line of the markup. Markers are case-sensitive.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Sequence,
    Flowchart,
    Class,
    EntityRelationship,
    State,
    Gantt,
}

impl DiagramKind {
    /// All kinds in classification priority order.
    pub const ALL: [Self; 6] = [
        Self::Sequence,
        Self::Flowchart,
        Self::Class,
        Self::EntityRelationship,
        Self::State,
        Self::Gantt,
    ];

    /// Literal that opens markup of this kind.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Sequence => "sequenceDiagram",
            Self::Flowchart => "flowchart",
            Self::Class => "classDiagram",
            Self::EntityRelationship => "erDiagram",
            Self::State => "stateDiagram-v2",
            Self::Gantt => "gantt",
        }
    }

    /// Header line a generator should emit for this kind.
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart TD",
            other => other.marker(),
        }
    }

    /// Human-facing name, as offered in a kind picker.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sequence => "Sequence Diagram",
            Self::Flowchart => "Flowchart",
            Self::Class => "Class Diagram",
            Self::EntityRelationship => "Entity Relationship",
            Self::State => "State Diagram",
            Self::Gantt => "Gantt Chart",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::Sequence => "sequence",
            Self::Flowchart => "flowchart",
            Self::Class => "class",
            Self::EntityRelationship => "er",
            Self::State => "state",
            Self::Gantt => "gantt",
        }
    }

    /// Resolve a kind from its label, slug, or marker (case-insensitive).
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|kind| {
            [kind.label(), kind.slug(), kind.marker()]
                .iter()
                .any(|name| name.eq_ignore_ascii_case(raw))
        })
    }

    /// Like [`Self::from_label`], but unknown labels resolve to
    /// [`Self::Sequence`].
    #[must_use]
    pub fn from_label_or_default(raw: &str) -> Self {
        Self::from_label(raw).unwrap_or(Self::Sequence)
    }

    /// Classify markup by testing its first non-blank line against each marker
    /// in priority order. First match wins.
    #[must_use]
    pub fn classify(markup: &str) -> Option<Self> {
        let line = first_line(markup);
        Self::ALL
            .into_iter()
            .find(|kind| line.contains(kind.marker()))
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DiagramKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|k| k.slug()).collect();
            format!("unknown diagram kind '{s}' (expected one of: {})", known.join(", "))
        })
    }
}

/// First non-blank line of `markup`, trimmed. Empty for blank input.
#[must_use]
pub fn first_line(markup: &str) -> &str {
    markup.trim().lines().next().unwrap_or_default().trim()
}

#[cfg(test)]
#[path = "diagram_test.rs"]
mod tests;
