use super::*;

// =============================================================================
// CLASSIFY
// =============================================================================

#[test]
fn classify_each_marker() {
    let cases = [
        ("sequenceDiagram\n A->>B: hi", DiagramKind::Sequence),
        ("flowchart LR\n A --> B", DiagramKind::Flowchart),
        ("classDiagram\n class A {", DiagramKind::Class),
        ("erDiagram\n A ||--o{ B : has", DiagramKind::EntityRelationship),
        ("stateDiagram-v2\n [*] --> A", DiagramKind::State),
        ("gantt\n title T", DiagramKind::Gantt),
    ];
    for (markup, expected) in cases {
        assert_eq!(DiagramKind::classify(markup), Some(expected), "markup: {markup}");
    }
}

#[test]
fn classify_skips_leading_blank_lines() {
    let markup = "\n\n   \n   sequenceDiagram\n participant A";
    assert_eq!(DiagramKind::classify(markup), Some(DiagramKind::Sequence));
}

#[test]
fn classify_only_looks_at_first_line() {
    let markup = "graph TD\nsequenceDiagram\n participant A";
    assert_eq!(DiagramKind::classify(markup), None);
}

#[test]
fn classify_is_case_sensitive() {
    assert_eq!(DiagramKind::classify("SequenceDiagram\n participant A"), None);
    assert_eq!(DiagramKind::classify("Gantt\n title T"), None);
}

#[test]
fn classify_plain_state_diagram_is_unrecognised() {
    assert_eq!(DiagramKind::classify("stateDiagram\n [*] --> A"), None);
}

#[test]
fn classify_overlapping_markers_follow_priority_order() {
    // Both `flowchart` and `gantt` appear; flowchart outranks gantt.
    assert_eq!(DiagramKind::classify("gantt flowchart"), Some(DiagramKind::Flowchart));
    assert_eq!(DiagramKind::classify("erDiagram sequenceDiagram"), Some(DiagramKind::Sequence));
}

#[test]
fn classify_blank_input() {
    assert_eq!(DiagramKind::classify(""), None);
    assert_eq!(DiagramKind::classify("   \n  "), None);
}

#[test]
fn first_line_trims() {
    assert_eq!(first_line("  \n  gantt  \n title"), "gantt");
    assert_eq!(first_line("flowchart TD\r\n A --> B"), "flowchart TD");
    assert_eq!(first_line(""), "");
}

// =============================================================================
// NAMES
// =============================================================================

#[test]
fn from_label_accepts_labels_slugs_and_markers() {
    assert_eq!(DiagramKind::from_label("Entity Relationship"), Some(DiagramKind::EntityRelationship));
    assert_eq!(DiagramKind::from_label("er"), Some(DiagramKind::EntityRelationship));
    assert_eq!(DiagramKind::from_label("erDiagram"), Some(DiagramKind::EntityRelationship));
    assert_eq!(DiagramKind::from_label("gantt chart"), Some(DiagramKind::Gantt));
    assert_eq!(DiagramKind::from_label(" stateDiagram-v2 "), Some(DiagramKind::State));
    assert_eq!(DiagramKind::from_label("pie"), None);
}

#[test]
fn unknown_label_defaults_to_sequence() {
    let kind = DiagramKind::from_label_or_default("Pie Chart");
    assert_eq!(kind, DiagramKind::Sequence);
    assert_eq!(kind.header(), "sequenceDiagram");
    assert_eq!(DiagramKind::from_label_or_default(""), DiagramKind::Sequence);
    assert_eq!(DiagramKind::from_label_or_default("Gantt Chart"), DiagramKind::Gantt);
}

#[test]
fn from_str_error_lists_known_kinds() {
    let err = "pie".parse::<DiagramKind>().unwrap_err();
    assert!(err.contains("pie"));
    assert!(err.contains("sequence, flowchart, class, er, state, gantt"));
}

#[test]
fn header_differs_from_marker_only_for_flowchart() {
    for kind in DiagramKind::ALL {
        assert!(kind.header().starts_with(kind.marker()));
    }
    assert_eq!(DiagramKind::Flowchart.header(), "flowchart TD");
}

#[test]
fn markers_are_unique() {
    let mut markers: Vec<&str> = DiagramKind::ALL.iter().map(|k| k.marker()).collect();
    markers.sort_unstable();
    markers.dedup();
    assert_eq!(markers.len(), DiagramKind::ALL.len());
}
