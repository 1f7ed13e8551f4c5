use super::*;

fn assert_pass(verdict: &Verdict, feedback: &str) {
    assert!(verdict.valid, "expected pass, got: {}", verdict.feedback);
    assert_eq!(verdict.feedback, feedback);
}

fn assert_fail(verdict: &Verdict, feedback: &str) {
    assert!(!verdict.valid, "expected fail, got: {}", verdict.feedback);
    assert_eq!(verdict.feedback, feedback);
}

// =============================================================================
// TABLE
// =============================================================================

#[test]
fn rules_follow_priority_order() {
    let kinds: Vec<DiagramKind> = RULES.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, DiagramKind::ALL.to_vec());
}

#[test]
fn checker_for_returns_matching_rule() {
    let checker = checker_for(DiagramKind::Gantt);
    assert_eq!(checker("gantt\n title T\n section S").feedback, "Gantt chart looks valid");
}

// =============================================================================
// SEQUENCE
// =============================================================================

#[test]
fn sequence_valid() {
    let markup = "sequenceDiagram\n    participant User\n    participant API\n    User->>API: login";
    assert_pass(&check_sequence(markup), "Sequence diagram looks valid");
}

#[test]
fn sequence_participant_keyword_is_case_insensitive() {
    let markup = "sequenceDiagram\n    PARTICIPANT User\n    User->>API: login";
    assert!(check_sequence(markup).valid);
}

#[test]
fn sequence_accepts_dashed_and_double_arrows() {
    assert!(check_sequence("sequenceDiagram\n participant A\n A-->>B: reply").valid);
    assert!(check_sequence("sequenceDiagram\n participant A\n A=>>B: odd").valid);
}

#[test]
fn sequence_missing_participant() {
    let markup = "sequenceDiagram\n    User->>API: login";
    assert_fail(&check_sequence(markup), "Sequence diagram should define at least one participant");
}

#[test]
fn sequence_missing_message() {
    let markup = "sequenceDiagram\n    participant User\n    User->API: open arrow";
    assert_fail(&check_sequence(markup), "Sequence diagram should have at least one message/action");
}

#[test]
fn sequence_actor_only_is_rejected() {
    // Shallow by design: only `participant` declarations count.
    let markup = "sequenceDiagram\n    actor User\n    User->>API: login";
    assert!(!check_sequence(markup).valid);
}

// =============================================================================
// FLOWCHART
// =============================================================================

#[test]
fn flowchart_valid() {
    let markup = "flowchart TD\n    A[Start] --> B[Process]\n    B --> C[End]";
    assert_pass(&check_flowchart(markup), "Flowchart looks valid");
}

#[test]
fn flowchart_node_shapes() {
    for node in ["A(round)", "A{decision}", "A<odd>", "A [spaced]"] {
        let markup = format!("flowchart TD\n    {node} --> B");
        assert!(check_flowchart(&markup).valid, "node: {node}");
    }
}

#[test]
fn flowchart_missing_node() {
    let markup = "flowchart TD\n    A --> B\n    B --> C";
    assert_fail(&check_flowchart(markup), "Flowchart should define at least one node");
}

#[test]
fn flowchart_missing_connection() {
    let markup = "flowchart TD\n    A[Start]\n    B[End]";
    assert_fail(&check_flowchart(markup), "Flowchart should have at least one connection");
}

#[test]
fn flowchart_label_must_close_on_same_line() {
    let markup = "flowchart TD\n    A[Start\n    ] --> B";
    assert_fail(&check_flowchart(markup), "Flowchart should define at least one node");
}

// =============================================================================
// CLASS
// =============================================================================

#[test]
fn class_valid() {
    let markup = "classDiagram\n    class Example {\n        +attribute: type\n    }";
    assert_pass(&check_class(markup), "Class diagram looks valid");
}

#[test]
fn class_brace_may_follow_on_next_line() {
    let markup = "classDiagram\n    class Example\n    {\n    }";
    assert!(check_class(markup).valid);
}

#[test]
fn class_without_body() {
    let markup = "classDiagram\n    class Animal\n    Animal : +int age";
    assert_fail(&check_class(markup), "Class diagram should define at least one class");
}

#[test]
fn class_header_alone_does_not_count() {
    assert!(!check_class("classDiagram {\n}").valid);
}

// =============================================================================
// ENTITY RELATIONSHIP
// =============================================================================

#[test]
fn er_valid() {
    let markup = "erDiagram\n    CUSTOMER ||--o{ ORDER : places";
    assert_pass(&check_er(markup), "ER diagram looks valid");
}

#[test]
fn er_cardinality_variants() {
    for rel in ["|o--o{", "||--|{", "|--{", "|o--{"] {
        let markup = format!("erDiagram\n    A {rel} B : has");
        assert!(check_er(&markup).valid, "relationship: {rel}");
    }
}

#[test]
fn er_reverse_direction_not_recognised() {
    let markup = "erDiagram\n    ORDER }o--|| CUSTOMER : placed_by";
    assert_fail(&check_er(markup), "ER diagram should define at least one relationship");
}

#[test]
fn er_entities_only() {
    let markup = "erDiagram\n    CUSTOMER {\n        string name\n    }";
    assert!(!check_er(markup).valid);
}

// =============================================================================
// STATE
// =============================================================================

#[test]
fn state_start_marker() {
    let markup = "stateDiagram-v2\n    [*] --> Idle\n    Idle --> Busy";
    assert_pass(&check_state(markup), "State diagram looks valid");
}

#[test]
fn state_end_marker() {
    let markup = "stateDiagram-v2\n    Idle --> Busy\n    Busy --> [*]";
    assert!(check_state(markup).valid);
}

#[test]
fn state_without_terminal_markers() {
    let markup = "stateDiagram-v2\n    Idle --> Busy\n    Busy --> Idle";
    assert_fail(&check_state(markup), "State diagram should have at least a start or end state");
}

#[test]
fn state_marker_without_arrow() {
    let markup = "stateDiagram-v2\n    [*]\n    Idle : waiting";
    assert!(!check_state(markup).valid);
}

// =============================================================================
// GANTT
// =============================================================================

#[test]
fn gantt_valid() {
    let markup = "gantt\n    title Release\n    section Build\n    Compile :a1, 2024-01-01, 3d";
    assert_pass(&check_gantt(markup), "Gantt chart looks valid");
}

#[test]
fn gantt_keywords_case_insensitive() {
    let markup = "gantt\n    Title Release\n    SECTION Build";
    assert!(check_gantt(markup).valid);
}

#[test]
fn gantt_missing_title() {
    let markup = "gantt\n    dateFormat YYYY-MM-DD\n    section Build\n    Compile :a1, 2024-01-01, 3d";
    assert_fail(&check_gantt(markup), "Gantt chart should have a title");
}

#[test]
fn gantt_missing_section() {
    let markup = "gantt\n    title Release\n    Compile :a1, 2024-01-01, 3d";
    assert_fail(&check_gantt(markup), "Gantt chart should have at least one section");
}

#[test]
fn gantt_missing_both_reports_title_first() {
    let markup = "gantt\n    dateFormat YYYY-MM-DD\n    Compile :a1, 2024-01-01, 3d";
    assert_fail(&check_gantt(markup), "Gantt chart should have a title");
}
