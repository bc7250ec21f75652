//! Unit tests for core keiro functionality.
mod common;
use common::*;
use keiro::compiler::GraphIndex;
use keiro::flow::selector::{referenced_selectors, split_selectors, SelectorSegment};
use keiro::prelude::*;

#[test]
fn test_leaf_rendering() {
    let expr = Expression::Leaf("node01".to_string());
    assert_eq!(expr.to_string(), "_node01");
}

#[test]
fn test_then_and_when_rendering() {
    let expr = Expression::Then(vec![
        Expression::Leaf("a".to_string()),
        Expression::When(vec![
            Expression::Leaf("b".to_string()),
            Expression::Leaf("c".to_string()),
        ]),
        Expression::Leaf("d".to_string()),
    ]);
    assert_eq!(expr.to_string(), "THEN(_a, WHEN(_b, _c), _d)");
}

#[test]
fn test_if_rendering_by_branch_count() {
    let branch = |id: &str| Expression::Leaf(id.to_string());
    let cond = |branches| Expression::If {
        condition: "c".to_string(),
        branches,
    };

    assert_eq!(cond(vec![branch("a")]).to_string(), "IF(_c, _a)");
    assert_eq!(
        cond(vec![branch("a"), branch("b")]).to_string(),
        "IF(_c, _a, ELSE(_b))"
    );
    assert_eq!(
        cond(vec![branch("a"), branch("b"), branch("d"), branch("e")]).to_string(),
        "IF(_c, _a, ELIF(_c, _b), ELIF(_c, _d), ELSE(_e))"
    );
}

#[test]
fn test_error_display_carries_offending_ids() {
    let err = ValidationError::UnsupportedNodeType {
        node_id: "node07".to_string(),
        type_name: "webhook".to_string(),
    };
    assert!(err.to_string().contains("node07"));
    assert!(err.to_string().contains("webhook"));

    let err = StructureError::CycleDetected("loop01".to_string());
    assert!(err.to_string().contains("loop01"));
}

#[test]
fn test_graph_index_preserves_edge_order() {
    let graph = flow(
        vec![
            node("start01", "start"),
            node("b01", "code"),
            node("a01", "code"),
            node("end01", "end"),
        ],
        vec![
            edge("edge1", "start01", "b01"),
            edge("edge2", "start01", "a01"),
            edge("edge3", "b01", "end01"),
            edge("edge4", "a01", "end01"),
        ],
    );
    let index = GraphIndex::build(&graph);

    assert_eq!(index.targets("start01"), ["b01", "a01"]);
    assert_eq!(index.in_degree("end01"), 2);
    assert_eq!(index.in_degree("start01"), 0);
    assert!(index.targets("end01").is_empty());
}

#[test]
fn test_graph_index_counts_parallel_edges() {
    // Two edges between the same pair both count toward the in-degree.
    let graph = flow(
        vec![node("a01", "code"), node("b01", "code")],
        vec![edge("edge1", "a01", "b01"), edge("edge2", "a01", "b01")],
    );
    let index = GraphIndex::build(&graph);

    assert_eq!(index.targets("a01"), ["b01", "b01"]);
    assert_eq!(index.in_degree("b01"), 2);
}

#[test]
fn test_param_serialization_skips_absent_fields() {
    let json = serde_json::to_string(&param("city", "City", true)).expect("serializable");
    assert_eq!(json, "{\"name\":\"city\",\"label\":\"City\",\"required\":true}");

    let json =
        serde_json::to_string(&param_with_value("greeting", "hello")).expect("serializable");
    assert!(json.contains("\"value\":\"hello\""));
    assert!(!json.contains("dataType"));
}

#[test]
fn test_selector_splitting() {
    let segments = split_selectors("Hi\nname: {{#node01.name#}}!");
    assert_eq!(
        segments,
        vec![
            SelectorSegment::Text("Hi\nname: ".to_string()),
            SelectorSegment::Selector("{{#node01.name#}}".to_string()),
            SelectorSegment::Text("!".to_string()),
        ]
    );
    assert_eq!(segments[1].selector_path(), Some("node01.name"));
}

#[test]
fn test_selector_splitting_without_selectors() {
    let segments = split_selectors("plain text only");
    assert_eq!(
        segments,
        vec![SelectorSegment::Text("plain text only".to_string())]
    );
    assert!(referenced_selectors("plain text only").is_empty());
}

#[test]
fn test_referenced_selectors_in_order() {
    let refs = referenced_selectors("{{#a.x#}} then {{#b.y#}}");
    assert_eq!(refs, vec!["a.x".to_string(), "b.y".to_string()]);
}

#[test]
fn test_document_parsing_and_conversion() {
    let json = r#"{
        "nodes": [
            {
                "id": "start01",
                "type": "start",
                "title": "Begin",
                "data": {
                    "params": [
                        { "variable": "city", "label": "City", "required": true, "type": "string" }
                    ]
                }
            },
            {
                "id": "http01",
                "type": "http-request",
                "data": { "title": "Fetch", "method": "GET", "url": "https://example.invalid" }
            },
            { "id": "end01", "type": "end" }
        ],
        "edges": [
            { "id": "edge1", "source": "start01", "target": "http01", "sourceHandle": "source" },
            { "id": "edge2", "source": "http01", "target": "end01" }
        ]
    }"#;

    let flow = FlowDocument::from_json(json)
        .expect("document should parse")
        .into_flow()
        .expect("document should convert");

    assert_eq!(flow.nodes.len(), 3);
    assert_eq!(flow.nodes[0].title, "Begin");
    assert_eq!(flow.nodes[0].params[0].name, "city");
    assert!(flow.nodes[0].params[0].required);
    assert_eq!(flow.nodes[1].title, "Fetch");
    assert_eq!(flow.nodes[1].method.as_deref(), Some("GET"));
    assert_eq!(flow.edges[0].source_handle.as_deref(), Some("source"));
    assert_eq!(flow.edges[1].target_handle, None);

    let output = compile(flow);
    assert_eq!(
        output.expression.to_string(),
        "THEN(_start01, THEN(_http01, _end01))"
    );
}

#[test]
fn test_invalid_document_reports_conversion_error() {
    let result = FlowDocument::from_json("{ not json }");
    assert!(matches!(
        result,
        Err(FlowConversionError::InvalidDocument(_))
    ));
}
