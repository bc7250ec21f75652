//! Common test utilities for building flow definitions.
use keiro::prelude::*;

#[allow(dead_code)]
pub fn node(id: &str, node_type: &str) -> FlowNodeDefinition {
    FlowNodeDefinition {
        id: id.to_string(),
        node_type: node_type.to_string(),
        title: id.to_string(),
        params: Vec::new(),
        method: None,
        url: None,
    }
}

#[allow(dead_code)]
pub fn http_node(id: &str, method: &str, url: &str) -> FlowNodeDefinition {
    FlowNodeDefinition {
        method: Some(method.to_string()),
        url: Some(url.to_string()),
        ..node(id, "http-request")
    }
}

#[allow(dead_code)]
pub fn param(name: &str, label: &str, required: bool) -> ParamDefinition {
    ParamDefinition {
        name: name.to_string(),
        label: label.to_string(),
        required,
        data_type: None,
        value: None,
    }
}

#[allow(dead_code)]
pub fn param_with_value(name: &str, value: &str) -> ParamDefinition {
    ParamDefinition {
        value: Some(value.to_string()),
        ..param(name, name, false)
    }
}

#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str) -> FlowEdgeDefinition {
    FlowEdgeDefinition {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        source_handle: None,
        target_handle: None,
    }
}

#[allow(dead_code)]
pub fn flow(nodes: Vec<FlowNodeDefinition>, edges: Vec<FlowEdgeDefinition>) -> FlowDefinition {
    FlowDefinition { nodes, edges }
}

/// A minimal four-node sequential flow: start -> code -> http -> end.
#[allow(dead_code)]
pub fn sequential_flow() -> FlowDefinition {
    flow(
        vec![
            node("start01", "start"),
            node("code01", "code"),
            http_node("http01", "GET", "https://example.invalid/data"),
            node("end01", "end"),
        ],
        vec![
            edge("edge1", "start01", "code01"),
            edge("edge2", "code01", "http01"),
            edge("edge3", "http01", "end01"),
        ],
    )
}

#[allow(dead_code)]
pub fn compile(flow: FlowDefinition) -> CompilationOutput {
    Compiler::builder(flow)
        .build()
        .compile()
        .expect("flow should compile")
}

#[allow(dead_code)]
pub fn compile_err(flow: FlowDefinition) -> CompileError {
    Compiler::builder(flow)
        .build()
        .compile()
        .err()
        .expect("compilation should fail")
}
