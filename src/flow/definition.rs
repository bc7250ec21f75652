use serde::Serialize;

/// The complete, canonical definition of a flow graph, ready for compilation.
/// This is the target structure for any custom editor-format conversion.
///
/// Node order is significant: it fixes the order of emitted binding statements
/// and the 1-based `index` each binding carries. Edge order is significant
/// too: it fixes the branch order of `WHEN` and `IF` constructs.
#[derive(Debug, Clone, Default)]
pub struct FlowDefinition {
    pub nodes: Vec<FlowNodeDefinition>,
    pub edges: Vec<FlowEdgeDefinition>,
}

/// Defines a single typed node in the flow graph.
#[derive(Debug, Clone)]
pub struct FlowNodeDefinition {
    pub id: String,
    /// Type name resolved against the [`NodeRegistry`](crate::compiler::NodeRegistry).
    pub node_type: String,
    /// Display-only title from the editor; never influences compilation.
    pub title: String,
    /// Declared parameters, in the order the editor lists them.
    pub params: Vec<ParamDefinition>,
    /// HTTP method, populated for request nodes.
    pub method: Option<String>,
    /// Request URL, populated for request nodes.
    pub url: Option<String>,
}

impl FlowNodeDefinition {
    /// The `_<id>` reference this node is bound to in the emitted program.
    pub fn node_ref(&self) -> String {
        format!("_{}", self.id)
    }
}

/// A parameter a node declares for its runtime component.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParamDefinition {
    pub name: String,
    pub label: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A directed connection between two nodes.
#[derive(Debug, Clone)]
pub struct FlowEdgeDefinition {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Sub-port on the source node; `None` means its single default output.
    pub source_handle: Option<String>,
    /// Sub-port on the target node; `None` means its single default input.
    pub target_handle: Option<String>,
}
