use super::conversion::IntoFlow;
use super::definition::{FlowDefinition, FlowEdgeDefinition, FlowNodeDefinition, ParamDefinition};
use crate::error::FlowConversionError;
use serde::Deserialize;

/// The flow editor's JSON payload: a node list and an edge list, field names
/// matching what the editor serializes. This is the stock input format;
/// custom formats go through [`IntoFlow`] directly.
#[derive(Debug, Deserialize)]
pub struct FlowDocument {
    pub nodes: Vec<DocumentNode>,
    pub edges: Vec<DocumentEdge>,
}

/// A node as the editor serializes it, with type-specific configuration
/// nested under `data`.
#[derive(Debug, Deserialize)]
pub struct DocumentNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub title: Option<String>,
    pub data: Option<DocumentNodeData>,
}

/// Type-specific node configuration.
#[derive(Debug, Deserialize, Default)]
pub struct DocumentNodeData {
    pub title: Option<String>,
    #[serde(default)]
    pub params: Vec<DocumentParam>,
    pub method: Option<String>,
    pub url: Option<String>,
}

/// A declared parameter as the editor serializes it (`variable` is the
/// parameter name; `type` its declared data type).
#[derive(Debug, Deserialize, Clone)]
pub struct DocumentParam {
    pub variable: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type")]
    pub data_type: Option<String>,
    pub value: Option<String>,
}

/// An edge as the editor serializes it.
#[derive(Debug, Deserialize)]
pub struct DocumentEdge {
    #[serde(default)]
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(alias = "sourceHandle")]
    pub source_handle: Option<String>,
    #[serde(alias = "targetHandle")]
    pub target_handle: Option<String>,
}

impl FlowDocument {
    /// Parses an editor payload from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, FlowConversionError> {
        serde_json::from_str(json).map_err(|e| FlowConversionError::InvalidDocument(e.to_string()))
    }
}

impl IntoFlow for FlowDocument {
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|node| {
                let data = node.data.unwrap_or_default();
                FlowNodeDefinition {
                    id: node.id,
                    node_type: node.node_type,
                    title: node.title.or(data.title).unwrap_or_default(),
                    params: data
                        .params
                        .into_iter()
                        .map(|p| ParamDefinition {
                            name: p.variable,
                            label: p.label,
                            required: p.required,
                            data_type: p.data_type,
                            value: p.value,
                        })
                        .collect(),
                    method: data.method,
                    url: data.url,
                }
            })
            .collect();

        let edges = self
            .edges
            .into_iter()
            .map(|edge| FlowEdgeDefinition {
                id: edge.id,
                source: edge.source,
                target: edge.target,
                source_handle: edge.source_handle,
                target_handle: edge.target_handle,
            })
            .collect();

        Ok(FlowDefinition { nodes, edges })
    }
}
