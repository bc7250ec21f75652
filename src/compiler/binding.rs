use super::registry::NodeRegistry;
use crate::error::{CompileError, ValidationError};
use crate::flow::{FlowDefinition, ParamDefinition};
use serde::Serialize;

/// The parameter payload each binding statement carries, serialized as
/// compact JSON. Field order here fixes key order in the output, which keeps
/// compilation byte-for-byte deterministic.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BindingPayload<'a> {
    id: &'a str,
    node_id: &'a str,
    index: usize,
    stream_flag: bool,
    params: &'a [ParamDefinition],
    node_type: &'a str,
    node_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

/// Emits one `_<id>=<Component>.bind("param", '<json>');` statement per node,
/// in node declaration order (not dependency order).
pub(crate) fn emit_bindings(
    flow: &FlowDefinition,
    registry: &NodeRegistry,
) -> Result<Vec<String>, CompileError> {
    let mut statements = Vec::with_capacity(flow.nodes.len());

    for (position, node) in flow.nodes.iter().enumerate() {
        let component = registry.get(&node.node_type).ok_or_else(|| {
            ValidationError::UnsupportedNodeType {
                node_id: node.id.clone(),
                type_name: node.node_type.clone(),
            }
        })?;

        let node_ref = node.node_ref();
        let payload = BindingPayload {
            id: &node.id,
            node_id: &node_ref,
            index: position + 1,
            stream_flag: true,
            params: &node.params,
            node_type: &node.node_type,
            node_name: &component.component,
            method: node.method.as_deref(),
            url: node.url.as_deref(),
        };

        let json =
            serde_json::to_string(&payload).map_err(|e| CompileError::BindingSerialization {
                node_id: node.id.clone(),
                source: e,
            })?;
        // The payload sits inside single quotes in the target language, so
        // any single quote in the JSON must be escaped to keep the statement
        // parseable.
        let json = json.replace('\'', "\\'");

        statements.push(format!(
            "{}={}.bind(\"param\", '{}');",
            node_ref, component.component, json
        ));
    }

    Ok(statements)
}
