use super::registry::{NodeKind, NodeRegistry};
use crate::error::ValidationError;
use crate::flow::FlowDefinition;
use ahash::AHashSet;

/// Checks a flow's structural well-formedness before compilation proceeds.
///
/// Checks run in a fixed order and the first failure aborts: start-node
/// cardinality, end-node presence, type support, id uniqueness, edge
/// endpoint resolution, then isolation. Start and end nodes are exempt from
/// the isolation check so a degenerate single-node flow still validates.
pub fn validate(flow: &FlowDefinition, registry: &NodeRegistry) -> Result<(), ValidationError> {
    let start_count = flow
        .nodes
        .iter()
        .filter(|node| registry.kind_of(&node.node_type) == Some(NodeKind::Start))
        .count();
    if start_count == 0 {
        return Err(ValidationError::MissingStart);
    }
    if start_count > 1 {
        return Err(ValidationError::MultipleStart);
    }

    let has_end = flow
        .nodes
        .iter()
        .any(|node| registry.kind_of(&node.node_type) == Some(NodeKind::End));
    if !has_end {
        return Err(ValidationError::MissingEnd);
    }

    for node in &flow.nodes {
        if !registry.is_supported(&node.node_type) {
            return Err(ValidationError::UnsupportedNodeType {
                node_id: node.id.clone(),
                type_name: node.node_type.clone(),
            });
        }
    }

    let mut seen_ids: AHashSet<&str> = AHashSet::with_capacity(flow.nodes.len());
    for node in &flow.nodes {
        if !seen_ids.insert(&node.id) {
            return Err(ValidationError::DuplicateNodeId(node.id.clone()));
        }
    }

    for edge in &flow.edges {
        if !seen_ids.contains(edge.source.as_str()) || !seen_ids.contains(edge.target.as_str()) {
            return Err(ValidationError::DanglingEdge(edge.id.clone()));
        }
    }

    let mut connected: AHashSet<&str> = AHashSet::new();
    for edge in &flow.edges {
        connected.insert(&edge.source);
        connected.insert(&edge.target);
    }
    for node in &flow.nodes {
        let exempt = matches!(
            registry.kind_of(&node.node_type),
            Some(NodeKind::Start) | Some(NodeKind::End)
        );
        if !exempt && !connected.contains(node.id.as_str()) {
            return Err(ValidationError::IsolatedNode(node.id.clone()));
        }
    }

    Ok(())
}
