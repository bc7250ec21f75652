use crate::flow::FlowDefinition;
use ahash::AHashMap;

/// Forward adjacency and in-degree counts derived from the edge list.
///
/// Adjacency preserves edge declaration order; that order is observable in
/// emitted `WHEN` and `IF` branch order, so it must never be resorted by id
/// or hash. In-degree counts distinct incoming edges, not distinct sources:
/// two edges from different nodes onto the same target both count, which is
/// what marks the target as a join point.
///
/// Rebuilt per compilation and only read afterwards; a pure function of the
/// edge list with no error conditions.
#[derive(Debug, Default)]
pub struct GraphIndex {
    adjacency: AHashMap<String, Vec<String>>,
    in_degree: AHashMap<String, usize>,
}

impl GraphIndex {
    pub fn build(flow: &FlowDefinition) -> Self {
        let mut adjacency: AHashMap<String, Vec<String>> = AHashMap::new();
        let mut in_degree: AHashMap<String, usize> = AHashMap::new();

        for edge in &flow.edges {
            adjacency
                .entry(edge.source.clone())
                .or_default()
                .push(edge.target.clone());
            *in_degree.entry(edge.target.clone()).or_default() += 1;
        }

        Self {
            adjacency,
            in_degree,
        }
    }

    /// Outgoing targets of `node_id` in edge declaration order.
    pub fn targets(&self, node_id: &str) -> &[String] {
        self.adjacency
            .get(node_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn in_degree(&self, node_id: &str) -> usize {
        self.in_degree.get(node_id).copied().unwrap_or(0)
    }
}
