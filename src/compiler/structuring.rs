use super::indexing::GraphIndex;
use super::registry::NodeKind;
use crate::ast::Expression;
use crate::error::StructureError;
use ahash::{AHashMap, AHashSet};

/// Turns a start node and the indexed graph into a nested control expression.
///
/// The recursion carries the set of node ids on the active call path: a node
/// revisited while still on that path is a cycle, while a node revisited on a
/// different, already-returned path is expected at join points. Each branch
/// descent extends its own copy of the path, so sibling branches can never
/// interfere with each other's cycle tracking.
///
/// Join handling is scoped to parallel fan-outs. `WHEN` branches run
/// concurrently, so a branch stops in front of a merge node (in-degree > 1)
/// and the shared convergence node is emitted exactly once after the `WHEN`.
/// Conditional branches are mutually exclusive, so each inlines its full
/// continuation instead.
pub(crate) struct FlowStructurer<'a> {
    index: &'a GraphIndex,
    kinds: &'a AHashMap<String, NodeKind>,
}

impl<'a> FlowStructurer<'a> {
    pub(crate) fn new(index: &'a GraphIndex, kinds: &'a AHashMap<String, NodeKind>) -> Self {
        Self { index, kinds }
    }

    pub(crate) fn structure(&self, start_id: &str) -> Result<Expression, StructureError> {
        self.structure_node(start_id, &AHashSet::new(), false)
    }

    fn structure_node(
        &self,
        node_id: &str,
        path: &AHashSet<String>,
        in_parallel: bool,
    ) -> Result<Expression, StructureError> {
        if path.contains(node_id) {
            return Err(StructureError::CycleDetected(node_id.to_string()));
        }

        if self.kinds.get(node_id) == Some(&NodeKind::Condition) {
            return self.structure_condition(node_id, path);
        }

        let targets = self.index.targets(node_id);
        match targets {
            [] => Ok(Expression::Leaf(node_id.to_string())),
            [target] => {
                if in_parallel && self.index.in_degree(target) > 1 {
                    // The merge node belongs to the fan-out that factors it out.
                    return Ok(Expression::Leaf(node_id.to_string()));
                }
                let branch_path = extended(path, node_id);
                let rest = self.structure_node(target, &branch_path, in_parallel)?;
                Ok(Expression::Then(vec![
                    Expression::Leaf(node_id.to_string()),
                    rest,
                ]))
            }
            _ => {
                let branch_path = extended(path, node_id);
                let branches = targets
                    .iter()
                    .map(|target| self.structure_node(target, &branch_path, true))
                    .collect::<Result<Vec<_>, _>>()?;

                let mut sequence = vec![
                    Expression::Leaf(node_id.to_string()),
                    Expression::When(branches),
                ];
                if let Some(join) = self.common_convergence(targets) {
                    sequence.push(Expression::Leaf(join));
                }
                Ok(Expression::Then(sequence))
            }
        }
    }

    /// A condition node compiles to `IF` with one branch per outgoing edge;
    /// the `IF` is the node's whole continuation, so it is never wrapped in
    /// an outer `THEN` by its own out-edges.
    ///
    /// Branches leave parallel mode: they are mutually exclusive, so each
    /// inlines its full continuation, and a fan-out further up can no longer
    /// factor anything past this node anyway.
    fn structure_condition(
        &self,
        node_id: &str,
        path: &AHashSet<String>,
    ) -> Result<Expression, StructureError> {
        let targets = self.index.targets(node_id);
        if targets.is_empty() {
            return Err(StructureError::UnconfiguredCondition(node_id.to_string()));
        }

        let branch_path = extended(path, node_id);
        let branches = targets
            .iter()
            .map(|target| self.structure_node(target, &branch_path, false))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Expression::If {
            condition: node_id.to_string(),
            branches,
        })
    }

    /// The single node every parallel branch converges on, if there is one.
    fn common_convergence(&self, heads: &[String]) -> Option<String> {
        let mut shared: Option<String> = None;
        for head in heads {
            let terminal = self.chain_terminal(head)?;
            match &shared {
                None => shared = Some(terminal),
                Some(existing) if *existing == terminal => {}
                Some(_) => return None,
            }
        }
        shared
    }

    /// Follows single-successor nodes forward from `from` until a node with
    /// zero successors (the chain's terminal) or a second fan-out (no unique
    /// terminal). Revisiting a node means the walk entered a cycle, which
    /// also has no terminal.
    fn chain_terminal(&self, from: &str) -> Option<String> {
        let mut current = from;
        let mut seen: AHashSet<&str> = AHashSet::new();
        loop {
            if !seen.insert(current) {
                return None;
            }
            match self.index.targets(current) {
                [] => return Some(current.to_string()),
                [next] => current = next,
                _ => return None,
            }
        }
    }
}

fn extended(path: &AHashSet<String>, node_id: &str) -> AHashSet<String> {
    let mut next = path.clone();
    next.insert(node_id.to_string());
    next
}
