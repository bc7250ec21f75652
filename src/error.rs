use thiserror::Error;

/// Errors raised while checking a flow's structural well-formedness.
///
/// Validation runs before any structuring; each variant is fatal and aborts
/// the compilation with no partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("flow has no start node")]
    MissingStart,

    #[error("flow has more than one start node")]
    MultipleStart,

    #[error("flow has no end node")]
    MissingEnd,

    #[error("node '{node_id}' has an unregistered or invalid type: '{type_name}'")]
    UnsupportedNodeType { node_id: String, type_name: String },

    #[error("duplicate node id: '{0}'")]
    DuplicateNodeId(String),

    #[error("edge '{0}' references a node id that does not exist")]
    DanglingEdge(String),

    #[error("node '{0}' is not connected by any edge")]
    IsolatedNode(String),
}

/// Errors raised while turning the indexed graph into a control expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("cycle detected at node '{0}'")]
    CycleDetected(String),

    #[error("condition node '{0}' has no outgoing branches configured")]
    UnconfiguredCondition(String),
}

/// Top-level error type returned by [`Compiler::compile`](crate::compiler::Compiler::compile).
#[derive(Error, Debug)]
pub enum CompileError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error("failed to serialize binding parameters for node '{node_id}': {source}")]
    BindingSerialization {
        node_id: String,
        source: serde_json::Error,
    },
}

/// Errors that can occur when converting a custom editor format into a
/// keiro [`FlowDefinition`](crate::flow::FlowDefinition).
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("invalid flow document: {0}")]
    InvalidDocument(String),
}
