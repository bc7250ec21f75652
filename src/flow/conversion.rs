use super::definition::FlowDefinition;
use crate::error::FlowConversionError;

/// A trait for custom editor data models that can be converted into a keiro
/// [`FlowDefinition`].
///
/// This is the primary extension point for making keiro format-agnostic. The
/// built-in [`FlowDocument`](crate::flow::FlowDocument) covers the stock flow
/// editor payload; implement this trait on your own structs to compile graphs
/// authored in any other tool.
///
/// # Example
///
/// ```rust
/// use keiro::flow::{FlowDefinition, FlowNodeDefinition, IntoFlow};
/// use keiro::error::FlowConversionError;
///
/// struct MyNode { id: String, kind: String }
/// struct MyGraph { nodes: Vec<MyNode> }
///
/// impl IntoFlow for MyGraph {
///     fn into_flow(self) -> Result<FlowDefinition, FlowConversionError> {
///         let nodes = self
///             .nodes
///             .into_iter()
///             .map(|node| FlowNodeDefinition {
///                 id: node.id,
///                 node_type: node.kind,
///                 title: String::new(),
///                 params: Vec::new(),
///                 method: None,
///                 url: None,
///             })
///             .collect();
///
///         Ok(FlowDefinition {
///             nodes,
///             edges: vec![], // convert your edges here as well
///         })
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a keiro-compatible flow graph.
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError>;
}
