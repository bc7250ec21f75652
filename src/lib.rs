//! # Keiro - Flow Graph Structuring Compiler
//!
//! **Keiro** compiles visually-authored process graphs (typed nodes joined by
//! directed edges, as produced by a node-based flow editor) into nested
//! textual expressions in a structured flow-control language (`THEN`, `WHEN`,
//! `IF`/`ELIF`/`ELSE`) that a separate execution engine interprets.
//!
//! The hard part is the structuring itself: deciding, for every node with
//! more than one outgoing edge, whether its branches reconverge and where,
//! and emitting correctly nested syntax without duplicating shared downstream
//! work or looping forever on cyclic input.
//!
//! ## Core Workflow
//!
//! The compiler is format-agnostic and operates on a canonical
//! [`FlowDefinition`](flow::FlowDefinition):
//!
//! 1.  **Load your graph**: parse the editor payload with
//!     [`FlowDocument`](flow::FlowDocument), or implement
//!     [`IntoFlow`](flow::IntoFlow) for a custom format.
//! 2.  **Configure**: use [`Compiler::builder`](compiler::Compiler::builder)
//!     to register any node types beyond the built-in five.
//! 3.  **Compile**: validation, graph indexing, structuring, and binding
//!     emission run in one synchronous call that either returns the complete
//!     program text or a typed error.
//!
//! ## Quick Start
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! fn node(id: &str, node_type: &str) -> FlowNodeDefinition {
//!     FlowNodeDefinition {
//!         id: id.to_string(),
//!         node_type: node_type.to_string(),
//!         title: String::new(),
//!         params: Vec::new(),
//!         method: None,
//!         url: None,
//!     }
//! }
//!
//! fn edge(id: &str, source: &str, target: &str) -> FlowEdgeDefinition {
//!     FlowEdgeDefinition {
//!         id: id.to_string(),
//!         source: source.to_string(),
//!         target: target.to_string(),
//!         source_handle: None,
//!         target_handle: None,
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let flow = FlowDefinition {
//!         nodes: vec![node("s1", "start"), node("c1", "code"), node("e1", "end")],
//!         edges: vec![edge("edge1", "s1", "c1"), edge("edge2", "c1", "e1")],
//!     };
//!
//!     let output = Compiler::builder(flow).build().compile()?;
//!     assert_eq!(output.expression.to_string(), "THEN(_s1, THEN(_c1, _e1))");
//!     println!("{}", output.artifact());
//!     Ok(())
//! }
//! ```

pub mod ast;
pub mod compiler;
pub mod error;
pub mod flow;
pub mod prelude;
