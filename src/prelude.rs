//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and traits from the keiro crate.
//! Import this module to get access to the core functionality without having
//! to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use keiro::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/flow.json")?;
//! let flow = FlowDocument::from_json(&json)?.into_flow()?;
//! let program = Compiler::builder(flow).build().compile_to_string()?;
//! println!("{}", program);
//! # Ok(())
//! # }
//! ```

// Core compilation
pub use crate::compiler::{CompilationOutput, Compiler, CompilerBuilder};

// Node type registry
pub use crate::compiler::{NodeComponent, NodeKind, NodeRegistry};

// Expression tree
pub use crate::ast::Expression;

// Flow model and conversion
pub use crate::flow::{
    FlowDefinition, FlowDocument, FlowEdgeDefinition, FlowNodeDefinition, IntoFlow,
    ParamDefinition,
};

// Error types
pub use crate::error::{CompileError, FlowConversionError, StructureError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
