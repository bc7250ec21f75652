use crate::ast::Expression;
use crate::error::{CompileError, ValidationError};
use crate::flow::FlowDefinition;
use ahash::AHashMap;

mod binding;
mod indexing;
mod registry;
mod structuring;
mod validation;

pub use indexing::GraphIndex;
pub use registry::{NodeComponent, NodeKind, NodeRegistry};

use structuring::FlowStructurer;

/// The result of one compilation: binding statements in node declaration
/// order plus the structured root expression.
pub struct CompilationOutput {
    pub bindings: Vec<String>,
    pub expression: Expression,
}

impl CompilationOutput {
    /// The final text artifact handed to the execution engine: all binding
    /// statements newline-joined, followed by the rendered expression.
    pub fn artifact(&self) -> String {
        let mut text = String::new();
        for statement in &self.bindings {
            text.push_str(statement);
            text.push('\n');
        }
        text.push_str(&self.expression.to_string());
        text
    }
}

/// Compiles a [`FlowDefinition`] into an execution-engine program.
///
/// Compilation is synchronous and pure: the compiler holds an immutable flow
/// and registry, derives its indexes per call, and either returns a complete
/// [`CompilationOutput`] or fails with a typed [`CompileError`], never a
/// partial artifact.
pub struct Compiler {
    flow: FlowDefinition,
    registry: NodeRegistry,
}

/// Configures a [`Compiler`], most importantly its node type registry.
pub struct CompilerBuilder {
    flow: FlowDefinition,
    registry: NodeRegistry,
}

impl CompilerBuilder {
    pub fn new(flow: FlowDefinition) -> Self {
        Self {
            flow,
            registry: NodeRegistry::with_defaults(),
        }
    }

    /// Registers an additional node type and the component it binds to.
    pub fn with_component(mut self, type_name: &str, component: &str, kind: NodeKind) -> Self {
        self.registry.register(type_name, component, kind);
        self
    }

    /// Maps a foreign type name onto an already-registered built-in, so
    /// graphs from editors with different naming conventions compile without
    /// a custom conversion layer.
    pub fn with_type_alias(mut self, user_type: &str, builtin_type: &str) -> Self {
        if let Some(entry) = self.registry.get(builtin_type).cloned() {
            self.registry.register(user_type, &entry.component, entry.kind);
        }
        self
    }

    /// Replaces the whole registry, dropping the defaults.
    pub fn with_registry(mut self, registry: NodeRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            flow: self.flow,
            registry: self.registry,
        }
    }
}

impl Compiler {
    pub fn builder(flow: FlowDefinition) -> CompilerBuilder {
        CompilerBuilder::new(flow)
    }

    /// Validates the flow, structures it from its start node, and emits the
    /// binding statements.
    pub fn compile(&self) -> Result<CompilationOutput, CompileError> {
        validation::validate(&self.flow, &self.registry)?;

        let index = GraphIndex::build(&self.flow);
        let kinds: AHashMap<String, NodeKind> = self
            .flow
            .nodes
            .iter()
            .filter_map(|node| {
                self.registry
                    .kind_of(&node.node_type)
                    .map(|kind| (node.id.clone(), kind))
            })
            .collect();

        // Validation guarantees exactly one start node.
        let start = self
            .flow
            .nodes
            .iter()
            .find(|node| self.registry.kind_of(&node.node_type) == Some(NodeKind::Start))
            .ok_or(ValidationError::MissingStart)?;

        let expression = FlowStructurer::new(&index, &kinds).structure(&start.id)?;
        let bindings = binding::emit_bindings(&self.flow, &self.registry)?;

        Ok(CompilationOutput {
            bindings,
            expression,
        })
    }

    /// Convenience wrapper returning the final artifact text directly.
    pub fn compile_to_string(&self) -> Result<String, CompileError> {
        self.compile().map(|output| output.artifact())
    }
}
