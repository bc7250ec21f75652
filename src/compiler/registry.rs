use ahash::AHashMap;

/// The structural role a node type plays during compilation.
///
/// Exhaustive matching on this enum is what keeps the structurer honest when
/// a new role is added; arbitrary editor type names all collapse onto one of
/// these four roles through the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Entry point; exactly one per flow.
    Start,
    /// Terminal sink; at least one per flow.
    End,
    /// A plain executable step (HTTP request, code block, ...).
    Task,
    /// A branching node compiled to `IF`/`ELIF`/`ELSE`.
    Condition,
}

/// The runtime component a node type binds to, plus its structural role.
#[derive(Debug, Clone)]
pub struct NodeComponent {
    /// Component class name the execution engine resolves, e.g. `HttpNode`.
    pub component: String,
    pub kind: NodeKind,
}

/// Maps editor type names to their components.
///
/// The table is an explicit value handed to the compiler rather than a
/// process-wide static, so tests and embedders can substitute alternate
/// mappings without global side effects.
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    entries: AHashMap<String, NodeComponent>,
}

impl NodeRegistry {
    /// An empty registry with no supported types.
    pub fn empty() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }

    /// The built-in table covering the stock editor node types.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register("start", "StartNode", NodeKind::Start);
        registry.register("end", "EndNode", NodeKind::End);
        registry.register("http-request", "HttpNode", NodeKind::Task);
        registry.register("code", "CodeNode", NodeKind::Task);
        registry.register("condition", "ConditionNode", NodeKind::Condition);
        registry
    }

    /// Registers a type name, replacing any previous entry for it.
    pub fn register(&mut self, type_name: &str, component: &str, kind: NodeKind) {
        self.entries.insert(
            type_name.to_string(),
            NodeComponent {
                component: component.to_string(),
                kind,
            },
        );
    }

    pub fn get(&self, type_name: &str) -> Option<&NodeComponent> {
        self.entries.get(type_name)
    }

    pub fn kind_of(&self, type_name: &str) -> Option<NodeKind> {
        self.entries.get(type_name).map(|entry| entry.kind)
    }

    pub fn is_supported(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
