use itertools::Itertools;
use std::fmt;

/// The control expression produced by structuring a flow graph.
///
/// The tree is built bottom-up for a single compilation, rendered through
/// `Display`, and then discarded. Rendering is stable: the same tree always
/// produces the same text, so golden-output tests can compare exact strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// A reference to a bound node, rendered `_<id>`.
    Leaf(String),
    /// Sequential composition. Chains nest two elements at a time; the
    /// factored parallel join uses three (`head`, `WHEN(...)`, `join`).
    Then(Vec<Expression>),
    /// Parallel composition, branches in edge declaration order.
    When(Vec<Expression>),
    /// Conditional composition keyed to a condition node. The first branch is
    /// unconditional, middle branches render as `ELIF` on the same condition,
    /// and the last branch renders as `ELSE` once two or more branches exist.
    If {
        condition: String,
        branches: Vec<Expression>,
    },
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Leaf(id) => write!(f, "_{}", id),
            Expression::Then(parts) => write!(f, "THEN({})", parts.iter().join(", ")),
            Expression::When(branches) => write!(f, "WHEN({})", branches.iter().join(", ")),
            Expression::If {
                condition,
                branches,
            } => {
                write!(f, "IF(_{}", condition)?;
                let last = branches.len().saturating_sub(1);
                for (i, branch) in branches.iter().enumerate() {
                    if i == 0 {
                        write!(f, ", {}", branch)?;
                    } else if i == last {
                        write!(f, ", ELSE({})", branch)?;
                    } else {
                        write!(f, ", ELIF(_{}, {})", condition, branch)?;
                    }
                }
                write!(f, ")")
            }
        }
    }
}
