use crate::expression::Expression;
use crate::node::Node;
use serde::{Deserialize, Serialize};

/// A modifier attached to a function, by name. The host does not resolve
/// modifier bodies for us; detectors match on the name alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub name: String,
}

impl Modifier {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// A function descriptor: name, canonical signature, modifiers, and the
/// ordered node sequence of its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub signature: String,
    pub modifiers: Vec<Modifier>,
    pub nodes: Vec<Node>,
}

impl Function {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            signature: format!("{}()", name),
            modifiers: Vec::new(),
            nodes: Vec::new(),
        }
    }

    pub fn with_signature(mut self, signature: &str) -> Self {
        self.signature = signature.to_string();
        self
    }

    pub fn with_modifier(mut self, name: &str) -> Self {
        self.modifiers.push(Modifier::new(name));
        self
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_nodes(mut self, nodes: Vec<Node>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Exact, case-sensitive modifier lookup.
    pub fn has_modifier(&self, name: &str) -> bool {
        self.modifiers.iter().any(|m| m.name == name)
    }

    /// The expression roots of this function's nodes, in node order.
    pub fn expressions(&self) -> impl Iterator<Item = &Expression> {
        self.nodes.iter().filter_map(|n| n.expression.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Expression;
    use crate::node::{Node, NodeType};
    use crate::types::Type;
    use crate::variable::Variable;

    #[test]
    fn expressions_skip_nodes_without_trees() {
        let amount = Variable::local("amount", Type::elementary("uint256"));
        let function = Function::new("withdraw")
            .with_node(Node::new(NodeType::EntryPoint))
            .with_node(Node::expression(Expression::identifier(amount)));
        assert_eq!(function.expressions().count(), 1);
    }

    #[test]
    fn modifier_lookup_is_case_sensitive() {
        let function = Function::new("pause").with_modifier("onlyOwner");
        assert!(function.has_modifier("onlyOwner"));
        assert!(!function.has_modifier("OnlyOwner"));
    }
}
