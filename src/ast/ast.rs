use std::{any::Any, fmt::Debug, fmt::Display, ops::Deref};

use crate::lexer::tokens::Token;

/// AST Trait
///
/// Defines the behavior shared by every node the grammar engine builds.
/// A node is either a leaf owning one token or a composite owning an
/// ordered list of children; leaves report no children.
pub trait AstTree: Debug {
    /// The ordered children of this node. Empty for leaves.
    fn child_nodes(&self) -> &[AstNode];
    /// Human readable source location, `None` if no token is reachable.
    fn location(&self) -> Option<String>;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the node into an AstNode.
    /// Clone cannot be derived for trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> AstNode;
    /// The owned token, for leaves.
    fn token(&self) -> Option<&Token> {
        None
    }

    fn child(&self, i: usize) -> Option<&AstNode> {
        self.child_nodes().get(i)
    }

    fn num_children(&self) -> usize {
        self.child_nodes().len()
    }

    /// Iterates over the children; call again to restart.
    fn children(&self) -> std::slice::Iter<'_, AstNode> {
        self.child_nodes().iter()
    }
}

/// AST Node
///
/// A wrapper that allows for any node kind to be stored with helper methods
#[derive(Debug)]
pub struct AstNode(Box<dyn AstTree>);

impl AstNode {
    pub fn new<T: AstTree + 'static>(node: T) -> Self {
        AstNode(Box::new(node))
    }

    pub fn is_leaf(&self) -> bool {
        self.0.token().is_some()
    }

    /// True only for the default composite, not for user shapes built on it.
    pub fn is_plain_list(&self) -> bool {
        self.0.as_any().is::<AstList>()
    }

    pub fn downcast_ref<T: AstTree + 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl Deref for AstNode {
    type Target = Box<dyn AstTree>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Clone for AstNode {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

impl Display for AstNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(token) = self.0.token() {
            return write!(f, "{}", token);
        }

        write!(f, "(")?;
        for (i, child) in self.children().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", child)?;
        }
        write!(f, ")")
    }
}

pub(crate) fn leaf_location(token: &Token) -> Option<String> {
    Some(format!("at line {}", token.line))
}

pub(crate) fn list_location(children: &[AstNode]) -> Option<String> {
    children.iter().find_map(|child| child.location())
}

/// Leaf Node
/// Wraps a single token with no further interpretation.
#[derive(Debug, Clone)]
pub struct AstLeaf {
    pub token: Token,
}

impl AstLeaf {
    /// Default leaf factory.
    pub fn create(token: Token) -> AstNode {
        AstNode::new(AstLeaf { token })
    }
}

impl AstTree for AstLeaf {
    fn child_nodes(&self) -> &[AstNode] {
        &[]
    }
    fn location(&self) -> Option<String> {
        leaf_location(&self.token)
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> AstNode {
        AstNode::new(self.clone())
    }
    fn token(&self) -> Option<&Token> {
        Some(&self.token)
    }
}

/// List Node
/// The default composite: an ordered list of children.
#[derive(Debug, Clone)]
pub struct AstList {
    pub children: Vec<AstNode>,
}

impl AstList {
    pub fn new(children: Vec<AstNode>) -> AstNode {
        AstNode::new(AstList { children })
    }

    /// Default composite factory. A single child is returned unwrapped.
    pub fn create(mut children: Vec<AstNode>) -> AstNode {
        if children.len() == 1 {
            if let Some(only) = children.pop() {
                return only;
            }
        }
        AstList::new(children)
    }
}

impl AstTree for AstList {
    fn child_nodes(&self) -> &[AstNode] {
        &self.children
    }
    fn location(&self) -> Option<String> {
        list_location(&self.children)
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> AstNode {
        AstNode::new(self.clone())
    }
}
