use crate::lexer::tokens::Token;

use super::ast::{AstLeaf, AstList, AstNode};

pub type LeafFactory = fn(Token) -> AstNode;
pub type ListFactory = fn(Vec<AstNode>) -> AstNode;

/// Node shape selected by the grammar author for a rule or element.
///
/// Shapes are resolved when the grammar is assembled. Asking a leaf shape
/// for a composite (or the reverse) is a defect in the grammar, so it panics
/// instead of surfacing as a parse error.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Leaf(LeafFactory),
    List(ListFactory),
}

impl Shape {
    /// Plain `AstLeaf`.
    pub fn leaf() -> Shape {
        Shape::Leaf(AstLeaf::create)
    }

    /// Plain `AstList`, collapsing a single child.
    pub fn list() -> Shape {
        Shape::List(AstList::create)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Shape::Leaf(_))
    }

    pub fn make_leaf(&self, token: Token) -> AstNode {
        match self {
            Shape::Leaf(factory) => factory(token),
            Shape::List(_) => panic!(
                "list shape used to build a leaf from token {:?} at line {}",
                token.value, token.line
            ),
        }
    }

    pub fn make_list(&self, children: Vec<AstNode>) -> AstNode {
        match self {
            Shape::List(factory) => factory(children),
            Shape::Leaf(_) => panic!(
                "leaf shape used to build a node from {} children",
                children.len()
            ),
        }
    }
}
