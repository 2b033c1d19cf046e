use std::any::Any;

use crate::lexer::tokens::Token;

use super::ast::{leaf_location, list_location, AstNode, AstTree};

// LEAVES

/// Name
/// An identifier leaf.
#[derive(Debug, Clone)]
pub struct Name {
    pub token: Token,
}

impl Name {
    pub fn create(token: Token) -> AstNode {
        AstNode::new(Name { token })
    }

    pub fn name(&self) -> &str {
        self.token.text()
    }
}

impl AstTree for Name {
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

/// Number Literal
/// An integer literal leaf.
#[derive(Debug, Clone)]
pub struct NumberLiteral {
    pub token: Token,
}

impl NumberLiteral {
    pub fn create(token: Token) -> AstNode {
        AstNode::new(NumberLiteral { token })
    }

    pub fn value(&self) -> i64 {
        self.token.number
    }
}

impl AstTree for NumberLiteral {
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

/// String Literal
/// A string literal leaf; the token already holds the unescaped contents.
#[derive(Debug, Clone)]
pub struct StringLiteral {
    pub token: Token,
}

impl StringLiteral {
    pub fn create(token: Token) -> AstNode {
        AstNode::new(StringLiteral { token })
    }

    pub fn value(&self) -> &str {
        self.token.text()
    }
}

impl AstTree for StringLiteral {
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

// COMPOSITES

/// Binary Expression
/// `left operator right`, as produced by the expression element.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub children: Vec<AstNode>,
}

impl BinaryExpr {
    pub fn create(children: Vec<AstNode>) -> AstNode {
        AstNode::new(BinaryExpr { children })
    }

    pub fn left(&self) -> Option<&AstNode> {
        self.children.first()
    }

    pub fn operator(&self) -> Option<&str> {
        self.children
            .get(1)
            .and_then(|op| op.token())
            .map(|token| token.text())
    }

    pub fn right(&self) -> Option<&AstNode> {
        self.children.get(2)
    }
}

impl AstTree for BinaryExpr {
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
