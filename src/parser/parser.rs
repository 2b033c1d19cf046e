//! Grammar rules and the builder API used to assemble them.
//!
//! A [`Parser`] is a shared handle to one rule: an ordered list of
//! [`Element`]s plus the composite shape that folds their output into a
//! single node. Handles are cheap to clone, and a handle can be referenced
//! by other rules before its own elements are added, which is how
//! recursive and forward-declared grammars are written:
//!
//! ```ignore
//! let expr = Parser::rule();
//! let primary = Parser::rule().or(&[
//!     Parser::rule().sep(&["("]).ast(&expr).sep(&[")"]),
//!     Parser::rule().number(),
//! ]);
//! expr.expression(&primary, operators! { "+" => (1, Left) });
//! ```
//!
//! Rules must not be modified while a parse is running through them.

use std::{
    cell::{Ref, RefCell, RefMut},
    fmt::Debug,
    rc::Rc,
};

use tracing::trace;

use crate::{
    ast::{
        ast::AstNode,
        factory::Shape,
        nodes::{NumberLiteral, StringLiteral},
    },
    errors::errors::Error,
    lexer::stream::TokenStream,
};

use super::{
    element::{Element, Emit, Repeat, Reserved, TokenClass},
    lookups::Operators,
};

#[derive(Clone, Debug)]
struct Rule {
    elements: Vec<Element>,
    shape: Shape,
}

/// Handle to one grammar rule.
#[derive(Clone)]
pub struct Parser(Rc<RefCell<Rule>>);

impl Parser {
    /// Creates an empty rule folding its output with the default list shape.
    pub fn rule() -> Parser {
        Parser::rule_with(Shape::list())
    }

    /// Creates an empty rule folding its output with `shape`.
    ///
    /// # Panics
    ///
    /// If `shape` is a leaf shape.
    pub fn rule_with(shape: Shape) -> Parser {
        assert_list_shape(&shape);
        Parser(Rc::new(RefCell::new(Rule {
            elements: vec![],
            shape,
        })))
    }

    /// A new rule with the same elements and shape, sharing nothing
    /// mutable with this one.
    pub fn copy(&self) -> Parser {
        Parser(Rc::new(RefCell::new(self.get().clone())))
    }

    /// Whether the rule can start at the current position. Never consumes.
    ///
    /// A rule is decided by its first element; a rule with no elements
    /// matches anything.
    pub fn matches<S: TokenStream + ?Sized>(&self, tokens: &S) -> bool {
        match self.get().elements.first() {
            Some(element) => element.matches(tokens),
            None => true,
        }
    }

    /// Runs every element in order and folds their output into one node.
    pub fn parse<S: TokenStream + ?Sized>(&self, tokens: &mut S) -> Result<AstNode, Error> {
        let rule = self.get();
        trace!(elements = rule.elements.len(), line = tokens.peek(0).line, "rule");

        let mut results = vec![];
        for element in &rule.elements {
            element.parse(tokens, &mut results)?;
        }

        Ok(rule.shape.make_list(results))
    }

    pub fn num_elements(&self) -> usize {
        self.get().elements.len()
    }

    /// Whether both handles point at the same rule.
    pub fn ptr_eq(&self, other: &Parser) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    // Builder API

    /// Drops every element and restores the default list shape.
    pub fn reset(&self) -> Parser {
        self.reset_with(Shape::list())
    }

    pub fn reset_with(&self, shape: Shape) -> Parser {
        assert_list_shape(&shape);
        {
            let mut rule = self.get_mut();
            rule.elements.clear();
            rule.shape = shape;
        }
        self.clone()
    }

    /// Matches one number token, building a `NumberLiteral`.
    pub fn number(&self) -> Parser {
        self.number_with(Shape::Leaf(NumberLiteral::create))
    }

    pub fn number_with(&self, shape: Shape) -> Parser {
        self.token_leaf(TokenClass::Number, shape)
    }

    /// Matches one identifier token that is not in `reserved`, building a
    /// plain leaf.
    pub fn identifier(&self, reserved: &Reserved) -> Parser {
        self.identifier_with(Shape::leaf(), reserved)
    }

    pub fn identifier_with(&self, shape: Shape, reserved: &Reserved) -> Parser {
        self.token_leaf(TokenClass::Identifier(Rc::clone(reserved)), shape)
    }

    /// Matches one string token, building a `StringLiteral`.
    pub fn string(&self) -> Parser {
        self.string_with(Shape::Leaf(StringLiteral::create))
    }

    pub fn string_with(&self, shape: Shape) -> Parser {
        self.token_leaf(TokenClass::StringLiteral, shape)
    }

    /// Matches one of `texts` and keeps it as a leaf.
    pub fn token(&self, texts: &[&str]) -> Parser {
        self.keyword(texts, Emit::Keep)
    }

    /// Matches one of `texts` and drops it.
    pub fn sep(&self, texts: &[&str]) -> Parser {
        self.keyword(texts, Emit::Discard)
    }

    pub fn ast(&self, rule: &Parser) -> Parser {
        self.push(Element::Delegate(rule.clone()))
    }

    pub fn or(&self, rules: &[Parser]) -> Parser {
        self.push(Element::Alternation(rules.to_vec()))
    }

    /// `rule` if it matches, otherwise an empty list that enclosing
    /// repetitions discard.
    pub fn maybe(&self, rule: &Parser) -> Parser {
        self.push(Element::Alternation(vec![rule.clone(), Parser::rule()]))
    }

    /// `rule` zero or one time.
    pub fn option(&self, rule: &Parser) -> Parser {
        self.push(Element::Repetition {
            rule: rule.clone(),
            mode: Repeat::ZeroOrOne,
        })
    }

    /// `rule` zero or more times.
    pub fn repeat(&self, rule: &Parser) -> Parser {
        self.push(Element::Repetition {
            rule: rule.clone(),
            mode: Repeat::ZeroOrMore,
        })
    }

    /// Operator-precedence expression over `operand`. Each operator and its
    /// operands are combined into a three-child default list.
    pub fn expression(&self, operand: &Parser, operators: impl Into<Rc<Operators>>) -> Parser {
        self.expression_with(Shape::list(), operand, operators)
    }

    pub fn expression_with(
        &self,
        shape: Shape,
        operand: &Parser,
        operators: impl Into<Rc<Operators>>,
    ) -> Parser {
        assert_list_shape(&shape);
        self.push(Element::Expression {
            operand: operand.clone(),
            operators: operators.into(),
            shape,
        })
    }

    /// Adds `rule` as the highest-priority alternative of this rule.
    ///
    /// If the rule does not start with an alternation, its current body is
    /// moved into a new rule and this rule becomes `or(rule, body)`.
    pub fn insert_choice(&self, rule: &Parser) -> Parser {
        let inserted = match self.get_mut().elements.first_mut() {
            Some(first) => first.insert(rule.clone()),
            None => false,
        };
        if inserted {
            return self.clone();
        }

        let otherwise = self.copy();
        self.reset();
        self.or(&[rule.clone(), otherwise])
    }

    fn token_leaf(&self, class: TokenClass, shape: Shape) -> Parser {
        if !shape.is_leaf() {
            panic!("token elements need a leaf shape, got {:?}", shape);
        }
        self.push(Element::TokenLeaf { class, shape })
    }

    fn keyword(&self, texts: &[&str], emit: Emit) -> Parser {
        self.push(Element::Keyword {
            texts: texts.iter().map(|text| String::from(*text)).collect(),
            emit,
        })
    }

    fn push(&self, element: Element) -> Parser {
        self.get_mut().elements.push(element);
        self.clone()
    }

    fn get(&self) -> Ref<'_, Rule> {
        self.0.borrow()
    }

    fn get_mut(&self) -> RefMut<'_, Rule> {
        match self.0.try_borrow_mut() {
            Ok(rule) => rule,
            Err(_) => panic!("grammar rule modified while it is being parsed"),
        }
    }
}

impl Debug for Parser {
    // Rules are usually recursive, so only the top level is shown.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.try_borrow() {
            Ok(rule) => write!(
                f,
                "Parser {{ elements: {}, shape: {:?} }}",
                rule.elements.len(),
                rule.shape
            ),
            Err(_) => write!(f, "Parser {{ .. }}"),
        }
    }
}

fn assert_list_shape(shape: &Shape) {
    if shape.is_leaf() {
        panic!("rules and expressions need a list shape, got {:?}", shape);
    }
}

/// Parses a whole token stream with `rule`, requiring every token up to EOF
/// to be consumed.
///
/// Empty default lists produced at the top level are dropped.
///
/// # Panics
///
/// If `rule` matches without consuming a token, since the loop could
/// never advance.
///
/// # Arguments
///
/// * `rule` - The start rule of the grammar
/// * `tokens` - The token stream to parse
///
/// # Returns
///
/// One node per top-level match of `rule`, or the first Error encountered.
pub fn parse_all<S: TokenStream + ?Sized>(rule: &Parser, tokens: &mut S) -> Result<Vec<AstNode>, Error> {
    let mut program = vec![];

    while !tokens.peek(0).is_eof() {
        if !rule.matches(&*tokens) {
            return Err(Error::unexpected(tokens.read()));
        }
        let start = tokens.position();
        let node = rule.parse(tokens)?;
        if tokens.position() == start {
            panic!(
                "start rule consumed nothing at line {}",
                tokens.peek(0).line
            );
        }
        if !node.is_plain_list() || node.num_children() > 0 {
            program.push(node);
        }
    }

    Ok(program)
}
