use std::{collections::HashSet, rc::Rc};

use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{AstLeaf, AstNode},
        factory::Shape,
    },
    errors::errors::Error,
    lexer::{stream::TokenStream, tokens::Token},
};

use super::{
    lookups::{Operators, Precedence},
    parser::Parser,
};

/// Identifier texts an identifier leaf must refuse.
pub type Reserved = Rc<HashSet<String>>;

/// Builds a reserved-word set from literal texts.
pub fn reserved(words: &[&str]) -> Reserved {
    Rc::new(words.iter().map(|word| String::from(*word)).collect())
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Repeat {
    ZeroOrMore,
    ZeroOrOne,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Emit {
    Keep,
    Discard,
}

#[derive(Clone, Debug)]
pub enum TokenClass {
    /// Any identifier whose text is not reserved.
    Identifier(Reserved),
    Number,
    StringLiteral,
}

impl TokenClass {
    pub fn test(&self, token: &Token) -> bool {
        match self {
            TokenClass::Identifier(reserved) => {
                token.is_identifier() && !reserved.contains(token.text())
            }
            TokenClass::Number => token.is_number(),
            TokenClass::StringLiteral => token.is_string(),
        }
    }
}

/// One step of a grammar rule.
///
/// Every variant answers `matches` by peeking only, and `parse` consumes the
/// tokens it covers and appends whatever nodes it produces to `res`.
#[derive(Clone, Debug)]
pub enum Element {
    /// Runs another rule and appends its single result.
    Delegate(Parser),
    /// The first rule whose lookahead matches is used.
    Alternation(Vec<Parser>),
    Repetition {
        rule: Parser,
        mode: Repeat,
    },
    TokenLeaf {
        class: TokenClass,
        shape: Shape,
    },
    /// One identifier token whose text is among `texts`.
    Keyword {
        texts: Vec<String>,
        emit: Emit,
    },
    /// Operator-precedence expression over `operand`.
    Expression {
        operand: Parser,
        operators: Rc<Operators>,
        shape: Shape,
    },
}

impl Element {
    pub fn matches<S: TokenStream + ?Sized>(&self, tokens: &S) -> bool {
        match self {
            Element::Delegate(rule) => rule.matches(tokens),
            Element::Alternation(choices) => choose(choices, tokens).is_some(),
            Element::Repetition { rule, .. } => rule.matches(tokens),
            Element::TokenLeaf { class, .. } => class.test(tokens.peek(0)),
            Element::Keyword { texts, .. } => is_keyword(texts, tokens.peek(0)),
            Element::Expression { operand, .. } => operand.matches(tokens),
        }
    }

    pub fn parse<S: TokenStream + ?Sized>(
        &self,
        tokens: &mut S,
        res: &mut Vec<AstNode>,
    ) -> Result<(), Error> {
        match self {
            Element::Delegate(rule) => {
                res.push(rule.parse(tokens)?);
            }
            Element::Alternation(choices) => match choose(choices, &*tokens) {
                Some(rule) => res.push(rule.parse(tokens)?),
                None => {
                    debug!(line = tokens.peek(0).line, "no alternative matches");
                    return Err(Error::unexpected(tokens.peek(0).clone()));
                }
            },
            Element::Repetition { rule, mode } => {
                while rule.matches(&*tokens) {
                    let node = rule.parse(tokens)?;
                    // Empty default lists come from zero-width matches; keep them out.
                    if !node.is_plain_list() || node.num_children() > 0 {
                        res.push(node);
                    }
                    if *mode == Repeat::ZeroOrOne {
                        break;
                    }
                }
            }
            Element::TokenLeaf { class, shape } => {
                let token = tokens.read();
                if !class.test(&token) {
                    return Err(Error::unexpected(token));
                }
                trace!(token = %token, line = token.line, "leaf");
                res.push(shape.make_leaf(token));
            }
            Element::Keyword { texts, emit } => {
                let token = tokens.read();
                if !is_keyword(texts, &token) {
                    return Err(match texts.first() {
                        Some(first) => Error::expected(first, token),
                        None => Error::unexpected(token),
                    });
                }
                trace!(token = %token, line = token.line, "keyword");
                if *emit == Emit::Keep {
                    res.push(AstLeaf::create(token));
                }
            }
            Element::Expression {
                operand,
                operators,
                shape,
            } => {
                let climber = Climber {
                    operand,
                    operators: &**operators,
                    shape,
                };
                res.push(climber.parse(tokens)?);
            }
        }

        Ok(())
    }

    /// Gives `rule` priority over every existing alternative.
    ///
    /// Returns false, leaving the element untouched, for non-alternations.
    pub fn insert(&mut self, rule: Parser) -> bool {
        match self {
            Element::Alternation(choices) => {
                choices.insert(0, rule);
                true
            }
            _ => false,
        }
    }
}

fn choose<'a, S: TokenStream + ?Sized>(choices: &'a [Parser], tokens: &S) -> Option<&'a Parser> {
    choices.iter().find(|rule| rule.matches(tokens))
}

fn is_keyword(texts: &[String], token: &Token) -> bool {
    token.is_identifier() && texts.iter().any(|text| text == token.text())
}

/// Precedence climbing over one operand rule and operator table.
struct Climber<'a> {
    operand: &'a Parser,
    operators: &'a Operators,
    shape: &'a Shape,
}

impl Climber<'_> {
    fn parse<S: TokenStream + ?Sized>(&self, tokens: &mut S) -> Result<AstNode, Error> {
        let mut right = self.operand.parse(tokens)?;
        while let Some(prec) = self.next_operator(&*tokens) {
            right = self.shift(tokens, right, prec)?;
        }

        Ok(right)
    }

    /// Consumes the operator under the cursor and its right operand, folding
    /// in any following operators that bind tighter than `prec`.
    fn shift<S: TokenStream + ?Sized>(
        &self,
        tokens: &mut S,
        left: AstNode,
        prec: Precedence,
    ) -> Result<AstNode, Error> {
        let operator = tokens.read();
        trace!(operator = %operator, precedence = prec.value, "shift");

        let mut right = self.operand.parse(tokens)?;
        while let Some(next) = self
            .next_operator(&*tokens)
            .filter(|next| prec.right_is_expr(next))
        {
            right = self.shift(tokens, right, next)?;
        }

        Ok(self
            .shape
            .make_list(vec![left, AstLeaf::create(operator), right]))
    }

    fn next_operator<S: TokenStream + ?Sized>(&self, tokens: &S) -> Option<Precedence> {
        let token = tokens.peek(0);
        if token.is_identifier() {
            self.operators.get(token.text()).copied()
        } else {
            None
        }
    }
}
