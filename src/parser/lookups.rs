use std::collections::HashMap;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

/// Binding strength of an infix operator. Higher values bind tighter.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Precedence {
    pub value: i32,
    pub assoc: Associativity,
}

impl Precedence {
    pub fn new(value: i32, assoc: Associativity) -> Self {
        Precedence { value, assoc }
    }

    /// Whether an operator of precedence `next`, following this one, must
    /// take this operator's right operand as its own left operand.
    ///
    /// At equal levels the following operator's associativity decides.
    pub fn right_is_expr(&self, next: &Precedence) -> bool {
        match next.assoc {
            Associativity::Left => next.value > self.value,
            Associativity::Right => next.value >= self.value,
        }
    }
}

/// Operator table consulted by the expression element.
///
/// Keyed by operator text; adding an existing name replaces its entry.
#[derive(Debug, Clone, Default)]
pub struct Operators {
    lookup: HashMap<String, Precedence>,
}

impl Operators {
    pub fn new() -> Self {
        Operators {
            lookup: HashMap::new(),
        }
    }

    /// Registers an infix operator.
    ///
    /// # Arguments
    ///
    /// * `name` - Operator text as the lexer produces it
    /// * `value` - Precedence level
    /// * `assoc` - How equal-precedence chains group
    pub fn add(&mut self, name: &str, value: i32, assoc: Associativity) {
        self.lookup
            .insert(String::from(name), Precedence::new(value, assoc));
    }

    pub fn get(&self, name: &str) -> Option<&Precedence> {
        self.lookup.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
