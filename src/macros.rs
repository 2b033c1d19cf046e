//! Utility macros for the grammar engine.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `operators!` - Builds an operator table from `name => (precedence, assoc)` pairs

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's text
/// * `$number` - The numeric value (ignored unless the kind is `Number`)
/// * `$line` - The source line
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 42, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $number:expr, $line:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            number: $number,
            line: $line,
        }
    };
}

/// Builds an `Operators` table.
///
/// # Example
///
/// ```ignore
/// let ops = operators! {
///     "=" => (1, Right),
///     "+" => (2, Left),
///     "*" => (3, Left),
/// };
/// ```
#[macro_export]
macro_rules! operators {
    ($($name:literal => ($prec:expr, $assoc:ident)),* $(,)?) => {{
        let mut ops = $crate::parser::lookups::Operators::new();
        $(
            ops.add($name, $prec, $crate::parser::lookups::Associativity::$assoc);
        )*
        ops
    }};
}
