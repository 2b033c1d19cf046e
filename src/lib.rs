#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Returns the text of the 1-based `line` of `source`, without its line break.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }
    source.lines().nth(line - 1)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line() {
        let source = "Hello, world!\nsecond\n\nTesting { }\n";
        assert_eq!(super::get_line(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_line(source, 3), Some(""));
        assert_eq!(super::get_line(source, 4), Some("Testing { }"));
        assert_eq!(super::get_line(source, 5), None);
        assert_eq!(super::get_line(source, 0), None);
    }

    #[test]
    fn test_format_error() {
        let source = "a = 1\nb = = 2\n";
        let bad = crate::lexer::tokens::Token::identifier("=", 2);
        let error = crate::errors::errors::Error::expected("operand", bad);

        let rendered = super::format_error(&error, source);
        assert_eq!(
            rendered,
            "Error: Expected (`operand` expected)\n  |\n2 | b = = 2\n"
        );
    }
}

/// Renders `error` against the source it came from.
///
/// ```text
/// Error: Expected (`)` expected)
///    |
/// 20 | print(a
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let line = error.get_line();
    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("{:>padding$}\n", "|"));

    if let Some(text) = get_line(source, line) {
        out.push_str(&format!("{} | {}\n", line_string, text.trim()));
    }

    out
}
