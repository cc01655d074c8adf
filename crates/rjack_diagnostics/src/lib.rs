//! rjack_diagnostics: Structured error values for the Jack front-end.
//!
//! Two tiers of failure, both fatal for the compilation unit they occur in:
//! [`LexError`] surfaces while tokenizing, [`SyntaxError`] while parsing.
//! Neither tier attempts recovery; the first error aborts the unit and is
//! propagated to the driver, which decides whether to continue with other
//! units. Semantic checks (undeclared names, type mismatches) belong to a
//! later stage and are not represented here.

use rjack_core::text::TextSpan;
use thiserror::Error;

/// An error produced while tokenizing a compilation unit.
///
/// Every variant carries the 1-based source line it was detected on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("line {line}: illegal character '{ch}'")]
    IllegalCharacter { ch: char, line: u32 },

    /// A string constant interrupted by a newline or end of input.
    #[error("line {line}: unterminated string constant")]
    UnterminatedString { line: u32 },

    /// A block comment opener with no matching `*/` before end of input.
    /// The line is that of the opener.
    #[error("line {line}: unterminated block comment")]
    UnterminatedComment { line: u32 },

    /// An integer constant above 32767.
    #[error("line {line}: integer constant {text} is out of range (maximum 32767)")]
    IntegerOutOfRange { text: String, line: u32 },
}

impl LexError {
    /// The 1-based line this error was detected on.
    pub fn line(&self) -> u32 {
        match *self {
            LexError::IllegalCharacter { line, .. }
            | LexError::UnterminatedString { line }
            | LexError::UnterminatedComment { line }
            | LexError::IntegerOutOfRange { line, .. } => line,
        }
    }
}

/// An error produced by the parser on the first unexpected token.
///
/// `expected_one_of` is the set of token descriptions the failing production
/// would have accepted; `found` describes the token actually seen (or end of
/// input). `span` locates the offending token and is `None` exactly when the
/// input ended early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: expected {}, found {found}", one_of(.expected_one_of))]
pub struct SyntaxError {
    pub expected_one_of: Vec<&'static str>,
    pub found: String,
    pub line: u32,
    pub span: Option<TextSpan>,
}

fn one_of(expected: &[&'static str]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [single] => (*single).to_string(),
        _ => format!("one of {}", expected.join(", ")),
    }
}

/// The unit-level error: either tier aborts the current compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl Error {
    /// The 1-based line the unit failed on.
    pub fn line(&self) -> u32 {
        match self {
            Error::Lex(e) => e.line(),
            Error::Syntax(e) => e.line,
        }
    }

    /// The byte span of the offending token, when one exists.
    pub fn span(&self) -> Option<TextSpan> {
        match self {
            Error::Lex(_) => None,
            Error::Syntax(e) => e.span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_display() {
        let err = LexError::IntegerOutOfRange {
            text: "99999".to_string(),
            line: 7,
        };
        assert_eq!(
            err.to_string(),
            "line 7: integer constant 99999 is out of range (maximum 32767)"
        );
        assert_eq!(err.line(), 7);
    }

    #[test]
    fn syntax_error_display_single() {
        let err = SyntaxError {
            expected_one_of: vec!["';'"],
            found: "'}'".to_string(),
            line: 3,
            span: Some(TextSpan::new(10, 1)),
        };
        assert_eq!(err.to_string(), "line 3: expected ';', found '}'");
    }

    #[test]
    fn syntax_error_display_set() {
        let err = SyntaxError {
            expected_one_of: vec!["'let'", "'if'", "'while'"],
            found: "end of input".to_string(),
            line: 12,
            span: None,
        };
        assert_eq!(
            err.to_string(),
            "line 12: expected one of 'let', 'if', 'while', found end of input"
        );
    }

    #[test]
    fn unit_error_wraps_both_tiers() {
        let lex: Error = LexError::UnterminatedString { line: 2 }.into();
        assert_eq!(lex.line(), 2);
        assert_eq!(lex.span(), None);

        let syn: Error = SyntaxError {
            expected_one_of: vec!["identifier"],
            found: "'{'".to_string(),
            line: 1,
            span: Some(TextSpan::new(6, 1)),
        }
        .into();
        assert_eq!(syn.line(), 1);
        assert_eq!(syn.span(), Some(TextSpan::new(6, 1)));
    }
}
