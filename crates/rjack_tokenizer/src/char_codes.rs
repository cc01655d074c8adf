//! Character predicates used by the tokenizer.

/// Check if a character ends a line.
#[inline]
pub fn is_line_break(ch: char) -> bool {
    ch == '\n'
}

/// Check if a character is whitespace (line breaks included).
#[inline]
pub fn is_white_space(ch: char) -> bool {
    ch.is_whitespace()
}

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character can start an identifier.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Check if a character can continue an identifier.
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Check if a character is one of the 19 fixed symbols.
#[inline]
pub fn is_symbol(ch: char) -> bool {
    matches!(
        ch,
        '{' | '}'
            | '('
            | ')'
            | '['
            | ']'
            | '.'
            | ','
            | ';'
            | '+'
            | '-'
            | '*'
            | '/'
            | '&'
            | '|'
            | '<'
            | '>'
            | '='
            | '~'
    )
}
