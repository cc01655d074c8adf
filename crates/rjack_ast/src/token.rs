//! Token values produced by the tokenizer.

use rjack_core::text::TextSpan;

/// The lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One of the 21 reserved words.
    Keyword,
    /// One of the 19 single-character symbols.
    Symbol,
    /// A decimal integer constant in 0..=32767.
    IntegerConstant,
    /// A string constant; the lexeme is the interior text, quotes excluded.
    StringConstant,
    /// A name: letters, digits, and underscores, not starting with a digit.
    Identifier,
}

impl TokenKind {
    /// The tag name used for this kind in the canonical tree serialization.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Symbol => "symbol",
            TokenKind::IntegerConstant => "integerConstant",
            TokenKind::StringConstant => "stringConstant",
            TokenKind::Identifier => "identifier",
        }
    }
}

/// A single token. Produced once by the tokenizer and never mutated; the
/// parser copies tokens verbatim into the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical class.
    pub kind: TokenKind,
    /// The exact source text (for strings, the text between the quotes).
    pub lexeme: String,
    /// The numeric value for integer constants, `None` otherwise.
    pub value: Option<u16>,
    /// The 1-based line the token starts on.
    pub line: u32,
    /// The byte span of the token in the source, quotes included for strings.
    pub span: TextSpan,
}

impl Token {
    /// Whether this token is the given keyword.
    #[inline]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == word
    }

    /// Whether this token is the given symbol.
    #[inline]
    pub fn is_symbol(&self, sym: &str) -> bool {
        self.kind == TokenKind::Symbol && self.lexeme == sym
    }

    /// Whether this token is any of the given keywords.
    pub fn is_one_of_keywords(&self, words: &[&str]) -> bool {
        self.kind == TokenKind::Keyword && words.iter().any(|w| self.lexeme == *w)
    }

    /// A short description of this token for error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Keyword | TokenKind::Symbol => format!("'{}'", self.lexeme),
            TokenKind::IntegerConstant => format!("integer constant {}", self.lexeme),
            TokenKind::StringConstant => format!("string constant \"{}\"", self.lexeme),
            TokenKind::Identifier => format!("identifier '{}'", self.lexeme),
        }
    }
}
