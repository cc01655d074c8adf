//! The Jack tokenizer.
//!
//! Scans one compilation unit's source text into tokens. Each call to
//! [`Tokenizer::next_token`] first discards trivia (whitespace and the three
//! comment forms), then classifies the next token in priority order:
//! identifier/keyword, integer constant, string constant, symbol. Anything
//! else is an illegal character.

use std::sync::OnceLock;

use rjack_ast::token::{Token, TokenKind};
use rjack_core::text::TextSpan;
use rjack_diagnostics::LexError;
use rustc_hash::FxHashSet;

use crate::char_codes::*;

/// The largest value an integer constant may have.
const MAX_INT_CONSTANT: u32 = 32767;

/// The 21 reserved words of the grammar.
fn reserved_words() -> &'static FxHashSet<&'static str> {
    static WORDS: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    WORDS.get_or_init(|| {
        [
            "class",
            "constructor",
            "function",
            "method",
            "field",
            "static",
            "var",
            "int",
            "char",
            "boolean",
            "void",
            "true",
            "false",
            "null",
            "this",
            "let",
            "do",
            "if",
            "else",
            "while",
            "return",
        ]
        .into_iter()
        .collect()
    })
}

/// The tokenizer converts Jack source text into tokens.
pub struct Tokenizer {
    /// The source text being scanned.
    text: Vec<char>,
    /// Current position in the text, as a char index.
    pos: usize,
    /// Current position in the text, as a byte offset.
    byte_pos: u32,
    /// Current 1-based line number.
    line: u32,
}

impl Tokenizer {
    /// Create a new tokenizer for the given source text.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            pos: 0,
            byte_pos: 0,
            line: 1,
        }
    }

    /// The 1-based line the scan position is currently on. After the last
    /// token this is the line end-of-input diagnostics should report.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Look at the character at the current position without advancing.
    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    /// Look at the character at position pos + offset.
    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    /// Whether we've reached the end of the text.
    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Advance past the current character, tracking line and byte position.
    fn bump(&mut self) {
        let ch = self.text[self.pos];
        if is_line_break(ch) {
            self.line += 1;
        }
        self.byte_pos += ch.len_utf8() as u32;
        self.pos += 1;
    }

    /// Scan the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_trivia()?;

        if self.is_eof() {
            return Ok(None);
        }

        let start = self.byte_pos;
        let line = self.line;
        let ch = self.text[self.pos];

        let token = if is_identifier_start(ch) {
            self.scan_identifier(start, line)
        } else if is_digit(ch) {
            self.scan_integer(start, line)?
        } else if ch == '"' {
            self.scan_string(start, line)?
        } else if is_symbol(ch) {
            self.bump();
            self.make_token(TokenKind::Symbol, ch.to_string(), None, line, start)
        } else {
            return Err(LexError::IllegalCharacter { ch, line });
        };

        Ok(Some(token))
    }

    fn make_token(
        &self,
        kind: TokenKind,
        lexeme: String,
        value: Option<u16>,
        line: u32,
        start: u32,
    ) -> Token {
        Token {
            kind,
            lexeme,
            value,
            line,
            span: TextSpan::from_bounds(start, self.byte_pos),
        }
    }

    /// Skip whitespace and comments. String constants are not involved:
    /// trivia is only skipped between tokens, so a `//` or `/*` inside a
    /// string constant is scanned as string text, never as a comment.
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            if self.is_eof() {
                return Ok(());
            }
            let ch = self.text[self.pos];
            if is_white_space(ch) {
                self.bump();
                continue;
            }
            if ch == '/' {
                match self.char_at(1) {
                    Some('/') => {
                        // Line comment: everything to the end of the line.
                        self.bump();
                        self.bump();
                        while !self.is_eof() && !is_line_break(self.text[self.pos]) {
                            self.bump();
                        }
                        continue;
                    }
                    Some('*') => {
                        // Block comment, `/** ... */` doc form included.
                        let opened_on = self.line;
                        self.bump();
                        self.bump();
                        self.skip_block_comment(opened_on)?;
                        continue;
                    }
                    _ => return Ok(()),
                }
            }
            return Ok(());
        }
    }

    fn skip_block_comment(&mut self, opened_on: u32) -> Result<(), LexError> {
        loop {
            if self.is_eof() {
                return Err(LexError::UnterminatedComment { line: opened_on });
            }
            if self.text[self.pos] == '*' && self.char_at(1) == Some('/') {
                self.bump();
                self.bump();
                return Ok(());
            }
            self.bump();
        }
    }

    /// Maximal run of identifier characters; reserved words become keywords.
    fn scan_identifier(&mut self, start: u32, line: u32) -> Token {
        let mut lexeme = String::new();
        while let Some(ch) = self.current_char() {
            if !is_identifier_part(ch) {
                break;
            }
            lexeme.push(ch);
            self.bump();
        }

        let kind = if reserved_words().contains(lexeme.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.make_token(kind, lexeme, None, line, start)
    }

    /// Maximal run of digits, range-checked against [`MAX_INT_CONSTANT`].
    fn scan_integer(&mut self, start: u32, line: u32) -> Result<Token, LexError> {
        let mut lexeme = String::new();
        while let Some(ch) = self.current_char() {
            if !is_digit(ch) {
                break;
            }
            lexeme.push(ch);
            self.bump();
        }

        let value = match lexeme.parse::<u32>() {
            Ok(v) if v <= MAX_INT_CONSTANT => v as u16,
            // Either above the maximum or too long to fit a u32 at all.
            _ => {
                return Err(LexError::IntegerOutOfRange {
                    text: lexeme,
                    line,
                })
            }
        };
        Ok(self.make_token(TokenKind::IntegerConstant, lexeme, Some(value), line, start))
    }

    /// Scan to the closing quote on the same line. The lexeme is the interior
    /// text; the span covers the quotes.
    fn scan_string(&mut self, start: u32, line: u32) -> Result<Token, LexError> {
        self.bump(); // opening quote
        let mut lexeme = String::new();
        loop {
            match self.current_char() {
                None => return Err(LexError::UnterminatedString { line }),
                Some(ch) if is_line_break(ch) => {
                    return Err(LexError::UnterminatedString { line })
                }
                Some('"') => {
                    self.bump();
                    break;
                }
                Some(ch) => {
                    lexeme.push(ch);
                    self.bump();
                }
            }
        }
        Ok(self.make_token(TokenKind::StringConstant, lexeme, None, line, start))
    }
}
