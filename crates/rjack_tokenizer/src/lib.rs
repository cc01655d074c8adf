//! rjack_tokenizer: Lexer for Jack source code.
//!
//! Converts the source text of one compilation unit into a lazy, single-pass
//! stream of tokens. Comment stripping is the trivia phase of the same scan,
//! so string constants own their boundaries and comment markers inside them
//! are literal text. [`TokenCursor`] adds the bounded two-token lookahead the
//! parser needs; nothing in the pipeline buffers more than that.

mod char_codes;
mod cursor;
mod tokenizer;

pub use cursor::TokenCursor;
pub use tokenizer::Tokenizer;
