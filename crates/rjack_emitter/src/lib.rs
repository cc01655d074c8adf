//! rjack_emitter: Parse tree to canonical text output.
//!
//! Serializes a completed parse tree into its deterministic, diffable
//! textual form: one open/close tag pair per nonterminal node, one
//! single-line tag pair per terminal wrapping its lexeme. Traversal is
//! pre-order with children in parse order, so equal trees always produce
//! byte-identical output.

use rjack_ast::node::{ParseNode, TreeChild};
use rjack_ast::token::Token;

/// Options for the tree writer.
pub struct WriterOptions {
    /// Indentation string, one repetition per nesting level.
    pub indent_str: String,
    /// Newline string.
    pub new_line: String,
    /// Whether to emit a trailing newline.
    pub trailing_newline: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indent_str: "  ".to_string(),
            new_line: "\n".to_string(),
            trailing_newline: true,
        }
    }
}

/// The tree writer converts parse trees to text.
pub struct TreeWriter {
    output: String,
    indent_level: u32,
    options: WriterOptions,
}

impl Default for TreeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeWriter {
    pub fn new() -> Self {
        Self::with_options(WriterOptions::default())
    }

    pub fn with_options(options: WriterOptions) -> Self {
        Self {
            output: String::with_capacity(4096),
            indent_level: 0,
            options,
        }
    }

    /// Write a whole tree to a string.
    pub fn write_tree(&mut self, root: &ParseNode) -> String {
        self.output.clear();
        self.indent_level = 0;
        self.write_node(root);
        if !self.options.trailing_newline {
            let trimmed = self.output.trim_end_matches(&self.options.new_line).len();
            self.output.truncate(trimmed);
        }
        self.output.clone()
    }

    fn write_node(&mut self, node: &ParseNode) {
        self.write_indent();
        self.output.push('<');
        self.output.push_str(node.kind.as_str());
        self.output.push('>');
        self.write_newline();

        self.indent_level += 1;
        for child in &node.children {
            match child {
                TreeChild::Token(token) => self.write_token(token),
                TreeChild::Node(nested) => self.write_node(nested),
            }
        }
        self.indent_level -= 1;

        self.write_indent();
        self.output.push_str("</");
        self.output.push_str(node.kind.as_str());
        self.output.push('>');
        self.write_newline();
    }

    fn write_token(&mut self, token: &Token) {
        let tag = token.kind.as_str();
        self.write_indent();
        self.output.push('<');
        self.output.push_str(tag);
        self.output.push_str("> ");
        self.write_escaped(&token.lexeme);
        self.output.push_str(" </");
        self.output.push_str(tag);
        self.output.push('>');
        self.write_newline();
    }

    /// Escape the characters that would otherwise read as markup.
    fn write_escaped(&mut self, lexeme: &str) {
        for ch in lexeme.chars() {
            match ch {
                '&' => self.output.push_str("&amp;"),
                '<' => self.output.push_str("&lt;"),
                '>' => self.output.push_str("&gt;"),
                '"' => self.output.push_str("&quot;"),
                _ => self.output.push(ch),
            }
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.options.indent_str);
        }
    }

    fn write_newline(&mut self) {
        self.output.push_str(&self.options.new_line);
    }
}

/// Serialize a tree with the default options.
pub fn write_tree(root: &ParseNode) -> String {
    TreeWriter::new().write_tree(root)
}
