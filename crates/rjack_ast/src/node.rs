//! Parse-tree nodes.
//!
//! A [`ParseNode`] owns an ordered list of children, each either a terminal
//! [`Token`] copied verbatim from the tokenizer or a nested node. Child
//! order is significant: it is exactly the order the production's symbols
//! were consumed in, which is what makes the emitted serialization
//! deterministic.

use crate::node_kind::NodeKind;
use crate::token::Token;

/// One child of a parse-tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeChild {
    /// A terminal: a token consumed directly by the production.
    Token(Token),
    /// A nonterminal: a nested node produced by a sub-production.
    Node(ParseNode),
}

impl TreeChild {
    /// This child as a token, if it is one.
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            TreeChild::Token(t) => Some(t),
            TreeChild::Node(_) => None,
        }
    }

    /// This child as a node, if it is one.
    pub fn as_node(&self) -> Option<&ParseNode> {
        match self {
            TreeChild::Token(_) => None,
            TreeChild::Node(n) => Some(n),
        }
    }
}

/// A parse-tree node: a nonterminal kind plus its children in parse order.
///
/// The whole tree is a simple owned tree: every child is exclusively owned
/// by its parent, there are no cycles and no shared subtrees, and ownership
/// of the root passes to the caller when the parse completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    pub kind: NodeKind,
    pub children: Vec<TreeChild>,
}

impl ParseNode {
    /// Create an empty node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Append a terminal child.
    pub fn push_token(&mut self, token: Token) {
        self.children.push(TreeChild::Token(token));
    }

    /// Append a nonterminal child.
    pub fn push_node(&mut self, node: ParseNode) {
        self.children.push(TreeChild::Node(node));
    }

    /// Iterate over the direct child nodes, skipping terminals.
    pub fn child_nodes(&self) -> impl Iterator<Item = &ParseNode> {
        self.children.iter().filter_map(TreeChild::as_node)
    }

    /// Iterate over the direct child tokens, skipping nested nodes.
    pub fn child_tokens(&self) -> impl Iterator<Item = &Token> {
        self.children.iter().filter_map(TreeChild::as_token)
    }

    /// Collect every terminal in the subtree, in parse order.
    pub fn terminals(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        self.collect_terminals(&mut out);
        out
    }

    fn collect_terminals<'a>(&'a self, out: &mut Vec<&'a Token>) {
        for child in &self.children {
            match child {
                TreeChild::Token(t) => out.push(t),
                TreeChild::Node(n) => n.collect_terminals(out),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;
    use rjack_core::text::TextSpan;

    fn token(lexeme: &str) -> Token {
        Token {
            kind: TokenKind::Symbol,
            lexeme: lexeme.to_string(),
            value: None,
            line: 1,
            span: TextSpan::new(0, 1),
        }
    }

    #[test]
    fn children_keep_parse_order() {
        let mut inner = ParseNode::new(NodeKind::Expression);
        inner.push_token(token("1"));

        let mut node = ParseNode::new(NodeKind::LetStatement);
        node.push_token(token("let"));
        node.push_node(inner);
        node.push_token(token(";"));

        assert_eq!(node.children.len(), 3);
        assert_eq!(node.child_tokens().count(), 2);
        assert_eq!(node.child_nodes().count(), 1);

        let terminals = node.terminals();
        let lexemes: Vec<&str> = terminals.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, ["let", "1", ";"]);
    }
}
