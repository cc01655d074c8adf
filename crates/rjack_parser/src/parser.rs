//! The Jack parser implementation.
//!
//! A recursive descent parser over [`TokenCursor`]. Every grammar
//! nonterminal has a `parse_*` routine that verifies its own leading
//! token(s) and appends the consumed terminals and sub-nodes to its node in
//! production order. Statement dispatch needs one token of lookahead; term
//! dispatch needs two (an identifier is only classified once the token
//! after it is known). On any mismatch the routine fails immediately and
//! the whole unit is abandoned.

use rjack_ast::node::ParseNode;
use rjack_ast::node_kind::NodeKind;
use rjack_ast::token::{Token, TokenKind};
use rjack_diagnostics::{Error, SyntaxError};
use rjack_tokenizer::TokenCursor;

/// The binary operators an expression may chain. The chain stays flat:
/// the grammar defines no precedence levels, so the tree records the
/// operator/term pairs in encountered order and nothing re-associates them.
const BINARY_OPS: [&str; 9] = ["+", "-", "*", "/", "&", "|", "<", ">", "="];

/// The keyword constants usable as a term.
const KEYWORD_CONSTANTS: [&str; 4] = ["true", "false", "null", "this"];

/// What the next token can begin, in term position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TermStart {
    /// An integer or string constant.
    Constant,
    /// `true`, `false`, `null`, or `this`.
    KeywordConstant,
    /// `(` opening a parenthesized expression.
    Parenthesized,
    /// `-` or `~` applied to a nested term.
    UnaryOp,
    /// An identifier; classified further by the token after it.
    Name,
    /// Anything else: not a term.
    Other,
}

impl TermStart {
    fn classify(token: &Token) -> TermStart {
        match token.kind {
            TokenKind::IntegerConstant | TokenKind::StringConstant => TermStart::Constant,
            TokenKind::Keyword if KEYWORD_CONSTANTS.contains(&token.lexeme.as_str()) => {
                TermStart::KeywordConstant
            }
            TokenKind::Symbol if token.lexeme == "(" => TermStart::Parenthesized,
            TokenKind::Symbol if token.lexeme == "-" || token.lexeme == "~" => TermStart::UnaryOp,
            TokenKind::Identifier => TermStart::Name,
            _ => TermStart::Other,
        }
    }
}

/// The statement a leading keyword selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatementStart {
    Let,
    If,
    While,
    Do,
    Return,
}

impl StatementStart {
    fn classify(token: &Token) -> Option<StatementStart> {
        if token.kind != TokenKind::Keyword {
            return None;
        }
        match token.lexeme.as_str() {
            "let" => Some(StatementStart::Let),
            "if" => Some(StatementStart::If),
            "while" => Some(StatementStart::While),
            "do" => Some(StatementStart::Do),
            "return" => Some(StatementStart::Return),
            _ => None,
        }
    }
}

/// The parser produces one root Class node from one unit's source text.
pub struct Parser {
    cursor: TokenCursor,
}

impl Parser {
    /// Create a parser over one compilation unit's source text.
    pub fn new(source: &str) -> Self {
        Self {
            cursor: TokenCursor::new(source),
        }
    }

    /// Parse the unit as a single class.
    ///
    /// On success the returned tree owns a verbatim copy of every token the
    /// unit produced; a trailing token after the closing `}` is an error.
    pub fn parse_class(mut self) -> Result<ParseNode, Error> {
        let mut node = ParseNode::new(NodeKind::Class);
        node.push_token(self.expect_keyword("class")?);
        node.push_token(self.expect_identifier()?);
        node.push_token(self.expect_symbol("{")?);

        while self.peek_is_one_of_keywords(&["static", "field"])? {
            node.push_node(self.parse_class_var_dec()?);
        }
        while self.peek_is_one_of_keywords(&["constructor", "function", "method"])? {
            node.push_node(self.parse_subroutine_dec()?);
        }

        node.push_token(self.expect_symbol("}")?);

        // The unit is exactly one class; anything left over is an error.
        if self.cursor.peek()?.is_some() {
            return Err(self.unexpected(vec!["end of input"]));
        }
        Ok(node)
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn parse_class_var_dec(&mut self) -> Result<ParseNode, Error> {
        let mut node = ParseNode::new(NodeKind::ClassVarDec);
        node.push_token(self.expect_one_of_keywords(&["static", "field"])?);
        self.parse_declared_names(&mut node)?;
        Ok(node)
    }

    fn parse_var_dec(&mut self) -> Result<ParseNode, Error> {
        let mut node = ParseNode::new(NodeKind::VarDec);
        node.push_token(self.expect_keyword("var")?);
        self.parse_declared_names(&mut node)?;
        Ok(node)
    }

    /// The shared tail of both declaration forms: one type followed by one
    /// or more comma-separated names. The type appears once; each name is a
    /// sibling child in declaration order.
    fn parse_declared_names(&mut self, node: &mut ParseNode) -> Result<(), Error> {
        node.push_node(self.parse_type()?);
        node.push_token(self.expect_identifier()?);
        while self.peek_is_symbol(",")? {
            node.push_token(self.bump()?);
            node.push_token(self.expect_identifier()?);
        }
        node.push_token(self.expect_symbol(";")?);
        Ok(())
    }

    fn parse_type(&mut self) -> Result<ParseNode, Error> {
        let mut node = ParseNode::new(NodeKind::Type);
        let accepted = self.peek_is_one_of_keywords(&["int", "char", "boolean"])?
            || self.peek_is_identifier()?;
        if !accepted {
            return Err(self.unexpected(vec!["'int'", "'char'", "'boolean'", "identifier"]));
        }
        node.push_token(self.bump()?);
        Ok(node)
    }

    fn parse_subroutine_dec(&mut self) -> Result<ParseNode, Error> {
        let mut node = ParseNode::new(NodeKind::SubroutineDec);
        node.push_token(self.expect_one_of_keywords(&["constructor", "function", "method"])?);
        if self.peek_is_keyword("void")? {
            node.push_token(self.bump()?);
        } else {
            node.push_node(self.parse_type()?);
        }
        node.push_token(self.expect_identifier()?);
        node.push_token(self.expect_symbol("(")?);
        node.push_node(self.parse_parameter_list()?);
        node.push_token(self.expect_symbol(")")?);
        node.push_node(self.parse_subroutine_body()?);
        Ok(node)
    }

    /// Zero or more `type name` pairs; empty exactly when the next token is
    /// the closing `)`.
    fn parse_parameter_list(&mut self) -> Result<ParseNode, Error> {
        let mut node = ParseNode::new(NodeKind::ParameterList);
        if !self.peek_is_symbol(")")? {
            node.push_node(self.parse_type()?);
            node.push_token(self.expect_identifier()?);
            while self.peek_is_symbol(",")? {
                node.push_token(self.bump()?);
                node.push_node(self.parse_type()?);
                node.push_token(self.expect_identifier()?);
            }
        }
        Ok(node)
    }

    fn parse_subroutine_body(&mut self) -> Result<ParseNode, Error> {
        let mut node = ParseNode::new(NodeKind::SubroutineBody);
        node.push_token(self.expect_symbol("{")?);
        while self.peek_is_keyword("var")? {
            node.push_node(self.parse_var_dec()?);
        }
        node.push_node(self.parse_statements()?);
        node.push_token(self.expect_symbol("}")?);
        Ok(node)
    }

    // ========================================================================
    // Statements
    // ========================================================================

    /// Statements until the next token no longer starts one. The kind is
    /// chosen solely by the leading keyword; no backtracking.
    fn parse_statements(&mut self) -> Result<ParseNode, Error> {
        let mut node = ParseNode::new(NodeKind::Statements);
        loop {
            let starter = match self.cursor.peek()? {
                Some(token) => StatementStart::classify(token),
                None => None,
            };
            let stmt = match starter {
                Some(StatementStart::Let) => self.parse_let_statement()?,
                Some(StatementStart::If) => self.parse_if_statement()?,
                Some(StatementStart::While) => self.parse_while_statement()?,
                Some(StatementStart::Do) => self.parse_do_statement()?,
                Some(StatementStart::Return) => self.parse_return_statement()?,
                None => break,
            };
            node.push_node(stmt);
        }
        Ok(node)
    }

    fn parse_let_statement(&mut self) -> Result<ParseNode, Error> {
        let mut node = ParseNode::new(NodeKind::LetStatement);
        node.push_token(self.expect_keyword("let")?);
        node.push_token(self.expect_identifier()?);
        if self.peek_is_symbol("[")? {
            node.push_token(self.bump()?);
            node.push_node(self.parse_expression()?);
            node.push_token(self.expect_symbol("]")?);
        }
        node.push_token(self.expect_symbol("=")?);
        node.push_node(self.parse_expression()?);
        node.push_token(self.expect_symbol(";")?);
        Ok(node)
    }

    fn parse_if_statement(&mut self) -> Result<ParseNode, Error> {
        let mut node = ParseNode::new(NodeKind::IfStatement);
        node.push_token(self.expect_keyword("if")?);
        node.push_token(self.expect_symbol("(")?);
        node.push_node(self.parse_expression()?);
        node.push_token(self.expect_symbol(")")?);
        node.push_token(self.expect_symbol("{")?);
        node.push_node(self.parse_statements()?);
        node.push_token(self.expect_symbol("}")?);
        // Without an `else` the node has no else children at all.
        if self.peek_is_keyword("else")? {
            node.push_token(self.bump()?);
            node.push_token(self.expect_symbol("{")?);
            node.push_node(self.parse_statements()?);
            node.push_token(self.expect_symbol("}")?);
        }
        Ok(node)
    }

    fn parse_while_statement(&mut self) -> Result<ParseNode, Error> {
        let mut node = ParseNode::new(NodeKind::WhileStatement);
        node.push_token(self.expect_keyword("while")?);
        // Condition is parenthesized, matching if statements.
        node.push_token(self.expect_symbol("(")?);
        node.push_node(self.parse_expression()?);
        node.push_token(self.expect_symbol(")")?);
        node.push_token(self.expect_symbol("{")?);
        node.push_node(self.parse_statements()?);
        node.push_token(self.expect_symbol("}")?);
        Ok(node)
    }

    fn parse_do_statement(&mut self) -> Result<ParseNode, Error> {
        let mut node = ParseNode::new(NodeKind::DoStatement);
        node.push_token(self.expect_keyword("do")?);
        node.push_node(self.parse_subroutine_call()?);
        node.push_token(self.expect_symbol(";")?);
        Ok(node)
    }

    fn parse_return_statement(&mut self) -> Result<ParseNode, Error> {
        let mut node = ParseNode::new(NodeKind::ReturnStatement);
        node.push_token(self.expect_keyword("return")?);
        if !self.peek_is_symbol(";")? {
            node.push_node(self.parse_expression()?);
        }
        node.push_token(self.expect_symbol(";")?);
        Ok(node)
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn parse_expression(&mut self) -> Result<ParseNode, Error> {
        let mut node = ParseNode::new(NodeKind::Expression);
        node.push_node(self.parse_term()?);
        while self.peek_is_binary_op()? {
            node.push_token(self.bump()?);
            node.push_node(self.parse_term()?);
        }
        Ok(node)
    }

    fn parse_term(&mut self) -> Result<ParseNode, Error> {
        let starter = match self.cursor.peek()? {
            Some(token) => TermStart::classify(token),
            None => return Err(self.unexpected(vec!["a term"])),
        };

        let mut node = ParseNode::new(NodeKind::Term);
        match starter {
            TermStart::Constant | TermStart::KeywordConstant => {
                node.push_token(self.bump()?);
            }
            TermStart::Parenthesized => {
                node.push_token(self.bump()?);
                node.push_node(self.parse_expression()?);
                node.push_token(self.expect_symbol(")")?);
            }
            TermStart::UnaryOp => {
                node.push_token(self.bump()?);
                node.push_node(self.parse_term()?);
            }
            TermStart::Name => {
                // The token after the identifier decides: `[` array access,
                // `(` or `.` subroutine call, anything else a bare variable.
                if self.peek_second_is_symbol("[")? {
                    node.push_token(self.bump()?);
                    node.push_token(self.expect_symbol("[")?);
                    node.push_node(self.parse_expression()?);
                    node.push_token(self.expect_symbol("]")?);
                } else if self.peek_second_is_symbol("(")? || self.peek_second_is_symbol(".")? {
                    node.push_node(self.parse_subroutine_call()?);
                } else {
                    node.push_token(self.bump()?);
                }
            }
            TermStart::Other => return Err(self.unexpected(vec!["a term"])),
        }
        Ok(node)
    }

    /// `name '(' expressionList ')'` or `receiver '.' name '(' expressionList ')'`.
    fn parse_subroutine_call(&mut self) -> Result<ParseNode, Error> {
        let mut node = ParseNode::new(NodeKind::SubroutineCall);
        node.push_token(self.expect_identifier()?);
        if self.peek_is_symbol(".")? {
            node.push_token(self.bump()?);
            node.push_token(self.expect_identifier()?);
        }
        node.push_token(self.expect_symbol("(")?);
        node.push_node(self.parse_expression_list()?);
        node.push_token(self.expect_symbol(")")?);
        Ok(node)
    }

    /// Zero or more comma-separated expressions; empty exactly when the
    /// next token is the closing `)`.
    fn parse_expression_list(&mut self) -> Result<ParseNode, Error> {
        let mut node = ParseNode::new(NodeKind::ExpressionList);
        if !self.peek_is_symbol(")")? {
            node.push_node(self.parse_expression()?);
            while self.peek_is_symbol(",")? {
                node.push_token(self.bump()?);
                node.push_node(self.parse_expression()?);
            }
        }
        Ok(node)
    }

    // ========================================================================
    // Token management
    // ========================================================================

    /// Consume the token just confirmed by a peek.
    fn bump(&mut self) -> Result<Token, Error> {
        match self.cursor.advance()? {
            Some(token) => Ok(token),
            // bump is only called after a successful peek
            None => unreachable!("bump past end of input"),
        }
    }

    fn peek_is_symbol(&mut self, sym: &str) -> Result<bool, Error> {
        Ok(matches!(self.cursor.peek()?, Some(t) if t.is_symbol(sym)))
    }

    fn peek_second_is_symbol(&mut self, sym: &str) -> Result<bool, Error> {
        Ok(matches!(self.cursor.peek_second()?, Some(t) if t.is_symbol(sym)))
    }

    fn peek_is_keyword(&mut self, word: &str) -> Result<bool, Error> {
        Ok(matches!(self.cursor.peek()?, Some(t) if t.is_keyword(word)))
    }

    fn peek_is_one_of_keywords(&mut self, words: &[&str]) -> Result<bool, Error> {
        Ok(matches!(self.cursor.peek()?, Some(t) if t.is_one_of_keywords(words)))
    }

    fn peek_is_identifier(&mut self) -> Result<bool, Error> {
        Ok(matches!(self.cursor.peek()?, Some(t) if t.kind == TokenKind::Identifier))
    }

    fn peek_is_binary_op(&mut self) -> Result<bool, Error> {
        Ok(matches!(
            self.cursor.peek()?,
            Some(t) if t.kind == TokenKind::Symbol && BINARY_OPS.contains(&t.lexeme.as_str())
        ))
    }

    fn expect_symbol(&mut self, sym: &'static str) -> Result<Token, Error> {
        if self.peek_is_symbol(sym)? {
            self.bump()
        } else {
            Err(self.unexpected(vec![quoted(sym)]))
        }
    }

    fn expect_keyword(&mut self, word: &'static str) -> Result<Token, Error> {
        if self.peek_is_keyword(word)? {
            self.bump()
        } else {
            Err(self.unexpected(vec![quoted(word)]))
        }
    }

    fn expect_one_of_keywords(&mut self, words: &'static [&'static str]) -> Result<Token, Error> {
        if self.peek_is_one_of_keywords(words)? {
            self.bump()
        } else {
            Err(self.unexpected(words.iter().map(|w| quoted(w)).collect()))
        }
    }

    fn expect_identifier(&mut self) -> Result<Token, Error> {
        if self.peek_is_identifier()? {
            self.bump()
        } else {
            Err(self.unexpected(vec!["identifier"]))
        }
    }

    /// Build the error for the token at the cursor. A lexical error at the
    /// cursor takes precedence; end of input reports the line the scan
    /// stopped on.
    fn unexpected(&mut self, expected_one_of: Vec<&'static str>) -> Error {
        match self.cursor.peek() {
            Err(lex) => lex.into(),
            Ok(Some(token)) => SyntaxError {
                expected_one_of,
                found: token.describe(),
                line: token.line,
                span: Some(token.span),
            }
            .into(),
            Ok(None) => SyntaxError {
                expected_one_of,
                found: "end of input".to_string(),
                line: self.cursor.line(),
                span: None,
            }
            .into(),
        }
    }
}

/// Quoted display form of a fixed terminal, for expected-token sets.
fn quoted(lexeme: &str) -> &'static str {
    match lexeme {
        "{" => "'{'",
        "}" => "'}'",
        "(" => "'('",
        ")" => "')'",
        "[" => "'['",
        "]" => "']'",
        "." => "'.'",
        "," => "','",
        ";" => "';'",
        "+" => "'+'",
        "-" => "'-'",
        "*" => "'*'",
        "/" => "'/'",
        "&" => "'&'",
        "|" => "'|'",
        "<" => "'<'",
        ">" => "'>'",
        "=" => "'='",
        "~" => "'~'",
        "class" => "'class'",
        "constructor" => "'constructor'",
        "function" => "'function'",
        "method" => "'method'",
        "field" => "'field'",
        "static" => "'static'",
        "var" => "'var'",
        "int" => "'int'",
        "char" => "'char'",
        "boolean" => "'boolean'",
        "void" => "'void'",
        "true" => "'true'",
        "false" => "'false'",
        "null" => "'null'",
        "this" => "'this'",
        "let" => "'let'",
        "do" => "'do'",
        "if" => "'if'",
        "else" => "'else'",
        "while" => "'while'",
        "return" => "'return'",
        _ => "token",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rjack_ast::node::TreeChild;

    fn parse(source: &str) -> ParseNode {
        Parser::new(source).parse_class().expect("source parses")
    }

    fn parse_err(source: &str) -> Error {
        Parser::new(source)
            .parse_class()
            .expect_err("source must not parse")
    }

    /// The subtree of the first subroutine's statements node.
    fn first_statements(class: &ParseNode) -> &ParseNode {
        class
            .child_nodes()
            .find(|n| n.kind == NodeKind::SubroutineDec)
            .and_then(|sub| sub.child_nodes().find(|n| n.kind == NodeKind::SubroutineBody))
            .and_then(|body| body.child_nodes().find(|n| n.kind == NodeKind::Statements))
            .expect("class has a subroutine body")
    }

    #[test]
    fn empty_class() {
        let class = parse("class Foo { }");
        assert_eq!(class.kind, NodeKind::Class);
        let lexemes: Vec<&str> = class
            .terminals()
            .iter()
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(lexemes, ["class", "Foo", "{", "}"]);
    }

    #[test]
    fn class_var_dec_shares_type_across_names() {
        let class = parse("class Foo { static int a, b, c; field boolean ok; }");
        let decs: Vec<&ParseNode> = class
            .child_nodes()
            .filter(|n| n.kind == NodeKind::ClassVarDec)
            .collect();
        assert_eq!(decs.len(), 2);

        // One kind keyword, one Type node, names as sibling children.
        let first = decs[0];
        assert_eq!(
            first.child_nodes().filter(|n| n.kind == NodeKind::Type).count(),
            1
        );
        let names: Vec<&str> = first
            .child_tokens()
            .filter(|t| t.kind == TokenKind::Identifier)
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn expression_chain_stays_flat() {
        let class = parse("class Foo { function void f() { let x = 1 + 2 * 3; return; } }");
        let statements = first_statements(&class);
        let let_stmt = statements
            .child_nodes()
            .find(|n| n.kind == NodeKind::LetStatement)
            .expect("let statement");
        let expr = let_stmt
            .child_nodes()
            .find(|n| n.kind == NodeKind::Expression)
            .expect("expression");

        // term, op, term, op, term as direct children, never nested by
        // precedence.
        let shape: Vec<String> = expr
            .children
            .iter()
            .map(|c| match c {
                TreeChild::Node(n) => n.kind.as_str().to_string(),
                TreeChild::Token(t) => t.lexeme.clone(),
            })
            .collect();
        assert_eq!(shape, ["term", "+", "term", "*", "term"]);
    }

    #[test]
    fn term_disambiguation_by_second_token() {
        let class = parse(
            "class Foo { function void f() { \
             let a = foo(1, 2); let b = bar.foo(1, 2); let c = a[1]; let d = a; \
             return; } }",
        );
        let statements = first_statements(&class);
        let terms: Vec<&ParseNode> = statements
            .child_nodes()
            .filter(|n| n.kind == NodeKind::LetStatement)
            .map(|s| {
                s.child_nodes()
                    .find(|n| n.kind == NodeKind::Expression)
                    .and_then(|e| e.child_nodes().next())
                    .expect("let value term")
            })
            .collect();

        // foo(1, 2): direct call, no receiver, so exactly one identifier.
        let direct = terms[0]
            .child_nodes()
            .find(|n| n.kind == NodeKind::SubroutineCall)
            .expect("direct call");
        assert_eq!(
            direct
                .child_tokens()
                .filter(|t| t.kind == TokenKind::Identifier)
                .count(),
            1
        );

        // bar.foo(1, 2): qualified call with receiver and dot.
        let qualified = terms[1]
            .child_nodes()
            .find(|n| n.kind == NodeKind::SubroutineCall)
            .expect("qualified call");
        assert_eq!(
            qualified
                .child_tokens()
                .filter(|t| t.kind == TokenKind::Identifier)
                .count(),
            2
        );
        assert!(qualified.child_tokens().any(|t| t.is_symbol(".")));

        // a[1]: array access directly in the term.
        assert!(terms[2].child_tokens().any(|t| t.is_symbol("[")));

        // a: bare variable name.
        assert_eq!(terms[3].children.len(), 1);
    }

    #[test]
    fn unary_term_recurses() {
        let class = parse("class Foo { function void f() { let x = -~1; return; } }");
        let statements = first_statements(&class);
        let term = statements
            .child_nodes()
            .find(|n| n.kind == NodeKind::LetStatement)
            .and_then(|s| s.child_nodes().find(|n| n.kind == NodeKind::Expression))
            .and_then(|e| e.child_nodes().next())
            .expect("outer term");
        assert!(term.child_tokens().any(|t| t.is_symbol("-")));
        let inner = term
            .child_nodes()
            .find(|n| n.kind == NodeKind::Term)
            .expect("inner term");
        assert!(inner.child_tokens().any(|t| t.is_symbol("~")));
    }

    #[test]
    fn if_without_else_has_no_else_children() {
        let class = parse(
            "class Foo { function void f() { \
             if (true) { return; } \
             if (false) { return; } else { return; } \
             } }",
        );
        let statements = first_statements(&class);
        let ifs: Vec<&ParseNode> = statements
            .child_nodes()
            .filter(|n| n.kind == NodeKind::IfStatement)
            .collect();
        assert!(!ifs[0].child_tokens().any(|t| t.is_keyword("else")));
        assert_eq!(ifs[0].child_nodes().filter(|n| n.kind == NodeKind::Statements).count(), 1);
        assert!(ifs[1].child_tokens().any(|t| t.is_keyword("else")));
        assert_eq!(ifs[1].child_nodes().filter(|n| n.kind == NodeKind::Statements).count(), 2);
    }

    #[test]
    fn empty_parameter_and_expression_lists() {
        let class = parse("class Foo { function void f() { do g(); return; } }");
        let sub = class
            .child_nodes()
            .find(|n| n.kind == NodeKind::SubroutineDec)
            .expect("subroutine");
        let params = sub
            .child_nodes()
            .find(|n| n.kind == NodeKind::ParameterList)
            .expect("parameter list");
        assert!(params.children.is_empty());

        let statements = first_statements(&class);
        let call = statements
            .child_nodes()
            .find(|n| n.kind == NodeKind::DoStatement)
            .and_then(|d| d.child_nodes().find(|n| n.kind == NodeKind::SubroutineCall))
            .expect("call");
        let args = call
            .child_nodes()
            .find(|n| n.kind == NodeKind::ExpressionList)
            .expect("expression list");
        assert!(args.children.is_empty());
    }

    #[test]
    fn void_return_type_is_a_plain_keyword() {
        let class = parse("class Foo { method int f() { return 1; } function void g() { return; } }");
        let subs: Vec<&ParseNode> = class
            .child_nodes()
            .filter(|n| n.kind == NodeKind::SubroutineDec)
            .collect();
        assert!(subs[0].child_nodes().any(|n| n.kind == NodeKind::Type));
        assert!(subs[1].child_tokens().any(|t| t.is_keyword("void")));
        assert!(!subs[1].child_nodes().any(|n| n.kind == NodeKind::Type));
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let err = parse_err("class Foo { } class Bar { }");
        match err {
            Error::Syntax(e) => {
                assert_eq!(e.expected_one_of, vec!["end of input"]);
                assert_eq!(e.found, "'class'");
            }
            Error::Lex(e) => panic!("expected syntax error, got {e}"),
        }
    }

    #[test]
    fn premature_end_of_input() {
        let err = parse_err("class Foo {");
        match err {
            Error::Syntax(e) => {
                assert_eq!(e.found, "end of input");
                assert_eq!(e.span, None);
                assert_eq!(e.line, 1);
            }
            Error::Lex(e) => panic!("expected syntax error, got {e}"),
        }
    }

    #[test]
    fn statement_must_start_with_statement_keyword() {
        let err = parse_err("class Foo { function void f() { x = 1; } }");
        match err {
            // `x` is not a statement starter, so the body expects `}`.
            Error::Syntax(e) => assert_eq!(e.found, "identifier 'x'"),
            Error::Lex(e) => panic!("expected syntax error, got {e}"),
        }
    }

    #[test]
    fn lex_errors_propagate_through_parse() {
        let err = parse_err("class Foo { static int x; $ }");
        assert!(matches!(err, Error::Lex(_)));
    }

    #[test]
    fn error_reports_expected_set() {
        let err = parse_err("class Foo { static 5; }");
        match err {
            Error::Syntax(e) => {
                assert_eq!(
                    e.expected_one_of,
                    vec!["'int'", "'char'", "'boolean'", "identifier"]
                );
                assert_eq!(e.found, "integer constant 5");
                assert_eq!(e.line, 1);
            }
            Error::Lex(e) => panic!("expected syntax error, got {e}"),
        }
    }
}
