//! NodeKind enum - one variant per nonterminal in the Jack grammar.

/// The nonterminal a parse-tree node was produced by.
///
/// The parser builds exactly one node per application of a grammar
/// production, so the variants here are the closed set of shapes a tree can
/// contain. Statement nodes appear directly under [`Statements`]; there is
/// no generic statement wrapper.
///
/// [`Statements`]: NodeKind::Statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // ========================================================================
    // Program structure
    // ========================================================================
    Class,
    ClassVarDec,
    Type,
    SubroutineDec,
    ParameterList,
    SubroutineBody,
    VarDec,

    // ========================================================================
    // Statements
    // ========================================================================
    Statements,
    LetStatement,
    IfStatement,
    WhileStatement,
    DoStatement,
    ReturnStatement,

    // ========================================================================
    // Expressions
    // ========================================================================
    Expression,
    Term,
    SubroutineCall,
    ExpressionList,
}

impl NodeKind {
    /// The tag name used for this nonterminal in the canonical tree
    /// serialization.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Class => "class",
            NodeKind::ClassVarDec => "classVarDec",
            NodeKind::Type => "type",
            NodeKind::SubroutineDec => "subroutineDec",
            NodeKind::ParameterList => "parameterList",
            NodeKind::SubroutineBody => "subroutineBody",
            NodeKind::VarDec => "varDec",
            NodeKind::Statements => "statements",
            NodeKind::LetStatement => "letStatement",
            NodeKind::IfStatement => "ifStatement",
            NodeKind::WhileStatement => "whileStatement",
            NodeKind::DoStatement => "doStatement",
            NodeKind::ReturnStatement => "returnStatement",
            NodeKind::Expression => "expression",
            NodeKind::Term => "term",
            NodeKind::SubroutineCall => "subroutineCall",
            NodeKind::ExpressionList => "expressionList",
        }
    }

    /// Whether this kind is one of the five statement nonterminals.
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            NodeKind::LetStatement
                | NodeKind::IfStatement
                | NodeKind::WhileStatement
                | NodeKind::DoStatement
                | NodeKind::ReturnStatement
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
