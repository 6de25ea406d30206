//! Concrete parse tree.
//!
//! One type per grammar rule. The tree keeps source text for literals,
//! identifiers and type names, and the operator token of every binary
//! expression; turning those into typed values is the AST builder's job.

use novl_ir::{Span, Token};

/// `top := stmt*`, also the contents of every `{ ... }` block.
#[derive(Clone, Debug, PartialEq)]
pub struct Top {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    ValDec(ValDec),
    ValDef(ValDef),
    Assignment(Assignment),
    FunDef(FunDef),
    IfBlock(IfBlock),
    While(WhileLoop),
    Expr(Expr),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::ValDec(dec) => dec.span,
            Stmt::ValDef(def) => def.span,
            Stmt::Assignment(assign) => assign.span,
            Stmt::FunDef(fun) => fun.span,
            Stmt::IfBlock(block) => block.span,
            Stmt::While(w) => w.span,
            Stmt::Expr(expr) => expr.span(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

/// Type name as written; resolved by the AST builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeName {
    pub name: String,
    pub span: Span,
}

/// `val name[: Type]`
#[derive(Clone, Debug, PartialEq)]
pub struct ValDec {
    pub name: Ident,
    pub ty: Option<TypeName>,
    pub span: Span,
}

/// `val name[: Type] = expr`
#[derive(Clone, Debug, PartialEq)]
pub struct ValDef {
    pub dec: ValDec,
    pub value: Expr,
    pub span: Span,
}

/// `name = expr`
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub name: Ident,
    pub value: Expr,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParamDecl {
    pub name: Ident,
    pub ty: TypeName,
}

/// `fun name(params)[: Type] { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct FunDef {
    pub name: Ident,
    pub params: Vec<ParamDecl>,
    pub return_type: Option<TypeName>,
    pub body: Top,
    pub span: Span,
}

/// A comparison and the block it guards.
#[derive(Clone, Debug, PartialEq)]
pub struct CondClause {
    pub comparison: Comparison,
    pub block: Top,
}

/// `if c { } (elseif c { })* (else { })?`
#[derive(Clone, Debug, PartialEq)]
pub struct IfBlock {
    pub if_clause: CondClause,
    pub else_ifs: Vec<CondClause>,
    pub else_block: Option<Top>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WhileLoop {
    pub comparison: Comparison,
    pub body: Top,
    pub span: Span,
}

/// `expr op expr`; `op` is the operator token.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub left: Expr,
    pub op: Token,
    pub right: Expr,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Integer literal text.
    Int { text: String, span: Span },
    /// Float literal text.
    Float { text: String, span: Span },
    /// String literal, quotes included.
    Str { text: String, span: Span },
    Neg { operand: Box<Expr>, span: Span },
    Binary {
        op: Token,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Paren { inner: Box<Expr>, span: Span },
    Ident(Ident),
    Call {
        name: Ident,
        args: Vec<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Int { span, .. }
            | Expr::Float { span, .. }
            | Expr::Str { span, .. }
            | Expr::Neg { span, .. }
            | Expr::Paren { span, .. }
            | Expr::Call { span, .. } => *span,
            Expr::Binary { left, right, .. } => left.span().merge(right.span()),
            Expr::Ident(ident) => ident.span,
        }
    }
}
