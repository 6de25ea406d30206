//! AST node model.
//!
//! Every syntactic construct of a Novlangue program becomes exactly one
//! [`Node`] variant. Nodes are plain data: they hold no IR handles and no
//! parse-tree references, and the only behaviour they carry is the
//! [`Node::to_val_ref`] coercion.
//!
//! # Value references
//!
//! [`ValRef`] covers four shapes with a single variant: a bare reference,
//! a declaration (`val x: Int = ...`), an assignment (`x = ...`) and an
//! anonymous wrapper around any other node. Lowering dispatches on these
//! four cases in that order.

mod control;
mod items;
mod operators;

pub use control::{Body, Conditional};
pub use items::{FunctionCall, FunctionDef, Param, Program};
pub use operators::{BinaryKind, CompareKind, ComparisonOp, FloatPredicate, IntPredicate};

use crate::ValType;

/// An AST node.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Number(NumberLiteral),
    Str(StringLiteral),
    Val(ValRef),
    Binary(BinaryOp),
    Negate(UnaryNegate),
    Comparison(Comparison),
    Conditional(Conditional),
    Body(Body),
    FunctionDef(FunctionDef),
    FunctionCall(FunctionCall),
    Program(Program),
}

impl Node {
    /// Coerce to a value reference.
    ///
    /// A `Node::Val` is its own reference; any other node is wrapped in an
    /// anonymous [`ValRef::Wrapped`].
    pub fn to_val_ref(self) -> ValRef {
        match self {
            Node::Val(val) => val,
            other => ValRef::Wrapped(Box::new(other)),
        }
    }

    pub fn int(value: i32) -> Self {
        Node::Number(NumberLiteral {
            value: f64::from(value),
            ty: ValType::Int,
        })
    }

    pub fn double(value: f64) -> Self {
        Node::Number(NumberLiteral {
            value,
            ty: ValType::Double,
        })
    }

    pub fn string(text: impl Into<String>) -> Self {
        Node::Str(StringLiteral { text: text.into() })
    }

    pub fn reference(id: impl Into<String>) -> Self {
        Node::Val(ValRef::Reference { id: id.into() })
    }

    pub fn binary(kind: BinaryKind, left: Node, right: Node) -> Self {
        Node::Binary(BinaryOp {
            kind,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Short name of the variant, for logs and "not implemented" errors.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Node::Number(_) => "number literal",
            Node::Str(_) => "string literal",
            Node::Val(_) => "value reference",
            Node::Binary(_) => "binary operation",
            Node::Negate(_) => "negation",
            Node::Comparison(_) => "comparison",
            Node::Conditional(_) => "conditional",
            Node::Body(_) => "body",
            Node::FunctionDef(_) => "function definition",
            Node::FunctionCall(_) => "function call",
            Node::Program(_) => "program",
        }
    }
}

/// Numeric literal. Integers are stored as `f64` and typed `Int`.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberLiteral {
    pub value: f64,
    pub ty: ValType,
}

/// String literal, without its surrounding quotes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringLiteral {
    pub text: String,
}

/// Identifier use, declaration, assignment or anonymous wrapper.
#[derive(Clone, Debug, PartialEq)]
pub enum ValRef {
    /// Bare reference to a parameter or variable.
    Reference { id: String },
    /// `val id[: type] [= value]`.
    Declaration {
        id: String,
        declared_type: ValType,
        value: Option<Box<Node>>,
    },
    /// `id = value` on an existing name.
    Assignment { id: String, value: Box<Node> },
    /// Anonymous wrapper with an empty identifier.
    Wrapped(Box<Node>),
}

impl ValRef {
    /// The identifier, or `""` for an anonymous wrapper.
    pub fn id(&self) -> &str {
        match self {
            ValRef::Reference { id }
            | ValRef::Declaration { id, .. }
            | ValRef::Assignment { id, .. } => id,
            ValRef::Wrapped(_) => "",
        }
    }

    #[inline]
    pub fn is_declaration(&self) -> bool {
        matches!(self, ValRef::Declaration { .. })
    }
}

/// Arithmetic on two operands.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryOp {
    pub kind: BinaryKind,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnaryNegate {
    pub operand: Box<Node>,
}

/// Comparison of two values. `op` already carries the integer or float
/// family picked from `left`.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub left: Box<ValRef>,
    pub right: Box<ValRef>,
    pub op: ComparisonOp,
}
