//! Arithmetic and comparison operators.
//!
//! Comparison operators come in two families. The family is chosen once,
//! when the AST builder constructs the comparison, from the left operand's
//! type; lowering only reads it back.

use crate::ValType;

/// Arithmetic operator of a [`BinaryOp`](super::BinaryOp) node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryKind {
    /// Operator from its source symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "%" => Some(Self::Mod),
            _ => None,
        }
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }
}

/// Family-independent comparison kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompareKind {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
}

impl CompareKind {
    /// Comparison kind from operator text.
    ///
    /// Anything that is not one of the five other operators is `Eq`.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "!=" => Self::Ne,
            ">" => Self::Gt,
            "<" => Self::Lt,
            ">=" => Self::Ge,
            "<=" => Self::Le,
            _ => Self::Eq,
        }
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Ge => ">=",
            Self::Le => "<=",
        }
    }
}

/// Signed integer comparison predicate.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IntPredicate {
    Eq,
    Ne,
    Sgt,
    Slt,
    Sge,
    Sle,
}

/// Ordered floating-point comparison predicate.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FloatPredicate {
    Oeq,
    One,
    Ogt,
    Olt,
    Oge,
    Ole,
}

/// A comparison operator with its instruction family fixed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ComparisonOp {
    Int(IntPredicate),
    Float(FloatPredicate),
}

impl ComparisonOp {
    /// Select the family for `kind` from the left operand's type.
    ///
    /// `Double` picks the float predicates; every other type compares as
    /// an integer.
    pub const fn new(kind: CompareKind, left: ValType) -> Self {
        match left {
            ValType::Double => ComparisonOp::Float(match kind {
                CompareKind::Eq => FloatPredicate::Oeq,
                CompareKind::Ne => FloatPredicate::One,
                CompareKind::Gt => FloatPredicate::Ogt,
                CompareKind::Lt => FloatPredicate::Olt,
                CompareKind::Ge => FloatPredicate::Oge,
                CompareKind::Le => FloatPredicate::Ole,
            }),
            ValType::Int | ValType::String => ComparisonOp::Int(match kind {
                CompareKind::Eq => IntPredicate::Eq,
                CompareKind::Ne => IntPredicate::Ne,
                CompareKind::Gt => IntPredicate::Sgt,
                CompareKind::Lt => IntPredicate::Slt,
                CompareKind::Ge => IntPredicate::Sge,
                CompareKind::Le => IntPredicate::Sle,
            }),
        }
    }

    pub const fn kind(self) -> CompareKind {
        match self {
            ComparisonOp::Int(p) => match p {
                IntPredicate::Eq => CompareKind::Eq,
                IntPredicate::Ne => CompareKind::Ne,
                IntPredicate::Sgt => CompareKind::Gt,
                IntPredicate::Slt => CompareKind::Lt,
                IntPredicate::Sge => CompareKind::Ge,
                IntPredicate::Sle => CompareKind::Le,
            },
            ComparisonOp::Float(p) => match p {
                FloatPredicate::Oeq => CompareKind::Eq,
                FloatPredicate::One => CompareKind::Ne,
                FloatPredicate::Ogt => CompareKind::Gt,
                FloatPredicate::Olt => CompareKind::Lt,
                FloatPredicate::Oge => CompareKind::Ge,
                FloatPredicate::Ole => CompareKind::Le,
            },
        }
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, ComparisonOp::Float(_))
    }
}
