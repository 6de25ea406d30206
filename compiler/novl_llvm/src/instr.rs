//! Instructions and terminators.

use crate::{BlockId, FunctionId, IrType, ValueId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOpcode {
    Add,
    Sub,
    Mul,
    SDiv,
    SRem,
    FAdd,
    FSub,
    FMul,
    FDiv,
    FRem,
}

impl BinaryOpcode {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOpcode::Add => "add",
            BinaryOpcode::Sub => "sub",
            BinaryOpcode::Mul => "mul",
            BinaryOpcode::SDiv => "sdiv",
            BinaryOpcode::SRem => "srem",
            BinaryOpcode::FAdd => "fadd",
            BinaryOpcode::FSub => "fsub",
            BinaryOpcode::FMul => "fmul",
            BinaryOpcode::FDiv => "fdiv",
            BinaryOpcode::FRem => "frem",
        }
    }

    pub fn is_float(self) -> bool {
        matches!(
            self,
            BinaryOpcode::FAdd
                | BinaryOpcode::FSub
                | BinaryOpcode::FMul
                | BinaryOpcode::FDiv
                | BinaryOpcode::FRem
        )
    }
}

/// `icmp` predicates (signed).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntCmp {
    Eq,
    Ne,
    Sgt,
    Slt,
    Sge,
    Sle,
}

impl IntCmp {
    pub fn as_str(self) -> &'static str {
        match self {
            IntCmp::Eq => "eq",
            IntCmp::Ne => "ne",
            IntCmp::Sgt => "sgt",
            IntCmp::Slt => "slt",
            IntCmp::Sge => "sge",
            IntCmp::Sle => "sle",
        }
    }
}

/// `fcmp` predicates (ordered).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatCmp {
    Oeq,
    One,
    Ogt,
    Olt,
    Oge,
    Ole,
}

impl FloatCmp {
    pub fn as_str(self) -> &'static str {
        match self {
            FloatCmp::Oeq => "oeq",
            FloatCmp::One => "one",
            FloatCmp::Ogt => "ogt",
            FloatCmp::Olt => "olt",
            FloatCmp::Oge => "oge",
            FloatCmp::Ole => "ole",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    Binary {
        result: ValueId,
        op: BinaryOpcode,
        lhs: ValueId,
        rhs: ValueId,
    },
    FNeg {
        result: ValueId,
        operand: ValueId,
    },
    ICmp {
        result: ValueId,
        pred: IntCmp,
        lhs: ValueId,
        rhs: ValueId,
    },
    FCmp {
        result: ValueId,
        pred: FloatCmp,
        lhs: ValueId,
        rhs: ValueId,
    },
    Alloca {
        result: ValueId,
        ty: IrType,
    },
    Load {
        result: ValueId,
        ptr: ValueId,
    },
    Store {
        value: ValueId,
        ptr: ValueId,
    },
    Call {
        result: Option<ValueId>,
        callee: FunctionId,
        args: Vec<ValueId>,
    },
}

impl Instruction {
    /// The value this instruction defines, if any.
    pub fn result(&self) -> Option<ValueId> {
        match self {
            Instruction::Binary { result, .. }
            | Instruction::FNeg { result, .. }
            | Instruction::ICmp { result, .. }
            | Instruction::FCmp { result, .. }
            | Instruction::Alloca { result, .. }
            | Instruction::Load { result, .. } => Some(*result),
            Instruction::Call { result, .. } => *result,
            Instruction::Store { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Terminator {
    Br(BlockId),
    CondBr {
        cond: ValueId,
        then_block: BlockId,
        else_block: BlockId,
    },
    Ret(Option<ValueId>),
}

impl Terminator {
    /// Blocks this terminator can transfer control to.
    pub fn successors(&self) -> Vec<BlockId> {
        match self {
            Terminator::Br(dest) => vec![*dest],
            Terminator::CondBr {
                then_block,
                else_block,
                ..
            } => vec![*then_block, *else_block],
            Terminator::Ret(_) => Vec::new(),
        }
    }
}
