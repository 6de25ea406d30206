//! Literals, arithmetic, negation and comparisons.

use novl_ir::{
    BinaryKind, BinaryOp, Comparison, ComparisonOp, FloatPredicate, IntPredicate, NumberLiteral,
    UnaryNegate, ValType,
};
use novl_llvm::{FloatCmp, IntCmp, ValueId};

use super::{Lowerer, Typed};
use crate::LowerError;

impl Lowerer<'_> {
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn lower_number(&mut self, lit: &NumberLiteral) -> Typed {
        match lit.ty {
            // integer literals are range-checked when the node is built
            ValType::Int => Typed {
                value: self.builder.const_i32(lit.value as i32),
                ty: ValType::Int,
            },
            ValType::Double | ValType::String => Typed {
                value: self.builder.const_f64(lit.value),
                ty: ValType::Double,
            },
        }
    }

    /// Integer or float instruction, picked from the operand type.
    pub(crate) fn lower_binary(&mut self, bin: &BinaryOp) -> Result<Typed, LowerError> {
        let left = self.lower_value(&bin.left)?;
        let right = self.lower_value(&bin.right)?;
        if left.ty != right.ty {
            return Err(LowerError::TypeMismatch {
                context: format!("`{}`", bin.kind.as_symbol()),
                expected: left.ty,
                found: right.ty,
            });
        }
        let (l, r) = (left.value, right.value);
        let b = &mut self.builder;
        let value = match (left.ty, bin.kind) {
            (ValType::Int, BinaryKind::Add) => b.add(l, r, "add"),
            (ValType::Int, BinaryKind::Sub) => b.sub(l, r, "sub"),
            (ValType::Int, BinaryKind::Mul) => b.mul(l, r, "mul"),
            (ValType::Int, BinaryKind::Div) => b.sdiv(l, r, "div"),
            (ValType::Int, BinaryKind::Mod) => b.srem(l, r, "mod"),
            (ValType::Double, BinaryKind::Add) => b.fadd(l, r, "add"),
            (ValType::Double, BinaryKind::Sub) => b.fsub(l, r, "sub"),
            (ValType::Double, BinaryKind::Mul) => b.fmul(l, r, "mul"),
            (ValType::Double, BinaryKind::Div) => b.fdiv(l, r, "div"),
            (ValType::Double, BinaryKind::Mod) => b.frem(l, r, "mod"),
            (ValType::String, _) => {
                return Err(LowerError::not_implemented(format!(
                    "String arithmetic (`{}`)",
                    bin.kind.as_symbol()
                )))
            }
        };
        Ok(Typed {
            value,
            ty: left.ty,
        })
    }

    pub(crate) fn lower_negate(&mut self, neg: &UnaryNegate) -> Result<Typed, LowerError> {
        let operand = self.lower_value(&neg.operand)?;
        let value = match operand.ty {
            ValType::Int => self.builder.neg(operand.value, "neg"),
            ValType::Double => self.builder.fneg(operand.value, "neg"),
            ValType::String => return Err(LowerError::not_implemented("String negation")),
        };
        Ok(Typed {
            value,
            ty: operand.ty,
        })
    }

    /// Lower a comparison to an `i1` in the current block.
    ///
    /// The family in `cmp.op` was fixed when the node was built; both
    /// operands must have the type that family compares.
    pub(crate) fn lower_comparison(&mut self, cmp: &Comparison) -> Result<ValueId, LowerError> {
        let left = self.lower_val_ref(&cmp.left)?;
        let right = self.lower_val_ref(&cmp.right)?;
        let family = if cmp.op.is_float() {
            ValType::Double
        } else {
            ValType::Int
        };
        if left.ty == ValType::String {
            return Err(LowerError::not_implemented("String comparison"));
        }
        for operand in [left, right] {
            if operand.ty != family {
                return Err(LowerError::TypeMismatch {
                    context: format!("comparison `{}`", cmp.op.kind().as_symbol()),
                    expected: family,
                    found: operand.ty,
                });
            }
        }
        let name = self.builder.unique_id("");
        let value = match cmp.op {
            ComparisonOp::Int(pred) => {
                self.builder
                    .icmp(int_cmp(pred), left.value, right.value, &name)
            }
            ComparisonOp::Float(pred) => {
                self.builder
                    .fcmp(float_cmp(pred), left.value, right.value, &name)
            }
        };
        Ok(value)
    }
}

fn int_cmp(pred: IntPredicate) -> IntCmp {
    match pred {
        IntPredicate::Eq => IntCmp::Eq,
        IntPredicate::Ne => IntCmp::Ne,
        IntPredicate::Sgt => IntCmp::Sgt,
        IntPredicate::Slt => IntCmp::Slt,
        IntPredicate::Sge => IntCmp::Sge,
        IntPredicate::Sle => IntCmp::Sle,
    }
}

fn float_cmp(pred: FloatPredicate) -> FloatCmp {
    match pred {
        FloatPredicate::Oeq => FloatCmp::Oeq,
        FloatPredicate::One => FloatCmp::One,
        FloatPredicate::Ogt => FloatCmp::Ogt,
        FloatPredicate::Olt => FloatCmp::Olt,
        FloatPredicate::Oge => FloatCmp::Oge,
        FloatPredicate::Ole => FloatCmp::Ole,
    }
}
