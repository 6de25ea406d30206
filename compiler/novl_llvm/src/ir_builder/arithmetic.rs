//! Integer and float arithmetic for `IrBuilder`.

use super::IrBuilder;
use crate::{BinaryOpcode, Instruction, IrType, ValueId};

impl IrBuilder<'_> {
    // -- Signed integer --

    pub fn add(&mut self, lhs: ValueId, rhs: ValueId, name: &str) -> ValueId {
        self.int_binary(BinaryOpcode::Add, lhs, rhs, name)
    }

    pub fn sub(&mut self, lhs: ValueId, rhs: ValueId, name: &str) -> ValueId {
        self.int_binary(BinaryOpcode::Sub, lhs, rhs, name)
    }

    pub fn mul(&mut self, lhs: ValueId, rhs: ValueId, name: &str) -> ValueId {
        self.int_binary(BinaryOpcode::Mul, lhs, rhs, name)
    }

    pub fn sdiv(&mut self, lhs: ValueId, rhs: ValueId, name: &str) -> ValueId {
        self.int_binary(BinaryOpcode::SDiv, lhs, rhs, name)
    }

    pub fn srem(&mut self, lhs: ValueId, rhs: ValueId, name: &str) -> ValueId {
        self.int_binary(BinaryOpcode::SRem, lhs, rhs, name)
    }

    /// Integer negation, emitted as `sub <ty> 0, val`.
    pub fn neg(&mut self, val: ValueId, name: &str) -> ValueId {
        let ty = self.value_type(val);
        let zero = self.const_zero(&ty);
        self.int_binary(BinaryOpcode::Sub, zero, val, name)
    }

    // -- Float --

    pub fn fadd(&mut self, lhs: ValueId, rhs: ValueId, name: &str) -> ValueId {
        self.float_binary(BinaryOpcode::FAdd, lhs, rhs, name)
    }

    pub fn fsub(&mut self, lhs: ValueId, rhs: ValueId, name: &str) -> ValueId {
        self.float_binary(BinaryOpcode::FSub, lhs, rhs, name)
    }

    pub fn fmul(&mut self, lhs: ValueId, rhs: ValueId, name: &str) -> ValueId {
        self.float_binary(BinaryOpcode::FMul, lhs, rhs, name)
    }

    pub fn fdiv(&mut self, lhs: ValueId, rhs: ValueId, name: &str) -> ValueId {
        self.float_binary(BinaryOpcode::FDiv, lhs, rhs, name)
    }

    pub fn frem(&mut self, lhs: ValueId, rhs: ValueId, name: &str) -> ValueId {
        self.float_binary(BinaryOpcode::FRem, lhs, rhs, name)
    }

    pub fn fneg(&mut self, val: ValueId, name: &str) -> ValueId {
        let ty = self.value_type(val);
        if !ty.is_float() {
            tracing::error!(%ty, "fneg on non-float operand");
            self.record_codegen_error();
            return self.const_f64(0.0);
        }
        let result = self.new_register(ty, name);
        self.emit(Instruction::FNeg {
            result,
            operand: val,
        });
        result
    }

    // -- Shared --

    fn int_binary(&mut self, op: BinaryOpcode, lhs: ValueId, rhs: ValueId, name: &str) -> ValueId {
        let l = self.value_type(lhs);
        let r = self.value_type(rhs);
        if !l.is_int() || l != r {
            tracing::error!(op = op.as_str(), lhs_type = %l, rhs_type = %r, "integer op on mismatched operands");
            self.record_codegen_error();
            return self.const_i32(0);
        }
        self.emit_binary(op, l, lhs, rhs, name)
    }

    fn float_binary(
        &mut self,
        op: BinaryOpcode,
        lhs: ValueId,
        rhs: ValueId,
        name: &str,
    ) -> ValueId {
        let l = self.value_type(lhs);
        let r = self.value_type(rhs);
        if !l.is_float() || l != r {
            tracing::error!(op = op.as_str(), lhs_type = %l, rhs_type = %r, "float op on mismatched operands");
            self.record_codegen_error();
            return self.const_f64(0.0);
        }
        self.emit_binary(op, l, lhs, rhs, name)
    }

    fn emit_binary(
        &mut self,
        op: BinaryOpcode,
        ty: IrType,
        lhs: ValueId,
        rhs: ValueId,
        name: &str,
    ) -> ValueId {
        let result = self.new_register(ty, name);
        self.emit(Instruction::Binary {
            result,
            op,
            lhs,
            rhs,
        });
        result
    }
}
