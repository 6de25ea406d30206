//! Comparison operations (icmp, fcmp) for `IrBuilder`.

use super::IrBuilder;
use crate::{FloatCmp, Instruction, IntCmp, IrType, ValueId};

impl IrBuilder<'_> {
    /// Integer comparison producing `i1`.
    ///
    /// Mismatched or non-int operands yield `false`.
    pub fn icmp(&mut self, pred: IntCmp, lhs: ValueId, rhs: ValueId, name: &str) -> ValueId {
        let l = self.value_type(lhs);
        let r = self.value_type(rhs);
        if !l.is_int() || l != r {
            tracing::error!(pred = pred.as_str(), lhs_type = %l, rhs_type = %r, "icmp on mismatched operands");
            self.record_codegen_error();
            return self.const_i1(false);
        }
        let result = self.new_register(IrType::I1, name);
        self.emit(Instruction::ICmp {
            result,
            pred,
            lhs,
            rhs,
        });
        result
    }

    /// Ordered float comparison producing `i1`.
    pub fn fcmp(&mut self, pred: FloatCmp, lhs: ValueId, rhs: ValueId, name: &str) -> ValueId {
        let l = self.value_type(lhs);
        let r = self.value_type(rhs);
        if !l.is_float() || l != r {
            tracing::error!(pred = pred.as_str(), lhs_type = %l, rhs_type = %r, "fcmp on mismatched operands");
            self.record_codegen_error();
            return self.const_i1(false);
        }
        let result = self.new_register(IrType::I1, name);
        self.emit(Instruction::FCmp {
            result,
            pred,
            lhs,
            rhs,
        });
        result
    }
}
