//! Terminators (branch, conditional branch, return) for `IrBuilder`.

use super::IrBuilder;
use crate::{BlockId, IrType, Terminator, ValueId};

impl IrBuilder<'_> {
    pub fn br(&mut self, dest: BlockId) {
        self.terminate(Terminator::Br(dest));
    }

    /// Conditional branch on an `i1`.
    ///
    /// A non-`i1` condition falls back to branching to the else
    /// block.
    pub fn cond_br(&mut self, cond: ValueId, then_block: BlockId, else_block: BlockId) {
        let ty = self.value_type(cond);
        if ty != IrType::I1 {
            tracing::error!(%ty, "cond_br on non-i1, branching to else");
            self.record_codegen_error();
            self.br(else_block);
            return;
        }
        self.terminate(Terminator::CondBr {
            cond,
            then_block,
            else_block,
        });
    }

    /// Return `val`. Checked against the current function's return type.
    pub fn ret(&mut self, val: ValueId) {
        if let Some(function) = self.current_function {
            let expected = &self.module.function(function).ret;
            let ty = &self.module.value(val).ty;
            if expected != ty {
                tracing::error!(%expected, %ty, "return type mismatch");
                self.record_codegen_error();
            }
        }
        self.terminate(Terminator::Ret(Some(val)));
    }

    fn terminate(&mut self, term: Terminator) {
        let Some(block) = self.current_block else {
            tracing::error!(?term, "terminator with no insertion point");
            self.record_codegen_error();
            return;
        };
        let bb = self.module.block_mut(block);
        if bb.terminator.is_some() {
            tracing::error!(?term, label = %bb.label, "block already terminated");
            self.record_codegen_error();
            return;
        }
        bb.terminator = Some(term);
    }
}
