//! Stack slots, globals, loads and stores for `IrBuilder`.

use super::IrBuilder;
use crate::{FunctionId, Instruction, IrType, ValueId};

impl IrBuilder<'_> {
    /// `alloca` at the top of `function`'s entry block, after any earlier
    /// allocas, regardless of where the insertion point is.
    pub fn create_entry_alloca(&mut self, function: FunctionId, ty: IrType, name: &str) -> ValueId {
        let Some(entry) = self.module.function(function).entry_block() else {
            tracing::error!(?function, "entry alloca in a function without blocks");
            self.record_codegen_error();
            return self.const_null(ty.ptr_to());
        };
        let name = self.module.function_mut(function).fresh_name(name);
        let result = self.module.push_value(crate::ValueData::new(
            ty.clone().ptr_to(),
            crate::ValueKind::Register(name),
        ));
        let block = self.module.block_mut(entry);
        let at = block
            .instructions
            .iter()
            .take_while(|inst| matches!(inst, Instruction::Alloca { .. }))
            .count();
        block.instructions.insert(at, Instruction::Alloca { result, ty });
        result
    }

    /// Zero-initialised global of type `ty`; returns its pointer.
    pub fn add_global(&mut self, name: &str, ty: IrType) -> ValueId {
        let init = self.const_zero(&ty);
        self.module.add_global(name, ty, init)
    }

    pub fn load(&mut self, ptr: ValueId, name: &str) -> ValueId {
        let ptr_ty = self.value_type(ptr);
        let Some(pointee) = ptr_ty.pointee().cloned() else {
            tracing::error!(%ptr_ty, "load from non-pointer");
            self.record_codegen_error();
            return self.const_i32(0);
        };
        let result = self.new_register(pointee, name);
        self.emit(Instruction::Load { result, ptr });
        result
    }

    pub fn store(&mut self, value: ValueId, ptr: ValueId) {
        let ptr_ty = self.value_type(ptr);
        let value_ty = self.value_type(value);
        if ptr_ty.pointee() != Some(&value_ty) {
            tracing::error!(%ptr_ty, %value_ty, "store type mismatch");
            self.record_codegen_error();
            return;
        }
        self.emit(Instruction::Store { value, ptr });
    }
}
