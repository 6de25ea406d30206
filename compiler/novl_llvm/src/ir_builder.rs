//! ID-based IR builder.
//!
//! `IrBuilder` borrows a [`Module`] mutably, tracks the current function
//! and block, and hands out `Copy` IDs for everything it creates.
//!
//! # Method Organization
//!
//! | Category | Methods |
//! |----------|---------|
//! | Constants | `const_i1`, `const_i32`, `const_f64`, `const_null`, `const_zero`, `const_string` |
//! | Memory | `create_entry_alloca`, `load`, `store`, `add_global` |
//! | Arithmetic | `add`, `sub`, `mul`, `sdiv`, `srem`, `neg`, `fadd`, ..., `fneg` |
//! | Comparisons | `icmp`, `fcmp` |
//! | Control flow | `br`, `cond_br`, `ret` |
//! | Calls | `call` |
//! | Blocks | `append_block`, `position_at_end`, `current_block`, ... |
//! | Functions | `declare_function`, `define_function`, `get_function`, ... |
//!
//! Type mismatches never panic: the builder logs them, bumps
//! `codegen_error_count`, and returns a placeholder constant.

mod arithmetic;
mod calls;
mod comparisons;
mod control_flow;
mod memory;

use crate::module::BasicBlock;
use crate::{BlockId, FunctionId, Instruction, IrType, Module, ValueData, ValueId, ValueKind};

pub struct IrBuilder<'m> {
    module: &'m mut Module,
    current_function: Option<FunctionId>,
    current_block: Option<BlockId>,
    codegen_errors: u32,
}

impl<'m> IrBuilder<'m> {
    pub fn new(module: &'m mut Module) -> Self {
        IrBuilder {
            module,
            current_function: None,
            current_block: None,
            codegen_errors: 0,
        }
    }

    #[inline]
    pub fn module(&self) -> &Module {
        &*self.module
    }

    pub(crate) fn record_codegen_error(&mut self) {
        self.codegen_errors += 1;
    }

    /// Number of malformed-IR fallbacks taken so far.
    pub fn codegen_error_count(&self) -> u32 {
        self.codegen_errors
    }

    #[inline]
    pub fn value_type(&self, id: ValueId) -> IrType {
        self.module.value(id).ty.clone()
    }

    // -----------------------------------------------------------------------
    // Constants
    // -----------------------------------------------------------------------

    pub fn const_i1(&mut self, val: bool) -> ValueId {
        self.module
            .push_value(ValueData::new(IrType::I1, ValueKind::ConstInt(i64::from(val))))
    }

    pub fn const_i32(&mut self, val: i32) -> ValueId {
        self.module
            .push_value(ValueData::new(IrType::I32, ValueKind::ConstInt(i64::from(val))))
    }

    pub fn const_f64(&mut self, val: f64) -> ValueId {
        self.module
            .push_value(ValueData::new(IrType::F64, ValueKind::ConstFloat(val)))
    }

    /// Null pointer of pointer type `ty`.
    pub fn const_null(&mut self, ty: IrType) -> ValueId {
        self.module.push_value(ValueData::new(ty, ValueKind::Null))
    }

    /// The zero value of `ty`.
    pub fn const_zero(&mut self, ty: &IrType) -> ValueId {
        match ty {
            IrType::I1 => self.const_i1(false),
            IrType::I8 => self
                .module
                .push_value(ValueData::new(IrType::I8, ValueKind::ConstInt(0))),
            IrType::I32 => self.const_i32(0),
            IrType::F64 => self.const_f64(0.0),
            IrType::Ptr(_) => self.const_null(ty.clone()),
            IrType::Void | IrType::Array(..) => {
                tracing::error!(%ty, "no zero constant for type");
                self.record_codegen_error();
                self.const_i32(0)
            }
        }
    }

    /// Private string constant; evaluates to `i8*`.
    pub fn const_string(&mut self, text: &str) -> ValueId {
        self.module.add_string(text)
    }

    // -----------------------------------------------------------------------
    // Functions
    // -----------------------------------------------------------------------

    /// Declare an external function, or return the existing one.
    pub fn declare_function(
        &mut self,
        name: &str,
        ret: IrType,
        params: &[(&str, IrType)],
        varargs: bool,
    ) -> FunctionId {
        if let Some(existing) = self.module.get_function(name) {
            return existing;
        }
        self.module.add_function(name, ret, params, varargs)
    }

    /// Define a function. The caller appends its `entry` block.
    ///
    /// Does not move the insertion point.
    pub fn define_function(
        &mut self,
        name: &str,
        ret: IrType,
        params: &[(&str, IrType)],
    ) -> FunctionId {
        let id = self.module.add_function(name, ret, params, false);
        self.module.mark_defined(id);
        id
    }

    #[inline]
    pub fn get_function(&self, name: &str) -> Option<FunctionId> {
        self.module.get_function(name)
    }

    /// The `index`th parameter of `function`.
    pub fn function_param(&mut self, function: FunctionId, index: usize) -> ValueId {
        if let Some(&param) = self.module.function(function).params.get(index) {
            return param;
        }
        tracing::error!(?function, index, "parameter index out of range");
        self.record_codegen_error();
        ValueId::NONE
    }

    #[inline]
    pub fn current_function(&self) -> Option<FunctionId> {
        self.current_function
    }

    pub fn set_current_function(&mut self, function: FunctionId) {
        self.current_function = Some(function);
    }

    /// Unique name `_INTERNAL_<FUNCTION>_<TITLE>_<n>` from the current
    /// function's temp counter.
    pub fn unique_id(&mut self, title: &str) -> String {
        let Some(function) = self.current_function else {
            tracing::error!(title, "unique_id outside of a function");
            self.record_codegen_error();
            return format!("_INTERNAL_{title}").to_uppercase();
        };
        let func = self.module.function_mut(function);
        let index = func.next_temp_index();
        let id = if title.is_empty() {
            format!("_INTERNAL_{}_{index}", func.name)
        } else {
            format!("_INTERNAL_{}_{title}_{index}", func.name)
        };
        id.to_uppercase()
    }

    // -----------------------------------------------------------------------
    // Blocks
    // -----------------------------------------------------------------------

    /// Append a new block to `function`; the label is uniquified.
    pub fn append_block(&mut self, function: FunctionId, label: &str) -> BlockId {
        let label = self.module.function_mut(function).fresh_name(label);
        let id = self.module.push_block(BasicBlock {
            label,
            function,
            instructions: Vec::new(),
            terminator: None,
        });
        self.module.function_mut(function).blocks.push(id);
        id
    }

    /// Move the insertion point to the end of `block`.
    pub fn position_at_end(&mut self, block: BlockId) {
        self.current_function = Some(self.module.block(block).function);
        self.current_block = Some(block);
    }

    #[inline]
    pub fn current_block(&self) -> Option<BlockId> {
        self.current_block
    }

    #[inline]
    pub fn block_has_terminator(&self, block: BlockId) -> bool {
        self.module.block(block).is_terminated()
    }

    pub fn current_block_terminated(&self) -> bool {
        self.current_block
            .is_some_and(|block| self.block_has_terminator(block))
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// A fresh register in the current function.
    pub(crate) fn new_register(&mut self, ty: IrType, hint: &str) -> ValueId {
        let name = match self.current_function {
            Some(function) => self.module.function_mut(function).fresh_name(hint),
            None => {
                tracing::error!(hint, "register created outside of a function");
                self.record_codegen_error();
                hint.to_string()
            }
        };
        self.module
            .push_value(ValueData::new(ty, ValueKind::Register(name)))
    }

    /// Append to the current block.
    pub(crate) fn emit(&mut self, inst: Instruction) {
        let Some(block) = self.current_block else {
            tracing::error!(?inst, "instruction emitted with no insertion point");
            self.record_codegen_error();
            return;
        };
        if self.block_has_terminator(block) {
            tracing::error!(?inst, ?block, "instruction emitted after terminator");
            self.record_codegen_error();
        }
        self.module.block_mut(block).instructions.push(inst);
    }
}
