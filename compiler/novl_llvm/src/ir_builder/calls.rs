//! Direct calls for `IrBuilder`.

use super::IrBuilder;
use crate::{FunctionId, Instruction, IrType, ValueId};

impl IrBuilder<'_> {
    /// Call `callee` with `args`. Returns `None` for `void` callees.
    ///
    /// An argument list that does not fit the signature records
    /// an error and returns the zero of the return type.
    pub fn call(&mut self, callee: FunctionId, args: &[ValueId], name: &str) -> Option<ValueId> {
        let func = self.module.function(callee);
        let ret = func.ret.clone();
        let params = func.param_types.clone();
        let varargs = func.varargs;
        let fname = func.name.clone();

        let arity_ok = if varargs {
            args.len() >= params.len()
        } else {
            args.len() == params.len()
        };
        let types_ok = params
            .iter()
            .zip(args)
            .all(|(ty, &arg)| self.module.value(arg).ty == *ty);
        if !arity_ok || !types_ok {
            tracing::error!(callee = %fname, expected = params.len(), got = args.len(), "call signature mismatch");
            self.record_codegen_error();
            return (ret != IrType::Void).then(|| self.const_zero(&ret));
        }

        let result = (ret != IrType::Void).then(|| self.new_register(ret, name));
        self.emit(Instruction::Call {
            result,
            callee,
            args: args.to_vec(),
        });
        result
    }
}
