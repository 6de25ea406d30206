//! Function calls.

use novl_ir::{FunctionCall, ValType};

use super::{Lowerer, Typed};
use crate::LowerError;

impl Lowerer<'_> {
    /// Arguments are lowered left to right, then the callee is looked up
    /// by the mangled name of their types.
    pub(crate) fn lower_call(&mut self, call: &FunctionCall) -> Result<Typed, LowerError> {
        let args = call
            .args
            .iter()
            .map(|arg| self.lower_value(arg))
            .collect::<Result<Vec<_>, _>>()?;
        let arg_types: Vec<ValType> = args.iter().map(|a| a.ty).collect();
        let sig = self.env.resolve_function(&call.name, &arg_types)?;
        let (callee, return_type) = (sig.id, sig.return_type);

        let values: Vec<_> = args.iter().map(|a| a.value).collect();
        let value = self
            .builder
            .call(callee, &values, "call")
            .ok_or_else(|| LowerError::Internal(format!("call to {} produced no value", call.name)))?;
        Ok(Typed {
            value,
            ty: return_type,
        })
    }
}
