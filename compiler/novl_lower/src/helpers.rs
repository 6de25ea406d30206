//! Built-in print helpers.
//!
//! `printf` is declared external and wrapped once per value type. The
//! wrappers are registered as overloads of `print`.

use novl_ir::{mangle, Param, ValType};
use novl_llvm::{IrBuilder, IrType};

use crate::lowerer::ir_type;
use crate::{FunctionSignature, SymbolEnvironment};

const FORMATS: [(ValType, &str); 3] = [
    (ValType::Int, "%d\n"),
    (ValType::Double, "%f\n"),
    (ValType::String, "%s\n"),
];

pub(crate) fn install(builder: &mut IrBuilder<'_>, env: &mut SymbolEnvironment) {
    let printf = builder.declare_function("printf", IrType::I32, &[("fmt", IrType::i8_ptr())], true);
    for (ty, format) in FORMATS {
        let mangled = mangle("print", &[ty]);
        let id = builder.define_function(&mangled, IrType::I32, &[("d", ir_type(ty))]);
        let entry = builder.append_block(id, "entry");
        builder.position_at_end(entry);
        let fmt = builder.const_string(format);
        let d = builder.function_param(id, 0);
        builder.call(printf, &[fmt, d], "call");
        let zero = builder.const_i32(0);
        builder.ret(zero);

        // fresh environment: the mangled names cannot clash
        let _ = env.declare_function(FunctionSignature {
            name: "print".into(),
            mangled,
            return_type: ValType::Int,
            params: vec![Param::new("d", ty)],
            id,
        });
    }
}
