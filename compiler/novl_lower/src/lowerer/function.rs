//! Function definitions and bodies.

use novl_ir::{mangle, Body, FunctionDef};
use tracing::debug;

use super::{ir_type, FunctionContext, Lowerer};
use crate::{Binding, FunctionSignature, LowerError};

impl Lowerer<'_> {
    /// Define `def` as a new IR function and lower its body into it.
    ///
    /// The insertion point and function context are restored afterwards,
    /// so a definition can appear anywhere a statement can.
    pub(crate) fn lower_function_def(&mut self, def: &FunctionDef) -> Result<(), LowerError> {
        let mangled = mangle(&def.name, &def.param_types());
        if self.env.contains_function(&mangled) {
            return Err(LowerError::FunctionExists {
                name: def.name.clone(),
            });
        }
        debug!(name = %def.name, %mangled, "defining function");

        let params: Vec<(&str, _)> = def
            .params
            .iter()
            .map(|p| (p.name.as_str(), ir_type(p.ty)))
            .collect();
        let id = self
            .builder
            .define_function(&mangled, ir_type(def.return_type), &params);
        // registered before the body so recursive calls resolve
        self.env.declare_function(FunctionSignature {
            name: def.name.clone(),
            mangled: mangled.clone(),
            return_type: def.return_type,
            params: def.params.clone(),
            id,
        })?;

        let saved_block = self.builder.current_block();
        let saved_function = self.builder.current_function();
        let saved_context = self.function.replace(FunctionContext {
            id,
            mangled: mangled.clone(),
            return_type: def.return_type,
        });

        let entry = self.builder.append_block(id, "entry");
        self.builder.position_at_end(entry);

        // parameters are copied into entry-block slots
        let mut bindings = Vec::with_capacity(def.params.len());
        for (i, param) in def.params.iter().enumerate() {
            let value = self.builder.function_param(id, i);
            let ptr = self
                .builder
                .create_entry_alloca(id, ir_type(param.ty), &format!("{}.addr", param.name));
            self.builder.store(value, ptr);
            bindings.push((param.name.clone(), Binding { ty: param.ty, ptr }));
        }
        self.env.set_params(&mangled, bindings);

        self.lower_function_body(&def.body);

        self.function = saved_context;
        if let Some(function) = saved_function {
            self.builder.set_current_function(function);
        }
        if let Some(block) = saved_block {
            self.builder.position_at_end(block);
        }
        self.defined.push(def.name.clone());
        Ok(())
    }

    /// Statements, then `ret` of the tail expression or of the zero of the
    /// return type.
    fn lower_function_body(&mut self, body: &Body) {
        for stmt in &body.statements {
            self.lower_statement(stmt);
        }
        if self.builder.current_block_terminated() {
            return;
        }
        let Some(ctx) = &self.function else {
            return;
        };
        let return_type = ctx.return_type;

        let tail = body.tail_expression.as_deref().map(|tail| {
            let value = self.lower_value(tail)?;
            if value.ty == return_type {
                Ok(value.value)
            } else {
                Err(LowerError::TypeMismatch {
                    context: "return value".into(),
                    expected: return_type,
                    found: value.ty,
                })
            }
        });
        let ret = match tail {
            Some(Ok(value)) => value,
            Some(Err(err)) => {
                self.report(&err);
                self.builder.const_zero(&ir_type(return_type))
            }
            None => self.builder.const_zero(&ir_type(return_type)),
        };
        self.builder.ret(ret);
    }

    /// Lower the statements of a block body in place, tail included.
    pub(crate) fn lower_body(&mut self, body: &Body) {
        for stmt in body.iter() {
            self.lower_statement(stmt);
        }
    }
}
