//! Value references: wrapper, declaration, assignment, bare reference.

use novl_diagnostic::{Diagnostic, ErrorCode};
use novl_ir::{Node, ValRef, ValType};

use super::{ir_type, Lowerer, Typed};
use crate::{Binding, LowerError};

impl Lowerer<'_> {
    /// The four shapes are handled in this order, and every shape that
    /// names a variable ends with a load of it.
    pub(crate) fn lower_val_ref(&mut self, val: &ValRef) -> Result<Typed, LowerError> {
        match val {
            ValRef::Wrapped(node) => self.lower_value(node),
            ValRef::Declaration {
                id,
                declared_type,
                value,
            } => self.lower_declaration(id, *declared_type, value.as_deref()),
            ValRef::Assignment { id, value } => self.lower_assignment(id, value),
            ValRef::Reference { id } => {
                let binding = self
                    .env
                    .lookup(id, self.scope())
                    .ok_or_else(|| LowerError::UndefinedVariable { name: id.clone() })?;
                Ok(self.load(id, binding))
            }
        }
    }

    fn lower_declaration(
        &mut self,
        id: &str,
        declared_type: ValType,
        value: Option<&Node>,
    ) -> Result<Typed, LowerError> {
        // the initializer still sees the previous binding of `id`
        let initial = match value {
            Some(node) => {
                let v = self.lower_value(node)?;
                if v.ty != declared_type {
                    return Err(LowerError::TypeMismatch {
                        context: format!("declaration of {id}"),
                        expected: declared_type,
                        found: v.ty,
                    });
                }
                v.value
            }
            None => self.builder.const_zero(&ir_type(declared_type)),
        };

        if self.env.lookup(id, self.scope()).is_some() {
            self.warn(Diagnostic::new(ErrorCode::E3100).with_message(format!(
                "Variable {id} already exists. You should not use `val` here."
            )));
        }

        let ptr = match &self.function {
            Some(ctx) => {
                let function = ctx.id;
                self.builder
                    .create_entry_alloca(function, ir_type(declared_type), id)
            }
            None => self.builder.add_global(id, ir_type(declared_type)),
        };
        self.builder.store(initial, ptr);
        let binding = Binding {
            ty: declared_type,
            ptr,
        };
        let scope = self.scope().map(str::to_string);
        self.env.declare(scope.as_deref(), id, binding);
        Ok(self.load(id, binding))
    }

    fn lower_assignment(&mut self, id: &str, value: &Node) -> Result<Typed, LowerError> {
        let binding = self
            .env
            .lookup(id, self.scope())
            .ok_or_else(|| LowerError::AssignToUndeclared { name: id.to_string() })?;
        let v = self.lower_value(value)?;
        if v.ty != binding.ty {
            return Err(LowerError::TypeMismatch {
                context: format!("assignment to {id}"),
                expected: binding.ty,
                found: v.ty,
            });
        }
        self.builder.store(v.value, binding.ptr);
        Ok(self.load(id, binding))
    }

    fn load(&mut self, id: &str, binding: Binding) -> Typed {
        Typed {
            value: self.builder.load(binding.ptr, id),
            ty: binding.ty,
        }
    }
}
