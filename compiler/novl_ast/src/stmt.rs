//! Statements, bodies and control flow.

use novl_ir::{mangle, Body, Conditional, FunctionDef, Node, Param, ValRef, ValType};
use novl_parse::tree::{Assignment, FunDef, IfBlock, Stmt, Top, TypeName, ValDec, WhileLoop};
use novl_stack::with_stack;
use tracing::trace;

use crate::{AstBuilder, BuildError};

impl AstBuilder<'_> {
    pub(crate) fn build_stmt(&mut self, stmt: &Stmt) -> Result<Node, BuildError> {
        match stmt {
            Stmt::ValDec(dec) => self.build_val_dec(dec, None),
            Stmt::ValDef(def) => {
                // the initializer sees the bindings from before this declaration
                let value = self.build_expr(&def.value)?;
                self.build_val_dec(&def.dec, Some(value))
            }
            Stmt::Assignment(assign) => self.build_assignment(assign),
            Stmt::FunDef(fun) => self.build_fun_def(fun).map(Node::FunctionDef),
            Stmt::IfBlock(block) => self.build_if_block(block).map(Node::Conditional),
            Stmt::While(w) => self.build_while(w).map(Node::Conditional),
            Stmt::Expr(expr) => self.build_expr(expr),
        }
    }

    fn build_val_dec(&mut self, dec: &ValDec, value: Option<Node>) -> Result<Node, BuildError> {
        let declared_type = match &dec.ty {
            Some(ty) => resolve_type(ty)?,
            None => ValType::Int,
        };
        self.scope.declare(&dec.name.name, declared_type);
        Ok(Node::Val(ValRef::Declaration {
            id: dec.name.name.clone(),
            declared_type,
            value: value.map(Box::new),
        }))
    }

    fn build_assignment(&mut self, assign: &Assignment) -> Result<Node, BuildError> {
        let value = self.build_expr(&assign.value)?;
        Ok(Node::Val(ValRef::Assignment {
            id: assign.name.name.clone(),
            value: Box::new(value),
        }))
    }

    fn build_fun_def(&mut self, fun: &FunDef) -> Result<FunctionDef, BuildError> {
        let params = fun
            .params
            .iter()
            .map(|p| Ok(Param::new(p.name.name.clone(), resolve_type(&p.ty)?)))
            .collect::<Result<Vec<_>, BuildError>>()?;
        let return_type = match &fun.return_type {
            Some(ty) => resolve_type(ty)?,
            None => ValType::Int,
        };
        let param_types: Vec<ValType> = params.iter().map(|p| p.ty).collect();
        // registered before the body so recursive calls resolve
        self.scope
            .define_function(mangle(&fun.name.name, &param_types), return_type);
        trace!(name = %fun.name.name, params = params.len(), "building function");

        self.scope
            .push_frame(params.iter().map(|p| (p.name.clone(), p.ty)));
        let body = self.build_body(&fun.body);
        self.scope.pop_frame();

        Ok(FunctionDef {
            name: fun.name.name.clone(),
            params,
            return_type,
            body: body?,
        })
    }

    /// Split a block into statements and an optional tail expression.
    ///
    /// Only a bare expression in last position becomes the tail; any other
    /// final statement stays in `statements`.
    pub(crate) fn build_body(&mut self, block: &Top) -> Result<Body, BuildError> {
        with_stack(|| {
            let mut statements = Vec::with_capacity(block.stmts.len());
            let mut tail_expression = None;
            let last = block.stmts.len().saturating_sub(1);
            for (i, stmt) in block.stmts.iter().enumerate() {
                let node = self.build_stmt(stmt)?;
                if i == last && matches!(stmt, Stmt::Expr(_)) {
                    tail_expression = Some(Box::new(node));
                } else {
                    statements.push(node);
                }
            }
            Ok(Body {
                statements,
                tail_expression,
            })
        })
    }

    fn build_if_block(&mut self, block: &IfBlock) -> Result<Conditional, BuildError> {
        let condition = self.build_comparison(&block.if_clause.comparison)?;
        let true_body = self.build_body(&block.if_clause.block)?;
        let elseif_chain = block
            .else_ifs
            .iter()
            .map(|clause| {
                let condition = self.build_comparison(&clause.comparison)?;
                let body = self.build_body(&clause.block)?;
                Ok(Conditional::link(condition, body))
            })
            .collect::<Result<Vec<_>, BuildError>>()?;
        let false_body = block
            .else_block
            .as_ref()
            .map(|b| self.build_body(b))
            .transpose()?;
        Ok(Conditional {
            true_body,
            false_body,
            condition,
            elseif_chain,
            is_top_level: true,
            is_loop: false,
        })
    }

    fn build_while(&mut self, w: &WhileLoop) -> Result<Conditional, BuildError> {
        let condition = self.build_comparison(&w.comparison)?;
        let body = self.build_body(&w.body)?;
        Ok(Conditional::while_loop(condition, body))
    }
}

fn resolve_type(ty: &TypeName) -> Result<ValType, BuildError> {
    ValType::from_name(&ty.name).ok_or_else(|| BuildError::UnknownType {
        name: ty.name.clone(),
        span: ty.span,
    })
}
