//! AST-to-IR lowering.
//!
//! The `Lowerer` walks nodes depth-first and emits into the builder's
//! current block. Statements are lowered one at a time: an error is
//! reported and the next statement is lowered anyway, so a unit always
//! yields well-formed IR plus a list of diagnostics.
//!
//! # Organization
//!
//! | File | Nodes |
//! |------|-------|
//! | `expr.rs` | literals, arithmetic, negation, comparisons |
//! | `val.rs` | the four `ValRef` shapes |
//! | `call.rs` | function calls |
//! | `function.rs` | function definitions and bodies |
//! | `control.rs` | if-chains and while loops |

mod call;
mod control;
mod expr;
mod function;
mod val;

use novl_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use novl_ir::{Node, ValType};
use novl_llvm::{BlockId, FunctionId, IrBuilder, IrType, Module, ValueId};
use novl_stack::with_stack;
use tracing::{debug, trace};

use crate::{LowerError, SymbolEnvironment};

/// A lowered value with its source-level type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Typed {
    pub value: ValueId,
    pub ty: ValType,
}

/// The function whose body is being lowered.
#[derive(Clone, Debug)]
pub(crate) struct FunctionContext {
    pub id: FunctionId,
    pub mangled: String,
    pub return_type: ValType,
}

/// What a unit produced besides IR.
#[derive(Debug, Default)]
pub struct LowerOutput {
    pub diagnostics: DiagnosticQueue,
    /// Base names of functions defined in this unit, in order.
    pub defined: Vec<String>,
}

pub struct Lowerer<'s> {
    pub(crate) builder: IrBuilder<'s>,
    pub(crate) env: &'s mut SymbolEnvironment,
    pub(crate) diagnostics: DiagnosticQueue,
    pub(crate) function: Option<FunctionContext>,
    pub(crate) defined: Vec<String>,
}

impl<'s> Lowerer<'s> {
    /// A lowerer emitting at the end of `block`.
    pub fn new(module: &'s mut Module, env: &'s mut SymbolEnvironment, block: BlockId) -> Self {
        let mut builder = IrBuilder::new(module);
        builder.position_at_end(block);
        Lowerer {
            builder,
            env,
            diagnostics: DiagnosticQueue::new(),
            function: None,
            defined: Vec::new(),
        }
    }

    /// Where the next top-level statement will be emitted.
    pub fn cursor(&self) -> Option<BlockId> {
        self.builder.current_block()
    }

    /// Lower a program (or a single node) statement by statement.
    pub fn lower_top_level(&mut self, node: &Node) {
        match node {
            Node::Program(program) => {
                debug!(statements = program.statements.len(), "lowering program");
                for stmt in &program.statements {
                    self.lower_statement(stmt);
                }
            }
            other => self.lower_statement(other),
        }
    }

    /// Consume the lowerer, folding builder fallbacks into the diagnostics.
    pub fn finish(mut self) -> LowerOutput {
        let count = self.builder.codegen_error_count();
        if count > 0 {
            self.diagnostics.emit(
                Diagnostic::error(ErrorCode::E9001)
                    .with_message(format!("The IR builder rejected {count} instruction(s).")),
            );
        }
        LowerOutput {
            diagnostics: self.diagnostics,
            defined: self.defined,
        }
    }

    /// Lower one statement, reporting instead of propagating its error.
    pub(crate) fn lower_statement(&mut self, node: &Node) {
        trace!(kind = node.kind_name(), "lowering statement");
        if let Err(err) = self.lower_node(node) {
            self.report(&err);
        }
    }

    pub(crate) fn report(&mut self, err: &LowerError) {
        debug!(%err, "lowering error");
        self.diagnostics.emit(err.to_diagnostic());
    }

    pub(crate) fn warn(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.emit(diagnostic);
    }

    /// Lower any node. Statement-like nodes produce no value.
    pub(crate) fn lower_node(&mut self, node: &Node) -> Result<Option<Typed>, LowerError> {
        with_stack(|| match node {
            Node::Number(_)
            | Node::Str(_)
            | Node::Binary(_)
            | Node::Negate(_)
            | Node::Val(_)
            | Node::FunctionCall(_)
            | Node::Comparison(_) => self.lower_value(node).map(Some),
            Node::Conditional(cond) => self.lower_conditional(cond).map(|()| None),
            Node::Body(body) => {
                self.lower_body(body);
                Ok(None)
            }
            Node::FunctionDef(def) => self.lower_function_def(def).map(|()| None),
            Node::Program(program) => {
                for stmt in &program.statements {
                    self.lower_statement(stmt);
                }
                Ok(None)
            }
        })
    }

    /// Lower a node that must produce a value.
    pub(crate) fn lower_value(&mut self, node: &Node) -> Result<Typed, LowerError> {
        with_stack(|| match node {
            Node::Number(lit) => Ok(self.lower_number(lit)),
            Node::Str(lit) => Ok(Typed {
                value: self.builder.const_string(&lit.text),
                ty: ValType::String,
            }),
            Node::Val(val) => self.lower_val_ref(val),
            Node::Binary(bin) => self.lower_binary(bin),
            Node::Negate(neg) => self.lower_negate(neg),
            Node::FunctionCall(call) => self.lower_call(call),
            Node::Comparison(_) => Err(LowerError::not_implemented("Using a comparison as a value")),
            Node::Conditional(_) | Node::Body(_) | Node::FunctionDef(_) | Node::Program(_) => Err(
                LowerError::not_implemented(format!("Using a {} as a value", node.kind_name())),
            ),
        })
    }

    /// The active function's mangled name, `None` at the entry point.
    pub(crate) fn scope(&self) -> Option<&str> {
        self.function.as_ref().map(|f| f.mangled.as_str())
    }

    pub(crate) fn current_function(&self) -> Result<FunctionId, LowerError> {
        self.builder
            .current_function()
            .ok_or_else(|| LowerError::Internal("no current function".into()))
    }

    /// Branch to `dest` unless the current block already ends.
    pub(crate) fn br_if_open(&mut self, dest: BlockId) {
        if !self.builder.current_block_terminated() {
            self.builder.br(dest);
        }
    }
}

/// IR type used to store values of `ty`.
pub fn ir_type(ty: ValType) -> IrType {
    match ty {
        ValType::Int => IrType::I32,
        ValType::Double => IrType::F64,
        ValType::String => IrType::i8_ptr(),
    }
}
