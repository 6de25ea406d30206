//! Compilation session: one module, one symbol environment.
//!
//! A session is created at program start (file compile) or REPL launch and
//! dropped at exit. Every unit lowered through it shares the same tables
//! and appends to the same entry-point function.

use std::hash::Hasher;

use rustc_hash::FxHasher;
use tracing::debug;

use novl_ir::Node;
use novl_llvm::{BlockId, FunctionId, FunctionMark, IrBuilder, IrType, Module};

use crate::lowerer::{LowerOutput, Lowerer};
use crate::{helpers, LowerFailed, SymbolEnvironment};

/// Session switches, mirroring `-noMain` and `-noStd`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    /// Name the entry point `main`.
    pub install_main: bool,
    /// Emit `printf` and the `print` overloads.
    pub helpers: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            install_main: true,
            helpers: true,
        }
    }
}

/// How a unit treats lowering errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LowerMode {
    /// Report and keep going; the unit always succeeds.
    BestEffort,
    /// Lower everything, then fail if any error was reported.
    Strict,
}

pub struct CompilationSession {
    pub env: SymbolEnvironment,
    module: Module,
    entry: FunctionId,
    /// Insertion point for the next top-level statement.
    cursor: BlockId,
    options: SessionOptions,
}

impl CompilationSession {
    pub fn new(module_name: &str, source_filename: &str, options: SessionOptions) -> Self {
        let mut module = Module::new(module_name, source_filename);
        let mut env = SymbolEnvironment::new();
        let (entry, cursor) = {
            let mut builder = IrBuilder::new(&mut module);
            if options.helpers {
                helpers::install(&mut builder, &mut env);
            }
            let name = entry_name(module_name, options.install_main);
            let entry = builder.define_function(&name, IrType::I32, &[]);
            let cursor = builder.append_block(entry, "entry");
            (entry, cursor)
        };
        debug!(module = module_name, ?options, "session started");
        CompilationSession {
            env,
            module,
            entry,
            cursor,
            options,
        }
    }

    #[inline]
    pub fn module(&self) -> &Module {
        &self.module
    }

    #[inline]
    pub fn options(&self) -> SessionOptions {
        self.options
    }

    #[inline]
    pub fn entry(&self) -> FunctionId {
        self.entry
    }

    pub fn entry_name(&self) -> &str {
        &self.module.function(self.entry).name
    }

    /// Lower `program` into the entry point.
    pub fn lower(&mut self, program: &Node, mode: LowerMode) -> Result<LowerOutput, LowerFailed> {
        let mut lowerer = Lowerer::new(&mut self.module, &mut self.env, self.cursor);
        lowerer.lower_top_level(program);
        if let Some(cursor) = lowerer.cursor() {
            self.cursor = cursor;
        }
        let output = lowerer.finish();
        match (mode, output.diagnostics.error_guaranteed()) {
            (LowerMode::Strict, Some(guarantee)) => Err(LowerFailed {
                diagnostics: output.diagnostics,
                guarantee,
            }),
            _ => Ok(output),
        }
    }

    /// Close the entry point with `ret i32 0`.
    pub fn finish(&mut self) {
        let mut builder = IrBuilder::new(&mut self.module);
        builder.position_at_end(self.cursor);
        if !builder.current_block_terminated() {
            let zero = builder.const_i32(0);
            builder.ret(zero);
        }
    }

    /// Mark the end of the entry point, for [`render_since`](Self::render_since).
    pub fn mark(&self) -> FunctionMark {
        self.module.mark(self.entry, self.cursor)
    }

    /// Entry-point lines emitted since `mark`.
    pub fn render_since(&self, mark: FunctionMark) -> Vec<String> {
        self.module.render_since(self.entry, mark)
    }

    /// The module as text, without surrounding whitespace.
    pub fn emit_ir(&self) -> String {
        self.module.to_string().trim().to_string()
    }
}

/// `main`, or `__INTERNAL_<hash>_MAIN_` from a hash of the module name.
pub fn entry_name(module_name: &str, install_main: bool) -> String {
    if install_main {
        return "main".to_string();
    }
    let mut hasher = FxHasher::default();
    hasher.write(module_name.as_bytes());
    format!("__INTERNAL_{:X}_MAIN_", hasher.finish())
}
