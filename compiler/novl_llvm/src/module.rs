//! The module: arenas for values, blocks and functions, plus text emission.
//!
//! Everything is addressed by ID. `Module` owns the arenas; the
//! [`IrBuilder`](crate::IrBuilder) appends to them. `Display` writes the
//! whole module as LLVM 10 assembly.

use std::fmt::{self, Write as _};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::value::escape_bytes;
use crate::{
    BlockId, FunctionId, Instruction, IrType, Terminator, ValueData, ValueId, ValueKind,
};

/// A global variable or private string constant.
#[derive(Clone, Debug, PartialEq)]
pub struct Global {
    pub name: String,
    /// Type of the stored value (not the pointer).
    pub ty: IrType,
    pub init: GlobalInit,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GlobalInit {
    /// A constant value from the arena.
    Value(ValueId),
    /// NUL-terminated bytes of a private string constant.
    CString(Vec<u8>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct BasicBlock {
    pub label: String,
    pub function: FunctionId,
    pub instructions: Vec<Instruction>,
    pub terminator: Option<Terminator>,
}

impl BasicBlock {
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.terminator.is_some()
    }
}

/// A function definition, or a declaration when it has no blocks.
#[derive(Clone, Debug)]
pub struct Function {
    pub name: String,
    pub ret: IrType,
    pub params: Vec<ValueId>,
    pub param_types: Vec<IrType>,
    pub blocks: Vec<BlockId>,
    pub varargs: bool,
    declaration: bool,
    temp_index: u32,
    name_counts: FxHashMap<String, u32>,
    used_names: FxHashSet<String>,
}

impl Function {
    fn new(name: &str, ret: IrType, param_types: Vec<IrType>, varargs: bool) -> Self {
        Function {
            name: name.to_string(),
            ret,
            params: Vec::new(),
            param_types,
            blocks: Vec::new(),
            varargs,
            declaration: true,
            temp_index: 0,
            name_counts: FxHashMap::default(),
            used_names: FxHashSet::default(),
        }
    }

    #[inline]
    pub fn is_declaration(&self) -> bool {
        self.declaration
    }

    pub fn entry_block(&self) -> Option<BlockId> {
        self.blocks.first().copied()
    }

    /// Next value of the per-function temp counter.
    pub fn next_temp_index(&mut self) -> u32 {
        let index = self.temp_index;
        self.temp_index += 1;
        index
    }

    /// Reserve a local name, suffixing a number on collision (`add`, `add1`, ...).
    pub(crate) fn fresh_name(&mut self, hint: &str) -> String {
        let hint = if hint.is_empty() { "tmp" } else { hint };
        loop {
            let count = self.name_counts.entry(hint.to_string()).or_insert(0);
            let candidate = if *count == 0 {
                hint.to_string()
            } else {
                format!("{hint}{count}")
            };
            *count += 1;
            if self.used_names.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

/// Position inside a function, used to render what was emitted after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctionMark {
    block_count: usize,
    block: BlockId,
    instructions: usize,
    terminated: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Module {
    pub name: String,
    pub source_filename: String,
    pub(crate) values: Vec<ValueData>,
    pub(crate) blocks: Vec<BasicBlock>,
    pub(crate) functions: Vec<Function>,
    pub(crate) globals: Vec<Global>,
    global_names: FxHashMap<String, ValueId>,
    string_count: u32,
}

impl Module {
    pub fn new(name: impl Into<String>, source_filename: impl Into<String>) -> Self {
        Module {
            name: name.into(),
            source_filename: source_filename.into(),
            ..Module::default()
        }
    }

    // -- Arena access --

    #[inline]
    pub fn value(&self, id: ValueId) -> &ValueData {
        &self.values[id.index()]
    }

    #[inline]
    pub fn block(&self, id: BlockId) -> &BasicBlock {
        &self.blocks[id.index()]
    }

    #[inline]
    pub(crate) fn block_mut(&mut self, id: BlockId) -> &mut BasicBlock {
        &mut self.blocks[id.index()]
    }

    #[inline]
    pub fn function(&self, id: FunctionId) -> &Function {
        &self.functions[id.index()]
    }

    #[inline]
    pub fn function_mut(&mut self, id: FunctionId) -> &mut Function {
        &mut self.functions[id.index()]
    }

    pub fn functions(&self) -> impl Iterator<Item = (FunctionId, &Function)> {
        self.functions
            .iter()
            .enumerate()
            .map(|(i, f)| (FunctionId::from_index(i), f))
    }

    pub fn globals(&self) -> &[Global] {
        &self.globals
    }

    pub fn get_function(&self, name: &str) -> Option<FunctionId> {
        self.functions
            .iter()
            .position(|f| f.name == name)
            .map(FunctionId::from_index)
    }

    /// Pointer value of a named global.
    pub fn get_global(&self, name: &str) -> Option<ValueId> {
        self.global_names.get(name).copied()
    }

    pub(crate) fn push_value(&mut self, data: ValueData) -> ValueId {
        let id = ValueId::from_index(self.values.len());
        self.values.push(data);
        id
    }

    pub(crate) fn push_block(&mut self, block: BasicBlock) -> BlockId {
        let id = BlockId::from_index(self.blocks.len());
        self.blocks.push(block);
        id
    }

    // -- Symbols --

    /// Add a function. Functions and globals share one symbol namespace,
    /// so a taken name gets a numeric suffix here too.
    pub(crate) fn add_function(
        &mut self,
        name: &str,
        ret: IrType,
        params: &[(&str, IrType)],
        varargs: bool,
    ) -> FunctionId {
        let id = FunctionId::from_index(self.functions.len());
        let name = self.fresh_symbol(name);
        let mut function = Function::new(
            &name,
            ret,
            params.iter().map(|(_, ty)| ty.clone()).collect(),
            varargs,
        );
        let mut param_ids = Vec::with_capacity(params.len());
        for (param_name, ty) in params {
            let reg = function.fresh_name(param_name);
            param_ids.push(self.push_value(ValueData::new(ty.clone(), ValueKind::Register(reg))));
        }
        function.params = param_ids;
        self.functions.push(function);
        id
    }

    pub(crate) fn mark_defined(&mut self, id: FunctionId) {
        self.functions[id.index()].declaration = false;
    }

    /// Add a global; a taken symbol name gets a numeric suffix.
    pub(crate) fn add_global(&mut self, name: &str, ty: IrType, init: ValueId) -> ValueId {
        let name = self.fresh_symbol(name);
        let ptr = self.push_value(ValueData::new(
            ty.clone().ptr_to(),
            ValueKind::Global(name.clone()),
        ));
        self.globals.push(Global {
            name: name.clone(),
            ty,
            init: GlobalInit::Value(init),
        });
        self.global_names.insert(name, ptr);
        ptr
    }

    fn fresh_symbol(&self, name: &str) -> String {
        let taken = |n: &str| self.global_names.contains_key(n) || self.get_function(n).is_some();
        let mut candidate = name.to_string();
        let mut suffix = 1u32;
        while taken(&candidate) {
            candidate = format!("{name}{suffix}");
            suffix += 1;
        }
        candidate
    }

    /// Intern a private string constant, returning an `i8*` to its first byte.
    pub(crate) fn add_string(&mut self, text: &str) -> ValueId {
        let name = format!(".str.{}", self.string_count);
        self.string_count += 1;
        let mut bytes = text.as_bytes().to_vec();
        bytes.push(0);
        let len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
        self.globals.push(Global {
            name: name.clone(),
            ty: IrType::Array(len, Box::new(IrType::I8)),
            init: GlobalInit::CString(bytes),
        });
        self.push_value(ValueData::new(
            IrType::i8_ptr(),
            ValueKind::StringRef { global: name, len },
        ))
    }

    // -- Incremental rendering --

    /// Mark the current end of `block` in `function`.
    pub fn mark(&self, function: FunctionId, block: BlockId) -> FunctionMark {
        let bb = self.block(block);
        FunctionMark {
            block_count: self.function(function).blocks.len(),
            block,
            instructions: bb.instructions.len(),
            terminated: bb.is_terminated(),
        }
    }

    /// Lines emitted into `function` since `mark`.
    pub fn render_since(&self, function: FunctionId, mark: FunctionMark) -> Vec<String> {
        let mut lines = Vec::new();
        let bb = self.block(mark.block);
        for inst in &bb.instructions[mark.instructions.min(bb.instructions.len())..] {
            lines.push(self.render_instruction(inst));
        }
        if !mark.terminated {
            if let Some(term) = &bb.terminator {
                lines.push(self.render_terminator(term));
            }
        }
        let func = self.function(function);
        for &block in func.blocks.iter().skip(mark.block_count) {
            let bb = self.block(block);
            lines.push(format!("{}:", bb.label));
            lines.extend(bb.instructions.iter().map(|i| self.render_instruction(i)));
            if let Some(term) = &bb.terminator {
                lines.push(self.render_terminator(term));
            }
        }
        lines
    }

    // -- Text --

    pub fn render_instruction(&self, inst: &Instruction) -> String {
        match inst {
            Instruction::Binary {
                result,
                op,
                lhs,
                rhs,
            } => format!(
                "{} = {} {} {}, {}",
                self.value(*result),
                op.as_str(),
                self.value(*lhs).ty,
                self.value(*lhs),
                self.value(*rhs)
            ),
            Instruction::FNeg { result, operand } => format!(
                "{} = fneg {}",
                self.value(*result),
                self.value(*operand).typed()
            ),
            Instruction::ICmp {
                result,
                pred,
                lhs,
                rhs,
            } => format!(
                "{} = icmp {} {}, {}",
                self.value(*result),
                pred.as_str(),
                self.value(*lhs).typed(),
                self.value(*rhs)
            ),
            Instruction::FCmp {
                result,
                pred,
                lhs,
                rhs,
            } => format!(
                "{} = fcmp {} {}, {}",
                self.value(*result),
                pred.as_str(),
                self.value(*lhs).typed(),
                self.value(*rhs)
            ),
            Instruction::Alloca { result, ty } => {
                format!("{} = alloca {ty}", self.value(*result))
            }
            Instruction::Load { result, ptr } => {
                let result = self.value(*result);
                format!("{result} = load {}, {}", result.ty, self.value(*ptr).typed())
            }
            Instruction::Store { value, ptr } => format!(
                "store {}, {}",
                self.value(*value).typed(),
                self.value(*ptr).typed()
            ),
            Instruction::Call {
                result,
                callee,
                args,
            } => {
                let func = self.function(*callee);
                let args = args
                    .iter()
                    .map(|a| self.value(*a).typed())
                    .collect::<Vec<_>>()
                    .join(", ");
                let callee_ty = if func.varargs {
                    format!("{} ({})", func.ret, self.param_list(func))
                } else {
                    func.ret.to_string()
                };
                let call = format!("call {callee_ty} @{}({args})", func.name);
                match result {
                    Some(result) => format!("{} = {call}", self.value(*result)),
                    None => call,
                }
            }
        }
    }

    pub fn render_terminator(&self, term: &Terminator) -> String {
        match term {
            Terminator::Br(dest) => format!("br label %{}", self.block(*dest).label),
            Terminator::CondBr {
                cond,
                then_block,
                else_block,
            } => format!(
                "br {}, label %{}, label %{}",
                self.value(*cond).typed(),
                self.block(*then_block).label,
                self.block(*else_block).label
            ),
            Terminator::Ret(Some(value)) => format!("ret {}", self.value(*value).typed()),
            Terminator::Ret(None) => "ret void".to_string(),
        }
    }

    /// Parameter types only, with `...` for varargs.
    fn param_list(&self, func: &Function) -> String {
        let mut parts: Vec<String> = func.param_types.iter().map(ToString::to_string).collect();
        if func.varargs {
            parts.push("...".to_string());
        }
        parts.join(", ")
    }

    fn write_global(&self, out: &mut String, global: &Global) -> fmt::Result {
        match &global.init {
            GlobalInit::Value(init) => {
                writeln!(out, "@{} = global {} {}", global.name, global.ty, self.value(*init))
            }
            GlobalInit::CString(bytes) => writeln!(
                out,
                "@{} = private unnamed_addr constant {} c\"{}\"",
                global.name,
                global.ty,
                escape_bytes(bytes)
            ),
        }
    }

    fn write_function(&self, out: &mut String, func: &Function) -> fmt::Result {
        if func.is_declaration() {
            return writeln!(out, "declare {} @{}({})", func.ret, func.name, self.param_list(func));
        }
        let params = func
            .params
            .iter()
            .map(|p| self.value(*p).typed())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "define {} @{}({params}) {{", func.ret, func.name)?;
        for (i, &block) in func.blocks.iter().enumerate() {
            let bb = self.block(block);
            if i > 0 {
                out.push('\n');
            }
            writeln!(out, "{}:", bb.label)?;
            for inst in &bb.instructions {
                writeln!(out, "  {}", self.render_instruction(inst))?;
            }
            if let Some(term) = &bb.terminator {
                writeln!(out, "  {}", self.render_terminator(term))?;
            }
        }
        writeln!(out, "}}")
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        writeln!(out, "; ModuleID = '{}'", self.name)?;
        writeln!(out, "source_filename = \"{}\"", self.source_filename)?;
        if !self.globals.is_empty() {
            out.push('\n');
            for global in &self.globals {
                self.write_global(&mut out, global)?;
            }
        }
        for func in &self.functions {
            out.push('\n');
            self.write_function(&mut out, func)?;
        }
        f.write_str(&out)
    }
}
