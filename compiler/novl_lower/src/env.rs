//! Symbol environment: variable storage and the function table.
//!
//! Variables resolve in three steps: the active function's parameters,
//! then its locals, then the globals of the entry point. Nothing is ever
//! removed; a REPL session keeps one environment for its whole life.

use std::fmt;

use rustc_hash::FxHashMap;

use novl_ir::{mangle, Param, TypeEnv, ValType};
use novl_llvm::{FunctionId, ValueId};

use crate::LowerError;

/// Storage for a variable: a pointer to its slot and the value type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub ty: ValType,
    pub ptr: ValueId,
}

/// A defined function.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionSignature {
    pub name: String,
    pub mangled: String,
    pub return_type: ValType,
    pub params: Vec<Param>,
    pub id: FunctionId,
}

impl FunctionSignature {
    pub fn param_types(&self) -> Vec<ValType> {
        self.params.iter().map(|p| p.ty).collect()
    }
}

/// `name(Type, ...): Type`
impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param.ty)?;
        }
        write!(f, "): {}", self.return_type)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SymbolEnvironment {
    globals: FxHashMap<String, Binding>,
    /// Keyed by mangled function name, in declaration order.
    params: FxHashMap<String, Vec<(String, Binding)>>,
    locals: FxHashMap<String, FxHashMap<String, Binding>>,
    functions: FxHashMap<String, usize>,
    signatures: Vec<FunctionSignature>,
}

impl SymbolEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Variables --

    /// Bind `name` in `function` (mangled) or, with `None`, globally.
    ///
    /// Returns the binding it replaces in that table, if any.
    pub fn declare(
        &mut self,
        function: Option<&str>,
        name: &str,
        binding: Binding,
    ) -> Option<Binding> {
        match function {
            Some(function) => self
                .locals
                .entry(function.to_string())
                .or_default()
                .insert(name.to_string(), binding),
            None => self.globals.insert(name.to_string(), binding),
        }
    }

    /// Bind the parameters of `function`, in order.
    pub fn set_params(&mut self, function: &str, params: Vec<(String, Binding)>) {
        self.params.insert(function.to_string(), params);
    }

    /// Resolve `name` as seen from `function` (mangled), or from the entry
    /// point with `None`.
    ///
    /// Inside a function a `val` redeclaring a parameter takes over from it,
    /// so locals are searched first, then parameters, then globals.
    pub fn lookup(&self, name: &str, function: Option<&str>) -> Option<Binding> {
        if let Some(function) = function {
            if let Some(binding) = self.locals.get(function).and_then(|l| l.get(name)) {
                return Some(*binding);
            }
            let param = self
                .params
                .get(function)
                .and_then(|params| params.iter().find(|(n, _)| n == name));
            if let Some((_, binding)) = param {
                return Some(*binding);
            }
        }
        self.globals.get(name).copied()
    }

    pub fn global(&self, name: &str) -> Option<Binding> {
        self.globals.get(name).copied()
    }

    // -- Functions --

    #[inline]
    pub fn contains_function(&self, mangled: &str) -> bool {
        self.functions.contains_key(mangled)
    }

    pub fn declare_function(&mut self, signature: FunctionSignature) -> Result<(), LowerError> {
        if self.contains_function(&signature.mangled) {
            return Err(LowerError::FunctionExists {
                name: signature.name,
            });
        }
        self.functions
            .insert(signature.mangled.clone(), self.signatures.len());
        self.signatures.push(signature);
        Ok(())
    }

    pub fn function(&self, mangled: &str) -> Option<&FunctionSignature> {
        self.functions.get(mangled).map(|&i| &self.signatures[i])
    }

    /// Find the function a call with `arg_types` refers to.
    ///
    /// An exact mangled match wins. Otherwise, if a same-named function
    /// with the same arity exists, the first differing argument is reported;
    /// a same-named function of another arity reports the count; with no
    /// same-named function at all the name does not exist.
    pub fn resolve_function(
        &self,
        name: &str,
        arg_types: &[ValType],
    ) -> Result<&FunctionSignature, LowerError> {
        if let Some(sig) = self.function(&mangle(name, arg_types)) {
            return Ok(sig);
        }
        let candidates: Vec<&FunctionSignature> =
            self.signatures.iter().filter(|s| s.name == name).collect();

        let same_arity = candidates
            .iter()
            .find(|s| s.params.len() == arg_types.len());
        if let Some(sig) = same_arity {
            let mismatch = sig
                .params
                .iter()
                .zip(arg_types)
                .enumerate()
                .find(|(_, (param, found))| param.ty != **found);
            if let Some((i, (param, found))) = mismatch {
                return Err(LowerError::ArgumentType {
                    name: name.to_string(),
                    position: i + 1,
                    expected: param.ty,
                    found: *found,
                });
            }
        }
        match candidates.first() {
            Some(sig) => Err(LowerError::ArgumentCount {
                name: name.to_string(),
                expected: sig.params.len(),
                supplied: arg_types.len(),
            }),
            None => Err(LowerError::UndefinedFunction {
                name: name.to_string(),
            }),
        }
    }

    /// Functions in definition order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionSignature> {
        self.signatures.iter()
    }
}

impl TypeEnv for SymbolEnvironment {
    fn variable_type(&self, name: &str) -> Option<ValType> {
        self.global(name).map(|b| b.ty)
    }

    fn function_return_type(&self, mangled: &str) -> Option<ValType> {
        self.function(mangled).map(|s| s.return_type)
    }
}
