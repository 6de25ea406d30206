//! Type scope used while building.
//!
//! A stack of frames: the unit's own top-level declarations at the bottom,
//! one frame per function definition being built above it. Lookups fall
//! through to the seeded [`TypeEnv`] when no frame knows the name.

use novl_ir::{TypeEnv, ValType};
use rustc_hash::FxHashMap;

pub(crate) struct TypeScope<'env> {
    env: &'env dyn TypeEnv,
    frames: Vec<FxHashMap<String, ValType>>,
    /// Return types of functions defined in this unit, by mangled name.
    functions: FxHashMap<String, ValType>,
}

impl<'env> TypeScope<'env> {
    pub(crate) fn new(env: &'env dyn TypeEnv) -> Self {
        TypeScope {
            env,
            frames: vec![FxHashMap::default()],
            functions: FxHashMap::default(),
        }
    }

    pub(crate) fn declare(&mut self, name: &str, ty: ValType) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.to_string(), ty);
        }
    }

    pub(crate) fn variable(&self, name: &str) -> Option<ValType> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name).copied())
            .or_else(|| self.env.variable_type(name))
    }

    pub(crate) fn define_function(&mut self, mangled: String, return_type: ValType) {
        self.functions.insert(mangled, return_type);
    }

    pub(crate) fn function(&self, mangled: &str) -> Option<ValType> {
        self.functions
            .get(mangled)
            .copied()
            .or_else(|| self.env.function_return_type(mangled))
    }

    /// Open a frame, e.g. for a function's parameters.
    pub(crate) fn push_frame(&mut self, bindings: impl IntoIterator<Item = (String, ValType)>) {
        self.frames.push(bindings.into_iter().collect());
    }

    pub(crate) fn pop_frame(&mut self) {
        // the unit frame stays
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }
}
