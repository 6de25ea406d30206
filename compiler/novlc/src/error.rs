//! Driver errors.

use std::io;
use std::path::PathBuf;

use novl_ast::BuildError;
use novl_lower::LowerFailed;
use novl_parse::ParseError;

/// Why a compilation unit did not produce output.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// The input could not be opened. The CLI falls back to a REPL.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error(transparent)]
    Lower(#[from] LowerFailed),

    /// Writing diagnostics to the console failed.
    #[error("cannot print diagnostics: {0}")]
    Console(#[source] io::Error),
}

impl CompileError {
    /// Input missing or unreadable: the CLI drops into a REPL instead.
    pub fn is_unreadable_input(&self) -> bool {
        matches!(self, CompileError::Read { .. })
    }
}
