//! File compilation.
//!
//! A unit is lowered in strict mode: every statement is lowered and all
//! diagnostics are printed, but any error fails the unit and nothing is
//! written.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use novl_diagnostic::Diagnostic;
use novl_ir::{Node, TypeEnv};
use novl_lower::{CompilationSession, LowerMode};
use tracing::{debug, info};

use crate::{CompileError, CompileOptions};

/// `<input-dir>/<input-stem>.ll`.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("ll")
}

/// Compile `input` and write its IR beside it.
///
/// Prints diagnostics and a final `Complete.` to `out`; returns the path
/// written.
pub fn compile_file(
    input: &Path,
    options: CompileOptions,
    out: &mut dyn Write,
) -> Result<PathBuf, CompileError> {
    let source = fs::read_to_string(input).map_err(|source| CompileError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let module_name = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let source_filename = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    info!(path = %input.display(), ?options, "compiling");

    let session = compile_source(&source, &module_name, &source_filename, options, out)?;

    let path = output_path(input);
    fs::write(&path, session.emit_ir()).map_err(|source| CompileError::Write {
        path: path.clone(),
        source,
    })?;
    writeln!(out, "Complete.").map_err(CompileError::Console)?;
    Ok(path)
}

/// Compile source text into a fresh, finished session.
pub fn compile_source(
    source: &str,
    module_name: &str,
    source_filename: &str,
    options: CompileOptions,
    out: &mut dyn Write,
) -> Result<CompilationSession, CompileError> {
    let mut session =
        CompilationSession::new(module_name, source_filename, options.session_options());
    let node = front_end(source, &session.env, out)?;

    let result = session.lower(&node, LowerMode::Strict);
    let diagnostics = match &result {
        Ok(output) => &output.diagnostics,
        Err(failed) => &failed.diagnostics,
    };
    for diagnostic in diagnostics.iter() {
        writeln!(out, "{diagnostic}").map_err(CompileError::Console)?;
    }
    result?;

    session.finish();
    Ok(session)
}

/// Lex, parse and build one unit against `env`.
///
/// The first syntax or construction error is printed, with its position,
/// and returned.
pub(crate) fn front_end(
    source: &str,
    env: &dyn TypeEnv,
    out: &mut dyn Write,
) -> Result<Node, CompileError> {
    let tokens = novl_lexer::lex(source);
    debug!(tokens = tokens.len(), "lexed unit");

    let top = match novl_parse::parse(&tokens) {
        Ok(top) => top,
        Err(err) => {
            report(out, &err.to_diagnostic(), source)?;
            return Err(err.into());
        }
    };
    match novl_ast::build(&top, env) {
        Ok(node) => Ok(node),
        Err(err) => {
            report(out, &err.to_diagnostic(), source)?;
            Err(err.into())
        }
    }
}

fn report(out: &mut dyn Write, diagnostic: &Diagnostic, source: &str) -> Result<(), CompileError> {
    writeln!(out, "{}", diagnostic.render(Some(source))).map_err(CompileError::Console)
}
