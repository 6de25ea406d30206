//! Interactive read-eval-print loop.
//!
//! One [`CompilationSession`] lives for the whole loop, so variables and
//! functions bound on one line are visible on the next. Each line is
//! lowered best-effort into the entry point; the instructions it added are
//! echoed back.

use std::io::{self, BufRead, Write};

use novl_lower::{CompilationSession, LowerMode};
use tracing::debug;

use crate::compile::front_end;
use crate::{CompileError, CompileOptions};

const PROMPT: &str = "novlangue> ";

/// A `;`-prefixed REPL command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    List,
    Unknown(String),
}

impl ReplCommand {
    /// `None` unless the line starts with `;`.
    pub fn parse(line: &str) -> Option<Self> {
        let command = line.trim().strip_prefix(';')?;
        Some(match command.trim().to_lowercase().as_str() {
            "help" => ReplCommand::Help,
            "quit" => ReplCommand::Quit,
            "list" => ReplCommand::List,
            _ => ReplCommand::Unknown(command.trim().to_string()),
        })
    }
}

pub struct ReplSession<R, W> {
    input: R,
    output: W,
    session: CompilationSession,
}

impl<R: BufRead, W: Write> ReplSession<R, W> {
    pub fn new(input: R, output: W, options: CompileOptions) -> Self {
        ReplSession {
            input,
            output,
            session: CompilationSession::new("repl", "<repl>", options.session_options()),
        }
    }

    pub fn session(&self) -> &CompilationSession {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `;quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "WARNING: REPL MODE IS CURRENTLY INCOMPLETE")?;
        writeln!(self.output, "For assistance, use ;help.\n")?;
        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            if line.trim().is_empty() {
                continue;
            }
            match ReplCommand::parse(&line) {
                Some(ReplCommand::Quit) => return Ok(()),
                Some(command) => self.command(&command)?,
                None => self.eval(&line)?,
            }
        }
    }

    fn command(&mut self, command: &ReplCommand) -> io::Result<()> {
        match command {
            ReplCommand::Help => {
                writeln!(self.output, "Commands:")?;
                writeln!(self.output, ";help -- prints this help dialogue")?;
                writeln!(self.output, ";quit -- exits the REPL")?;
                writeln!(self.output, ";list -- lists current bindings")
            }
            ReplCommand::List => self.list(),
            ReplCommand::Quit => Ok(()),
            ReplCommand::Unknown(name) => {
                writeln!(self.output, "Unknown command ;{name}. For assistance, use ;help.")
            }
        }
    }

    fn list(&mut self) -> io::Result<()> {
        let mut functions = self.session.env.functions().peekable();
        if functions.peek().is_none() {
            return writeln!(self.output, "No functions have been bound.");
        }
        writeln!(self.output, "Functions:")?;
        for signature in functions {
            writeln!(self.output, "{signature}")?;
        }
        Ok(())
    }

    /// Lower one line and print what it produced.
    pub fn eval(&mut self, line: &str) -> io::Result<()> {
        let node = match front_end(line, &self.session.env, &mut self.output) {
            Ok(node) => node,
            Err(CompileError::Console(err)) => return Err(err),
            // already reported
            Err(err) => {
                debug!(%err, "line rejected");
                return Ok(());
            }
        };

        let mark = self.session.mark();
        let output = match self.session.lower(&node, LowerMode::BestEffort) {
            Ok(output) => output,
            Err(failed) => novl_lower::LowerOutput {
                diagnostics: failed.diagnostics,
                defined: Vec::new(),
            },
        };
        for diagnostic in output.diagnostics.iter() {
            writeln!(self.output, "{diagnostic}")?;
        }
        for emitted in self.session.render_since(mark) {
            writeln!(self.output, "\t{emitted}")?;
        }
        for name in &output.defined {
            writeln!(self.output, "\tfunction {name} bound")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
