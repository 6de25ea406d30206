//! Novlangue compiler driver.
//!
//! Two front doors share one pipeline:
//!
//! ```text
//! source ──► lex ──► parse ──► build AST ──► lower ──► module
//!                                                        │
//!            compile_file: Strict, write <stem>.ll ◄─────┤
//!            ReplSession:  BestEffort, echo new IR ◄─────┘
//! ```
//!
//! Both print diagnostics as `\tERROR: …` / `\tWARNING: …` lines to the
//! writer they are given.

mod compile;
mod error;
mod repl;

pub use compile::{compile_file, compile_source, output_path};
pub use error::CompileError;
pub use repl::{ReplCommand, ReplSession};

use std::sync::Once;

use novl_lower::SessionOptions;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=novl_lower=debug`
/// or `RUST_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Command-line switches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    /// `false` with `-noMain`.
    pub install_main: bool,
    /// `false` with `-noStd`.
    pub helpers: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            install_main: true,
            helpers: true,
        }
    }
}

impl CompileOptions {
    /// Pick up `-noMain` and `-noStd` anywhere in `args`.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let has = |flag: &str| args.iter().any(|a| a.as_ref() == flag);
        CompileOptions {
            install_main: !has("-noMain"),
            helpers: !has("-noStd"),
        }
    }

    pub fn session_options(self) -> SessionOptions {
        SessionOptions {
            install_main: self.install_main,
            helpers: self.helpers,
        }
    }
}

#[cfg(test)]
mod tests;
