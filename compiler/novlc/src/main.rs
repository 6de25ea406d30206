//! Novlangue compiler CLI.
//!
//! `novl [compile] [<file>] [-noMain] [-noStd]`; without a file, or when the
//! file cannot be read, starts a REPL.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use novlc::{compile_file, CompileOptions, ReplSession};

const FLAGS: [&str; 2] = ["-noMain", "-noStd"];

fn main() -> ExitCode {
    novlc::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("novl {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }
    if let Some(unknown) = args
        .iter()
        .find(|a| a.starts_with('-') && !FLAGS.contains(&a.as_str()))
    {
        eprintln!("Unknown option: {unknown}");
        eprintln!();
        print_usage();
        return ExitCode::FAILURE;
    }

    println!("Novlangue compiler v{}", env!("CARGO_PKG_VERSION"));
    let options = CompileOptions::from_args(&args);

    let mut positional = args.iter().filter(|a| !a.starts_with('-'));
    let mut file = positional.next();
    if file.is_some_and(|f| f == "compile") {
        file = positional.next();
    }

    if let Some(path) = file {
        let mut stdout = io::stdout();
        match compile_file(Path::new(path), options, &mut stdout) {
            Ok(_) => return ExitCode::SUCCESS,
            Err(err) if err.is_unreadable_input() => {
                println!("ERROR: {err}; dropping into a REPL...");
            }
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
    run_repl(options)
}

fn run_repl(options: CompileOptions) -> ExitCode {
    let stdin = io::stdin();
    let mut repl = ReplSession::new(stdin.lock(), io::stdout(), options);
    match repl.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Novlangue compiler");
    println!();
    println!("Usage: novl [compile] [<file.novl>] [options]");
    println!();
    println!("Without a file, or if the file cannot be read, starts a REPL.");
    println!("Compiling writes <file>.ll beside the input.");
    println!();
    println!("Options:");
    println!("  -noMain          Name the entry point internally instead of `main`");
    println!("  -noStd           Do not emit printf and the print helpers");
    println!("  -h, --help       Show this help message");
    println!("  -V, --version    Show version information");
}
