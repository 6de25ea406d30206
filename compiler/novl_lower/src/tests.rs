#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use novl_diagnostic::ErrorCode;
use novl_ir::Node;

use crate::{entry_name, CompilationSession, LowerMode, SessionOptions};

fn session(options: SessionOptions) -> CompilationSession {
    CompilationSession::new("t", "t.novl", options)
}

fn bare() -> CompilationSession {
    session(SessionOptions {
        install_main: true,
        helpers: false,
    })
}

/// Parse and build against the session's own tables, like the REPL does.
fn unit(session: &CompilationSession, source: &str) -> Node {
    let top = novl_parse::parse_source(source).expect("parse failed");
    novl_ast::build(&top, &session.env).expect("build failed")
}

fn run(session: &mut CompilationSession, source: &str) -> Vec<String> {
    let node = unit(session, source);
    let output = session.lower(&node, LowerMode::BestEffort).unwrap();
    output.diagnostics.iter().map(ToString::to_string).collect()
}

#[test]
fn helpers_declare_printf_and_print_overloads() {
    let s = session(SessionOptions::default());
    let ir = s.emit_ir();
    assert!(ir.contains("declare i32 @printf(i8*, ...)"));
    assert!(ir.contains("define i32 @PRINT_INT(i32 %d) {"));
    assert!(ir.contains("define i32 @PRINT_DOUBLE(double %d) {"));
    assert!(ir.contains("define i32 @PRINT_STRING(i8* %d) {"));
    assert!(ir.contains("@.str.0 = private unnamed_addr constant [4 x i8] c\"%d\\0A\\00\""));
    assert!(ir.contains("call i32 (i8*, ...) @printf("));
    assert_eq!(s.env.functions().filter(|f| f.name == "print").count(), 3);
}

#[test]
fn print_resolves_by_argument_type() {
    let mut s = session(SessionOptions::default());
    let messages = run(&mut s, "print(1)\nprint(2.0)\nprint(\"x\")");
    assert!(messages.is_empty(), "{messages:?}");
    let ir = s.emit_ir();
    assert!(ir.contains("call i32 @PRINT_INT(i32 1)"));
    assert!(ir.contains("call i32 @PRINT_DOUBLE(double 2.0)"));
    assert!(ir.contains("call i32 @PRINT_STRING(i8* getelementptr inbounds"));
}

#[test]
fn without_helpers_only_the_entry_point_exists() {
    let mut s = bare();
    run(&mut s, "1 + 1");
    s.finish();
    let functions: Vec<_> = s.module().functions().map(|(_, f)| f.name.clone()).collect();
    assert_eq!(functions, vec!["main".to_string()]);
    let expected = "\
define i32 @main() {
entry:
  %add = add i32 1, 1
  ret i32 0
}";
    assert!(s.emit_ir().ends_with(expected), "{}", s.emit_ir());
}

#[test]
fn entry_point_name_without_main() {
    let name = entry_name("prog", false);
    assert!(name.starts_with("__INTERNAL_"));
    assert!(name.ends_with("_MAIN_"));
    assert_eq!(name, entry_name("prog", false));
    assert_ne!(name, entry_name("other", false));
    assert_eq!(entry_name("prog", true), "main");

    let s = session(SessionOptions {
        install_main: false,
        helpers: false,
    });
    assert_eq!(s.entry_name(), entry_name("t", false));
    assert!(s.module().get_function("main").is_none());
}

#[test]
fn finish_returns_zero_once() {
    let mut s = bare();
    s.finish();
    s.finish();
    assert_eq!(s.emit_ir().matches("ret i32 0").count(), 1);
}

#[test]
fn finish_closes_the_exit_of_a_trailing_loop() {
    let mut s = bare();
    run(&mut s, "val i = 0\nwhile i < 3 { i = i + 1 }");
    s.finish();
    let main = s.module().function(s.entry());
    assert!(main
        .blocks
        .iter()
        .all(|&b| s.module().block(b).is_terminated()));
}

#[test]
fn strict_mode_fails_after_lowering_everything() {
    let mut s = bare();
    let node = unit(&s, "y\nz\n1 + 1");
    let failed = s.lower(&node, LowerMode::Strict).unwrap_err();
    assert_eq!(failed.diagnostics.error_count(), 2);
    assert_eq!(failed.to_string(), "lowering failed with 2 error(s)");
    // statements after the failures were still lowered
    assert!(s.emit_ir().contains("%add = add i32 1, 1"));
}

#[test]
fn strict_mode_tolerates_warnings() {
    let mut s = bare();
    let node = unit(&s, "val x = 1\nval x = 2");
    let output = s.lower(&node, LowerMode::Strict).unwrap();
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(
        output.diagnostics.iter().next().unwrap().code,
        ErrorCode::E3100
    );
}

#[test]
fn definitions_persist_across_units() {
    let mut s = bare();
    assert!(run(&mut s, "fun f(x: Int): Int { x }").is_empty());
    assert!(run(&mut s, "val y = f(1)").is_empty());
    assert!(run(&mut s, "y + f(y)").is_empty());
    assert!(s.emit_ir().contains("call i32 @F_INT(i32 %y"));

    let mut fresh = bare();
    assert_eq!(
        run(&mut fresh, "f(1)"),
        vec!["\tERROR: The function f does not exist."]
    );
}

#[test]
fn function_redefinition_across_units() {
    let mut s = bare();
    run(&mut s, "fun f(): Int { 1 }");
    assert_eq!(
        run(&mut s, "fun f(): Int { 2 }"),
        vec!["\tERROR: The function f already exists."]
    );
}

#[test]
fn render_since_echoes_only_the_new_unit() {
    let mut s = bare();
    run(&mut s, "val a = 1");
    let mark = s.mark();
    run(&mut s, "a * 2");
    assert_eq!(
        s.render_since(mark),
        vec!["%a1 = load i32, i32* @a", "%mul = mul i32 %a1, 2"]
    );
}

#[test]
fn render_since_includes_new_blocks() {
    let mut s = bare();
    let mark = s.mark();
    run(&mut s, "if 1 < 2 { 3 }");
    let lines = s.render_since(mark);
    assert!(lines[0].starts_with("%_INTERNAL_MAIN_"));
    assert!(lines[0].contains("= icmp slt i32 1, 2"));
    assert!(lines[1].starts_with("br i1 "));
    let labels = lines.iter().filter(|l| l.ends_with(':')).count();
    assert_eq!(labels, 3);
}
