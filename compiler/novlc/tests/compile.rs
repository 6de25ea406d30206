//! Compiling files on disk.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::fs;

use novlc::{compile_file, output_path, CompileError, CompileOptions};
use pretty_assertions::assert_eq;

const PROGRAM: &str = "\
// sums 1..=10
val total = 0
val i = 1
while i <= 10 {
    total = total + i
    i = i + 1
}
print(total)
";

#[test]
fn writes_ir_beside_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sum.novl");
    fs::write(&input, PROGRAM).unwrap();

    let mut out = Vec::new();
    let written = compile_file(&input, CompileOptions::default(), &mut out).unwrap();

    assert_eq!(written, dir.path().join("sum.ll"));
    assert_eq!(String::from_utf8(out).unwrap(), "Complete.\n");
    let ir = fs::read_to_string(&written).unwrap();
    assert!(ir.starts_with("; ModuleID = 'sum'\nsource_filename = \"sum.novl\""));
    assert!(ir.contains("define i32 @main() {"));
    assert!(ir.contains("call i32 @PRINT_INT(i32 %total"));
    assert!(ir.ends_with("ret i32 0\n}"));
    assert_eq!(ir, ir.trim());
}

#[test]
fn no_main_and_no_std() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("lib.novl");
    fs::write(&input, "fun twice(x: Double): Double { x * 2.0 }").unwrap();

    let options = CompileOptions::from_args(&["-noMain", "-noStd"]);
    compile_file(&input, options, &mut Vec::new()).unwrap();

    let ir = fs::read_to_string(output_path(&input)).unwrap();
    assert!(!ir.contains("@main("));
    assert!(!ir.contains("printf"));
    assert!(ir.contains("define i32 @__INTERNAL_"));
    assert!(ir.contains("define double @TWICE_DOUBLE(double %x) {"));
}

#[test]
fn missing_input_is_reported_as_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.novl");

    let err = compile_file(&input, CompileOptions::default(), &mut Vec::new()).unwrap_err();
    assert!(err.is_unreadable_input());
    assert!(err.to_string().starts_with("cannot read "));
    assert!(!output_path(&input).exists());
}

#[test]
fn failed_units_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.novl");
    fs::write(&input, "val x = 1\nx = 2.5\n").unwrap();

    let mut out = Vec::new();
    let err = compile_file(&input, CompileOptions::default(), &mut out).unwrap_err();
    assert!(matches!(err, CompileError::Lower(_)));
    assert!(!err.is_unreadable_input());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\tERROR: Type mismatch in assignment to x: expected Int, found Double.\n"
    );
    assert!(!output_path(&input).exists());
}
