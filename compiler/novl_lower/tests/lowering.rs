//! End-to-end lowering of whole programs, plus arithmetic properties.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use novl_lower::{CompilationSession, LowerMode, SessionOptions};
use proptest::prelude::*;

const COUNTDOWN: &str = r#"
fun report(n: Int): Int {
    if n % 15 == 0 {
        print("fizzbuzz")
    } elseif n % 5 == 0 {
        print("buzz")
    } elseif n % 3 == 0 {
        print("fizz")
    } else {
        print(n)
    }
    0
}

fun half(x: Double): Double { x / 2.0 }

val i: Int = 15
while i > 0 {
    report(i)
    i = i - 1
}
print(half(5.0))
"#;

fn compile(source: &str, options: SessionOptions) -> CompilationSession {
    let mut session = CompilationSession::new("prog", "prog.novl", options);
    let top = novl_parse::parse_source(source).expect("parse failed");
    let node = novl_ast::build(&top, &session.env).expect("build failed");
    session
        .lower(&node, LowerMode::Strict)
        .expect("lowering failed");
    session.finish();
    session
}

#[test]
fn complete_program_lowers_cleanly() {
    let session = compile(COUNTDOWN, SessionOptions::default());
    let ir = session.emit_ir();
    assert!(ir.starts_with("; ModuleID = 'prog'\nsource_filename = \"prog.novl\""));
    assert!(ir.contains("define i32 @REPORT_INT(i32 %n) {"));
    assert!(ir.contains("define double @HALF_DOUBLE(double %x) {"));
    assert!(ir.contains("fdiv double"));
    assert!(ir.contains("call i32 @PRINT_STRING("));
    assert!(ir.contains("call double @HALF_DOUBLE(double 5.0)"));

    // every block of every defined function is closed
    let module = session.module();
    for (_, function) in module.functions() {
        for &block in &function.blocks {
            assert!(
                module.block(block).is_terminated(),
                "open block {} in {}",
                module.block(block).label,
                function.name
            );
        }
    }
}

#[test]
fn no_main_renames_the_entry_point() {
    let options = SessionOptions {
        install_main: false,
        helpers: true,
    };
    let session = compile("print(1)", options);
    let ir = session.emit_ir();
    assert!(!ir.contains("@main("));
    assert!(ir.contains(&format!("define i32 @{}() {{", session.entry_name())));
}

const INT_OPS: [(&str, &str); 5] = [
    ("+", "add"),
    ("-", "sub"),
    ("*", "mul"),
    ("/", "sdiv"),
    ("%", "srem"),
];

const FLOAT_OPS: [(&str, &str); 5] = [
    ("+", "fadd"),
    ("-", "fsub"),
    ("*", "fmul"),
    ("/", "fdiv"),
    ("%", "frem"),
];

fn lower_bare(source: &str) -> String {
    let options = SessionOptions {
        install_main: true,
        helpers: false,
    };
    compile(source, options).emit_ir()
}

proptest! {
    #[test]
    fn int_operands_select_integer_instructions(
        a in 0u32..100_000,
        b in 1u32..100_000,
        op in 0usize..INT_OPS.len(),
    ) {
        let (symbol, opcode) = INT_OPS[op];
        let ir = lower_bare(&format!("{a} {symbol} {b}"));
        let expected = format!(" = {opcode} i32 {a}, {b}");
        prop_assert!(ir.contains(&expected), "missing `{}` in\n{}", expected, ir);
        prop_assert!(!ir.contains("double"));
    }

    #[test]
    fn double_operands_select_float_instructions(
        a in 0u32..100_000,
        b in 1u32..100_000,
        op in 0usize..FLOAT_OPS.len(),
    ) {
        let (symbol, opcode) = FLOAT_OPS[op];
        let ir = lower_bare(&format!("{a}.0 {symbol} {b}.0"));
        let expected = format!(" = {opcode} double {a}.0, {b}.0");
        prop_assert!(ir.contains(&expected), "missing `{}` in\n{}", expected, ir);
        prop_assert!(!ir.contains(" i32 %"));
    }
}
