#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use novl_diagnostic::ErrorCode;
use novl_ir::TokenKind;

use crate::parse_source;
use crate::tree::{Expr, Stmt};

fn single_stmt(source: &str) -> Stmt {
    let top = parse_source(source).expect("parse failed");
    assert_eq!(top.stmts.len(), 1, "expected one statement in {source:?}");
    top.stmts.into_iter().next().unwrap()
}

fn error_code(source: &str) -> ErrorCode {
    parse_source(source).expect_err("expected a parse error").code
}

#[test]
fn empty_program() {
    assert!(parse_source("").unwrap().stmts.is_empty());
    assert!(parse_source("\n;\n").unwrap().stmts.is_empty());
}

#[test]
fn multiplication_binds_tighter() {
    let Stmt::Expr(Expr::Binary { op, left, right }) = single_stmt("1 + 2 * 3") else {
        panic!("expected binary expression");
    };
    assert_eq!(op.kind, TokenKind::Plus);
    assert!(matches!(*left, Expr::Int { ref text, .. } if text == "1"));
    assert!(matches!(*right, Expr::Binary { ref op, .. } if op.kind == TokenKind::Star));
}

#[test]
fn subtraction_is_left_associative() {
    let Stmt::Expr(Expr::Binary { left, .. }) = single_stmt("5 - 2 - 1") else {
        panic!("expected binary expression");
    };
    assert!(matches!(*left, Expr::Binary { ref op, .. } if op.kind == TokenKind::Minus));
}

#[test]
fn nested_negation() {
    let Stmt::Expr(Expr::Neg { operand, .. }) = single_stmt("--x") else {
        panic!("expected negation");
    };
    assert!(matches!(*operand, Expr::Neg { .. }));
}

#[test]
fn val_forms() {
    assert!(matches!(single_stmt("val x"), Stmt::ValDec(ref d) if d.ty.is_none()));
    let Stmt::ValDef(def) = single_stmt("val y: Double = 1.5") else {
        panic!("expected val definition");
    };
    assert_eq!(def.dec.name.name, "y");
    assert_eq!(def.dec.ty.map(|t| t.name), Some("Double".to_string()));
}

#[test]
fn assignment_versus_comparison_expression() {
    assert!(matches!(single_stmt("x = 3"), Stmt::Assignment(_)));
    assert!(matches!(single_stmt("x"), Stmt::Expr(Expr::Ident(_))));
}

#[test]
fn function_definition() {
    let Stmt::FunDef(fun) = single_stmt("fun add(x: Int, y: Double): Double {\n  y\n}") else {
        panic!("expected function definition");
    };
    assert_eq!(fun.name.name, "add");
    let params: Vec<_> = fun
        .params
        .iter()
        .map(|p| (p.name.name.as_str(), p.ty.name.as_str()))
        .collect();
    assert_eq!(params, vec![("x", "Int"), ("y", "Double")]);
    assert_eq!(fun.return_type.map(|t| t.name), Some("Double".to_string()));
    assert_eq!(fun.body.stmts.len(), 1);
}

#[test]
fn call_with_arguments() {
    let Stmt::Expr(Expr::Call { name, args, .. }) = single_stmt("print(1, \"two\", x + 3)") else {
        panic!("expected call");
    };
    assert_eq!(name.name, "print");
    assert_eq!(args.len(), 3);
}

#[test]
fn if_chain_with_both_elseif_spellings() {
    let source = "if x < 1 {\n 1\n}\nelseif x < 2 { 2 }\nelse if x < 3 { 3 } else { 4 }";
    let Stmt::IfBlock(block) = single_stmt(source) else {
        panic!("expected if block");
    };
    assert_eq!(block.else_ifs.len(), 2);
    assert!(block.else_block.is_some());
    assert_eq!(block.if_clause.comparison.op.kind, TokenKind::Lt);
}

#[test]
fn if_followed_by_statement_on_next_line() {
    let top = parse_source("if a == b { 1 }\nc").unwrap();
    assert_eq!(top.stmts.len(), 2);
    assert!(matches!(top.stmts[1], Stmt::Expr(Expr::Ident(_))));
}

#[test]
fn while_loop() {
    let Stmt::While(w) = single_stmt("while i < 10 { i = i + 1 }") else {
        panic!("expected while");
    };
    assert_eq!(w.body.stmts.len(), 1);
}

#[test]
fn newline_after_operator_continues() {
    assert!(matches!(single_stmt("1 +\n 2"), Stmt::Expr(Expr::Binary { .. })));
}

#[test]
fn semicolons_separate() {
    assert_eq!(parse_source("val a = 1; a").unwrap().stmts.len(), 2);
}

#[test]
fn error_codes() {
    assert_eq!(error_code("1 +"), ErrorCode::E1002);
    assert_eq!(error_code("(1 + 2"), ErrorCode::E1003);
    assert_eq!(error_code("if x < 1 { 2"), ErrorCode::E1003);
    assert_eq!(error_code("val 3 = 4"), ErrorCode::E1004);
    assert_eq!(error_code("val x: = 4"), ErrorCode::E1005);
    assert_eq!(error_code("if x { 1 }"), ErrorCode::E1006);
    assert_eq!(error_code("1 2"), ErrorCode::E1001);
    assert_eq!(error_code("1 $ 2"), ErrorCode::E0001);
}

#[test]
fn error_spans_point_at_the_problem() {
    let err = parse_source("val x = )").unwrap_err();
    assert_eq!(err.span.start, 8);
    assert_eq!(err.to_string(), "expected expression, found `)`");
}
