#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use novl_ir::{
    BinaryKind, Body, ComparisonOp, EmptyTypeEnv, FloatPredicate, IntPredicate, Node, Program,
    Span, Token, TokenKind, TypeEnv, ValRef, ValType,
};
use novl_parse::parse_source;
use novl_parse::tree::{Expr, Stmt, Top};

use crate::{build, AstBuilder, BuildError};

fn build_source(source: &str) -> Vec<Node> {
    build_with(source, &EmptyTypeEnv)
}

fn build_with(source: &str, env: &dyn TypeEnv) -> Vec<Node> {
    let top = parse_source(source).expect("parse failed");
    match build(&top, env).expect("build failed") {
        Node::Program(Program { statements }) => statements,
        other => panic!("expected program, got {other:?}"),
    }
}

fn only(source: &str) -> Node {
    let mut nodes = build_source(source);
    assert_eq!(nodes.len(), 1);
    nodes.remove(0)
}

#[test]
fn integer_literal() {
    assert_eq!(only("42"), Node::int(42));
}

#[test]
fn float_literal() {
    assert_eq!(only("2.5"), Node::double(2.5));
}

#[test]
fn string_quotes_are_stripped() {
    assert_eq!(only("\"hello\""), Node::string("hello"));
}

#[test]
fn untyped_declaration_defaults_to_int() {
    assert_eq!(
        only("val x = 1"),
        Node::Val(ValRef::Declaration {
            id: "x".into(),
            declared_type: ValType::Int,
            value: Some(Box::new(Node::int(1))),
        })
    );
}

#[test]
fn declaration_without_value() {
    let Node::Val(ValRef::Declaration {
        declared_type,
        value,
        ..
    }) = only("val s: string")
    else {
        panic!("expected declaration");
    };
    assert_eq!(declared_type, ValType::String);
    assert!(value.is_none());
}

#[test]
fn assignment() {
    assert_eq!(
        only("x = 2"),
        Node::Val(ValRef::Assignment {
            id: "x".into(),
            value: Box::new(Node::int(2)),
        })
    );
}

#[test]
fn parentheses_disappear() {
    assert_eq!(
        only("(1 + 2) * 3"),
        Node::binary(
            BinaryKind::Mul,
            Node::binary(BinaryKind::Add, Node::int(1), Node::int(2)),
            Node::int(3)
        )
    );
}

#[test]
fn unsupported_operator_fails_construction() {
    // a comparison token in binary position cannot come out of the parser
    let top = Top {
        stmts: vec![Stmt::Expr(Expr::Binary {
            op: Token::new(TokenKind::EqEq, Span::new(2, 4)),
            left: Box::new(Expr::Int {
                text: "1".into(),
                span: Span::new(0, 1),
            }),
            right: Box::new(Expr::Int {
                text: "2".into(),
                span: Span::new(5, 6),
            }),
        })],
        span: Span::new(0, 6),
    };
    assert_eq!(
        build(&top, &EmptyTypeEnv),
        Err(BuildError::UnsupportedOperator {
            op: "==".into(),
            span: Span::new(2, 4),
        })
    );
}

#[test]
fn unknown_type_and_bad_numbers() {
    let top = parse_source("val x: Float = 1").unwrap();
    assert!(matches!(
        build(&top, &EmptyTypeEnv),
        Err(BuildError::UnknownType { ref name, .. }) if name == "Float"
    ));

    let top = parse_source("99999999999").unwrap();
    let err = build(&top, &EmptyTypeEnv).unwrap_err();
    assert_eq!(err.to_string(), "invalid number literal `99999999999`");
    assert_eq!(err.to_diagnostic().code, novl_diagnostic::ErrorCode::E2003);
}

#[test]
fn most_negative_int_literal() {
    assert_eq!(only("-2147483648"), Node::int(i32::MIN));
    assert_eq!(
        only("-7"),
        Node::Negate(novl_ir::UnaryNegate {
            operand: Box::new(Node::int(7)),
        })
    );

    let top = parse_source("-2147483649").unwrap();
    let err = build(&top, &EmptyTypeEnv).unwrap_err();
    assert_eq!(err.to_string(), "invalid number literal `-2147483649`");
    assert!(build(&parse_source("2147483648").unwrap(), &EmptyTypeEnv).is_err());
}

#[test]
fn function_tail_expression() {
    let Node::FunctionDef(fun) = only("fun add(x: Int, y: Int): Int {\n val z = x + y\n z\n}")
    else {
        panic!("expected function");
    };
    assert_eq!(fun.params.len(), 2);
    assert_eq!(fun.return_type, ValType::Int);
    assert_eq!(fun.body.statements.len(), 1);
    assert_eq!(fun.body.tail_expression, Some(Box::new(Node::reference("z"))));
}

#[test]
fn function_ending_in_control_statement_has_no_tail() {
    let Node::FunctionDef(fun) = only("fun f(): Double {\n if 1 < 2 { 3 }\n}") else {
        panic!("expected function");
    };
    assert_eq!(fun.return_type, ValType::Double);
    assert!(fun.body.tail_expression.is_none());
    assert_eq!(fun.body.statements.len(), 1);
}

#[test]
fn comparison_family_from_left_declared_type() {
    let nodes = build_source("val d: Double = 1.0\nif d < 2.0 { 1 }\nif 1 < d { 2 }");
    let Node::Conditional(first) = &nodes[1] else {
        panic!("expected conditional");
    };
    assert_eq!(
        first.condition.op,
        ComparisonOp::Float(FloatPredicate::Olt)
    );
    let Node::Conditional(second) = &nodes[2] else {
        panic!("expected conditional");
    };
    assert_eq!(second.condition.op, ComparisonOp::Int(IntPredicate::Slt));
}

#[test]
fn parameters_shadow_unit_declarations() {
    let nodes = build_source(
        "val x: Int = 1\nfun f(x: Double): Int {\n if x > 0.0 { 1 }\n 0\n}\nif x > 0 { 2 }",
    );
    let Node::FunctionDef(fun) = &nodes[1] else {
        panic!("expected function");
    };
    let Node::Conditional(inner) = &fun.body.statements[0] else {
        panic!("expected conditional");
    };
    assert!(inner.condition.op.is_float());
    // the parameter frame is gone after the definition
    let Node::Conditional(outer) = &nodes[2] else {
        panic!("expected conditional");
    };
    assert!(!outer.condition.op.is_float());
}

#[test]
fn call_type_comes_from_defined_return_type() {
    let nodes = build_source("fun half(x: Double): Double { x / 2.0 }\nif half(3.0) > 1.0 { 1 }");
    let Node::Conditional(cond) = &nodes[1] else {
        panic!("expected conditional");
    };
    assert!(cond.condition.op.is_float());
    assert!(matches!(*cond.condition.left, ValRef::Wrapped(_)));
}

#[test]
fn if_chain_shape() {
    let Node::Conditional(cond) =
        only("if a == 1 { 1 } elseif a == 2 { 2 } elseif a == 3 { 3 } else { 4 }")
    else {
        panic!("expected conditional");
    };
    assert!(cond.is_top_level);
    assert!(!cond.is_loop);
    assert_eq!(cond.elseif_chain.len(), 2);
    assert!(cond.elseif_chain.iter().all(|link| link.false_body.is_none()
        && link.elseif_chain.is_empty()
        && !link.is_top_level));
    assert_eq!(
        cond.false_body,
        Some(Body {
            statements: vec![],
            tail_expression: Some(Box::new(Node::int(4))),
        })
    );
}

#[test]
fn while_becomes_loop_conditional() {
    let Node::Conditional(cond) = only("while i < 10 { i = i + 1 }") else {
        panic!("expected conditional");
    };
    assert!(cond.is_loop);
    assert!(cond.false_body.is_none());
    assert!(cond.elseif_chain.is_empty());
    assert_eq!(cond.true_body.statements.len(), 1);
}

struct Seeded;

impl TypeEnv for Seeded {
    fn variable_type(&self, name: &str) -> Option<ValType> {
        (name == "rate").then_some(ValType::Double)
    }

    fn function_return_type(&self, _mangled: &str) -> Option<ValType> {
        None
    }
}

#[test]
fn seeded_environment_is_consulted() {
    let nodes = build_with("if rate >= 0.5 { 1 }", &Seeded);
    let Node::Conditional(cond) = &nodes[0] else {
        panic!("expected conditional");
    };
    assert_eq!(cond.condition.op, ComparisonOp::Float(FloatPredicate::Oge));
}

#[test]
fn node_type_of_binary_follows_left() {
    let builder = AstBuilder::new(&EmptyTypeEnv);
    let node = Node::binary(BinaryKind::Add, Node::double(1.0), Node::int(2));
    assert_eq!(builder.node_type(&node), ValType::Double);
    assert_eq!(builder.node_type(&Node::string("s")), ValType::String);
    assert_eq!(builder.node_type(&Node::reference("unknown")), ValType::Int);
}
