use pretty_assertions::assert_eq;

use novl_ir::{Span, TokenKind};

use super::lex;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).kinds()
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn arithmetic() {
    assert_eq!(
        kinds("1 + 2.5 * x"),
        vec![
            TokenKind::Int("1".into()),
            TokenKind::Plus,
            TokenKind::Float("2.5".into()),
            TokenKind::Star,
            TokenKind::Ident("x".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_are_not_identifiers() {
    assert_eq!(
        kinds("val fun if elseif else while value"),
        vec![
            TokenKind::Val,
            TokenKind::Fun,
            TokenKind::If,
            TokenKind::Elseif,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Ident("value".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comparison_operators_take_longest_match() {
    assert_eq!(
        kinds("a <= b == c != d >= e = f"),
        vec![
            TokenKind::Ident("a".into()),
            TokenKind::LtEq,
            TokenKind::Ident("b".into()),
            TokenKind::EqEq,
            TokenKind::Ident("c".into()),
            TokenKind::NotEq,
            TokenKind::Ident("d".into()),
            TokenKind::GtEq,
            TokenKind::Ident("e".into()),
            TokenKind::Eq,
            TokenKind::Ident("f".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn strings_keep_their_quotes() {
    assert_eq!(
        kinds(r#"print("hi there")"#),
        vec![
            TokenKind::Ident("print".into()),
            TokenKind::LParen,
            TokenKind::Str("\"hi there\"".into()),
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comments_are_skipped_but_newlines_kept() {
    assert_eq!(
        kinds("x // the answer\ny"),
        vec![
            TokenKind::Ident("x".into()),
            TokenKind::Newline,
            TokenKind::Ident("y".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn newlines_inside_parens_are_dropped() {
    assert_eq!(
        kinds("f(1,\n 2)\n"),
        vec![
            TokenKind::Ident("f".into()),
            TokenKind::LParen,
            TokenKind::Int("1".into()),
            TokenKind::Comma,
            TokenKind::Int("2".into()),
            TokenKind::RParen,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unknown_characters_become_error_tokens() {
    let tokens = lex("1 $ 2");
    assert_eq!(tokens.kinds()[1], TokenKind::Error("$".into()));
    assert_eq!(tokens.get(1).map(|t| t.span), Some(Span::new(2, 3)));
}

#[test]
fn eof_span_is_at_end() {
    let tokens = lex("abc");
    assert_eq!(tokens.get(1).map(|t| t.span), Some(Span::new(3, 3)));
}
