use super::{Token, TokenKind, TokenList};
use crate::Span;

#[test]
fn operator_text_only_for_operators() {
    assert_eq!(TokenKind::Percent.operator_text(), Some("%"));
    assert_eq!(TokenKind::GtEq.operator_text(), Some(">="));
    assert_eq!(TokenKind::Eq.operator_text(), None);
    assert_eq!(TokenKind::Ident("x".into()).operator_text(), None);
}

#[test]
fn separators() {
    assert!(TokenKind::Newline.is_separator());
    assert!(TokenKind::Semicolon.is_separator());
    assert!(!TokenKind::Comma.is_separator());
}

#[test]
fn comparisons() {
    assert!(TokenKind::NotEq.is_comparison());
    assert!(!TokenKind::Eq.is_comparison());
}

#[test]
fn token_list_push_and_kinds() {
    let mut list = TokenList::new();
    assert!(list.is_empty());
    list.push(Token::new(TokenKind::Int("1".into()), Span::new(0, 1)));
    list.push(Token::dummy(TokenKind::Eof));
    assert_eq!(list.len(), 2);
    assert_eq!(
        list.kinds(),
        vec![TokenKind::Int("1".into()), TokenKind::Eof]
    );
    assert_eq!(list.get(0).map(|t| t.span), Some(Span::new(0, 1)));
}

#[test]
fn token_debug_shows_span() {
    let token = Token::new(TokenKind::Plus, Span::new(2, 3));
    assert_eq!(format!("{token:?}"), "Plus @ 2..3");
}
