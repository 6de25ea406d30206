use super::ErrorCode;

#[test]
fn display_matches_as_str() {
    assert_eq!(ErrorCode::E3004.to_string(), "E3004");
    assert_eq!(ErrorCode::E0001.as_str(), "E0001");
}

#[test]
fn only_redeclaration_is_a_warning() {
    assert!(ErrorCode::E3100.is_warning());
    assert!(!ErrorCode::E3001.is_warning());
    assert!(!ErrorCode::E1001.is_warning());
}

#[test]
fn descriptions_are_lowercase_phrases() {
    assert_eq!(ErrorCode::E3002.description(), "function does not exist");
    assert_eq!(ErrorCode::E2001.description(), "unsupported operator");
}
