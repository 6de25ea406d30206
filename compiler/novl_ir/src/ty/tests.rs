use super::ValType;

#[test]
fn type_names_are_case_insensitive() {
    assert_eq!(ValType::from_name("Int"), Some(ValType::Int));
    assert_eq!(ValType::from_name("INT"), Some(ValType::Int));
    assert_eq!(ValType::from_name("double"), Some(ValType::Double));
    assert_eq!(ValType::from_name("String"), Some(ValType::String));
}

#[test]
fn unknown_type_name() {
    assert_eq!(ValType::from_name("Float"), None);
    assert_eq!(ValType::from_name(""), None);
}

#[test]
fn default_is_int() {
    assert_eq!(ValType::default(), ValType::Int);
}

#[test]
fn display_uses_source_spelling() {
    assert_eq!(ValType::Double.to_string(), "Double");
    assert_eq!(ValType::String.mangle_tag(), "STRING");
}
