use crate::CompileOptions;

#[test]
fn options_default_to_main_and_helpers() {
    let options = CompileOptions::from_args::<&str>(&[]);
    assert_eq!(options, CompileOptions::default());
    assert!(options.install_main && options.helpers);
}

#[test]
fn options_pick_up_flags_in_any_position() {
    let options = CompileOptions::from_args(&["-noStd", "prog.novl", "-noMain"]);
    assert!(!options.install_main);
    assert!(!options.helpers);

    let session = options.session_options();
    assert!(!session.install_main);
    assert!(!session.helpers);
}

#[test]
fn flags_are_case_sensitive() {
    let options = CompileOptions::from_args(&["-nomain"]);
    assert!(options.install_main);
}
