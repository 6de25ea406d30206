#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::{ReplCommand, ReplSession};
use crate::CompileOptions;

fn bare() -> CompileOptions {
    CompileOptions {
        install_main: true,
        helpers: false,
    }
}

/// Run a scripted session and return everything it printed.
fn script(input: &str, options: CompileOptions) -> String {
    let mut repl = ReplSession::new(input.as_bytes(), Vec::new(), options);
    repl.run().unwrap();
    String::from_utf8(repl.into_output()).unwrap()
}

/// Output with the banner and prompts removed.
fn transcript(input: &str, options: CompileOptions) -> Vec<String> {
    script(input, options)
        .split("novlangue> ")
        .skip(1)
        .flat_map(|chunk| chunk.lines().map(str::to_string).collect::<Vec<_>>())
        .collect()
}

#[test]
fn commands_parse_case_insensitively() {
    assert_eq!(ReplCommand::parse(";help"), Some(ReplCommand::Help));
    assert_eq!(ReplCommand::parse("  ;QUIT \n"), Some(ReplCommand::Quit));
    assert_eq!(ReplCommand::parse("; list"), Some(ReplCommand::List));
    assert_eq!(
        ReplCommand::parse(";load x"),
        Some(ReplCommand::Unknown("load x".into()))
    );
    assert_eq!(ReplCommand::parse("val x = 1"), None);
}

#[test]
fn banner_and_help() {
    let out = script(";help\n;quit\n", bare());
    assert!(out.starts_with("WARNING: REPL MODE IS CURRENTLY INCOMPLETE\nFor assistance, use ;help.\n\n"));
    assert!(out.contains(
        "Commands:\n;help -- prints this help dialogue\n;quit -- exits the REPL\n;list -- lists current bindings\n"
    ));
}

#[test]
fn quit_stops_reading() {
    let lines = transcript(";quit\n1 + 1\n", bare());
    assert!(lines.is_empty(), "{lines:?}");
}

#[test]
fn end_of_input_ends_the_session() {
    let out = script("", bare());
    assert!(out.ends_with("novlangue> "));
}

#[test]
fn blank_lines_are_skipped() {
    let lines = transcript("\n   \n1 + 2\n", bare());
    assert_eq!(lines, vec!["\t%add = add i32 1, 2"]);
}

#[test]
fn lines_echo_their_instructions() {
    let lines = transcript("val x = 4\nx * 2\n", bare());
    assert_eq!(
        lines,
        vec![
            "\tstore i32 4, i32* @x",
            "\t%x = load i32, i32* @x",
            "\t%x1 = load i32, i32* @x",
            "\t%mul = mul i32 %x1, 2",
        ]
    );
}

#[test]
fn functions_persist_between_lines() {
    let lines = transcript("fun sq(n: Int): Int { n * n }\nsq(3)\n;list\n", bare());
    assert_eq!(
        lines,
        vec![
            "\tfunction sq bound",
            "\t%call = call i32 @SQ_INT(i32 3)",
            "Functions:",
            "sq(Int): Int",
        ]
    );
}

#[test]
fn fresh_session_does_not_know_old_functions() {
    transcript("fun sq(n: Int): Int { n * n }\n", bare());
    let lines = transcript("sq(3)\n", bare());
    assert_eq!(lines, vec!["\tERROR: The function sq does not exist."]);
}

#[test]
fn list_without_bindings() {
    let lines = transcript(";list\n", bare());
    assert_eq!(lines, vec!["No functions have been bound."]);
}

#[test]
fn list_includes_helpers() {
    let lines = transcript(";list\n", CompileOptions::default());
    assert_eq!(
        lines,
        vec![
            "Functions:",
            "print(Int): Int",
            "print(Double): Int",
            "print(String): Int",
        ]
    );
}

#[test]
fn errors_do_not_end_the_session() {
    let lines = transcript("y = 1\nval = \n2 - 1\n", bare());
    assert_eq!(lines[0], "\tERROR: The variable y does not exist. Try using `val`.");
    assert!(lines[1].starts_with("\tERROR[E1"), "{lines:?}");
    assert_eq!(lines.last().unwrap(), "\t%sub = sub i32 2, 1");
}

#[test]
fn unknown_commands_point_to_help() {
    let lines = transcript(";frobnicate\n", bare());
    assert_eq!(
        lines,
        vec!["Unknown command ;frobnicate. For assistance, use ;help."]
    );
}

#[test]
fn conditionals_echo_their_blocks() {
    let lines = transcript("if 1 < 2 { 3 }\n", bare());
    let labels: Vec<_> = lines.iter().filter(|l| l.ends_with(':')).collect();
    assert_eq!(labels.len(), 3);
    assert!(lines[0].contains("icmp slt i32 1, 2"));
}
