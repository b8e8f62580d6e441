//! End-to-end tests of the `lox` binary: exit codes and output streams.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn lox() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lox"));
    cmd.env_remove("LOX_LOG").env_remove("RUST_LOG");
    cmd
}

fn script(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file
}

fn run_script(source: &str) -> Output {
    let file = script(source);
    lox().arg(file.path()).output().unwrap()
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn successful_script_exits_zero() {
    let out = run_script("var a = 1;\n{ var a = 2; print a; }\nprint a;\nprint 4.0;\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(text(&out.stdout), "2\n1\n4\n");
    assert_eq!(text(&out.stderr), "");
}

#[test]
fn syntax_error_exits_65() {
    let out = run_script("+ 1;\nprint 2;\n");
    assert_eq!(out.status.code(), Some(65));
    assert_eq!(text(&out.stdout), "");
    assert_eq!(text(&out.stderr), "[1] Error at '+': Missing left operand.\n");
}

#[test]
fn runtime_error_exits_65() {
    let out = run_script("print 1;\nb = 5;\nprint 2;\n");
    assert_eq!(out.status.code(), Some(65));
    assert_eq!(text(&out.stdout), "1\n");
    assert_eq!(text(&out.stderr), "Undefined variable 'b'.\n[line 2]\n");
}

#[test]
fn break_outside_loop_exits_65() {
    let out = run_script("break;\n");
    assert_eq!(out.status.code(), Some(65));
    assert_eq!(text(&out.stderr), "Break statement not enclosed.\n[line 1]\n");
}

#[test]
fn too_many_arguments_exits_64() {
    let out = lox().args(["a.lox", "b.lox"]).output().unwrap();
    assert_eq!(out.status.code(), Some(64));
    assert_eq!(text(&out.stderr), "Usage: lox [--ast] [--tokens] [script]\n");
}

#[test]
fn unreadable_script_exits_74() {
    let dir = tempfile::tempdir().unwrap();
    let out = lox().arg(dir.path().join("missing.lox")).output().unwrap();
    assert_eq!(out.status.code(), Some(74));
}

#[test]
fn ast_flag_prints_statements() {
    let file = script("print -(1);");
    let out = lox().arg("--ast").arg(file.path()).output().unwrap();
    assert_eq!(text(&out.stdout), "(print (- (group 1)))\n-1\n");
}

#[test]
fn prompt_evaluates_lines_until_eof() {
    let mut child = lox()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"var a = 2;\na * 3\nprint nope;\nprint a;\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(text(&out.stdout), "> > 6\n> > 2\n> \n");
    assert_eq!(text(&out.stderr), "Undefined variable 'nope'.\n[line 1]\n");
}
