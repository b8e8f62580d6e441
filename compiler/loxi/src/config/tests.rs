use super::*;
use pretty_assertions::assert_eq;

fn invocation(args: &[&str]) -> Invocation {
    Invocation::from_args(args.iter().map(ToString::to_string))
}

#[test]
fn no_arguments_starts_prompt() {
    assert_eq!(invocation(&[]), Invocation::Run(DriverConfig::default()));
}

#[test]
fn single_script() {
    assert_eq!(
        invocation(&["main.lox"]),
        Invocation::Run(DriverConfig {
            script: Some(PathBuf::from("main.lox")),
            ..DriverConfig::default()
        })
    );
}

#[test]
fn flags_in_any_position() {
    assert_eq!(
        invocation(&["--tokens", "main.lox", "--ast"]),
        Invocation::Run(DriverConfig {
            ast: true,
            tokens: true,
            script: Some(PathBuf::from("main.lox")),
        })
    );
}

#[test]
fn two_scripts_is_usage_error() {
    assert_eq!(invocation(&["a.lox", "b.lox"]), Invocation::Usage);
}

#[test]
fn unknown_flag_is_usage_error() {
    assert_eq!(invocation(&["--verbose"]), Invocation::Usage);
    assert_eq!(invocation(&["-"]), Invocation::Usage);
}
