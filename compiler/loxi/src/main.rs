//! Lox interpreter CLI.
//!
//! `lox` starts a prompt, `lox script.lox` runs a file.

use std::io::{self, BufRead};
use std::path::Path;
use std::process;

use lox_diagnostic::TerminalEmitter;
use lox_eval::Interpreter;
use loxi::{
    init_tracing, DriverConfig, Invocation, Session, EX_DATAERR, EX_IOERR, EX_OK, EX_USAGE, USAGE,
};

fn main() {
    init_tracing();

    let config = match Invocation::from_args(std::env::args().skip(1)) {
        Invocation::Run(config) => config,
        Invocation::Usage => {
            eprintln!("{USAGE}");
            process::exit(EX_USAGE);
        }
    };

    let code = match &config.script {
        Some(path) => run_file(path, &config),
        None => run_prompt(&config),
    };
    process::exit(code);
}

fn run_file(path: &Path, config: &DriverConfig) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Could not read '{}': {err}", path.display());
            return EX_IOERR;
        }
    };

    tracing::debug!(path = %path.display(), bytes = source.len(), "running script");
    let mut session = Session::new(Interpreter::new(), TerminalEmitter::stderr()).configured(config);
    if session.run_source(&source).any() {
        EX_DATAERR
    } else {
        EX_OK
    }
}

fn run_prompt(config: &DriverConfig) -> i32 {
    let mut session = Session::new(Interpreter::new(), TerminalEmitter::stderr()).configured(config);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        session.prompt();

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                session.run_line(line.trim_end_matches(['\n', '\r']));
            }
            Err(err) => {
                eprintln!("Could not read input: {err}");
                return EX_IOERR;
            }
        }
    }
    session.interpreter().print_handler().println("");
    EX_OK
}
