//! Command-line configuration.

use std::path::PathBuf;

/// Settings for one interpreter run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverConfig {
    /// Print each parsed statement before running it.
    pub ast: bool,
    /// Print the token list before parsing.
    pub tokens: bool,
    /// Script to run; `None` starts the interactive prompt.
    pub script: Option<PathBuf>,
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(DriverConfig),
    /// Bad arguments; print usage and exit with `EX_USAGE`.
    Usage,
}

impl Invocation {
    /// Parse arguments, not including the program name.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = DriverConfig::default();
        for arg in args {
            match arg.as_str() {
                "--ast" => config.ast = true,
                "--tokens" => config.tokens = true,
                flag if flag.starts_with('-') => return Invocation::Usage,
                _ if config.script.is_some() => return Invocation::Usage,
                _ => config.script = Some(PathBuf::from(&arg)),
            }
        }
        Invocation::Run(config)
    }
}

pub const USAGE: &str = "Usage: lox [--ast] [--tokens] [script]";

#[cfg(test)]
mod tests;
