//! Shell completion generation command.
//!
//! Generates shell completion scripts for bash, zsh, fish, `PowerShell` and
//! elvish.

use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use sdkwrap_core::cli::ExitCode;
use std::io::{self, Write};
use tracing::info;

/// Writes the completion script for `shell` to `out`.
///
/// # Examples
///
/// ```
/// use clap::Command;
/// use clap_complete::Shell;
/// use sdkwrap_cli::commands::completions;
///
/// let mut cmd = Command::new("sdkwrap").subcommand(Command::new("generate"));
/// let mut script = Vec::new();
/// completions::write_completions(Shell::Bash, &mut cmd, &mut script);
/// assert!(String::from_utf8(script).unwrap().contains("sdkwrap"));
/// ```
pub fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    info!("Generating {} completions", shell);
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
pub fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    write_completions(shell, cmd, &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> Command {
        Command::new("sdkwrap")
            .subcommand(Command::new("generate"))
            .subcommand(Command::new("inspect"))
    }

    #[test]
    fn test_completions_for_every_shell() {
        for shell in [
            Shell::Bash,
            Shell::Zsh,
            Shell::Fish,
            Shell::PowerShell,
            Shell::Elvish,
        ] {
            let mut script = Vec::new();
            write_completions(shell, &mut command(), &mut script);
            assert!(!script.is_empty(), "{shell}");
        }
    }

    #[test]
    fn test_powershell_script_mentions_subcommands() {
        let mut script = Vec::new();
        write_completions(Shell::PowerShell, &mut command(), &mut script);
        let text = String::from_utf8(script).unwrap();
        assert!(text.contains("generate"));
        assert!(text.contains("inspect"));
    }
}
