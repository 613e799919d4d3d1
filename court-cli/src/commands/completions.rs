//! `court completions <SHELL>`: print a completion script to stdout.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "court";

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsCommand {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# To install: {hint}");
            }
        }

        generate(self.shell, &mut Cli::command(), BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

/// Where the script usually goes for `shell`.
fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some("court completions bash > ~/.local/share/bash-completion/completions/court"),
        Shell::Zsh => Some("court completions zsh > \"${fpath[1]}/_court\""),
        Shell::Fish => Some("court completions fish > ~/.config/fish/completions/court.fish"),
        Shell::PowerShell => Some("court completions powershell | Out-String | Invoke-Expression"),
        _ => None,
    }
}
