//! Shell command implementation.
//!
//! The shell reads session commands line by line, from stdin or a script
//! file, and runs them against one in-memory store that lives as long as the
//! process. A failed command is reported and the session carries on.

use crate::commands::session::{LineOutcome, Session};
use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;

/// Run booking commands interactively or from a script.
#[derive(Args, Debug, Default)]
pub struct ShellCommand {
    /// Read commands from FILE instead of stdin
    #[arg(long, short, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl ShellCommand {
    /// Execute the shell command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut session = Session::new(open_store(global, &config), config.export_format());

        let interactive = self.file.is_none() && io::stdin().is_terminal() && !global.quiet;
        let input: Box<dyn BufRead> = match self.file {
            Some(ref path) => Box::new(BufReader::new(File::open(path)?)),
            None => Box::new(io::stdin().lock()),
        };

        let failures = run_session(&mut session, input, interactive)?;
        if failures > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{failures} command(s) failed"
            )));
        }

        Ok(())
    }
}

/// Run every line of `input` through `session`, returning the number of
/// lines that failed.
fn run_session<C: court::Clock>(
    session: &mut Session<C>,
    input: impl BufRead,
    interactive: bool,
) -> Result<usize, CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0;

    if interactive {
        eprintln!("court shell; type 'help' for commands, 'quit' to leave");
        prompt()?;
    }

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        match session.run_line(&line, &mut out) {
            Ok(LineOutcome::Quit) => break,
            Ok(LineOutcome::Continue) => {}
            Err(e) => {
                debug!("line {} failed: {}", index + 1, line.trim());
                eprintln!("Error: {e}");
                failures += 1;
            }
        }
        out.flush()?;

        if interactive {
            prompt()?;
        }
    }

    Ok(failures)
}

fn prompt() -> io::Result<()> {
    let mut stderr = io::stderr();
    write!(stderr, "court> ")?;
    stderr.flush()
}
