//! Renders the `court(1)` man page into `$OUT_DIR/man/court.1`.
//!
//! The command tree is restated here because a build script cannot link the
//! crate it builds. Update it alongside `src/cli.rs`.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

fn global_flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .global(true)
        .action(ArgAction::SetTrue)
}

fn global_value(name: &'static str, value: &'static str, env: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name(value)
        .env(env)
        .global(true)
        .help(help)
}

fn court_command() -> Command {
    Command::new("court")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book a shared court by time slot")
        .long_about(
            "Command-line tool for booking a single shared court, enforcing per-holder \
             limits and lead times and suggesting the nearest free slot on conflict",
        )
        .arg(global_flag("verbose", "Enable verbose output"))
        .arg(global_flag("quiet", "Suppress non-essential output"))
        .arg(global_value(
            "config-dir",
            "PATH",
            "COURT_CONFIG_DIR",
            "Override the user configuration directory",
        ))
        .arg(global_value(
            "now",
            "DATETIME",
            "COURT_NOW",
            "Pin the current time (YYYY-MM-DDTHH:MM) instead of using the system clock",
        ))
        .subcommand(
            Command::new("shell")
                .about("Run booking commands from stdin or a script (default)")
                .arg(Arg::new("file").long("file").short('f').value_name("FILE")),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate a configuration file")
                .arg(Arg::new("config_path").value_name("CONFIG_PATH").required(true)),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("shell").value_name("SHELL").required(true)),
        )
}

fn main() -> io::Result<()> {
    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut page = Vec::new();
    Man::new(court_command()).render(&mut page)?;
    fs::write(man_dir.join("court.1"), page)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    Ok(())
}
