use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;

use avl_roster::{NamePolicy, Shell};

/// Reads roster commands, one per line, and prints the outcome of each.
///
/// The first line holds the number of commands that follow.
/// Set RUST_LOG=debug to trace tree operations on stderr.
#[derive(Debug, Parser)]
#[clap(name = "avl-roster", version)]
struct CliOpts {
    /// Read commands from this file instead of standard input.
    #[clap(short, long)]
    input: Option<PathBuf>,
    /// Characters allowed in names.
    #[clap(long, value_enum, default_value_t = NameRule::LettersAndSpaces)]
    name_policy: NameRule,
    /// The input has no leading command count, every line is a command.
    #[clap(long)]
    no_count: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum NameRule {
    LettersAndSpaces,
    LettersOnly,
}

impl From<NameRule> for NamePolicy {
    fn from(rule: NameRule) -> Self {
        match rule {
            NameRule::LettersAndSpaces => NamePolicy::LettersAndSpaces,
            NameRule::LettersOnly => NamePolicy::LettersOnly,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let opts = CliOpts::parse();

    let input: Box<dyn BufRead> = match &opts.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout().lock();
    let mut shell = Shell::with_policy(stdout, opts.name_policy.into());
    let executed = shell
        .run(input, !opts.no_count)
        .context("failed to execute commands")?;
    info!("executed {executed} commands, {} records left", shell.tree().len());
    Ok(())
}
