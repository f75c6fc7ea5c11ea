//! Line-oriented command shell on top of the roster tree.

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::command::Command;
use crate::error::{ParseError, ShellError, TreeError};
use crate::id::Id;
use crate::name::NamePolicy;
use crate::tree::Tree;

const SUCCESS: &str = "successful";
const FAILURE: &str = "unsuccessful";

/// Result of a single command, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
    /// Name found by an id search.
    Name(String),
    /// Ids found by a name search, one per line.
    Ids(Vec<Id>),
    /// Names produced by a traversal, on one line.
    Names(Vec<String>),
    LevelCount(usize),
}

impl Outcome {
    /// Writes the outcome followed by a newline.
    /// An empty traversal writes nothing at all.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Outcome::Success => writeln!(out, "{SUCCESS}"),
            Outcome::Failure => writeln!(out, "{FAILURE}"),
            Outcome::Name(name) => writeln!(out, "{name}"),
            Outcome::Ids(ids) => ids.iter().try_for_each(|id| writeln!(out, "{id}")),
            Outcome::Names(names) if names.is_empty() => Ok(()),
            Outcome::Names(names) => writeln!(out, "{}", names.join(", ")),
            Outcome::LevelCount(height) => writeln!(out, "{height}"),
        }
    }
}

impl<T> From<Result<T, TreeError>> for Outcome {
    fn from(result: Result<T, TreeError>) -> Self {
        match result {
            Ok(_) => Outcome::Success,
            Err(_) => Outcome::Failure,
        }
    }
}

/// Executes commands against an owned tree and writes their outcomes.
///
/// ```
/// use avl_roster::Shell;
/// let mut shell = Shell::new(Vec::new());
/// shell.execute("insert \"Brandon\" 45679999").unwrap();
/// shell.execute("search 45679999").unwrap();
/// shell.execute("remove 45679998").unwrap();
/// let output = String::from_utf8(shell.into_inner()).unwrap();
/// assert_eq!(output, "successful\nBrandon\nunsuccessful\n");
/// ```
pub struct Shell<W> {
    tree: Tree,
    policy: NamePolicy,
    out: W,
}

impl<W: Write> Shell<W> {
    /// Creates a shell with an empty tree and the default name policy.
    pub fn new(out: W) -> Self {
        Self::with_policy(out, NamePolicy::default())
    }

    pub fn with_policy(out: W, policy: NamePolicy) -> Self {
        Self {
            tree: Tree::new(),
            policy,
            out,
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn policy(&self) -> NamePolicy {
        self.policy
    }

    /// Consumes the shell, returning the output writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Parses and applies one command line, then renders its outcome.
    /// Malformed lines are rendered as failures.
    pub fn execute(&mut self, line: &str) -> io::Result<Outcome> {
        let outcome = match Command::parse(line, self.policy) {
            Ok(command) => Self::apply(&mut self.tree, command),
            Err(err) => {
                debug!("rejected {line:?}: {err}");
                Outcome::Failure
            }
        };
        outcome.render(&mut self.out)?;
        Ok(outcome)
    }

    /// Executes commands read from the input, one per line. Blank lines are skipped.
    ///
    /// If `counted` is set, the first line holds the number of commands to execute
    /// and lines beyond that count are ignored. A line that is not valid UTF-8 is
    /// rendered as a failure and still counts as a command.
    /// Returns the number of commands executed.
    pub fn run<R: BufRead>(&mut self, input: R, counted: bool) -> Result<usize, ShellError> {
        let mut lines = input.split(b'\n');
        let mut limit = usize::MAX;
        if counted {
            let mut header = String::new();
            for line in lines.by_ref() {
                header = String::from_utf8_lossy(&line?).trim().to_owned();
                if !header.is_empty() {
                    break;
                }
            }
            limit = header
                .parse()
                .map_err(|_| ParseError::MissingCommandCount(header.clone()))?;
            info!("expecting {limit} commands");
        }

        let mut executed = 0;
        while executed < limit {
            let Some(line) = lines.next() else {
                if counted {
                    warn!("input ended after {executed} of {limit} commands");
                }
                break;
            };
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            match String::from_utf8(line) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => {
                    self.execute(&line)?;
                }
                Err(err) => {
                    let text = String::from_utf8_lossy(err.as_bytes());
                    debug!("rejected {text:?}: {}", err.utf8_error());
                    Outcome::Failure.render(&mut self.out)?;
                }
            }
            executed += 1;
        }
        self.out.flush()?;
        Ok(executed)
    }

    /// Applies a command to the tree.
    pub fn apply(tree: &mut Tree, command: Command) -> Outcome {
        match command {
            Command::Insert { name, id } => tree.insert(id, name).into(),
            Command::Remove(id) => tree.remove(id).into(),
            Command::RemoveInorder(rank) => tree.remove_at_rank(rank).into(),
            Command::SearchId(id) => match tree.search(id) {
                Ok(name) => Outcome::Name(name.to_owned()),
                Err(_) => Outcome::Failure,
            },
            Command::SearchName(name) => {
                let ids: Vec<Id> = tree.search_name(&name).collect();
                if ids.is_empty() {
                    Outcome::Failure
                } else {
                    Outcome::Ids(ids)
                }
            }
            Command::Print(order) => Outcome::Names(tree.names(order).map(String::from).collect()),
            Command::PrintLevelCount => Outcome::LevelCount(tree.height()),
        }
    }
}
