//! Parsing of shell command lines.
//!
//! Each line holds one command, for example:
//!
//! ```text
//! insert "Brandon Lee" 45679999
//! search "Brandon Lee"
//! search 45679999
//! removeInorder 0
//! printInorder
//! ```

use crate::error::ParseError;
use crate::id::Id;
use crate::name::NamePolicy;
use crate::tree::Order;

/// A parsed and validated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert { name: String, id: Id },
    Remove(Id),
    RemoveInorder(usize),
    SearchId(Id),
    SearchName(String),
    Print(Order),
    PrintLevelCount,
}

impl Command {
    /// Parses one command line, validating names against the policy.
    pub fn parse(line: &str, policy: NamePolicy) -> Result<Command, ParseError> {
        let mut tokens = Tokens::new(line);
        let keyword = match tokens.next_token()? {
            Some(Token::Bare(keyword)) => keyword,
            Some(Token::Quoted(quoted)) => {
                return Err(ParseError::UnknownCommand(quoted.to_owned()));
            }
            None => return Err(ParseError::MissingArgument("command")),
        };

        let command = match keyword {
            "insert" => {
                let name = tokens.expect_name("insert", policy)?;
                let id = tokens.expect_id("insert")?;
                Command::Insert { name, id }
            }
            "remove" => Command::Remove(tokens.expect_id("remove")?),
            "removeInorder" => match tokens.next_token()? {
                Some(Token::Bare(rank)) => Command::RemoveInorder(
                    rank.parse::<usize>()
                        .map_err(|_| ParseError::InvalidRank(rank.to_owned()))?,
                ),
                Some(Token::Quoted(rank)) => return Err(ParseError::InvalidRank(rank.to_owned())),
                None => return Err(ParseError::MissingArgument("removeInorder")),
            },
            "search" => match tokens.next_token()? {
                Some(Token::Quoted(name)) => {
                    policy.validate(name)?;
                    Command::SearchName(name.to_owned())
                }
                Some(Token::Bare(id)) => Command::SearchId(id.parse::<Id>()?),
                None => return Err(ParseError::MissingArgument("search")),
            },
            "printInorder" => Command::Print(Order::Inorder),
            "printPreorder" => Command::Print(Order::Preorder),
            "printPostorder" => Command::Print(Order::Postorder),
            "printLevelCount" => Command::PrintLevelCount,
            other => return Err(ParseError::UnknownCommand(other.to_owned())),
        };

        tokens.expect_end()?;
        Ok(command)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Bare(&'a str),
    Quoted(&'a str),
}

struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn next_token(&mut self) -> Result<Option<Token<'a>>, ParseError> {
        let rest = self.rest.trim_start();
        if rest.is_empty() {
            self.rest = rest;
            return Ok(None);
        }
        if let Some(quoted) = rest.strip_prefix('"') {
            let end = quoted
                .find('"')
                .ok_or_else(|| ParseError::UnterminatedQuote(rest.to_owned()))?;
            let after = &quoted[end + 1..];
            if after.starts_with(|c: char| !c.is_whitespace()) {
                return Err(ParseError::TrailingInput(after.to_owned()));
            }
            self.rest = after;
            return Ok(Some(Token::Quoted(&quoted[..end])));
        }
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.rest = &rest[end..];
        Ok(Some(Token::Bare(&rest[..end])))
    }

    fn expect_name(
        &mut self,
        command: &'static str,
        policy: NamePolicy,
    ) -> Result<String, ParseError> {
        match self.next_token()? {
            Some(Token::Quoted(name)) => {
                policy.validate(name)?;
                Ok(name.to_owned())
            }
            Some(Token::Bare(name)) => Err(ParseError::InvalidName(name.to_owned())),
            None => Err(ParseError::MissingArgument(command)),
        }
    }

    fn expect_id(&mut self, command: &'static str) -> Result<Id, ParseError> {
        match self.next_token()? {
            Some(Token::Bare(id)) => id.parse(),
            Some(Token::Quoted(id)) => Err(ParseError::InvalidId(id.to_owned())),
            None => Err(ParseError::MissingArgument(command)),
        }
    }

    fn expect_end(&mut self) -> Result<(), ParseError> {
        let rest = self.rest.trim();
        if rest.is_empty() {
            Ok(())
        } else {
            Err(ParseError::TrailingInput(rest.to_owned()))
        }
    }
}
