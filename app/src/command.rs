//! One line of terminal input, parsed.

use std::str::FromStr;

use thiserror::Error;
use todo_core::{Filter, ParseFilterError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The title may be blank; the list rejects it, not the parser.
    Add(String),
    Delete(u64),
    Toggle(u64),
    Filter(Filter),
    ClearCompleted,
    Dismiss,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}, type `help`")]
    Unknown(String),
    #[error("`{command}` needs a todo id, got {got:?}")]
    BadId { command: &'static str, got: String },
    #[error(transparent)]
    Filter(#[from] ParseFilterError),
}

pub const HELP: &str = "\
commands:
  add <title>       add a todo
  delete <id>       delete a todo (alias: rm)
  toggle <id>       flip completed
  filter <name>     all | active | completed (or #/, #/active, #/completed)
  clear             delete every completed todo
  dismiss           hide the error message
  quit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        match word {
            "add" | "a" => Ok(Command::Add(rest.to_string())),
            "delete" | "rm" => parse_id("delete", rest).map(Command::Delete),
            "toggle" | "t" => parse_id("toggle", rest).map(Command::Toggle),
            "filter" | "f" if rest.starts_with('#') => Ok(Command::Filter(Filter::from_fragment(rest)?)),
            "filter" | "f" => Ok(Command::Filter(rest.parse()?)),
            "clear" => Ok(Command::ClearCompleted),
            "dismiss" => Ok(Command::Dismiss),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            fragment if fragment.starts_with('#') => Ok(Command::Filter(Filter::from_fragment(fragment)?)),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(command: &'static str, arg: &str) -> Result<u64, CommandError> {
    arg.parse().map_err(|_| CommandError::BadId {
        command,
        got: arg.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_the_rest_of_the_line() {
        assert_eq!("add Buy oat milk".parse::<Command>(), Ok(Command::Add("Buy oat milk".to_string())));
        assert_eq!("add".parse::<Command>(), Ok(Command::Add(String::new())));
        assert_eq!("add    ".parse::<Command>(), Ok(Command::Add(String::new())));
    }

    #[test]
    fn id_commands_need_numbers() {
        assert_eq!("rm 12".parse::<Command>(), Ok(Command::Delete(12)));
        assert_eq!("toggle 3".parse::<Command>(), Ok(Command::Toggle(3)));
        assert!(matches!(
            "delete x".parse::<Command>(),
            Err(CommandError::BadId { command: "delete", .. })
        ));
    }

    #[test]
    fn filters_by_name_or_fragment() {
        assert_eq!("filter active".parse::<Command>(), Ok(Command::Filter(Filter::Active)));
        assert_eq!("filter #/completed".parse::<Command>(), Ok(Command::Filter(Filter::Completed)));
        assert_eq!("#/".parse::<Command>(), Ok(Command::Filter(Filter::All)));
        assert!(matches!("filter done".parse::<Command>(), Err(CommandError::Filter(_))));
    }

    #[test]
    fn unknown_words_are_errors() {
        assert_eq!(
            "frobnicate".parse::<Command>(),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
    }
}
