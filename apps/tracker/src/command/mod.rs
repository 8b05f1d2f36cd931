mod fields;
mod info;
mod parse;
mod report;
mod select;

use thiserror::Error;

pub(crate) use fields::{add, data, remove};
pub(crate) use info::{catalog, history};
pub use parse::{Input, parse_line};
pub(crate) use report::{generate, status};
pub(crate) use select::stock;

/// Prefix that marks a token as a command.
pub const MARKER: char = '@';

pub const EXIT: &str = "@exit";

pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

const fn entry(name: &'static str, usage: &'static str, description: &'static str) -> CommandInfo {
    CommandInfo {
        name,
        usage,
        description,
    }
}

pub const COMMANDS: &[CommandInfo] = &[
    entry("@status", "@status", "Shows you current status"),
    entry("@stock", "@stock <SYMBOL>", "Change stock under investigation"),
    entry("@add", "@add <codes...>", "Add data points"),
    entry("@remove", "@remove <codes...>", "Remove data points"),
    entry("@data", "@data", "Shows data points you are investigating"),
    entry("@generate", "@generate", "Fetch a fresh report without printing it"),
    entry("@fields", "@fields", "Lists every data point code"),
    entry("@history", "@history", "Access past searches"),
    entry("@help", "@help", "Access Help menu"),
    entry(EXIT, EXIT, "Exit the stock scraper"),
];

pub fn lookup(name: &str) -> Option<&'static CommandInfo> {
    COMMANDS.iter().find(|c| c.name == name)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("No command given")]
    NoCommand,

    #[error("Did you mean \"{suggestion}\"?")]
    MissingMarker { suggestion: String },

    #[error("Invalid command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument. Usage: {usage}")]
    MissingArgument { usage: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Status,
    Stock(String),
    Add(String),
    Remove(String),
    Data,
    Generate,
    Fields,
    History,
    Help,
}

impl Command {
    /// Turn a parsed command name and its raw argument string into a command.
    /// Zero-argument commands drop `args`.
    pub fn resolve(name: &str, args: &str) -> Result<Self, ParseError> {
        let required = || {
            if args.trim().is_empty() {
                Err(ParseError::MissingArgument {
                    usage: lookup(name).map_or("", |c| c.usage),
                })
            } else {
                Ok(args.to_string())
            }
        };

        let command = match name {
            "@status" => Command::Status,
            "@stock" => Command::Stock(required()?),
            "@add" => Command::Add(required()?),
            "@remove" => Command::Remove(required()?),
            "@data" => Command::Data,
            "@generate" => Command::Generate,
            "@fields" => Command::Fields,
            "@history" => Command::History,
            "@help" => Command::Help,
            _ => return Err(ParseError::UnknownCommand(name.to_string())),
        };

        Ok(command)
    }
}
