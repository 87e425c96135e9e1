//! Line-command parsing.

use core::str::FromStr;

use thiserror::Error;

use wareflow_core::{ItemId, NodeId};

/// One parsed protocol line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `ADD_ORDER <item_id> <qty> <priority>`
    AddOrder {
        item: ItemId,
        quantity: u32,
        priority: i32,
    },
    /// `PROCESS`
    Process,
    /// `DISPATCH`
    Dispatch,
    /// `UNDO`
    Undo,
    /// `GET_STATE`
    GetState,
    /// `ROUTE <from> <to>`
    Route { from: NodeId, to: NodeId },
    /// `GRAPH`
    Graph,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("Unknown command")]
    Unknown(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid {field}: {value}")]
    InvalidArgument { field: &'static str, value: String },

    #[error("unexpected argument: {0}")]
    TrailingArgument(String),
}

struct Args<'a> {
    words: core::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn next<T: FromStr>(&mut self, field: &'static str) -> Result<T, CommandError> {
        let raw = self
            .words
            .next()
            .ok_or(CommandError::MissingArgument(field))?;
        raw.parse().map_err(|_| CommandError::InvalidArgument {
            field,
            value: raw.to_string(),
        })
    }

    fn finish(mut self) -> Result<(), CommandError> {
        match self.words.next() {
            Some(extra) => Err(CommandError::TrailingArgument(extra.to_string())),
            None => Ok(()),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let mut args = Args { words };

        let command = match name.to_ascii_uppercase().as_str() {
            "ADD_ORDER" => Command::AddOrder {
                item: args.next("item_id")?,
                quantity: args.next("quantity")?,
                priority: args.next("priority")?,
            },
            "PROCESS" => Command::Process,
            "DISPATCH" => Command::Dispatch,
            "UNDO" => Command::Undo,
            "GET_STATE" => Command::GetState,
            "ROUTE" => Command::Route {
                from: args.next("from")?,
                to: args.next("to")?,
            },
            "GRAPH" => Command::Graph,
            _ => return Err(CommandError::Unknown(name.to_string())),
        };

        args.finish()?;
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_order() {
        let cmd: Command = "ADD_ORDER 101 10 5".parse().unwrap();
        assert_eq!(
            cmd,
            Command::AddOrder {
                item: ItemId::new(101),
                quantity: 10,
                priority: 5
            }
        );
    }

    #[test]
    fn negative_priorities_are_allowed() {
        let cmd: Command = "add_order 101 1 -3".parse().unwrap();
        assert!(matches!(cmd, Command::AddOrder { priority: -3, .. }));
    }

    #[test]
    fn bare_commands_parse_case_insensitively() {
        assert_eq!("process".parse::<Command>().unwrap(), Command::Process);
        assert_eq!("  DISPATCH ".parse::<Command>().unwrap(), Command::Dispatch);
        assert_eq!("Undo".parse::<Command>().unwrap(), Command::Undo);
        assert_eq!("GET_STATE".parse::<Command>().unwrap(), Command::GetState);
        assert_eq!("GRAPH".parse::<Command>().unwrap(), Command::Graph);
    }

    #[test]
    fn parses_route() {
        assert_eq!(
            "ROUTE 0 7".parse::<Command>().unwrap(),
            Command::Route {
                from: NodeId::new(0),
                to: NodeId::new(7)
            }
        );
    }

    #[test]
    fn reports_malformed_lines() {
        assert_eq!("".parse::<Command>().unwrap_err(), CommandError::Empty);
        assert_eq!(
            "SHIP".parse::<Command>().unwrap_err(),
            CommandError::Unknown("SHIP".to_string())
        );
        assert_eq!(
            "ADD_ORDER 101 10".parse::<Command>().unwrap_err(),
            CommandError::MissingArgument("priority")
        );
        assert_eq!(
            "ADD_ORDER 101 -10 5".parse::<Command>().unwrap_err(),
            CommandError::InvalidArgument {
                field: "quantity",
                value: "-10".to_string()
            }
        );
        assert_eq!(
            "PROCESS now".parse::<Command>().unwrap_err(),
            CommandError::TrailingArgument("now".to_string())
        );
    }
}
