//! Player commands.
//!
//! Commands use 1-based pile numbers as typed at the prompt; `parse`
//! converts them to the 0-based indices the board works with.

use std::str::FromStr;

use crate::core::action::Move;
use crate::core::error::CommandError;

/// One line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `move <from> <count> <to>` or `movef <from> <count> <foundation>`.
    Play(Move),
    /// `print`
    Print,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

impl Command {
    /// Parse a line of input.
    ///
    /// Keywords are case-insensitive and surrounding whitespace is ignored.
    ///
    /// ```
    /// use rust_yukon::core::Move;
    /// use rust_yukon::session::Command;
    ///
    /// let cmd = Command::parse("move 2 3 5").unwrap();
    /// assert_eq!(cmd, Command::Play(Move::ToTableau { from: 1, count: 3, to: 4 }));
    /// ```
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        match keyword.to_ascii_lowercase().as_str() {
            "move" => {
                let [from, count, to] = numbers("move", &args)?;
                Ok(Command::Play(Move::ToTableau {
                    from: pile_index(from)?,
                    count,
                    to: pile_index(to)?,
                }))
            }
            "movef" => {
                let [from, count, to] = numbers("movef", &args)?;
                Ok(Command::Play(Move::ToFoundation {
                    from: pile_index(from)?,
                    count,
                    to: pile_index(to)?,
                }))
            }
            "print" => no_args("print", &args, Command::Print),
            "help" => no_args("help", &args, Command::Help),
            "quit" => no_args("quit", &args, Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn numbers(command: &'static str, args: &[&str]) -> Result<[usize; 3], CommandError> {
    if args.len() != 3 {
        return Err(CommandError::WrongArity {
            command,
            expected: 3,
            actual: args.len(),
        });
    }
    let mut out = [0; 3];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg
            .parse()
            .map_err(|_| CommandError::NotANumber((*arg).to_string()))?;
    }
    Ok(out)
}

fn pile_index(number: usize) -> Result<usize, CommandError> {
    number.checked_sub(1).ok_or(CommandError::ZeroPile)
}

fn no_args(command: &'static str, args: &[&str], cmd: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(cmd)
    } else {
        Err(CommandError::WrongArity {
            command,
            expected: 0,
            actual: args.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!(
            Command::parse("move 1 2 7"),
            Ok(Command::Play(Move::ToTableau { from: 0, count: 2, to: 6 }))
        );
        assert_eq!(
            Command::parse("  MOVEF 4 1 2  "),
            Ok(Command::Play(Move::ToFoundation { from: 3, count: 1, to: 1 }))
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Command::parse("print"), Ok(Command::Print));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let mv = Move::ToTableau { from: 3, count: 4, to: 0 };
        assert_eq!(Command::parse(&mv.to_string()), Ok(Command::Play(mv)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("deal"),
            Err(CommandError::Unknown("deal".to_string()))
        );
        assert_eq!(
            Command::parse("move 1 2"),
            Err(CommandError::WrongArity {
                command: "move",
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            Command::parse("movef 1 x 1"),
            Err(CommandError::NotANumber("x".to_string()))
        );
        assert_eq!(Command::parse("move 0 1 2"), Err(CommandError::ZeroPile));
        assert_eq!(Command::parse("move -1 1 2"), Err(CommandError::NotANumber("-1".to_string())));
        assert!(matches!(
            Command::parse("print now"),
            Err(CommandError::WrongArity { command: "print", .. })
        ));
    }

    #[test]
    fn test_zero_count_parses() {
        // The board refuses it; parsing only checks shape.
        assert_eq!(
            Command::parse("move 1 0 2"),
            Ok(Command::Play(Move::ToTableau { from: 0, count: 0, to: 1 }))
        );
    }
}
