use std::str::FromStr;
use thiserror::Error;

use crate::models::Player;

/// A line of input from the console driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Restart,
    Tap(Player),
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim().to_lowercase();
        match word.as_str() {
            "" => Err(CommandError::Empty),
            "start" | "s" => Ok(Command::Start),
            "restart" | "r" => Ok(Command::Restart),
            "1" | "one" | "a" => Ok(Command::Tap(Player::One)),
            "2" | "two" | "b" => Ok(Command::Tap(Player::Two)),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_taps_and_controls() {
        assert_eq!("a".parse(), Ok(Command::Tap(Player::One)));
        assert_eq!(" TWO \n".parse(), Ok(Command::Tap(Player::Two)));
        assert_eq!("start".parse(), Ok(Command::Start));
        assert_eq!("r".parse(), Ok(Command::Restart));
        assert_eq!("quit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::Unknown("jump".to_string()))
        );
    }
}
