//! Movement commands and the cards that carry them.
//!
//! The engine defines movement semantics for `Forward`, `Right`, `Left`
//! and `FastForward`. Any other command executes as a no-op.

use serde::{Deserialize, Serialize};

/// A programmable command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Command {
    /// Move one space along the current heading.
    Forward,
    /// Rotate 90 degrees clockwise.
    Right,
    /// Rotate 90 degrees counter-clockwise.
    Left,
    /// Move two spaces along the current heading.
    FastForward,
    /// Player chooses between turning left and turning right.
    OptionLeftRight,
}

impl Command {
    /// Every command, in declaration order.
    pub const ALL: [Command; 5] = [
        Command::Forward,
        Command::Right,
        Command::Left,
        Command::FastForward,
        Command::OptionLeftRight,
    ];

    /// Short label shown on a card.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Command::Forward => "Fwd",
            Command::Right => "Turn Right",
            Command::Left => "Turn Left",
            Command::FastForward => "Fast Fwd",
            Command::OptionLeftRight => "Left OR Right",
        }
    }

    /// Commands the player has to resolve by choosing one of `options()`.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        !self.options().is_empty()
    }

    /// The choices offered by an interactive command.
    #[must_use]
    pub const fn options(self) -> &'static [Command] {
        match self {
            Command::OptionLeftRight => &[Command::Left, Command::Right],
            _ => &[],
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An immutable card holding exactly one command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandCard {
    command: Command,
}

impl CommandCard {
    #[must_use]
    pub const fn new(command: Command) -> Self {
        Self { command }
    }

    #[must_use]
    pub const fn command(self) -> Command {
        self.command
    }

    /// Label shown on the card face.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.command.display_name()
    }
}

impl From<Command> for CommandCard {
    fn from(command: Command) -> Self {
        Self::new(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_option_is_interactive() {
        for command in Command::ALL {
            assert_eq!(command.is_interactive(), command == Command::OptionLeftRight);
        }
        assert_eq!(Command::OptionLeftRight.options(), &[Command::Left, Command::Right]);
    }

    #[test]
    fn test_card_wraps_command() {
        let card = CommandCard::from(Command::FastForward);
        assert_eq!(card.command(), Command::FastForward);
        assert_eq!(card.name(), "Fast Fwd");
    }

    #[test]
    fn test_card_serialization() {
        let card = CommandCard::new(Command::Left);
        let json = serde_json::to_string(&card).unwrap();
        let back: CommandCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
