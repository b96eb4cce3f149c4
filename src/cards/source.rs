//! Card generation policies.
//!
//! The programming phase is the only place new cards enter play, and it
//! asks a `CardSource` for each one. `RandomCards` is the default policy;
//! `ScriptedCards` deals a fixed sequence for tests and tutorials.

use super::command::{Command, CommandCard};
use crate::core::rng::{GameRng, GameRngState};

/// Supplies freshly generated command cards.
pub trait CardSource {
    /// Produce the next card to deal.
    fn next_card(&mut self) -> CommandCard;
}

/// Uniform random selection over `Command::ALL`.
#[derive(Clone, Debug)]
pub struct RandomCards {
    rng: GameRng,
}

impl RandomCards {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Resume dealing from a captured RNG state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }

    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }

    /// An independent dealer with its own deterministic stream.
    ///
    /// Dealing from the fork does not change what this source deals next.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            rng: self.rng.fork(),
        }
    }
}

impl CardSource for RandomCards {
    fn next_card(&mut self) -> CommandCard {
        let index = self.rng.gen_range_usize(0..Command::ALL.len());
        CommandCard::new(Command::ALL[index])
    }
}

/// Deals the given commands in order, cycling back to the start.
#[derive(Clone, Debug)]
pub struct ScriptedCards {
    commands: Vec<Command>,
    next: usize,
}

impl ScriptedCards {
    /// Create a scripted source.
    ///
    /// Panics if `commands` is empty.
    #[must_use]
    pub fn new(commands: impl Into<Vec<Command>>) -> Self {
        let commands = commands.into();
        assert!(!commands.is_empty(), "Scripted card source needs at least one command");
        Self { commands, next: 0 }
    }
}

impl CardSource for ScriptedCards {
    fn next_card(&mut self) -> CommandCard {
        let command = self.commands[self.next];
        self.next = (self.next + 1) % self.commands.len();
        CommandCard::new(command)
    }
}

impl<S: CardSource + ?Sized> CardSource for &mut S {
    fn next_card(&mut self) -> CommandCard {
        (**self).next_card()
    }
}
