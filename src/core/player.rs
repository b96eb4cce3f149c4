//! Players and their registers.
//!
//! ## PlayerId
//!
//! Roster index of a player on a board (0-based, 1-255 players).
//!
//! ## Registers
//!
//! Each player owns two fixed-size rows of `RegisterSlot`s:
//! - **program**: the commands executed during activation, one per step
//! - **cards**: the hand dealt during programming
//!
//! Slots hold an optional card plus a visibility flag. The engine writes
//! the flag; a presentation layer decides what to do with it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Position;
use super::heading::Heading;
use crate::cards::CommandCard;

/// Player identifier: the player's index in the board roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster of `player_count` players.
    ///
    /// ```
    /// use robo_rally::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        let Ok(count) = u8::try_from(player_count) else {
            panic!("At most 255 players supported, got {player_count}");
        };
        (0..count).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A single register: an optional card and whether it is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterSlot {
    card: Option<CommandCard>,
    visible: bool,
}

impl RegisterSlot {
    /// An empty, visible slot.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            card: None,
            visible: true,
        }
    }

    #[must_use]
    pub const fn card(&self) -> Option<CommandCard> {
        self.card
    }

    pub fn set_card(&mut self, card: Option<CommandCard>) {
        self.card = card;
    }

    /// Remove and return the card, leaving the slot empty.
    pub fn take_card(&mut self) -> Option<CommandCard> {
        self.card.take()
    }

    #[must_use]
    pub const fn has_card(&self) -> bool {
        self.card.is_some()
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// A fixed-length row of register slots.
///
/// Inline storage covers the default hand size without allocating.
pub type Registers = SmallVec<[RegisterSlot; 8]>;

/// Addresses one of a player's slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotRef {
    /// Program register at the given step.
    Program(usize),
    /// Hand slot at the given index.
    Card(usize),
}

/// A player on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,

    position: Position,

    /// Direction the player faces.
    pub heading: Heading,

    program: Registers,

    cards: Registers,
}

impl Player {
    /// Create a player with empty, visible registers.
    ///
    /// Position changes afterwards go through the `Board`, which owns
    /// the occupancy index.
    pub fn new(
        name: impl Into<String>,
        position: Position,
        heading: Heading,
        registers: usize,
        cards: usize,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            heading,
            program: std::iter::repeat(RegisterSlot::empty()).take(registers).collect(),
            cards: std::iter::repeat(RegisterSlot::empty()).take(cards).collect(),
        }
    }

    /// The space this player stands on.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Number of program registers.
    #[must_use]
    pub fn register_count(&self) -> usize {
        self.program.len()
    }

    /// Number of hand slots.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Program register at `step`. Panics if out of range.
    #[must_use]
    pub fn program(&self, step: usize) -> &RegisterSlot {
        &self.program[step]
    }

    pub fn program_mut(&mut self, step: usize) -> &mut RegisterSlot {
        &mut self.program[step]
    }

    /// Hand slot at `index`. Panics if out of range.
    #[must_use]
    pub fn card(&self, index: usize) -> &RegisterSlot {
        &self.cards[index]
    }

    pub fn card_mut(&mut self, index: usize) -> &mut RegisterSlot {
        &mut self.cards[index]
    }

    pub fn program_slots(&self) -> &[RegisterSlot] {
        &self.program
    }

    pub fn program_slots_mut(&mut self) -> &mut [RegisterSlot] {
        &mut self.program
    }

    pub fn card_slots(&self) -> &[RegisterSlot] {
        &self.cards
    }

    pub fn card_slots_mut(&mut self) -> &mut [RegisterSlot] {
        &mut self.cards
    }

    /// Look up a slot by reference, `None` if the index is out of range.
    #[must_use]
    pub fn slot(&self, slot: SlotRef) -> Option<&RegisterSlot> {
        match slot {
            SlotRef::Program(i) => self.program.get(i),
            SlotRef::Card(i) => self.cards.get(i),
        }
    }

    /// Borrow two distinct slots mutably at once.
    ///
    /// Returns `None` if either index is out of range or both refer to
    /// the same slot.
    pub fn slot_pair_mut(
        &mut self,
        a: SlotRef,
        b: SlotRef,
    ) -> Option<(&mut RegisterSlot, &mut RegisterSlot)> {
        match (a, b) {
            (SlotRef::Program(i), SlotRef::Card(j)) => {
                Some((self.program.get_mut(i)?, self.cards.get_mut(j)?))
            }
            (SlotRef::Card(i), SlotRef::Program(j)) => {
                Some((self.cards.get_mut(i)?, self.program.get_mut(j)?))
            }
            (SlotRef::Program(i), SlotRef::Program(j)) => pair_mut(&mut self.program, i, j),
            (SlotRef::Card(i), SlotRef::Card(j)) => pair_mut(&mut self.cards, i, j),
        }
    }
}

fn pair_mut(
    slots: &mut [RegisterSlot],
    i: usize,
    j: usize,
) -> Option<(&mut RegisterSlot, &mut RegisterSlot)> {
    if i == j || i >= slots.len() || j >= slots.len() {
        return None;
    }
    if i < j {
        let (head, tail) = slots.split_at_mut(j);
        Some((&mut head[i], &mut tail[0]))
    } else {
        let (head, tail) = slots.split_at_mut(i);
        Some((&mut tail[0], &mut head[j]))
    }
}
