//! # robo-rally
//!
//! Turn engine for a programming board game: players fill program
//! registers with command cards, then every player's registers are
//! activated one step at a time, moving pieces across a grid.
//!
//! ## Design Principles
//!
//! 1. **Explicit Ownership**: The `Board` aggregate is passed into every
//!    controller operation. There is no shared or global game state.
//!
//! 2. **Deterministic**: Card dealing goes through a pluggable
//!    `CardSource`; the default is seeded, so a seed replays a game.
//!
//! 3. **No-ops Are Not Errors**: Blocked moves, occupied registers and
//!    unknown commands leave state unchanged. Driving the state machine
//!    out of order panics.
//!
//! ## Modules
//!
//! - `core`: Headings, board geometry, players and registers, configuration, RNG
//! - `cards`: Commands, command cards, card sources
//! - `controller`: Phase transitions, activation loop, command execution

pub mod core;
pub mod cards;
pub mod controller;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardConfig, BoardError, GameRng, GameRngState, Heading, Phase, Player, PlayerId,
    Position, RegisterSlot, Registers, SlotRef, Space,
};

pub use crate::cards::{CardSource, Command, CommandCard, RandomCards, ScriptedCards};

pub use crate::controller::GameController;
