//! Core engine types: geometry, players, board, configuration, RNG.
//!
//! Everything here is plain owned state. The turn state machine that
//! mutates it lives in `controller`.

pub mod heading;
pub mod config;
pub mod player;
pub mod board;
pub mod rng;
pub mod error;

pub use heading::Heading;
pub use config::{BoardConfig, Phase};
pub use player::{Player, PlayerId, RegisterSlot, Registers, SlotRef};
pub use board::{Board, Position, Space};
pub use rng::{GameRng, GameRngState};
pub use error::BoardError;
