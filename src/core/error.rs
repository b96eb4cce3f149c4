//! Recoverable setup errors.
//!
//! Gameplay outcomes (blocked moves, occupied registers, unknown commands)
//! are not errors and never appear here. Controller misuse panics.

use thiserror::Error;

use super::board::Position;

/// Errors raised while building a `Board`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board must have at least one player")]
    NoPlayers,
    #[error("at most 255 players supported, got {0}")]
    TooManyPlayers(usize),
    #[error("board dimensions must be non-zero (got {width}x{height})")]
    EmptyGrid { width: u16, height: u16 },
    #[error("players need at least one program register and one card slot")]
    NoRegisters,
    #[error("starting position {0} is outside the board")]
    OutOfBounds(Position),
    #[error("starting position {0} is already occupied")]
    SpaceOccupied(Position),
}
