//! Game controller: the programming/activation state machine.
//!
//! The controller never owns the board. Every operation takes the
//! `Board` it acts on, and the card source is the only state it keeps.

pub mod game;

pub use game::GameController;
