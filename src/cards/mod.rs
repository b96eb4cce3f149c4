//! Command cards and card generation.
//!
//! ## Key Types
//!
//! - `Command`: A programmable movement command
//! - `CommandCard`: Immutable card carrying one command
//! - `CardSource`: Pluggable policy for dealing new cards
//! - `RandomCards`: Uniform, seeded default policy
//! - `ScriptedCards`: Fixed cycling sequence

pub mod command;
pub mod source;

pub use command::{Command, CommandCard};
pub use source::{CardSource, RandomCards, ScriptedCards};
