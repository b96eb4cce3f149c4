//! Board configuration and game phases.
//!
//! Games configure the board at startup by providing a `BoardConfig`:
//! grid dimensions, how many program registers each player has, and how
//! many command cards are dealt per programming phase.
//!
//! Every field has a default, so partial configs deserialize cleanly:
//!
//! ```
//! use robo_rally::core::BoardConfig;
//!
//! let config = BoardConfig::new("arena").with_size(10, 6).with_registers(3);
//! assert_eq!(config.width, 10);
//! assert_eq!(config.registers, 3);
//! assert_eq!(config.cards, BoardConfig::DEFAULT_CARDS);
//! ```

use serde::{Deserialize, Serialize};

/// Phase of the game.
///
/// Play cycles `Programming -> Activation -> Programming`; only the
/// controller moves between phases. `Initialisation` is the phase of a
/// freshly built board before the first programming phase starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Initialisation,
    Programming,
    Activation,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Initialisation => "INITIALISATION",
            Phase::Programming => "PROGRAMMING",
            Phase::Activation => "ACTIVATION",
        };
        f.write_str(name)
    }
}

/// Board and register configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Human-readable board name (for status lines and debugging).
    pub name: String,

    /// Number of columns.
    pub width: u16,

    /// Number of rows.
    pub height: u16,

    /// Program registers per player (register steps per activation phase).
    pub registers: usize,

    /// Command cards dealt to each player per programming phase.
    pub cards: usize,
}

impl BoardConfig {
    pub const DEFAULT_WIDTH: u16 = 8;
    pub const DEFAULT_HEIGHT: u16 = 8;
    pub const DEFAULT_REGISTERS: usize = 5;
    pub const DEFAULT_CARDS: usize = 8;

    /// Create a default-sized configuration with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the grid dimensions.
    #[must_use]
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the number of program registers per player.
    #[must_use]
    pub fn with_registers(mut self, registers: usize) -> Self {
        self.registers = registers;
        self
    }

    /// Set the number of cards dealt per programming phase.
    #[must_use]
    pub fn with_cards(mut self, cards: usize) -> Self {
        self.cards = cards;
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            registers: Self::DEFAULT_REGISTERS,
            cards: Self::DEFAULT_CARDS,
        }
    }
}
