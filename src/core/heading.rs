//! Cardinal headings and rotations.
//!
//! Rotations are total functions over the four headings: there is no
//! failure case and no board interaction.
//!
//! ```
//! use robo_rally::core::Heading;
//!
//! assert_eq!(Heading::North.turn_right(), Heading::East);
//! assert_eq!(Heading::North.turn_left(), Heading::West);
//! assert_eq!(Heading::North.reverse(), Heading::South);
//! ```

use serde::{Deserialize, Serialize};

/// The direction a player faces.
///
/// Declared in clockwise order so that a right turn is the next variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    #[default]
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order, starting at north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Rotate 90 degrees clockwise.
    #[must_use]
    pub const fn turn_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Rotate 90 degrees counter-clockwise.
    #[must_use]
    pub const fn turn_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Rotate 180 degrees.
    #[must_use]
    pub const fn reverse(self) -> Self {
        self.turn_right().turn_right()
    }

    /// Grid offset of a single step in this direction.
    ///
    /// `y` grows southwards, so north is `(0, -1)`.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
        };
        f.write_str(name)
    }
}
