//! The shared game board.
//!
//! ## Spaces
//!
//! A space is identified by its grid `Position`. The board answers the
//! two questions the engine asks about spaces: who (if anyone) stands on
//! it, and which space lies next to it in a given direction. Edges wrap
//! around, so every space has a neighbour in every direction.
//!
//! ## Board
//!
//! Owns the roster and all turn bookkeeping: current player, move
//! counter, phase, register step and step mode. Only the controller
//! advances phases, steps and the current player; everything else is
//! read-only from outside the crate.
//!
//! The occupancy index maps positions to players and is kept in sync
//! with each player's position, so "space is free" is a single lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::config::{BoardConfig, Phase};
use super::error::BoardError;
use super::heading::Heading;
use super::player::{Player, PlayerId};

/// Grid coordinates of a space. `(0, 0)` is the north-west corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Handle for a board cell. Spaces carry no data beyond their position;
/// occupancy and neighbours are answered by the `Board`.
pub type Space = Position;

/// Game board: grid, roster and turn state.
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    players: Vec<Player>,
    current: Option<PlayerId>,
    move_counter: u64,
    phase: Phase,
    step: usize,
    step_mode: bool,
    occupancy: FxHashMap<Position, PlayerId>,
}

impl Board {
    /// Build a board and place its roster.
    ///
    /// Each placement is `(name, position, heading)`; roster order is the
    /// order given. The roster is fixed for the lifetime of the board.
    ///
    /// ```
    /// use robo_rally::core::{Board, BoardConfig, Heading, Phase, Position};
    ///
    /// let board = Board::new(
    ///     BoardConfig::default(),
    ///     [
    ///         ("Red", Position::new(0, 0), Heading::East),
    ///         ("Blue", Position::new(7, 7), Heading::West),
    ///     ],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(board.player_count(), 2);
    /// assert_eq!(board.phase(), Phase::Initialisation);
    /// assert!(!board.is_free(Position::new(0, 0)));
    /// ```
    pub fn new<N, I>(config: BoardConfig, placements: I) -> Result<Self, BoardError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Position, Heading)>,
    {
        if config.width == 0 || config.height == 0 {
            return Err(BoardError::EmptyGrid {
                width: config.width,
                height: config.height,
            });
        }
        if config.registers == 0 || config.cards == 0 {
            return Err(BoardError::NoRegisters);
        }

        let mut players = Vec::new();
        let mut occupancy = FxHashMap::default();

        for (name, position, heading) in placements {
            if players.len() >= usize::from(u8::MAX) {
                return Err(BoardError::TooManyPlayers(players.len() + 1));
            }
            if position.x >= config.width || position.y >= config.height {
                return Err(BoardError::OutOfBounds(position));
            }
            let id = PlayerId::new(players.len() as u8);
            if occupancy.insert(position, id).is_some() {
                return Err(BoardError::SpaceOccupied(position));
            }
            players.push(Player::new(name, position, heading, config.registers, config.cards));
        }

        if players.is_empty() {
            return Err(BoardError::NoPlayers);
        }

        Ok(Self {
            config,
            current: Some(PlayerId::new(0)),
            players,
            move_counter: 0,
            phase: Phase::default(),
            step: 0,
            step_mode: false,
            occupancy,
        })
    }

    // === Geometry ===

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.config.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.config.height
    }

    /// The space at `(x, y)`, or `None` if outside the grid.
    #[must_use]
    pub fn space(&self, x: u16, y: u16) -> Option<Space> {
        (x < self.config.width && y < self.config.height).then_some(Position::new(x, y))
    }

    /// The space one step from `position` in direction `heading`.
    ///
    /// Wraps around at the edges of the board.
    #[must_use]
    pub fn neighbour(&self, position: Space, heading: Heading) -> Space {
        let (dx, dy) = heading.offset();
        let width = i32::from(self.config.width);
        let height = i32::from(self.config.height);
        let x = (i32::from(position.x) + dx).rem_euclid(width);
        let y = (i32::from(position.y) + dy).rem_euclid(height);
        // Both results lie in 0..u16::MAX by construction.
        Position::new(x as u16, y as u16)
    }

    /// True if no player stands on `position`.
    #[must_use]
    pub fn is_free(&self, position: Position) -> bool {
        !self.occupancy.contains_key(&position)
    }

    /// The player standing on `position`, if any.
    #[must_use]
    pub fn occupant(&self, position: Position) -> Option<PlayerId> {
        self.occupancy.get(&position).copied()
    }

    // === Roster ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Iterate over all player IDs in roster order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.players.len())
    }

    /// Iterate over (PlayerId, &Player) pairs in roster order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.player_ids().zip(self.players.iter())
    }

    /// True if `player` belongs to this board's roster.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.players.len()
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player.index())
    }

    /// Mutable access for register and heading changes.
    ///
    /// Positions can only change through the controller.
    pub fn player_mut(&mut self, player: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(player.index())
    }

    pub(crate) fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Move `player` onto `target` if it is free.
    ///
    /// Returns `false` and changes nothing when the space is occupied
    /// (including by `player` itself) or outside the grid.
    pub(crate) fn place_player(&mut self, player: PlayerId, target: Position) -> bool {
        if self.space(target.x, target.y).is_none() || !self.is_free(target) {
            return false;
        }
        let Some(p) = self.players.get_mut(player.index()) else {
            return false;
        };
        self.occupancy.remove(&p.position());
        p.set_position(target);
        self.occupancy.insert(target, player);
        true
    }

    // === Turn State ===

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current
    }

    pub(crate) fn set_current_player(&mut self, player: PlayerId) {
        assert!(self.contains(player), "Current player {player} is not on the board");
        self.current = Some(player);
    }

    /// The roster entry after `player`, if any (no wrap-around).
    #[must_use]
    pub fn next_player(&self, player: PlayerId) -> Option<PlayerId> {
        let next = player.index() + 1;
        (next < self.players.len()).then(|| PlayerId::new(next as u8))
    }

    /// Successful relocations plus executed commands, since setup.
    #[must_use]
    pub fn move_counter(&self) -> u64 {
        self.move_counter
    }

    pub(crate) fn increment_move_counter(&mut self) {
        self.move_counter += 1;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Register currently being activated. Only meaningful in `Activation`.
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    pub(crate) fn set_step(&mut self, step: usize) {
        self.step = step;
    }

    /// True if each driving call runs a single register step.
    #[must_use]
    pub fn is_step_mode(&self) -> bool {
        self.step_mode
    }

    pub(crate) fn set_step_mode(&mut self, step_mode: bool) {
        self.step_mode = step_mode;
    }

    /// Number of register steps in an activation phase.
    #[must_use]
    pub fn register_count(&self) -> usize {
        self.config.registers
    }

    /// One-line summary for status bars and logs.
    #[must_use]
    pub fn status(&self) -> String {
        let player = self
            .current
            .and_then(|id| self.player(id))
            .map_or("-", |p| p.name.as_str());
        format!(
            "Phase: {}, Player = {}, Step: {}, Moves: {}",
            self.phase, player, self.step, self.move_counter
        )
    }
}
