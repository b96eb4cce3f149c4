//! Phase/turn state machine and command execution.
//!
//! ## Phases
//!
//! - `start_programming_phase`: clear every program register, deal a
//!   fresh hand to every player. The only place new cards enter play.
//! - `finish_programming_phase`: hide programs, reveal register 0, enter
//!   activation at step 0 with the first player.
//! - `execute_programs` / `execute_step`: drive activation either to the
//!   end of the phase or by a single player-register step.
//!
//! ## Activation order
//!
//! Round-robin by register: every player executes register `k` in roster
//! order before anyone executes register `k + 1`. After the last register
//! the controller re-enters programming on its own.
//!
//! ## Move counter
//!
//! Incremented once per executed command (including commands whose
//! movement is blocked or undefined) and once per successful voluntary
//! relocation. Movement performed by a command is not counted again.
//!
//! ## Misuse
//!
//! Stepping while not in activation, or without a current player, means
//! the state machine was driven incorrectly and panics. Gameplay no-ops
//! (blocked moves, occupied slots, unknown commands, foreign players)
//! leave state unchanged and are only traced.

use tracing::{debug, instrument, trace};

use crate::cards::{CardSource, Command, RandomCards};
use crate::core::{Board, Heading, Phase, PlayerId, RegisterSlot, SlotRef, Space};

/// Drives a `Board` through programming and activation.
///
/// The controller owns only the card source; the board is passed into
/// every operation so callers keep full ownership of game state.
///
/// ```
/// use robo_rally::{Board, BoardConfig, GameController, Heading, Phase, Position};
///
/// let mut board = Board::new(
///     BoardConfig::default(),
///     [("Red", Position::new(2, 2), Heading::North)],
/// )
/// .unwrap();
/// let mut game = GameController::with_seed(42);
///
/// game.start_programming_phase(&mut board);
/// assert_eq!(board.phase(), Phase::Programming);
///
/// game.finish_programming_phase(&mut board);
/// game.execute_programs(&mut board);
/// assert_eq!(board.phase(), Phase::Programming);
/// ```
#[derive(Clone, Debug)]
pub struct GameController<S = RandomCards> {
    cards: S,
}

impl GameController<RandomCards> {
    /// Controller dealing uniformly random cards from the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(RandomCards::new(seed))
    }
}

impl<S: CardSource> GameController<S> {
    /// Create a controller dealing cards from `cards`.
    pub fn new(cards: S) -> Self {
        Self { cards }
    }

    // === Relocation ===

    /// Move the current player onto `space` if it is free.
    ///
    /// On success the move counter is incremented and the turn passes to
    /// the next player in the roster, wrapping to the first. An occupied
    /// target leaves everything unchanged. `heading` is the direction of
    /// travel and does not change the player's facing.
    #[instrument(skip(self, board))]
    pub fn move_current_player_to_space(&self, board: &mut Board, space: Space, heading: Heading) {
        let Some(current) = board.current_player() else {
            trace!("no current player, relocation ignored");
            return;
        };
        if !board.place_player(current, space) {
            trace!(player = %current, "target space occupied, relocation ignored");
            return;
        }
        board.increment_move_counter();
        let next = board.next_player(current).unwrap_or(PlayerId::new(0));
        board.set_current_player(next);
    }

    // === Programming Phase ===

    /// Enter the programming phase and deal new hands.
    #[instrument(skip_all)]
    pub fn start_programming_phase(&mut self, board: &mut Board) {
        board.set_phase(Phase::Programming);
        board.set_current_player(PlayerId::new(0));
        board.set_step(0);

        for player in board.players_mut() {
            for slot in player.program_slots_mut() {
                slot.set_card(None);
                slot.set_visible(true);
            }
            for slot in player.card_slots_mut() {
                slot.set_card(Some(self.cards.next_card()));
                slot.set_visible(true);
            }
        }

        debug!(status = %board.status(), "programming phase started");
    }

    /// Leave programming and prepare the first activation step.
    ///
    /// Players are expected to have filled their program registers.
    #[instrument(skip_all)]
    pub fn finish_programming_phase(&mut self, board: &mut Board) {
        hide_program_registers(board);
        show_program_register(board, 0);
        board.set_phase(Phase::Activation);
        board.set_current_player(PlayerId::new(0));
        board.set_step(0);

        debug!(status = %board.status(), "activation phase started");
    }

    // === Activation Phase ===

    /// Run every remaining register step until programming starts again.
    #[instrument(skip_all)]
    pub fn execute_programs(&mut self, board: &mut Board) {
        board.set_step_mode(false);
        self.continue_programs(board);
    }

    /// Run exactly one player's command for the current register.
    #[instrument(skip_all)]
    pub fn execute_step(&mut self, board: &mut Board) {
        board.set_step_mode(true);
        self.continue_programs(board);
    }

    fn continue_programs(&mut self, board: &mut Board) {
        loop {
            self.execute_next_step(board);
            if board.phase() != Phase::Activation || board.is_step_mode() {
                break;
            }
        }
    }

    fn execute_next_step(&mut self, board: &mut Board) {
        assert!(
            board.phase() == Phase::Activation,
            "Next step requires the activation phase, board is in {}",
            board.phase()
        );
        let Some(current) = board.current_player() else {
            panic!("Next step requires a current player");
        };
        let step = board.step();
        assert!(
            step < board.register_count(),
            "Step {step} is past the last register ({})",
            board.register_count()
        );

        let card = board.player(current).and_then(|p| p.program(step).card());
        if let Some(card) = card {
            self.execute_command(board, current, card.command());
        }

        match board.next_player(current) {
            Some(next) => board.set_current_player(next),
            None => {
                let step = step + 1;
                if step < board.register_count() {
                    show_program_register(board, step);
                    board.set_step(step);
                    board.set_current_player(PlayerId::new(0));
                    trace!(step, "advanced to next register");
                } else {
                    self.start_programming_phase(board);
                }
            }
        }
    }

    // === Commands ===

    /// Execute `command` for `player`.
    ///
    /// Players outside the board's roster are ignored. Otherwise the move
    /// counter is incremented once before dispatching, whether or not the
    /// command ends up moving anything.
    #[instrument(skip(self, board))]
    pub fn execute_command(&self, board: &mut Board, player: PlayerId, command: Command) {
        if !board.contains(player) {
            trace!("player not on this board, command ignored");
            return;
        }
        board.increment_move_counter();

        match command {
            Command::Forward => {
                let heading = board.player(player).map(|p| p.heading);
                if let Some(heading) = heading {
                    self.move_forward(board, player, heading);
                }
            }
            Command::Right => self.turn_right(board, player),
            Command::Left => self.turn_left(board, player),
            Command::FastForward => self.fast_forward(board, player),
            _ => trace!("command has no movement semantics"),
        }
    }

    /// Move `player` one space towards `heading`, unless that space is taken.
    pub fn move_forward(&self, board: &mut Board, player: PlayerId, heading: Heading) {
        let Some(source) = board.player(player).map(|p| p.position()) else {
            return;
        };
        let destination = board.neighbour(source, heading);
        if !board.place_player(player, destination) {
            trace!(player = %player, %destination, "blocked");
        }
    }

    /// Two forward moves along the player's heading.
    ///
    /// A blocked first move blocks the second as well.
    pub fn fast_forward(&self, board: &mut Board, player: PlayerId) {
        let Some(heading) = board.player(player).map(|p| p.heading) else {
            return;
        };
        self.move_forward(board, player, heading);
        self.move_forward(board, player, heading);
    }

    pub fn turn_right(&self, board: &mut Board, player: PlayerId) {
        if let Some(p) = board.player_mut(player) {
            p.heading = p.heading.turn_right();
        }
    }

    pub fn turn_left(&self, board: &mut Board, player: PlayerId) {
        if let Some(p) = board.player_mut(player) {
            p.heading = p.heading.turn_left();
        }
    }

    // === Card Transfer ===

    /// Move a card from `source` into an empty `target`.
    ///
    /// Returns `false` and leaves both slots untouched if `source` is
    /// empty or `target` already holds a card.
    pub fn move_cards(&self, source: &mut RegisterSlot, target: &mut RegisterSlot) -> bool {
        if !source.has_card() || target.has_card() {
            return false;
        }
        target.set_card(source.take_card());
        true
    }

    /// `move_cards` between two slots of one player on `board`.
    ///
    /// Unknown players, out-of-range slots and `source == target` all
    /// report `false`.
    pub fn move_player_cards(
        &self,
        board: &mut Board,
        player: PlayerId,
        source: SlotRef,
        target: SlotRef,
    ) -> bool {
        board
            .player_mut(player)
            .and_then(|p| p.slot_pair_mut(source, target))
            .is_some_and(|(src, dst)| self.move_cards(src, dst))
    }
}

fn hide_program_registers(board: &mut Board) {
    for player in board.players_mut() {
        for slot in player.program_slots_mut() {
            slot.set_visible(false);
        }
    }
}

fn show_program_register(board: &mut Board, register: usize) {
    for player in board.players_mut() {
        if let Some(slot) = player.program_slots_mut().get_mut(register) {
            slot.set_visible(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CommandCard, ScriptedCards};
    use crate::core::{BoardConfig, Position};

    fn two_player_board() -> Board {
        Board::new(
            BoardConfig::new("test").with_size(6, 6).with_registers(3).with_cards(4),
            [
                ("Red", Position::new(1, 3), Heading::North),
                ("Blue", Position::new(4, 3), Heading::North),
            ],
        )
        .unwrap()
    }

    fn program(board: &mut Board, player: u8, commands: &[Command]) {
        let p = board.player_mut(PlayerId::new(player)).unwrap();
        for (i, c) in commands.iter().enumerate() {
            p.program_mut(i).set_card(Some(CommandCard::new(*c)));
        }
    }

    #[test]
    fn test_start_programming_phase_resets_registers() {
        let mut board = two_player_board();
        let mut game = GameController::new(ScriptedCards::new([Command::Left]));
        program(&mut board, 0, &[Command::Forward]);
        board.player_mut(PlayerId::new(1)).unwrap().program_mut(2).set_visible(false);

        game.start_programming_phase(&mut board);

        assert_eq!(board.phase(), Phase::Programming);
        assert_eq!(board.current_player(), Some(PlayerId::new(0)));
        assert_eq!(board.step(), 0);
        for (_, p) in board.players() {
            assert!(p.program_slots().iter().all(|s| !s.has_card() && s.is_visible()));
            assert!(p
                .card_slots()
                .iter()
                .all(|s| s.card() == Some(CommandCard::new(Command::Left)) && s.is_visible()));
        }
    }

    #[test]
    fn test_finish_programming_phase_reveals_first_register() {
        let mut board = two_player_board();
        let mut game = GameController::with_seed(1);
        game.start_programming_phase(&mut board);
        game.finish_programming_phase(&mut board);

        assert_eq!(board.phase(), Phase::Activation);
        assert_eq!(board.current_player(), Some(PlayerId::new(0)));
        assert_eq!(board.step(), 0);
        for (_, p) in board.players() {
            let visible: Vec<_> = p.program_slots().iter().map(RegisterSlot::is_visible).collect();
            assert_eq!(visible, vec![true, false, false]);
        }
    }

    #[test]
    fn test_single_step_advances_one_player() {
        let mut board = two_player_board();
        let mut game = GameController::with_seed(1);
        game.finish_programming_phase(&mut board);
        program(&mut board, 0, &[Command::Right]);

        game.execute_step(&mut board);

        assert!(board.is_step_mode());
        assert_eq!(board.phase(), Phase::Activation);
        assert_eq!(board.step(), 0);
        assert_eq!(board.current_player(), Some(PlayerId::new(1)));
        assert_eq!(board.player(PlayerId::new(0)).unwrap().heading, Heading::East);
    }

    #[test]
    fn test_step_past_last_player_reveals_next_register() {
        let mut board = two_player_board();
        let mut game = GameController::with_seed(1);
        game.finish_programming_phase(&mut board);

        game.execute_step(&mut board);
        game.execute_step(&mut board);

        assert_eq!(board.step(), 1);
        assert_eq!(board.current_player(), Some(PlayerId::new(0)));
        for (_, p) in board.players() {
            assert!(p.program(1).is_visible());
            assert!(!p.program(2).is_visible());
        }
    }

    #[test]
    fn test_empty_registers_do_not_count_moves() {
        let mut board = two_player_board();
        let mut game = GameController::with_seed(1);
        game.finish_programming_phase(&mut board);
        game.execute_programs(&mut board);

        assert_eq!(board.move_counter(), 0);
        assert_eq!(board.phase(), Phase::Programming);
    }

    #[test]
    #[should_panic(expected = "activation phase")]
    fn test_step_outside_activation_panics() {
        let mut board = two_player_board();
        let mut game = GameController::with_seed(1);
        game.start_programming_phase(&mut board);
        game.execute_step(&mut board);
    }

    #[test]
    fn test_execute_command_dispatch() {
        let mut board = two_player_board();
        let game = GameController::with_seed(1);
        let red = PlayerId::new(0);

        game.execute_command(&mut board, red, Command::Forward);
        assert_eq!(board.player(red).unwrap().position(), Position::new(1, 2));

        game.execute_command(&mut board, red, Command::Left);
        assert_eq!(board.player(red).unwrap().heading, Heading::West);

        game.execute_command(&mut board, red, Command::FastForward);
        assert_eq!(board.player(red).unwrap().position(), Position::new(5, 2));

        game.execute_command(&mut board, red, Command::OptionLeftRight);
        assert_eq!(board.player(red).unwrap().heading, Heading::West);

        assert_eq!(board.move_counter(), 4);
    }

    #[test]
    fn test_execute_command_ignores_foreign_player() {
        let mut board = two_player_board();
        let game = GameController::with_seed(1);

        game.execute_command(&mut board, PlayerId::new(7), Command::Forward);

        assert_eq!(board.move_counter(), 0);
    }

    #[test]
    fn test_forward_into_occupied_space_is_blocked_but_counted() {
        let mut board = Board::new(
            BoardConfig::default(),
            [
                ("Red", Position::new(2, 2), Heading::East),
                ("Blue", Position::new(3, 2), Heading::North),
            ],
        )
        .unwrap();
        let game = GameController::with_seed(1);

        game.execute_command(&mut board, PlayerId::new(0), Command::FastForward);

        assert_eq!(board.player(PlayerId::new(0)).unwrap().position(), Position::new(2, 2));
        assert_eq!(board.move_counter(), 1);
    }

    #[test]
    fn test_forward_does_not_advance_turn() {
        let mut board = two_player_board();
        let game = GameController::with_seed(1);

        game.execute_command(&mut board, PlayerId::new(0), Command::Forward);

        assert_eq!(board.current_player(), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_relocation_advances_turn_and_wraps() {
        let mut board = two_player_board();
        let game = GameController::with_seed(1);

        game.move_current_player_to_space(&mut board, Position::new(0, 0), Heading::North);
        assert_eq!(board.player(PlayerId::new(0)).unwrap().position(), Position::new(0, 0));
        assert_eq!(board.current_player(), Some(PlayerId::new(1)));

        game.move_current_player_to_space(&mut board, Position::new(5, 5), Heading::South);
        assert_eq!(board.current_player(), Some(PlayerId::new(0)));
        assert_eq!(board.move_counter(), 2);
    }

    #[test]
    fn test_relocation_into_occupied_space_is_noop() {
        let mut board = two_player_board();
        let game = GameController::with_seed(1);

        game.move_current_player_to_space(&mut board, Position::new(4, 3), Heading::East);

        assert_eq!(board.player(PlayerId::new(0)).unwrap().position(), Position::new(1, 3));
        assert_eq!(board.current_player(), Some(PlayerId::new(0)));
        assert_eq!(board.move_counter(), 0);
    }

    #[test]
    fn test_move_cards() {
        let game = GameController::with_seed(1);
        let mut source = RegisterSlot::empty();
        let mut target = RegisterSlot::empty();

        assert!(!game.move_cards(&mut source, &mut target));

        source.set_card(Some(CommandCard::new(Command::Right)));
        assert!(game.move_cards(&mut source, &mut target));
        assert!(!source.has_card());
        assert_eq!(target.card(), Some(CommandCard::new(Command::Right)));

        source.set_card(Some(CommandCard::new(Command::Left)));
        assert!(!game.move_cards(&mut source, &mut target));
        assert_eq!(source.card(), Some(CommandCard::new(Command::Left)));
        assert_eq!(target.card(), Some(CommandCard::new(Command::Right)));
    }

    #[test]
    fn test_move_player_cards() {
        let mut board = two_player_board();
        let mut game = GameController::new(ScriptedCards::new([Command::Forward, Command::Right]));
        game.start_programming_phase(&mut board);
        let red = PlayerId::new(0);

        assert!(game.move_player_cards(&mut board, red, SlotRef::Card(1), SlotRef::Program(0)));
        assert_eq!(
            board.player(red).unwrap().program(0).card(),
            Some(CommandCard::new(Command::Right))
        );
        assert!(!board.player(red).unwrap().card(1).has_card());

        assert!(!game.move_player_cards(&mut board, red, SlotRef::Card(0), SlotRef::Program(0)));
        assert!(!game.move_player_cards(&mut board, red, SlotRef::Card(0), SlotRef::Card(0)));
        let stranger = PlayerId::new(9);
        let (card, program) = (SlotRef::Card(0), SlotRef::Program(1));
        assert!(!game.move_player_cards(&mut board, stranger, card, program));
    }
}
