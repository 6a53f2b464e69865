//! Turn state machine for a tic-tac-toe round.
//!
//! A [`Game`] owns the authoritative [`Board`]. Presentation code reads
//! snapshots through the accessors and feeds input back through
//! [`Game::start`], [`Game::attempt_move`] and [`Game::reset`]; it never
//! infers state from what it has drawn.

use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

use super::action::{Move, MoveError, MoveReport};
use super::opponent::Opponent;
use super::phases::{Mode, Outcome, Phase};
use super::rules::{has_won, is_draw};
use super::{Board, Mark, Position};

/// A tic-tac-toe round and the mode it is played in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct Game {
    /// The board.
    pub(crate) board: Board,
    /// Mark that moves next.
    pub(crate) turn: Mark,
    /// Mode picked by the player, `None` until the first `start`.
    pub(crate) mode: Option<Mode>,
    /// Where the state machine is.
    pub(crate) phase: Phase,
    /// Moves played this round, oldest first.
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a game waiting for a mode.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a game already started in `mode`.
    #[instrument]
    pub fn with_mode(mode: Mode) -> Self {
        let mut game = Self::new();
        game.start(mode);
        game
    }

    /// Starts a fresh round in `mode`.
    ///
    /// Valid from every phase: picking a mode again mid-round restarts
    /// with the new mode.
    #[instrument(skip(self), fields(previous = ?self.phase))]
    pub fn start(&mut self, mode: Mode) {
        if self.phase == Phase::InProgress {
            warn!(?mode, "Mode picked mid-round, restarting");
        }
        self.mode = Some(mode);
        self.clear();
        info!(?mode, "Round started");
    }

    /// Clears the board for a new round, keeping the mode.
    ///
    /// Does nothing until a mode has been picked.
    #[instrument(skip(self), fields(previous = ?self.phase))]
    pub fn reset(&mut self) {
        if self.mode.is_none() {
            debug!("Reset before any mode was picked, ignoring");
            return;
        }
        self.clear();
        info!("Round reset");
    }

    fn clear(&mut self) {
        self.board = Board::new();
        self.turn = Mark::X;
        self.history.clear();
        self.phase = Phase::InProgress;
    }

    /// Places the current mark at `pos`.
    ///
    /// Refused moves leave the game untouched and come back as
    /// [`MoveReport::Ignored`].
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn attempt_move(&mut self, pos: Position) -> MoveReport {
        match self.try_place(pos) {
            Ok(report) => report,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                MoveReport::Ignored
            }
        }
    }

    /// Same as [`Game::attempt_move`], addressed by zero-based coordinates.
    ///
    /// Out-of-range coordinates are ignored.
    #[instrument(skip(self))]
    pub fn attempt_move_at(&mut self, row: usize, col: usize) -> MoveReport {
        match Position::from_row_col(row, col) {
            Some(pos) => self.attempt_move(pos),
            None => {
                debug!("Coordinates off the board, ignoring");
                MoveReport::Ignored
            }
        }
    }

    /// Places the current mark at `pos`, reporting why a move is refused.
    ///
    /// # Errors
    ///
    /// - [`MoveError::ComputerToMove`] if the computer plays this turn.
    /// - [`MoveError::NotInProgress`] if no round is running.
    /// - [`MoveError::CellOccupied`] if `pos` already holds a mark.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_place(&mut self, pos: Position) -> Result<MoveReport, MoveError> {
        if self.is_computer_turn() {
            return Err(MoveError::ComputerToMove);
        }
        self.place(pos)
    }

    fn place(&mut self, pos: Position) -> Result<MoveReport, MoveError> {
        let Some(mode) = self.mode else {
            return Err(MoveError::NotInProgress);
        };
        if self.phase != Phase::InProgress {
            return Err(MoveError::NotInProgress);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let mark = self.turn;
        let placed = Move::new(mark, pos);
        self.board.place(pos, mark);
        self.history.push(placed);
        debug!(%placed, "Mark placed");

        let report = if has_won(&self.board, mark) {
            self.finish(Outcome::Winner(mark))
        } else if is_draw(&self.board) {
            self.finish(Outcome::Draw)
        } else {
            self.turn = mark.opponent();
            if mode.is_computer(self.turn) {
                MoveReport::ComputerToMove
            } else {
                MoveReport::Continue
            }
        };

        if cfg!(debug_assertions) {
            if let Err(violations) = crate::invariants::check_game(self) {
                let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
                panic!("{} after {placed}", reasons.join("; "));
            }
        }
        Ok(report)
    }

    fn finish(&mut self, outcome: Outcome) -> MoveReport {
        self.phase = Phase::GameOver(outcome);
        info!(?outcome, moves = self.history.len(), "Round finished");
        MoveReport::Finished(outcome)
    }

    /// Lets `opponent` play the computer's mark.
    ///
    /// Ignored unless the round is running in [`Mode::Computer`] and it is
    /// O's turn.
    #[instrument(skip_all, fields(turn = %self.turn))]
    pub fn play_computer_move(&mut self, opponent: &mut impl Opponent) -> MoveReport {
        if !self.is_computer_turn() {
            debug!("Not the computer's turn, ignoring");
            return MoveReport::Ignored;
        }
        match opponent.choose(&self.board) {
            Some(pos) => match self.place(pos) {
                Ok(report) => report,
                Err(e) => {
                    warn!(error = %e, "Opponent chose an unplayable cell");
                    MoveReport::Ignored
                }
            },
            None => {
                warn!("Opponent found no empty cell on a running board");
                MoveReport::Ignored
            }
        }
    }

    /// Returns true while a round is running and the computer is to move.
    pub fn is_computer_turn(&self) -> bool {
        self.phase == Phase::InProgress && self.mode.is_some_and(|m| m.is_computer(self.turn))
    }

    /// Returns true while moves are accepted.
    pub fn is_in_progress(&self) -> bool {
        self.phase == Phase::InProgress
    }

    /// Outcome of the finished round, if it is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// End-of-round announcement, if the round is over.
    pub fn message(&self) -> Option<String> {
        let mode = self.mode?;
        self.outcome().map(|outcome| outcome.message(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut Game, coords: &[(usize, usize)]) -> MoveReport {
        let mut last = MoveReport::Ignored;
        for &(row, col) in coords {
            last = game.attempt_move_at(row, col);
            assert!(last.is_applied(), "move ({row},{col}) refused");
        }
        last
    }

    #[test]
    fn test_new_game_awaits_mode() {
        let mut game = Game::new();
        assert_eq!(game.phase(), &Phase::AwaitingMode);
        assert_eq!(game.attempt_move(Position::Center), MoveReport::Ignored);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_reset_before_mode_is_noop() {
        let mut game = Game::new();
        game.reset();
        assert_eq!(game.phase(), &Phase::AwaitingMode);
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = Game::with_mode(Mode::Friend);
        assert_eq!(*game.turn(), Mark::X);
        assert_eq!(game.attempt_move(Position::Center), MoveReport::Continue);
        assert_eq!(*game.turn(), Mark::O);
        assert_eq!(game.attempt_move(Position::TopLeft), MoveReport::Continue);
        assert_eq!(*game.turn(), Mark::X);
    }

    #[test]
    fn test_occupied_cell_changes_nothing() {
        let mut game = Game::with_mode(Mode::Friend);
        game.attempt_move(Position::Center);
        let before = game.clone();
        assert_eq!(
            game.try_place(Position::Center),
            Err(MoveError::CellOccupied(Position::Center))
        );
        assert_eq!(game.attempt_move(Position::Center), MoveReport::Ignored);
        assert_eq!(game, before);
    }

    #[test]
    fn test_top_row_win() {
        let mut game = Game::with_mode(Mode::Friend);
        let last = play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(last, MoveReport::Finished(Outcome::Winner(Mark::X)));
        assert_eq!(game.message().as_deref(), Some("Player X wins!"));
    }

    #[test]
    fn test_moves_after_game_over_are_ignored() {
        let mut game = Game::with_mode(Mode::Friend);
        play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        let before = game.clone();
        assert_eq!(game.try_place(Position::BottomLeft), Err(MoveError::NotInProgress));
        assert_eq!(game, before);
    }

    #[test]
    fn test_computer_mode_reports_computer_turn() {
        let mut game = Game::with_mode(Mode::Computer);
        assert!(!game.is_computer_turn());
        assert_eq!(game.attempt_move(Position::Center), MoveReport::ComputerToMove);
        assert!(game.is_computer_turn());
    }

    #[test]
    fn test_human_cannot_play_computer_turn() {
        let mut game = Game::with_mode(Mode::Computer);
        game.attempt_move(Position::Center);
        let before = game.clone();

        assert_eq!(game.try_place(Position::TopLeft), Err(MoveError::ComputerToMove));
        assert_eq!(game.attempt_move(Position::TopLeft), MoveReport::Ignored);
        assert_eq!(game.attempt_move_at(2, 2), MoveReport::Ignored);
        assert_eq!(game, before);
    }

    #[test]
    fn test_friend_mode_lets_o_play() {
        let mut game = Game::with_mode(Mode::Friend);
        game.attempt_move(Position::Center);
        assert_eq!(game.try_place(Position::TopLeft), Ok(MoveReport::Continue));
        assert_eq!(game.history()[1].to_string(), "O -> Top-left");
    }

    #[test]
    fn test_start_mid_round_restarts() {
        let mut game = Game::with_mode(Mode::Friend);
        game.attempt_move(Position::Center);
        game.start(Mode::Computer);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(*game.mode(), Some(Mode::Computer));
        assert!(game.history().is_empty());
    }
}
