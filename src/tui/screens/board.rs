//! Board screen - the 3x3 grid, the turn line and the result dialog.
//!
//! The screen owns the [`Game`]; everything drawn here is a projection of
//! it. Cell rectangles from the last render are kept in an array indexed
//! like the board so clicks map straight back to positions.
//!
//! Computer moves and the result dialog are paced: they are scheduled as
//! deadlines and fired by [`Screen::tick`], so all state changes happen on
//! the caller's loop.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use noughts_core::{Game, Mode, MoveReport, Position, RandomOpponent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

use crate::tui::input::{hit_test, move_cursor};
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::ui::{draw_board, draw_dialog, draw_help, draw_title};

/// Something waiting for its display delay to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// The computer answers at `due`.
    ComputerMove {
        /// When the move is played.
        due: Instant,
    },
    /// The result dialog opens at `due`.
    Announce {
        /// When the dialog opens.
        due: Instant,
    },
}

impl Pending {
    fn due(self) -> Instant {
        match self {
            Pending::ComputerMove { due } | Pending::Announce { due } => due,
        }
    }
}

/// State for the board screen.
#[derive(Debug)]
pub struct BoardScreen {
    game: Game,
    opponent: RandomOpponent,
    delay: Duration,
    cursor: Position,
    pending: Option<Pending>,
    dialog: Option<String>,
    cell_areas: [Rect; 9],
}

impl BoardScreen {
    /// Creates a board screen with no mode picked yet.
    #[instrument(skip(opponent))]
    pub fn new(opponent: RandomOpponent, delay: Duration) -> Self {
        Self {
            game: Game::new(),
            opponent,
            delay,
            cursor: Position::Center,
            pending: None,
            dialog: None,
            cell_areas: [Rect::default(); 9],
        }
    }

    /// The authoritative game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Scheduled computer move or dialog, if any.
    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Message of the open result dialog, if any.
    pub fn dialog(&self) -> Option<&str> {
        self.dialog.as_deref()
    }

    /// Where each cell was last drawn, indexed like the board.
    pub fn cell_areas(&self) -> &[Rect; 9] {
        &self.cell_areas
    }

    /// Starts a round in `mode`, dropping anything still scheduled.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: Mode) {
        self.game.start(mode);
        self.pending = None;
        self.dialog = None;
        self.cursor = Position::Center;
    }

    /// Clears the board for another round in the same mode.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset();
        self.pending = None;
        self.dialog = None;
        self.cursor = Position::Center;
    }

    /// Returns true if a human click or key may place a mark right now.
    pub fn accepts_input(&self) -> bool {
        self.dialog.is_none()
            && self.pending.is_none()
            && self.game.is_in_progress()
            && !self.game.is_computer_turn()
    }

    /// Plays `pos` for the human whose turn it is.
    #[instrument(skip(self, now))]
    pub fn play(&mut self, pos: Position, now: Instant) -> MoveReport {
        if !self.accepts_input() {
            debug!("Input locked, ignoring");
            return MoveReport::Ignored;
        }
        self.cursor = pos;
        let report = self.game.attempt_move(pos);
        self.schedule(report, now);
        report
    }

    fn schedule(&mut self, report: MoveReport, now: Instant) {
        match report {
            MoveReport::ComputerToMove => {
                self.pending = Some(Pending::ComputerMove {
                    due: now + self.delay,
                });
            }
            MoveReport::Finished(_) => {
                self.pending = Some(Pending::Announce {
                    due: now + self.delay,
                });
            }
            MoveReport::Continue | MoveReport::Ignored => self.pending = None,
        }
    }

    /// Closes the result dialog and starts the next round.
    #[instrument(skip(self))]
    pub fn dismiss_dialog(&mut self) {
        if self.dialog.take().is_some() {
            info!("Result dialog dismissed");
            self.reset();
        }
    }

    fn status_line(&self) -> String {
        if let Some(message) = &self.dialog {
            return message.clone();
        }
        match self.pending {
            Some(Pending::ComputerMove { .. }) => return "Computer is thinking...".to_string(),
            Some(Pending::Announce { .. }) => return "Game over".to_string(),
            None => {}
        }
        let turn = *self.game.turn();
        match self.game.mode() {
            Some(Mode::Computer) => format!("Your turn ({turn})"),
            Some(Mode::Friend) => format!("Player {turn}'s turn"),
            None => "Pick a mode to start".to_string(),
        }
    }
}

impl Screen for BoardScreen {
    #[instrument(skip_all)]
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(9),
                Constraint::Length(3),
            ])
            .split(area);

        draw_title(frame, chunks[0]);

        let mode = self.game.mode().map(Mode::label).unwrap_or("No mode");
        let status = Paragraph::new(self.status_line())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(mode));
        frame.render_widget(status, chunks[1]);

        let enabled = self.accepts_input();
        let cursor = enabled.then_some(self.cursor);
        self.cell_areas = draw_board(frame, chunks[2], self.game.board(), cursor, enabled);

        draw_help(
            frame,
            chunks[3],
            "Click/1-9/Enter: Move | Arrows: Cursor | R: Restart | M: Modes | Q: Quit",
        );

        if let Some(message) = &self.dialog {
            draw_dialog(frame, area, "Game Over", message);
        }
    }

    #[instrument(skip(self, now))]
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> ScreenTransition {
        if self.dialog.is_some() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                    self.dismiss_dialog();
                    ScreenTransition::Stay
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
                _ => ScreenTransition::Stay,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play(self.cursor, now);
                ScreenTransition::Stay
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = Position::from_digit(c) {
                    self.play(pos, now);
                }
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reset();
                ScreenTransition::Stay
            }
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => {
                ScreenTransition::GoToModeSelect
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(skip(self, now))]
    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> ScreenTransition {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return ScreenTransition::Stay;
        }
        if self.dialog.is_some() {
            self.dismiss_dialog();
            return ScreenTransition::Stay;
        }
        match hit_test(&self.cell_areas, mouse.column, mouse.row) {
            Some(pos) => {
                self.play(pos, now);
            }
            None => debug!(column = mouse.column, row = mouse.row, "Click outside the grid"),
        }
        ScreenTransition::Stay
    }

    #[instrument(skip_all)]
    fn tick(&mut self, now: Instant) -> ScreenTransition {
        let Some(pending) = self.pending else {
            return ScreenTransition::Stay;
        };
        if now < pending.due() {
            return ScreenTransition::Stay;
        }
        self.pending = None;

        match pending {
            Pending::ComputerMove { .. } => {
                let report = self.game.play_computer_move(&mut self.opponent);
                self.schedule(report, now);
            }
            Pending::Announce { .. } => {
                if let Some(outcome) = self.game.outcome() {
                    info!(
                        winner = ?outcome.winner(),
                        draw = outcome.is_draw(),
                        "Announcing result"
                    );
                }
                self.dialog = self.game.message();
            }
        }
        ScreenTransition::Stay
    }
}
