//! Controller - the state machine driving the screens.

use crossterm::event::{self, Event, KeyEventKind};
use noughts_core::RandomOpponent;
use ratatui::{Terminal, backend::Backend};
use std::time::Instant;
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use crate::AppConfig;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{BoardScreen, ModeSelectScreen};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Showing {
    /// The mode buttons.
    ModeSelect,
    /// The board.
    Board,
}

/// Controller that owns both screens and routes events to the visible one.
///
/// The board screen is kept across visits to the mode screen so the game
/// state machine sees every `start` on the same [`noughts_core::Game`].
#[derive(Debug)]
pub struct Controller {
    mode_select: ModeSelectScreen,
    board: BoardScreen,
    showing: Showing,
}

impl Controller {
    /// Creates a controller from the resolved configuration.
    ///
    /// With a configured mode the round starts immediately.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        let opponent = match config.seed() {
            Some(seed) => RandomOpponent::seeded(*seed),
            None => RandomOpponent::new(),
        };
        let mut controller = Self {
            mode_select: ModeSelectScreen::new(),
            board: BoardScreen::new(opponent, config.computer_delay()),
            showing: Showing::ModeSelect,
        };
        if let Some(mode) = config.mode() {
            controller.apply(ScreenTransition::StartGame(*mode));
        }
        controller
    }

    /// The visible screen.
    pub fn showing(&self) -> Showing {
        self.showing
    }

    /// The board screen, visible or not.
    pub fn board(&self) -> &BoardScreen {
        &self.board
    }

    fn active(&mut self) -> &mut dyn Screen {
        match self.showing {
            Showing::ModeSelect => &mut self.mode_select,
            Showing::Board => &mut self.board,
        }
    }

    /// Applies a screen transition. Returns `false` when the app should quit.
    #[instrument(skip(self))]
    pub fn apply(&mut self, transition: ScreenTransition) -> bool {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::StartGame(mode) => {
                info!(?mode, "Starting game");
                self.board.start(mode);
                self.showing = Showing::Board;
            }
            ScreenTransition::GoToModeSelect => {
                debug!("Back to mode selection");
                self.showing = Showing::ModeSelect;
            }
            ScreenTransition::Quit => return false,
        }
        true
    }

    /// Routes one terminal event to the visible screen.
    #[instrument(skip(self, now))]
    pub fn handle_event(&mut self, event: Event, now: Instant) -> bool {
        let transition = match event {
            // Skip key release events (crossterm fires both press and release on some platforms).
            Event::Key(key) if key.kind == KeyEventKind::Release => ScreenTransition::Stay,
            Event::Key(key) => self.active().handle_key(key, now),
            Event::Mouse(mouse) => self.active().handle_mouse(mouse, now),
            _ => ScreenTransition::Stay,
        };
        self.apply(transition)
    }

    /// Fires scheduled work on the visible screen.
    pub fn tick(&mut self, now: Instant) -> bool {
        let transition = self.active().tick(now);
        self.apply(transition)
    }

    /// Draws the visible screen.
    pub fn render(&mut self, frame: &mut ratatui::Frame) {
        self.active().render(frame);
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip_all)]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        loop {
            terminal.draw(|f| self.render(f))?;

            // Poll for input with short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(50))? {
                let event = event::read()?;
                if !self.handle_event(event, Instant::now()) {
                    info!("Quitting");
                    return Ok(());
                }
            }

            if !self.tick(Instant::now()) {
                return Ok(());
            }

            sleep(Duration::from_millis(10)).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use noughts_core::Mode;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_starts_on_mode_screen() {
        let controller = Controller::new(&AppConfig::default());
        assert_eq!(controller.showing(), Showing::ModeSelect);
        assert!(controller.board().game().mode().is_none());
    }

    #[test]
    fn test_configured_mode_skips_menu() {
        let config = AppConfig::default().with_mode(Some(Mode::Computer));
        let controller = Controller::new(&config);
        assert_eq!(controller.showing(), Showing::Board);
        assert_eq!(*controller.board().game().mode(), Some(Mode::Computer));
    }

    #[test]
    fn test_menu_round_trip_keeps_board_screen() {
        let mut controller = Controller::new(&AppConfig::default());
        let now = Instant::now();

        assert!(controller.handle_event(press(KeyCode::Char('1')), now));
        assert_eq!(controller.showing(), Showing::Board);
        assert!(controller.handle_event(press(KeyCode::Char('5')), now));

        assert!(controller.handle_event(press(KeyCode::Char('m')), now));
        assert_eq!(controller.showing(), Showing::ModeSelect);
        assert_eq!(controller.board().game().history().len(), 1);

        assert!(controller.handle_event(press(KeyCode::Char('2')), now));
        assert_eq!(*controller.board().game().mode(), Some(Mode::Computer));
        assert!(controller.board().game().history().is_empty());
    }

    #[test]
    fn test_quit() {
        let mut controller = Controller::new(&AppConfig::default());
        assert!(!controller.handle_event(press(KeyCode::Char('q')), Instant::now()));
    }
}
