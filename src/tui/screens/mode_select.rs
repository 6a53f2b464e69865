//! Mode selection screen - the two "Play with ..." buttons.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use noughts_core::Mode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::tui::input::contains;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::ui::{center_rect, draw_help, draw_title};

/// Menu entries, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Play(Mode),
    Quit,
}

impl MenuOption {
    const ALL: [MenuOption; 3] = [
        MenuOption::Play(Mode::Friend),
        MenuOption::Play(Mode::Computer),
        MenuOption::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Play(mode) => mode.label(),
            Self::Quit => "Quit",
        }
    }

    fn transition(self) -> ScreenTransition {
        match self {
            Self::Play(mode) => ScreenTransition::StartGame(mode),
            Self::Quit => ScreenTransition::Quit,
        }
    }
}

/// State for the mode selection screen.
#[derive(Debug)]
pub struct ModeSelectScreen {
    list_state: ListState,
    menu_area: Rect,
}

impl Default for ModeSelectScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeSelectScreen {
    /// Creates the screen with the first button selected.
    #[instrument]
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            list_state,
            menu_area: Rect::default(),
        }
    }

    fn select_previous(&mut self) {
        let count = MenuOption::ALL.len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = MenuOption::ALL.len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> MenuOption {
        let idx = self.list_state.selected().unwrap_or(0);
        MenuOption::ALL[idx.min(MenuOption::ALL.len() - 1)]
    }

    /// Index of the highlighted entry.
    pub fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    /// Where the menu was last drawn.
    pub fn menu_area(&self) -> Rect {
        self.menu_area
    }
}

impl Screen for ModeSelectScreen {
    #[instrument(skip_all)]
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(frame.area());

        draw_title(frame, chunks[0]);

        let items: Vec<ListItem> = MenuOption::ALL
            .iter()
            .map(|opt| ListItem::new(opt.label()))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Choose a mode"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        // Borders plus one row per entry.
        let height = MenuOption::ALL.len() as u16 + 2;
        self.menu_area = center_rect(chunks[1], 30, height);
        frame.render_stateful_widget(menu, self.menu_area, &mut self.list_state);

        draw_help(frame, chunks[2], "↑↓: Navigate | Enter/click: Select | 1/2: Mode | q: Quit");
    }

    #[instrument(skip(self, _now))]
    fn handle_key(&mut self, key: KeyEvent, _now: Instant) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let option = self.selected_option();
                info!(?option, "Menu option selected");
                option.transition()
            }
            KeyCode::Char('1') => ScreenTransition::StartGame(Mode::Friend),
            KeyCode::Char('2') => ScreenTransition::StartGame(Mode::Computer),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(skip(self, _now))]
    fn handle_mouse(&mut self, mouse: MouseEvent, _now: Instant) -> ScreenTransition {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return ScreenTransition::Stay;
        }
        // Entries start one row below the top border.
        let area = self.menu_area;
        if !contains(area, mouse.column, mouse.row) || mouse.row == area.y {
            return ScreenTransition::Stay;
        }
        let index = (mouse.row - area.y - 1) as usize;
        match MenuOption::ALL.get(index) {
            Some(option) => {
                self.list_state.select(Some(index));
                info!(?option, "Menu option clicked");
                option.transition()
            }
            None => {
                debug!(index, "Click below the last entry");
                ScreenTransition::Stay
            }
        }
    }
}
