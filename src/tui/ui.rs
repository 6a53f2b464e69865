//! Stateless rendering helpers shared by the screens.

use noughts_core::{Board, Cell, Mark, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

/// Renders the "Tic-Tac-Toe" banner.
pub fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// Renders a one-line help bar.
pub fn draw_help(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

/// Renders the 3x3 grid centered in `area`.
///
/// Returns the screen rectangle of every cell, indexed like the board.
/// Filled cells are drawn disabled; `enabled` greys out the whole grid.
pub fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    enabled: bool,
) -> [Rect; 9] {
    let grid = center_rect(area, CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(grid);

    let mut areas = [Rect::default(); 9];
    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            let Some(pos) = Position::from_row_col(row, col) else {
                continue;
            };
            draw_cell(frame, *cell_area, board.get(pos), cursor == Some(pos), enabled);
            areas[pos.to_index()] = *cell_area;
        }
    }
    areas
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, highlighted: bool, enabled: bool) {
    let mark_style = match cell {
        Cell::Empty => Style::default(),
        Cell::Occupied(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::Occupied(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    // Filled cells no longer take input.
    let accepts_input = enabled && cell == Cell::Empty;
    let border_style = if highlighted && enabled {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if accepts_input {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(cell.symbol(), mark_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(paragraph, area);
}

/// Renders a modal dialog over the middle of `area`.
pub fn draw_dialog(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let dialog = center_rect(area, 36, 6);
    frame.render_widget(Clear, dialog);

    let text = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter or click to play again",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(paragraph, dialog);
}

/// Returns a `width` x `height` rectangle centered in `area`, clipped to it.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect() {
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(center_rect(area, 10, 4), Rect::new(15, 8, 10, 4));
    }

    #[test]
    fn test_center_rect_clips_to_area() {
        let area = Rect::new(2, 3, 8, 4);
        let inner = center_rect(area, 20, 10);
        assert_eq!(inner, area);
    }
}
