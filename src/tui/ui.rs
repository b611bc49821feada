//! Stateless UI rendering for the hex board.

use dotescape_core::{Board, CellStatus, Coordinate};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;

/// Renders the board with cursor highlight, status and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    // Title
    let title = Paragraph::new("Dot Escape")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.board(), app.cursor());

    // Status
    let status = format!("Moves: {}  |  {}", app.board().move_count(), app.status_message());
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    frame.render_widget(help_line(app), chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Coordinate) {
    let size = u16::try_from(board.size()).unwrap_or(u16::MAX);
    // Two columns per cell plus the half-cell shift of odd rows.
    let board_area = center_rect(area, size.saturating_mul(2).saturating_add(1), size);

    let lines: Vec<Line> = (0..board.size() as i32)
        .map(|row| board_row(board, row, cursor))
        .collect();

    frame.render_widget(Paragraph::new(lines), board_area);
}

fn board_row(board: &Board, row: i32, cursor: Coordinate) -> Line<'static> {
    let mut spans = Vec::with_capacity(board.size() + 1);
    if row % 2 == 1 {
        spans.push(Span::raw(" "));
    }
    for col in 0..board.size() as i32 {
        let coord = Coordinate::new(col, row);
        let status = board.status(coord).unwrap_or_default();
        spans.push(Span::styled(status.symbol().to_string(), cell_style(status, coord == cursor)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn cell_style(status: CellStatus, under_cursor: bool) -> Style {
    let base = match status {
        CellStatus::Free => Style::default().fg(Color::Green),
        CellStatus::Blocked => Style::default().fg(Color::DarkGray),
        CellStatus::Occupied => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    if under_cursor {
        base.bg(Color::White).fg(Color::Black)
    } else {
        base
    }
}

fn help_line(app: &App) -> Paragraph<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let key = |enabled: bool| {
        if enabled {
            Style::default().fg(Color::White)
        } else {
            dim
        }
    };

    Paragraph::new(Line::from(vec![
        Span::styled("arrows move  enter block  ", dim),
        Span::styled("u undo  ", key(app.can_undo())),
        Span::styled("r redo  ", key(app.can_redo())),
        Span::styled("n new  q save & quit", dim),
    ]))
    .alignment(Alignment::Center)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
