//! Stateless UI rendering for the rewind front end.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_tictactoe::view::{self, MoveListItem};
use rewind_tictactoe::{Board, Player, Position, Square};

const HELP: &str =
    "1-9/arrows+Enter: play   [ ]: step   Home/End: first/latest   s: sort   r: restart   q: quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and move list
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(42), Constraint::Length(34)])
        .split(chunks[1]);

    draw_board(frame, body[0], app.engine().current_board(), app.cursor());
    draw_move_list(frame, body[1], &app.move_list(), app.sort_order().label());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, 40, 11);
    let highlight = view::highlighted_cells(board);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, cursor, &highlight, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    highlight: &[bool; 9],
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], board, pos, pos == cursor, highlight[pos.to_index()]);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    pos: Position,
    is_cursor: bool,
    is_winning: bool,
) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    // The winning background wins over the cursor background.
    let mut style = if is_winning {
        base_style.bg(Color::Green)
    } else if is_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };
    if is_cursor {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_move_list(frame: &mut Frame, area: Rect, items: &[MoveListItem], order: &str) {
    let lines: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let (marker, style) = if item.is_current {
                ("> ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default())
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", marker, item.description),
                style,
            )))
        })
        .collect();

    let list = List::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Moves ({})", order)),
    );
    frame.render_widget(list, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use rewind_tictactoe::SortOrder;

    fn render_buffer(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn render(app: &App) -> String {
        let buffer = render_buffer(app);
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_status_and_moves() {
        let mut app = App::new(SortOrder::Ascend);
        app.handle_key(KeyCode::Char('5'));
        let screen = render(&app);

        assert!(screen.contains("Next player: O"));
        assert!(screen.contains("Moves (ascend)"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("> Go to move #1 (1, 1)"));
    }

    #[test]
    fn test_renders_winner() {
        let mut app = App::new(SortOrder::Descend);
        for c in "14253".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Moves (descend)"));
    }

    #[test]
    fn test_winning_line_fully_highlighted_under_cursor() {
        let mut app = App::new(SortOrder::Ascend);
        for c in "14253".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        assert_eq!(app.cursor(), Position::TopRight);

        let buffer = render_buffer(&app);
        let marks = |glyph: &str| {
            buffer
                .content
                .iter()
                .filter(|cell| cell.symbol() == glyph)
                .cloned()
                .collect::<Vec<_>>()
        };

        let winning = marks("X")
            .into_iter()
            .filter(|cell| cell.bg == Color::Green)
            .collect::<Vec<_>>();
        assert_eq!(winning.len(), 3, "all three cells of the line are green");

        let underlined = winning
            .iter()
            .filter(|cell| cell.modifier.contains(Modifier::UNDERLINED))
            .count();
        assert_eq!(underlined, 1, "the cursor is shown on one winning cell");

        assert!(marks("O").iter().all(|cell| cell.bg != Color::Green));
    }

    #[test]
    fn test_cursor_background_off_the_line() {
        let mut app = App::new(SortOrder::Ascend);
        app.handle_key(KeyCode::Char('5'));

        let buffer = render_buffer(&app);
        let center = buffer
            .content
            .iter()
            .find(|cell| cell.symbol() == "X")
            .unwrap();
        assert_eq!(center.bg, Color::White);
        assert!(center.modifier.contains(Modifier::UNDERLINED));
    }
}
