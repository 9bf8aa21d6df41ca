use crate::game::{GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{self, Highlights};

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Blue => Color::Blue,
    }
}

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    highlights: &Highlights,
    message: &Option<String>,
) {
    let board_height = game_state.board().radius() as u16 * 2 + 1;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Header
            Constraint::Min(board_height + 2),    // Board
            Constraint::Length(3),                // Message
            Constraint::Length(4),                // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, highlights, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: ratatui::layout::Rect) {
    let board = game_state.board();
    let (status, color) = match game_state.winner() {
        Some(winner) => (format!("{} wins!", winner), player_color(winner)),
        None => {
            let player = game_state.current_player();
            (
                format!(
                    "Turn: {}  |  Red {}  Blue {}",
                    player,
                    board.count_stones(Player::Red),
                    board.count_stones(Player::Blue)
                ),
                player_color(player),
            )
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("HexOust"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    highlights: &Highlights,
    area: ratatui::layout::Rect,
) {
    let lines = board_widget::board_lines(game_state.board(), highlights);
    let board_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line1 = Line::from("\u{2190}/\u{2192}/\u{2191}/\u{2193} or h l y u b n: Move  |  Enter: Place / Capture");
    let line2 = Line::from("C: Capturable  |  M: Legal moves  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
