use rustc_hash::FxHashSet;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::game::{Board, Coord, Stone};

/// Cells to draw with emphasis.
#[derive(Debug, Default)]
pub struct Highlights {
    pub cursor: Option<Coord>,
    pub capturable: FxHashSet<Coord>,
    pub legal: FxHashSet<Coord>,
}

/// Text column of `coord` when the board is drawn as rows of constant `r`,
/// each cell two characters wide and each row shifted half a cell.
pub fn column_of(coord: Coord, radius: i32) -> usize {
    (2 * coord.q() + coord.r() + 2 * radius) as usize
}

/// Render the board as one text line per row of the hexagon.
pub fn board_lines(board: &Board, highlights: &Highlights) -> Vec<Line<'static>> {
    let radius = board.radius();
    let mut lines = Vec::with_capacity((2 * radius + 1) as usize);

    for r in -radius..=radius {
        let q_min = (-radius).max(-r - radius);
        let q_max = radius.min(-r + radius);
        let indent = column_of(Coord::axial(q_min, r), radius);

        let mut spans = vec![Span::raw(" ".repeat(indent))];
        for q in q_min..=q_max {
            let coord = Coord::axial(q, r);
            if q > q_min {
                spans.push(Span::raw(" "));
            }
            spans.push(cell_span(board, coord, highlights));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn cell_span(board: &Board, coord: Coord, highlights: &Highlights) -> Span<'static> {
    let stone = board.stone_at(coord).unwrap_or(Stone::Empty);
    let (symbol, mut style) = match stone {
        Stone::Red => ("\u{25cf}", Style::default().fg(Color::Red)),
        Stone::Blue => ("\u{25cf}", Style::default().fg(Color::Blue)),
        Stone::Empty if highlights.legal.contains(&coord) => {
            ("+", Style::default().fg(Color::Green))
        }
        Stone::Empty => ("\u{00b7}", Style::default().fg(Color::DarkGray)),
    };

    if highlights.capturable.contains(&coord) {
        style = style.bg(Color::Yellow);
    }
    if highlights.cursor == Some(coord) {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    Span::styled(symbol, style)
}
