use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::glyphs::{head_glyph, segment_shape, tail_glyph};
use crate::game::{Cell, Direction, GameSnapshot, GameStatus};

const EVEN_CELL: Color = Color::Indexed(236);
const ODD_CELL: Color = Color::Indexed(238);

/// Which part of the snake a cell holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Head,
    Body,
    Tail,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &GameSnapshot) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(4), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot), chunks[0]);

        // Center the arena horizontally
        let width = (snapshot.arena_size * 2 + 2) as u16;
        let game_area = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(width),
                Constraint::Min(0),
            ])
            .split(chunks[1])[1];
        frame.render_widget(self.render_grid(snapshot), game_area);

        frame.render_widget(self.render_footer(snapshot), chunks[2]);
    }

    fn render_grid(&self, snapshot: &GameSnapshot) -> Paragraph<'_> {
        let parts = snake_glyphs(&snapshot.snake, snapshot.heading);
        let mut lines = Vec::with_capacity(snapshot.arena_size);

        for row in 0..snapshot.arena_size {
            let mut spans = Vec::with_capacity(snapshot.arena_size);

            for col in 0..snapshot.arena_size {
                let background = if (row + col) % 2 == 0 { EVEN_CELL } else { ODD_CELL };
                let base = Style::default().bg(background);
                let cell = Cell::encode(row as i32, col as i32, snapshot.arena_size).ok();

                let span = match cell.and_then(|c| parts.get(&c)) {
                    Some((Part::Head, text)) => Span::styled(
                        text.iter().collect::<String>(),
                        base.fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Some((Part::Body | Part::Tail, text)) => {
                        Span::styled(text.iter().collect::<String>(), base.fg(Color::Green))
                    }
                    None if cell.is_some() && cell == snapshot.egg => Span::styled(
                        "● ",
                        base.fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                    None => Span::styled("  ", base),
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, snapshot: &GameSnapshot) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("Eggs: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        if snapshot.best_score > 0 {
            spans.push(Span::raw("    "));
            spans.push(Span::styled("Best: ", Style::default().fg(Color::Yellow)));
            spans.push(Span::styled(
                snapshot.best_score.to_string(),
                Style::default().fg(Color::White),
            ));
        }

        Paragraph::new(vec![Line::from(""), Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_footer(&self, snapshot: &GameSnapshot) -> Paragraph<'_> {
        let status_style = match snapshot.status {
            GameStatus::Won => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            GameStatus::Lost => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            GameStatus::Idle | GameStatus::Running => Style::default().fg(Color::Gray),
        };

        let text = vec![
            Line::from(Span::styled(status_line(snapshot.status), status_style)),
            Line::from(""),
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Enter", Style::default().fg(Color::Green)),
                Span::raw(" to start | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Text under the arena for each game status
fn status_line(status: GameStatus) -> String {
    match status {
        GameStatus::Idle => "Press Enter to start".to_string(),
        GameStatus::Running => String::new(),
        GameStatus::Won | GameStatus::Lost => format!(
            "{} - press Enter to play again",
            status.result_message().unwrap_or_default()
        ),
    }
}

/// Two-character text for every snake cell, keyed by cell
fn snake_glyphs(snake: &[Cell], heading: Direction) -> HashMap<Cell, (Part, [char; 2])> {
    let mut glyphs = HashMap::with_capacity(snake.len());
    let last = snake.len().saturating_sub(1);

    for (i, &cell) in snake.iter().enumerate() {
        let (part, glyph, opens_right) = if i == 0 {
            let opens_right = snake
                .get(1)
                .and_then(|&neck| Direction::between(cell, neck))
                == Some(Direction::Right);
            (Part::Head, head_glyph(heading), opens_right)
        } else if i == last {
            match Direction::between(cell, snake[i - 1]) {
                Some(toward_body) => (
                    Part::Tail,
                    tail_glyph(toward_body),
                    toward_body == Direction::Right,
                ),
                None => (Part::Tail, '•', false),
            }
        } else {
            match segment_shape(snake[i - 1], cell, snake[i + 1]) {
                Some(shape) => (Part::Body, shape.glyph(), shape.opens_right()),
                None => (Part::Body, '•', false),
            }
        };

        let filler = if opens_right { '─' } else { ' ' };
        glyphs.insert(cell, (part, [glyph, filler]));
    }

    glyphs
}
