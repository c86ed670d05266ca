//! Text frame rendering for the game.
//!
//! [`render_game`] is pure: it reads the state and builds a complete frame of
//! styled lines (header, top border, `H` playfield rows, bottom border).
//! Column math uses visible widths only, never styled string lengths.

use crate::config::Config;
use crate::game::types::GameState;
use crate::glyph::{visible_width, Glyph};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};
use std::fmt;

pub const GAME_OVER_MESSAGE: &str = "GAME OVER - press SPACE to restart";

const BORDER_HORIZONTAL: &str = "─";
const BORDER_VERTICAL: &str = "│";
const TOP_CORNERS: (&str, &str) = ("┌", "┐");
const BOTTOM_CORNERS: (&str, &str) = ("└", "┘");
const SOLID: &str = "█";
const BLANK: &str = " ";

/// One rendered frame: a fixed-size block of styled lines.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    lines: Vec<Line<'static>>,
}

impl FrameBuffer {
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    /// Widest line in display columns.
    pub fn width(&self) -> u16 {
        let widest = self.lines.iter().map(|line| line.width()).max().unwrap_or(0);
        u16::try_from(widest).unwrap_or(u16::MAX)
    }

    pub fn to_text(&self) -> Text<'static> {
        Text::from(self.lines.clone())
    }

    /// Lines with styling stripped.
    pub fn to_plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect()
    }
}

impl fmt::Display for FrameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_plain_lines().join("\n"))
    }
}

/// Render the current state. Shows the game-over banner once the game ended.
pub fn render_game(state: &GameState, config: &Config) -> FrameBuffer {
    if state.game_over {
        return render_game_over(state, config);
    }

    let glyph = player_glyph(config);
    let mut lines = Vec::with_capacity(usize::from(config.height) + 3);

    lines.push(Line::from(vec![
        Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.score.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Highscore: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.highscore.to_string(),
            Style::default().fg(Color::Yellow),
        ),
    ]));
    lines.push(border_line(TOP_CORNERS, config.width));
    for row in 0..i64::from(config.height) {
        lines.push(play_row(state, config, &glyph, row));
    }
    lines.push(border_line(BOTTOM_CORNERS, config.width));

    FrameBuffer { lines }
}

/// Full-screen banner: final score header, border, one centered message row.
fn render_game_over(state: &GameState, config: &Config) -> FrameBuffer {
    let mut lines = Vec::with_capacity(usize::from(config.height) + 3);

    lines.push(Line::from(vec![
        Span::styled(
            " Final score: ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            state.score.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Highscore: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.highscore.to_string(),
            Style::default().fg(Color::Yellow),
        ),
    ]));
    lines.push(border_line(TOP_CORNERS, config.width));

    let message_row = config.height / 2;
    for row in 0..config.height {
        if row == message_row {
            lines.push(centered_row(GAME_OVER_MESSAGE, config.width));
        } else {
            lines.push(framed(vec![blank_run(config.width)]));
        }
    }
    lines.push(border_line(BOTTOM_CORNERS, config.width));

    FrameBuffer { lines }
}

fn player_glyph(config: &Config) -> Glyph {
    Glyph::new(
        config.player_glyph.clone(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

/// First obstacle whose column is `col`.
/// Whether any obstacle on `col` is solid at `row`.
fn solid_at(state: &GameState, gap_height: u16, col: i64, row: i64) -> bool {
    state
        .obstacles
        .iter()
        .any(|o| o.column() == col && !o.gap_contains(row, gap_height))
}

fn play_row(state: &GameState, config: &Config, glyph: &Glyph, row: i64) -> Line<'static> {
    let width = i64::from(config.width);
    let player_row = state.player.row();
    let player_col = i64::from(state.player.col);

    let mut spans = Vec::with_capacity(usize::from(config.width) + 2);
    let mut col = 0;
    while col < width {
        if row == player_row && col == player_col {
            spans.push(glyph.to_span());
            col += i64::from(glyph.width().max(1));
            continue;
        }

        let cell = if solid_at(state, config.gap_height, col, row) {
            Span::styled(SOLID, Style::default().fg(Color::Green))
        } else {
            Span::raw(BLANK)
        };
        spans.push(cell);
        col += 1;
    }

    framed(spans)
}

fn centered_row(message: &str, width: u16) -> Line<'static> {
    let shown = truncate_to_width(message, width);
    let shown_width = visible_width(&shown);
    let left = width.saturating_sub(visible_width(message)) / 2;
    let right = width.saturating_sub(left + shown_width);

    framed(vec![
        blank_run(left),
        Span::styled(
            shown,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        blank_run(right),
    ])
}

/// Longest prefix of `text` that fits in `max_width` columns.
fn truncate_to_width(text: &str, max_width: u16) -> String {
    let mut out = String::new();
    let mut used = 0u16;
    for ch in text.chars() {
        let mut buf = [0u8; 4];
        let w = visible_width(ch.encode_utf8(&mut buf));
        if used + w > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}

fn blank_run(width: u16) -> Span<'static> {
    Span::raw(BLANK.repeat(usize::from(width)))
}

fn border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

fn framed(mut inner: Vec<Span<'static>>) -> Line<'static> {
    let mut spans = Vec::with_capacity(inner.len() + 2);
    spans.push(Span::styled(BORDER_VERTICAL, border_style()));
    spans.append(&mut inner);
    spans.push(Span::styled(BORDER_VERTICAL, border_style()));
    Line::from(spans)
}

fn border_line(corners: (&str, &str), width: u16) -> Line<'static> {
    let (left, right) = corners;
    Line::from(Span::styled(
        format!(
            "{}{}{}",
            left,
            BORDER_HORIZONTAL.repeat(usize::from(width)),
            right
        ),
        border_style(),
    ))
}
