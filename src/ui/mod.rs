pub mod game_scene;

use game_scene::FrameBuffer;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Draw a rendered frame centered in the terminal.
pub fn draw(frame: &mut Frame, buffer: &FrameBuffer) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let (width, height) = (buffer.width(), buffer.height());
    if area.width < width || area.height < height {
        render_too_small(frame, area, width, height);
        return;
    }

    let target = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    frame.render_widget(Paragraph::new(buffer.to_text()), target);
}

fn render_too_small(frame: &mut Frame, area: Rect, width: u16, height: u16) {
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!(
            "need {}x{}, have {}x{}",
            width, height, area.width, area.height
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
