//! Styled terminal glyphs with a separately measured display width.
//!
//! Column math (player footprint, cursor advancement) must only ever use
//! [`Glyph::width`]; the style is applied by the terminal backend and takes
//! no columns.

use ratatui::style::Style;
use ratatui::text::Span;

/// Number of terminal columns `text` occupies once rendered.
pub fn visible_width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

/// A raw symbol, its style, and its measured visible width.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    symbol: String,
    style: Style,
    width: u16,
}

impl Glyph {
    pub fn new(symbol: impl Into<String>, style: Style) -> Self {
        let symbol = symbol.into();
        let width = visible_width(&symbol);
        Self {
            symbol,
            style,
            width,
        }
    }

    pub fn plain(symbol: impl Into<String>) -> Self {
        Self::new(symbol, Style::default())
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Display columns covered by this glyph.
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn to_span(&self) -> Span<'static> {
        Span::styled(self.symbol.clone(), self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};

    #[test]
    fn test_style_does_not_affect_width() {
        let plain = Glyph::plain("@>");
        let styled = Glyph::new(
            "@>",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
        assert_eq!(plain.width(), 2);
        assert_eq!(styled.width(), 2);
        assert_ne!(plain.style(), styled.style());
    }

    #[test]
    fn test_wide_characters_measured_in_columns() {
        // One char, two terminal cells
        assert_eq!(visible_width("\u{FF20}"), 2);
        assert_eq!(visible_width("▲"), 1);
        assert_eq!(visible_width(""), 0);
    }

    #[test]
    fn test_to_span_keeps_symbol_and_style() {
        let style = Style::default().fg(Color::Green);
        let glyph = Glyph::new("█", style);
        let span = glyph.to_span();
        assert_eq!(span.content, "█");
        assert_eq!(span.style, style);
    }
}
