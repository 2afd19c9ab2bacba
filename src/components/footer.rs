use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Common footer component
pub struct Footer;

impl Footer {
    /// Render a footer of key hints.
    ///
    /// `text` is a `" | "`-separated list of `"Key: Label"` segments; keys
    /// and labels get distinct colors.
    ///
    /// # Returns
    /// The height used (2 lines: 1 for border, 1 for text)
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<u16> {
        let footer_block = Block::default()
            .borders(Borders::TOP)
            .border_style(theme().border_style())
            .border_type(ratatui::widgets::BorderType::Rounded)
            .style(theme().background_style());

        let footer_inner = footer_block.inner(area);
        let footer = Paragraph::new(Self::spans(text)).alignment(Alignment::Center);

        frame.render_widget(footer_block, area);
        frame.render_widget(footer, footer_inner);

        Ok(2)
    }

    fn spans(text: &str) -> Line<'_> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }

            if let Some((keys, label)) = part.split_once(": ") {
                spans.push(Span::styled(
                    format!("{}: ", keys),
                    t.emphasis_style().add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(label, t.text_style()));
            } else {
                spans.push(Span::styled(part, t.text_style()));
            }
        }

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_spans_split_hints() {
        let line = Footer::spans("Enter: Log In | Tab: Next Field");
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Enter: Log In | Tab: Next Field");
        // key, label, separator, key, label
        assert_eq!(line.spans.len(), 5);
    }

    #[test]
    fn test_footer_plain_segment() {
        let line = Footer::spans("Loading");
        assert_eq!(line.spans.len(), 1);
    }
}
