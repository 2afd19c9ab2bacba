//! Dialog widget for alerts and confirmations
//!
//! Self-contained: centers itself in the given area, clears what is behind it
//! and draws a bordered box with a wrapped message and an optional key hint.

use crate::styles::theme;
use crate::utils::center_fixed;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Widget, Wrap};

/// Dialog variant for different visual styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogVariant {
    #[default]
    Default,
    Warning,
    Error,
}

pub struct Dialog<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub variant: DialogVariant,
    pub footer: Option<&'a str>,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> Dialog<'a> {
    pub fn new(title: &'a str, content: &'a str) -> Self {
        Self {
            title,
            content,
            variant: DialogVariant::Default,
            footer: None,
            min_width: 40,
            max_width: 70,
        }
    }

    pub fn variant(mut self, variant: DialogVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Key hint shown under the message, e.g. "Enter: OK"
    pub fn footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }

    fn width(&self, area: Rect) -> u16 {
        let longest = self
            .content
            .lines()
            .map(|l| l.chars().count())
            .chain(std::iter::once(self.title.chars().count()))
            .max()
            .unwrap_or(0) as u16;
        (longest + 8)
            .clamp(self.min_width, self.max_width)
            .min(area.width.saturating_sub(2))
    }

    fn height(&self, width: u16) -> u16 {
        let inner_width = width.saturating_sub(6).max(1) as usize;
        let content_lines: usize = self
            .content
            .lines()
            .map(|l| l.chars().count().div_ceil(inner_width).max(1))
            .sum();
        let footer_lines = if self.footer.is_some() { 2 } else { 0 };
        // borders + vertical padding
        (content_lines + footer_lines) as u16 + 4
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let width = self.width(area);
        let height = self.height(width).min(area.height);
        let popup = center_fixed(area, width, height);

        Clear.render(popup, buf);

        let border_color = match self.variant {
            DialogVariant::Default => t.border_focused,
            DialogVariant::Warning => t.warning,
            DialogVariant::Error => t.error,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(t.border_type(true))
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .title_style(t.title_style())
            .padding(Padding::new(2, 2, 1, 1))
            .style(t.background_style());

        let mut lines: Vec<Line> = self
            .content
            .lines()
            .map(|l| Line::styled(l.to_string(), t.text_style()))
            .collect();
        if let Some(footer) = self.footer {
            lines.push(Line::from(""));
            lines.push(Line::styled(footer.to_string(), t.muted_style()));
        }

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}
