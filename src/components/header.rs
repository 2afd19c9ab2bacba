use crate::styles::theme;
use anyhow::Result;
use chrono::NaiveTime;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

/// Bordered title bar shared by every screen.
pub struct Header;

impl Header {
    /// Title in the top border, `description` centered inside.
    ///
    /// Returns the height used, for layout calculations.
    pub fn render(frame: &mut Frame, area: Rect, title: &str, description: &str) -> Result<u16> {
        Self::draw(frame, area, title, description, None)
    }

    /// Like [`Header::render`], with the wall clock on the right.
    pub fn render_with_clock(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        description: &str,
        now: NaiveTime,
    ) -> Result<u16> {
        Self::draw(frame, area, title, description, Some(now))
    }

    fn draw(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        description: &str,
        clock: Option<NaiveTime>,
    ) -> Result<u16> {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .border_type(t.border_type(true))
            .title(format!(" {} ", title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return Ok(area.height);
        }
        // single text row, vertically centered
        let row = Rect {
            y: inner.y + inner.height.saturating_sub(1) / 2,
            height: 1,
            ..inner
        };

        let (text_area, clock_area) = match clock {
            Some(_) => {
                let chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Min(0), Constraint::Length(6)])
                    .split(row);
                (chunks[0], Some(chunks[1]))
            }
            None => (row, None),
        };

        let alignment = if clock.is_some() {
            Alignment::Left
        } else {
            Alignment::Center
        };
        frame.render_widget(
            Paragraph::new(description)
                .style(t.text_style())
                .alignment(alignment),
            text_area,
        );

        if let (Some(now), Some(clock_area)) = (clock, clock_area) {
            frame.render_widget(
                Paragraph::new(clock_text(now))
                    .style(t.emphasis_style())
                    .alignment(Alignment::Right),
                clock_area,
            );
        }

        Ok(area.height)
    }
}

fn clock_text(now: NaiveTime) -> String {
    now.format("%H:%M").to_string()
}
