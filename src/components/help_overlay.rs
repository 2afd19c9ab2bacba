//! Help Overlay Component
//!
//! Displays current keybindings when user presses '?' key.

use crate::keymap::Keymap;
use crate::styles::theme;
use crate::utils::center_popup;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the help overlay in the center of the screen
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) -> Result<()> {
        let t = theme();
        let popup_area = center_popup(area, 80, 90);

        frame.render_widget(Clear, popup_area);

        let title = format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(t.border_type(true))
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(t.primary))
            .style(t.background_style());

        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(inner_area);

        let bindings = Paragraph::new(Self::binding_lines(keymap))
            .wrap(Wrap { trim: false })
            .alignment(Alignment::Left);
        frame.render_widget(bindings, chunks[0]);

        let footer_text = format!(
            "Edit keybindings in: {}\nPress any key to close",
            config_path
        );
        let footer = Paragraph::new(footer_text)
            .style(t.muted_style())
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);

        Ok(())
    }

    /// Bindings grouped by category, categories in first-seen order.
    fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let bindings = keymap.all_bindings();

        let mut categories: Vec<&'static str> = Vec::new();
        for binding in &bindings {
            let category = binding.action.category();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        let mut lines = vec![Line::from("")];
        for (i, category) in categories.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                format!("  {} ", category),
                Style::default()
                    .fg(t.secondary)
                    .add_modifier(Modifier::BOLD),
            )));
            for binding in bindings.iter().filter(|b| b.action.category() == *category) {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("    {:12}", binding.display()),
                        Style::default().fg(t.text_emphasis),
                    ),
                    Span::styled(binding.get_description().to_string(), t.text_style()),
                ]));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KeymapPreset;

    fn rendered(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_each_category_listed_once() {
        let lines = rendered(&HelpOverlay::binding_lines(&Keymap::default()));
        let alarm_headers = lines.iter().filter(|l| l.trim() == "Alarms").count();
        assert_eq!(alarm_headers, 1);
        let nav_headers = lines.iter().filter(|l| l.trim() == "Navigation").count();
        assert_eq!(nav_headers, 1);
    }

    #[test]
    fn test_vim_bindings_listed() {
        let lines = rendered(&HelpOverlay::binding_lines(&Keymap::new(KeymapPreset::Vim)));
        assert!(lines.iter().any(|l| l.trim_start().starts_with('J')));
    }
}
