//! Bordered single-line field for a [`TextInput`], with placeholder and
//! password masking.

use crate::utils::text_input::TextInput;
use crate::utils::{
    disabled_border_style, disabled_text_style, focused_border_style, input_placeholder_style,
    input_text_style, unfocused_border_style,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// A widget for rendering a TextInput with consistent styling.
///
/// # Example
/// ```
/// use my_alarm::utils::TextInput;
/// use my_alarm::widgets::TextInputWidget;
///
/// let input = TextInput::with_text("ada");
/// let widget = TextInputWidget::new(&input)
///     .title("Username")
///     .placeholder("Your username")
///     .focused(true);
/// // frame.render_text_input_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    disabled: bool,
    masked: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
            disabled: false,
            masked: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mask the text with bullets (for passwords).
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    fn display_text(&self) -> String {
        let text = self.input.text();
        if text.is_empty() {
            self.placeholder.unwrap_or("").to_string()
        } else if self.masked {
            "•".repeat(text.chars().count())
        } else {
            text.to_string()
        }
    }

    fn text_style(&self) -> Style {
        if self.disabled {
            disabled_text_style()
        } else if self.input.text().is_empty() {
            input_placeholder_style()
        } else {
            input_text_style()
        }
    }

    fn border_style(&self) -> Style {
        if self.disabled {
            disabled_border_style()
        } else if self.focused {
            focused_border_style()
        } else {
            unfocused_border_style()
        }
    }

    fn create_block(&self) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.focused {
                BorderType::Rounded
            } else {
                BorderType::Plain
            })
            .border_style(self.border_style());
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.display_text())
            .block(self.create_block())
            .style(self.text_style())
            .render(area, buf);
    }
}

/// Frame extension that also places the terminal cursor in a focused field.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let show_cursor = widget.focused && !widget.disabled;
        let cursor = widget.input.cursor().min(widget.input.text().chars().count());
        let inner = widget.create_block().inner(area);

        self.render_widget(widget, area);

        if show_cursor && inner.width > 0 {
            let x = inner.x + (cursor as u16).min(inner.width - 1);
            self.set_cursor_position((x, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_placeholder_when_empty() {
        let input = TextInput::new();
        let widget = TextInputWidget::new(&input).placeholder("Group number");
        assert_eq!(widget.display_text(), "Group number");
    }

    #[test]
    fn test_display_text_masked() {
        let input = TextInput::with_text("hunter2");
        let widget = TextInputWidget::new(&input).masked(true);
        assert_eq!(widget.display_text(), "•••••••");
    }

    #[test]
    fn test_masked_placeholder_is_not_masked() {
        let input = TextInput::new();
        let widget = TextInputWidget::new(&input).masked(true).placeholder("Password");
        assert_eq!(widget.display_text(), "Password");
    }

    #[test]
    fn test_render_into_buffer() {
        let input = TextInput::with_text("ada");
        let widget = TextInputWidget::new(&input).title("Username");
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        let row: String = (0..20).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("ada"));
    }
}
