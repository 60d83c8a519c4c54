//! Text input widget
//!
//! A single-line text field with a cursor. The cursor counts characters, not
//! bytes, so multi-byte input edits correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::Palette;

/// A simple text input field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_value(content);
        self
    }

    /// Replace the content and move the cursor to the end
    pub fn set_value(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Build the display line for this field
    pub fn to_line(&self, palette: &Palette, label_width: usize) -> Line<'static> {
        let label_style = if self.focused {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.accent)
        };
        let mut spans = vec![Span::styled(
            format!("{:>width$}: ", self.label, width = label_width),
            label_style,
        )];

        if self.content.is_empty() && !self.focused {
            spans.push(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(palette.muted),
            ));
            return Line::from(spans);
        }

        let value_style = Style::default().fg(palette.foreground);
        if self.focused {
            let at = self.byte_index(self.cursor);
            let (before, after) = self.content.split_at(at);
            let mut rest = after.chars();
            let cursor_char = rest.next().unwrap_or(' ');

            spans.push(Span::styled(before.to_string(), value_style));
            spans.push(Span::styled(
                cursor_char.to_string(),
                Style::default().fg(palette.background).bg(palette.accent),
            ));
            spans.push(Span::styled(rest.as_str().to_string(), value_style));
        } else {
            spans.push(Span::styled(self.content.clone(), value_style));
        }

        Line::from(spans)
    }
}

/// Renders a [`TextInput`] with a palette
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    palette: &'a Palette,
    label_width: usize,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput, palette: &'a Palette, label_width: usize) -> Self {
        Self {
            input,
            palette,
            label_width,
        }
    }
}

impl<'a> Widget for TextInputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.input.to_line(self.palette, self.label_width)).render(area, buf);
    }
}
