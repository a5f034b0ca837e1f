//! # TextField Component
//!
//! A bordered, editable text input used by the ticket editor.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste)
//! - Handle editing (backspace, delete, cursor movement)
//! - In single-line mode, turn Enter into `FieldEvent::Submit`
//! - In multi-line mode, insert newlines and scroll internally once the
//!   content outgrows `visible_lines`
//!
//! ## State Management
//!
//! The buffer, cursor and scroll offset are internal state. `label` and
//! `focused` are props set by the parent form every frame.

mod layout;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use layout::{
    BORDER_OFFSET, VERTICAL_OVERHEAD, inner_width, locate, next_char_boundary, offset_at_column,
    prev_char_boundary, rows,
};

/// High-level events emitted by a TextField
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// Buffer contents changed
    Edited,
    /// Cursor moved without changing the buffer
    Moved,
    /// Enter pressed in a single-line field
    Submit,
}

pub struct TextField {
    /// Border title (Prop)
    pub label: &'static str,
    /// Whether this field owns the cursor (Prop)
    pub focused: bool,
    /// Text buffer (Internal State)
    pub buffer: String,
    multiline: bool,
    visible_lines: u16,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// First visible row when content exceeds `visible_lines`
    scroll_offset: u16,
    /// Content width from the last render, used for vertical movement
    last_width: u16,
}

impl TextField {
    const DEFAULT_WIDTH: u16 = 40;

    pub fn single_line(label: &'static str) -> Self {
        Self::build(label, false, 1)
    }

    pub fn multi_line(label: &'static str, visible_lines: u16) -> Self {
        Self::build(label, true, visible_lines.max(1))
    }

    fn build(label: &'static str, multiline: bool, visible_lines: u16) -> Self {
        Self {
            label,
            focused: false,
            buffer: String::new(),
            multiline,
            visible_lines,
            cursor: 0,
            scroll_offset: 0,
            last_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Replace the buffer and put the cursor at its end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = if self.multiline {
            text.to_string()
        } else {
            flatten(text)
        };
        self.cursor = self.buffer.len();
        self.scroll_offset = 0;
    }

    /// Height this field needs, borders included.
    pub fn height(&self) -> u16 {
        self.visible_lines + VERTICAL_OVERHEAD
    }

    fn insert(&mut self, text: &str) -> Option<FieldEvent> {
        if text.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
        Some(FieldEvent::Edited)
    }

    fn move_vertically(&mut self, down: bool) -> bool {
        let rows = rows(&self.buffer, self.last_width);
        let (row, col) = locate(&self.buffer, &rows, self.cursor);
        let target = if down {
            if row + 1 >= rows.len() {
                return false;
            }
            row + 1
        } else {
            if row == 0 {
                return false;
            }
            row - 1
        };
        self.cursor = offset_at_column(&self.buffer, rows[target], col);
        true
    }

    /// Keep the cursor row inside the visible window.
    fn update_scroll_offset(&mut self, cursor_row: u16, total_rows: u16) {
        if total_rows <= self.visible_lines {
            self.scroll_offset = 0;
        } else if cursor_row < self.scroll_offset {
            self.scroll_offset = cursor_row;
        } else if cursor_row >= self.scroll_offset + self.visible_lines {
            self.scroll_offset = cursor_row + 1 - self.visible_lines;
        }
    }
}

/// Single-line fields store newlines as spaces.
fn flatten(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = inner_width(area.width);
        self.last_width = width;

        let rows = rows(&self.buffer, width);
        let (cursor_row, cursor_col) = locate(&self.buffer, &rows, self.cursor);
        self.update_scroll_offset(cursor_row as u16, rows.len() as u16);

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label);

        let lines: Vec<Line> = if self.buffer.is_empty() && !self.focused {
            vec![Line::from(Span::styled(
                self.label,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))]
        } else {
            rows.iter()
                .skip(self.scroll_offset as usize)
                .take(self.visible_lines as usize)
                .map(|r| Line::raw(&self.buffer[r.start..r.end]))
                .collect()
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);

        if self.focused {
            let visible_row = (cursor_row as u16).saturating_sub(self.scroll_offset);
            frame.set_cursor_position((
                area.x + BORDER_OFFSET + cursor_col.min(width),
                area.y + BORDER_OFFSET + visible_row,
            ));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar('\n') if !self.multiline => None,
            TuiEvent::InputChar(c) => {
                let mut utf8 = [0u8; 4];
                self.insert(c.encode_utf8(&mut utf8))
            }
            TuiEvent::Paste(text) => {
                let text = if self.multiline {
                    text.replace("\r\n", "\n").replace('\r', "\n")
                } else {
                    flatten(text)
                };
                self.insert(&text)
            }
            TuiEvent::Submit if self.multiline => self.insert("\n"),
            TuiEvent::Submit => Some(FieldEvent::Submit),
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                FieldEvent::Edited
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                FieldEvent::Edited
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                FieldEvent::Moved
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                FieldEvent::Moved
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor != line_start).then(|| {
                    self.cursor = line_start;
                    FieldEvent::Moved
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor..]
                    .find('\n')
                    .map(|i| self.cursor + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor != line_end).then(|| {
                    self.cursor = line_end;
                    FieldEvent::Moved
                })
            }
            TuiEvent::CursorUp if self.multiline => {
                self.move_vertically(false).then_some(FieldEvent::Moved)
            }
            TuiEvent::CursorDown if self.multiline => {
                self.move_vertically(true).then_some(FieldEvent::Moved)
            }
            _ => None,
        }
    }
}
