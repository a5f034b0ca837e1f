//! # Editor Form Component
//!
//! Centered modal over the ticket table with a Title field and a
//! Description field. Opened when the core `Editor` becomes visible and
//! dropped when it hides again.
//!
//! The form never touches the store. Every edit is reported as a
//! `FormEvent` so the event loop can forward it to the core draft, and
//! Save/Cancel are reported for the core to act on.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};

use crate::core::editor::Draft;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::event::TuiEvent;

/// Visible rows in the description box.
const DESCRIPTION_LINES: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Title,
    Description,
}

/// Events emitted by the editor form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    TitleChanged(String),
    DescriptionChanged(String),
    Save,
    Cancel,
}

pub struct EditorForm {
    /// Whether the draft will create a new ticket (Prop, fixed at open)
    pub is_new: bool,
    pub focus: Focus,
    title: TextField,
    description: TextField,
}

impl EditorForm {
    /// Build a form pre-filled from `draft`, focused on the title.
    pub fn open(draft: &Draft) -> Self {
        let mut title = TextField::single_line("Title");
        title.set_text(&draft.title);
        let mut description = TextField::multi_line("Description", DESCRIPTION_LINES);
        description.set_text(&draft.description);
        Self {
            is_new: draft.is_new(),
            focus: Focus::Title,
            title,
            description,
        }
    }

    pub fn heading(&self) -> &'static str {
        if self.is_new { "Create Ticket" } else { "Edit Ticket" }
    }

    fn submit_label(&self) -> &'static str {
        if self.is_new { "Create" } else { "Save" }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Title => Focus::Description,
            Focus::Description => Focus::Title,
        };
    }

    /// Total height of the modal, borders included.
    fn height(&self) -> u16 {
        // outer borders + title + description + help line
        2 + self.title.height() + self.description.height() + 1
    }
}

impl EventHandler for EditorForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape => return Some(FormEvent::Cancel),
            TuiEvent::Save => return Some(FormEvent::Save),
            TuiEvent::NextField | TuiEvent::PrevField => {
                self.toggle_focus();
                return None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Title => match self.title.handle_event(event)? {
                FieldEvent::Edited => Some(FormEvent::TitleChanged(self.title.buffer.clone())),
                FieldEvent::Submit => {
                    self.focus = Focus::Description;
                    None
                }
                FieldEvent::Moved => None,
            },
            Focus::Description => match self.description.handle_event(event)? {
                FieldEvent::Edited => Some(FormEvent::DescriptionChanged(
                    self.description.buffer.clone(),
                )),
                FieldEvent::Submit | FieldEvent::Moved => None,
            },
        }
    }
}

impl Component for EditorForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, self.height(), area);
        frame.render_widget(Clear, overlay);

        let help = format!(
            " Ctrl+S {}  Esc Cancel  Tab Switch field ",
            self.submit_label()
        );
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                format!(" {} ", self.heading()),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(help).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [title_area, description_area, hint_area] = Layout::vertical([
            Constraint::Length(self.title.height()),
            Constraint::Length(self.description.height()),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.title.focused = self.focus == Focus::Title;
        self.description.focused = self.focus == Focus::Description;
        self.title.render(frame, title_area);
        self.description.render(frame, description_area);

        let hint = match self.focus {
            Focus::Title => "Enter: next field",
            Focus::Description => "Enter: new line",
        };
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            hint_area,
        );
    }
}

/// Center a rect of `percent_x` width and fixed `height` inside `outer`.
fn centered_rect(percent_x: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(outer.height)),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
