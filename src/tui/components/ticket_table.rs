//! # Ticket Table Component
//!
//! The main view: one row per ticket with Title, Description and Actions
//! columns. Rows are listed in store order; there is no sorting or filtering.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TicketTableState` lives in `TuiState` (selection survives redraws)
//! - `TicketTable` is created each frame with borrowed state and tickets

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Cell, Paragraph, Row, Table, TableState};

use crate::core::ticket::Ticket;
use crate::tui::event::TuiEvent;

const ACTIONS_LABEL: &str = "[e] Edit  [d] Delete";

/// Events emitted by the table. Indices refer to the ticket slice it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    Create,
    Edit(usize),
    Delete(usize),
    Quit,
}

/// Persistent state for the ticket table.
pub struct TicketTableState {
    pub selected: usize,
    pub table_state: TableState,
}

impl TicketTableState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            table_state: TableState::default(),
        }
    }

    /// Keep the selection on a real row after the ticket count changed.
    pub fn clamp(&mut self, row_count: usize) {
        if row_count == 0 {
            self.selected = 0;
            self.table_state.select(None);
        } else {
            self.selected = self.selected.min(row_count - 1);
            self.table_state.select(Some(self.selected));
        }
    }

    /// Handle a key event against a table of `row_count` tickets.
    pub fn handle_event(&mut self, event: &TuiEvent, row_count: usize) -> Option<TableEvent> {
        self.clamp(row_count);
        let has_rows = row_count > 0;

        match event {
            TuiEvent::Escape | TuiEvent::InputChar('q') => Some(TableEvent::Quit),
            TuiEvent::InputChar('n') | TuiEvent::InputChar('c') => Some(TableEvent::Create),
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                if has_rows {
                    self.selected = self.selected.saturating_sub(1);
                    self.table_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                if has_rows {
                    self.selected = (self.selected + 1).min(row_count - 1);
                    self.table_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorHome | TuiEvent::InputChar('g') => {
                if has_rows {
                    self.selected = 0;
                    self.table_state.select(Some(0));
                }
                None
            }
            TuiEvent::CursorEnd | TuiEvent::InputChar('G') => {
                if has_rows {
                    self.selected = row_count - 1;
                    self.table_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar('e') => {
                has_rows.then_some(TableEvent::Edit(self.selected))
            }
            TuiEvent::Delete | TuiEvent::InputChar('d') => {
                has_rows.then_some(TableEvent::Delete(self.selected))
            }
            _ => None,
        }
    }
}

impl Default for TicketTableState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the ticket table.
pub struct TicketTable<'a> {
    state: &'a mut TicketTableState,
    tickets: &'a [Ticket],
}

impl<'a> TicketTable<'a> {
    pub fn new(state: &'a mut TicketTableState, tickets: &'a [Ticket]) -> Self {
        Self { state, tickets }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.clamp(self.tickets.len());

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Tickets ({}) ", self.tickets.len()))
            .title_bottom(Line::from(" n Create  e Edit  d Delete  q Quit ").centered());

        if self.tickets.is_empty() {
            let empty = Paragraph::new("No tickets yet. Press n to create one.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let header = Row::new(vec![
            Cell::from("Title"),
            Cell::from("Description"),
            Cell::from("Actions"),
        ])
        .style(header_style)
        .bottom_margin(1);

        let rows: Vec<Row> = self
            .tickets
            .iter()
            .map(|ticket| {
                Row::new(vec![
                    Cell::from(ticket.title.clone()),
                    Cell::from(single_line(&ticket.description)),
                    Cell::from(ACTIONS_LABEL).style(Style::default().fg(Color::Blue)),
                ])
            })
            .collect();

        let widths = [
            Constraint::Percentage(30),
            Constraint::Fill(1),
            Constraint::Length(ACTIONS_LABEL.len() as u16),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(2)
            .row_highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .highlight_symbol("› ");

        frame.render_stateful_widget(table, area, &mut self.state.table_state);
    }
}

/// Collapse a multi-line description so it fits one table row.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
