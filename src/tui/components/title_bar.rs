//! # TitleBar Component
//!
//! Top status bar: the page heading, the last status message and the
//! number of stored tickets.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.status_message.clone(), app.store.len());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Helpdesk Tickets | Ticket created | 3 tickets"`
//! 2. **No status**: `"Helpdesk Tickets | 3 tickets"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Status message (e.g., "Ticket saved")
    pub status_message: String,
    /// Number of tickets in the store
    pub ticket_count: usize,
}

impl TitleBar {
    pub fn new(status_message: String, ticket_count: usize) -> Self {
        Self {
            status_message,
            ticket_count,
        }
    }

    fn count_label(&self) -> String {
        match self.ticket_count {
            1 => String::from("1 ticket"),
            n => format!("{} tickets", n),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "Helpdesk Tickets",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        spans.push(Span::raw(format!(" | {}", self.count_label())));

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let text = render(&mut TitleBar::new("Ticket created".to_string(), 3));
        assert!(text.contains("Helpdesk Tickets | Ticket created | 3 tickets"));
    }

    #[test]
    fn test_title_bar_without_status() {
        let text = render(&mut TitleBar::new(String::new(), 0));
        assert!(text.contains("Helpdesk Tickets | 0 tickets"));
    }

    #[test]
    fn test_title_bar_singular_count() {
        let text = render(&mut TitleBar::new(String::new(), 1));
        assert!(text.contains("1 ticket"));
        assert!(!text.contains("1 tickets"));
    }
}
