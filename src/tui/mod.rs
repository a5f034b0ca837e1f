//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! ```text
//! crossterm event → TuiEvent ─┬─ form open?  → EditorForm  → FormEvent  ─┐
//!                             └─ otherwise   → TicketTable → TableEvent ─┴→ Action → update()
//! ```
//!
//! While the form is open it receives every key, so letters typed into a
//! field never trigger table shortcuts.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps until an event arrives and only
//! redraws after events (including terminal resize).

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{EditorForm, FormEvent, TableEvent, TicketTableState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub table: TicketTableState,
    /// Editor overlay (None = hidden). Mirrors `app.editor`.
    pub editor_form: Option<EditorForm>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            table: TicketTableState::new(),
            editor_form: None,
        }
    }

    /// Open or drop the form to match the core editor, and keep the table
    /// selection on a real row.
    pub fn sync_with(&mut self, app: &App) {
        match app.editor.draft() {
            Some(draft) if self.editor_form.is_none() => {
                self.editor_form = Some(EditorForm::open(draft));
            }
            None => self.editor_form = None,
            Some(_) => {}
        }
        self.table.clamp(app.store.len());
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Disambiguation makes a lone Esc arrive immediately; terminals
        // without the Kitty protocol ignore the request
        execute!(
            stdout(),
            EnableBracketedPaste,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableBracketedPaste);
    }
}

/// Route one event to the open form or the table and apply the resulting action.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Resize => return Effect::None,
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        _ => {}
    }

    let action = match tui.editor_form.as_mut() {
        Some(form) => form.handle_event(event).map(|form_event| match form_event {
            FormEvent::TitleChanged(title) => Action::SetTitle(title),
            FormEvent::DescriptionChanged(description) => Action::SetDescription(description),
            FormEvent::Save => Action::SaveDraft,
            FormEvent::Cancel => Action::CancelDraft,
        }),
        None => {
            let tickets = app.store.tickets();
            match tui.table.handle_event(event, tickets.len()) {
                Some(TableEvent::Create) => Some(Action::OpenCreate),
                Some(TableEvent::Edit(i)) => tickets.get(i).map(|t| Action::OpenEdit(t.id)),
                Some(TableEvent::Delete(i)) => tickets.get(i).map(|t| Action::Delete(t.id)),
                Some(TableEvent::Quit) => Some(Action::Quit),
                None => None,
            }
        }
    };

    let Some(action) = action else {
        return Effect::None;
    };
    let effect = update(app, action);
    tui.sync_with(app);
    effect
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::try_init()?;
    let _terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    ratatui::restore();
    info!("Helpdesk shutting down with {} tickets", app.store.len());
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut next = Some(first_event);
        while let Some(event) = next {
            if handle_event(app, tui, &event) == Effect::Quit {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_app_with};

    fn send(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> Effect {
        let mut effect = Effect::None;
        for event in events {
            effect = handle_event(app, tui, event);
        }
        effect
    }

    fn typed(s: &str) -> Vec<TuiEvent> {
        s.chars().map(TuiEvent::InputChar).collect()
    }

    #[test]
    fn test_create_ticket_through_keys() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        send(&mut app, &mut tui, &[TuiEvent::InputChar('n')]);
        assert!(tui.editor_form.is_some());
        send(&mut app, &mut tui, &typed("A"));
        send(&mut app, &mut tui, &[TuiEvent::NextField]);
        send(&mut app, &mut tui, &typed("B"));
        send(&mut app, &mut tui, &[TuiEvent::Save]);

        assert!(tui.editor_form.is_none());
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.tickets()[0].title, "A");
        assert_eq!(app.store.tickets()[0].description, "B");
    }

    #[test]
    fn test_letters_in_form_do_not_trigger_shortcuts() {
        let mut app = test_app_with(&[("existing", "")]);
        let mut tui = TuiState::new();

        send(&mut app, &mut tui, &[TuiEvent::InputChar('n')]);
        let effect = send(&mut app, &mut tui, &typed("qd"));

        assert_eq!(effect, Effect::None);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.editor.draft().map(|d| d.title.as_str()), Some("qd"));
    }

    #[test]
    fn test_edit_selected_ticket() {
        let mut app = test_app_with(&[("one", "1"), ("two", "2")]);
        let mut tui = TuiState::new();
        let id = app.store.tickets()[1].id;

        send(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::InputChar('e')]);
        send(&mut app, &mut tui, &typed("!"));
        send(&mut app, &mut tui, &[TuiEvent::Save]);

        assert_eq!(app.store.tickets()[1].id, id);
        assert_eq!(app.store.tickets()[1].title, "two!");
        assert_eq!(app.store.tickets()[0].title, "one");
    }

    #[test]
    fn test_escape_cancels_without_mutation() {
        let mut app = test_app_with(&[("keep", "me")]);
        let mut tui = TuiState::new();
        let before = app.store.tickets().to_vec();

        send(&mut app, &mut tui, &[TuiEvent::Submit]);
        send(&mut app, &mut tui, &typed("scratch"));
        send(&mut app, &mut tui, &[TuiEvent::Escape]);

        assert!(tui.editor_form.is_none());
        assert_eq!(app.store.tickets(), before.as_slice());
    }

    #[test]
    fn test_create_after_cancelled_edit_starts_blank() {
        let mut app = test_app_with(&[("old", "text")]);
        let mut tui = TuiState::new();

        send(&mut app, &mut tui, &[TuiEvent::InputChar('e'), TuiEvent::Escape]);
        send(&mut app, &mut tui, &[TuiEvent::InputChar('n')]);

        let form = tui.editor_form.as_ref().unwrap();
        assert!(form.is_new);
        assert_eq!(app.editor.draft().map(|d| d.title.as_str()), Some(""));
    }

    #[test]
    fn test_delete_selected_and_clamp() {
        let mut app = test_app_with(&[("a", ""), ("b", "")]);
        let mut tui = TuiState::new();

        send(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::InputChar('d')]);

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.tickets()[0].title, "a");
        assert_eq!(tui.table.selected, 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(send(&mut app, &mut tui, &[TuiEvent::InputChar('q')]), Effect::Quit);
        assert_eq!(send(&mut app, &mut tui, &[TuiEvent::ForceQuit]), Effect::Quit);
    }

    #[test]
    fn test_force_quit_works_inside_form() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        send(&mut app, &mut tui, &[TuiEvent::InputChar('n')]);
        assert_eq!(send(&mut app, &mut tui, &[TuiEvent::ForceQuit]), Effect::Quit);
    }
}
