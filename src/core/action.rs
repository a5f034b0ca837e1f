//! # Actions
//!
//! Everything that can happen in the helpdesk becomes an `Action`.
//! User presses `n`? That's `Action::OpenCreate`.
//! User hits Ctrl+S in the form? That's `Action::SaveDraft`.
//!
//! The `update()` function applies an action to the current state and
//! returns an `Effect` telling the event loop what to do next.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Persistence is not an effect: store methods save as their last step.

use log::debug;

use crate::core::state::App;
use crate::core::ticket::TicketId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the form with a blank draft.
    OpenCreate,
    /// Open the form pre-filled from an existing ticket.
    OpenEdit(TicketId),
    Delete(TicketId),
    SetTitle(String),
    SetDescription(String),
    /// Commit the draft (create or update) and close the form.
    SaveDraft,
    /// Close the form without touching the store.
    CancelDraft,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::OpenCreate => {
            app.editor.open_new();
            app.status_message = String::from("Creating ticket");
        }
        Action::OpenEdit(id) => match app.store.get(id) {
            Some(ticket) => {
                app.editor.open_existing(ticket);
                app.status_message = String::from("Editing ticket");
            }
            None => debug!("Edit of unknown ticket {} ignored", id),
        },
        Action::Delete(id) => {
            let existed = app.store.get(id).is_some();
            app.store.delete(id);
            if existed {
                app.status_message = String::from("Ticket deleted");
            }
        }
        Action::SetTitle(title) => app.editor.set_title(title),
        Action::SetDescription(description) => app.editor.set_description(description),
        Action::SaveDraft => {
            let was_new = app.editor.draft().map(|d| d.is_new());
            if app.editor.commit(&mut app.store).is_some() {
                app.status_message = match was_new {
                    Some(true) => String::from("Ticket created"),
                    _ => String::from("Ticket saved"),
                };
            }
        }
        Action::CancelDraft => {
            if app.editor.is_visible() {
                app.editor.cancel();
                app.status_message = String::from("Edit cancelled");
            }
        }
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}
