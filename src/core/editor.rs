//! # Ticket Editor
//!
//! The modal form's state machine. While visible it owns a `Draft`, a
//! scratch copy of the ticket being written. The store only sees the draft
//! when it is committed.
//!
//! ```text
//!            open_new / open_existing
//!   Hidden ─────────────────────────────▶ Visible(Draft)
//!     ▲                                        │
//!     └────────── cancel / commit ─────────────┘
//! ```

use crate::core::store::TicketStore;
use crate::core::ticket::{Ticket, TicketId};

/// What a draft turns into when committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftTarget {
    /// No backing record yet; committing creates one.
    New,
    /// Committing overwrites this ticket.
    Existing(TicketId),
}

/// Uncommitted ticket fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub target: DraftTarget,
    pub title: String,
    pub description: String,
}

impl Draft {
    pub fn new() -> Self {
        Self {
            target: DraftTarget::New,
            title: String::new(),
            description: String::new(),
        }
    }

    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            target: DraftTarget::Existing(ticket.id),
            title: ticket.title.clone(),
            description: ticket.description.clone(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.target == DraftTarget::New
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub enum Editor {
    #[default]
    Hidden,
    Visible(Draft),
}

impl Editor {
    /// Show the form with a blank draft, discarding any previous one.
    pub fn open_new(&mut self) {
        *self = Editor::Visible(Draft::new());
    }

    /// Show the form pre-filled from `ticket`.
    pub fn open_existing(&mut self, ticket: &Ticket) {
        *self = Editor::Visible(Draft::from_ticket(ticket));
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Editor::Visible(_))
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Editor::Visible(draft) => Some(draft),
            Editor::Hidden => None,
        }
    }

    pub fn set_title(&mut self, title: String) {
        if let Editor::Visible(draft) = self {
            draft.title = title;
        }
    }

    pub fn set_description(&mut self, description: String) {
        if let Editor::Visible(draft) = self {
            draft.description = description;
        }
    }

    /// Hide the form and drop the draft. The store is untouched.
    pub fn cancel(&mut self) {
        *self = Editor::Hidden;
    }

    /// Write the draft to `store` and hide the form.
    ///
    /// Returns the id of the created or updated ticket, or `None` when the
    /// form wasn't open.
    pub fn commit(&mut self, store: &mut TicketStore) -> Option<TicketId> {
        let Editor::Visible(draft) = std::mem::take(self) else {
            return None;
        };
        let id = match draft.target {
            DraftTarget::New => store.create(draft.title, draft.description),
            DraftTarget::Existing(id) => {
                store.update(id, draft.title, draft.description);
                id
            }
        };
        Some(id)
    }
}
