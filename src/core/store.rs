//! # Ticket Store
//!
//! The ordered ticket collection and its persistence mirror.
//!
//! ```text
//! create / update / delete  →  mutate Vec<Ticket>  →  save()  →  Storage::set_item
//! ```
//!
//! Every mutating method ends with an explicit `save()` that overwrites the
//! whole collection under one storage key. Nothing here ever reports a
//! failure to the caller: a missing or corrupt stored value loads as an empty
//! list, a failed write is logged and the in-memory state stays authoritative.

use log::{debug, info, warn};

use crate::core::storage::Storage;
use crate::core::ticket::{IdGenerator, Ticket, TicketId};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "tickets";

pub struct TicketStore {
    storage: Box<dyn Storage>,
    key: String,
    tickets: Vec<Ticket>,
    ids: IdGenerator,
}

impl TicketStore {
    /// Read the persisted collection. Runs once, when the app starts.
    pub fn load(storage: Box<dyn Storage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let tickets = read_tickets(storage.as_ref(), &key);
        let ids = IdGenerator::seeded_from(&tickets);
        Self {
            storage,
            key,
            tickets,
            ids,
        }
    }

    /// Serialize the full collection and overwrite the stored value.
    pub fn save(&mut self) {
        let json = match serde_json::to_string(&self.tickets) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize tickets: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set_item(&self.key, &json) {
            warn!("Failed to save tickets under '{}': {}", self.key, e);
        } else {
            debug!("Saved {} tickets under '{}'", self.tickets.len(), self.key);
        }
    }

    /// Append a new ticket. Empty fields are accepted.
    pub fn create(&mut self, title: String, description: String) -> TicketId {
        let id = self.ids.next_id();
        self.tickets.push(Ticket {
            id,
            title,
            description,
        });
        info!("Created ticket {}", id);
        self.save();
        id
    }

    /// Replace the fields of ticket `id` in place. Does nothing if it doesn't exist.
    pub fn update(&mut self, id: TicketId, title: String, description: String) {
        match self.tickets.iter_mut().find(|t| t.id == id) {
            Some(ticket) => {
                ticket.title = title;
                ticket.description = description;
                info!("Updated ticket {}", id);
            }
            None => debug!("Update of unknown ticket {} ignored", id),
        }
        self.save();
    }

    /// Remove ticket `id`. Does nothing if it doesn't exist.
    pub fn delete(&mut self, id: TicketId) {
        let before = self.tickets.len();
        self.tickets.retain(|t| t.id != id);
        if self.tickets.len() < before {
            info!("Deleted ticket {}", id);
        } else {
            debug!("Delete of unknown ticket {} ignored", id);
        }
        self.save();
    }

    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }
}

fn read_tickets(storage: &dyn Storage, key: &str) -> Vec<Ticket> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("No stored tickets under '{}', starting empty", key);
            return Vec::new();
        }
        Err(e) => {
            warn!("Failed to read tickets under '{}': {}", key, e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Ticket>>(&raw) {
        Ok(tickets) => {
            info!("Loaded {} tickets from '{}'", tickets.len(), key);
            tickets
        }
        Err(e) => {
            warn!("Stored tickets under '{}' are unreadable, starting empty: {}", key, e);
            Vec::new()
        }
    }
}
