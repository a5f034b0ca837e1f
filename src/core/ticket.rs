//! # Tickets
//!
//! The single record type and the generator that hands out its ids.
//!
//! Ids come from the wall clock (milliseconds since the Unix epoch). Two
//! tickets created inside the same millisecond would collide, so the
//! generator never returns a value at or below the last one it issued.
//!
//! Ids are signed: stored files may hold any JSON integer, including
//! negative ones, and a single odd id must not make the whole list unreadable.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique ticket identifier. Persisted as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(pub i64);

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A support request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
}

/// Timestamp-based id source that is strictly increasing.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Seed the generator so it never reissues an id already in `tickets`.
    pub fn seeded_from(tickets: &[Ticket]) -> Self {
        Self {
            last: tickets.iter().map(|t| t.id.0).max().unwrap_or(0).max(0),
        }
    }

    pub fn next_id(&mut self) -> TicketId {
        self.next_at(Utc::now().timestamp_millis())
    }

    // Saturates at i64::MAX rather than overflowing
    fn next_at(&mut self, now_millis: i64) -> TicketId {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        TicketId(id)
    }
}
