//! # Core Application Logic
//!
//! This module contains the helpdesk business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Ticket (record)      │
//!                    │  • TicketStore (+save)  │
//!                    │  • Editor (draft form)  │
//!                    │  • Action + update()    │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴─────────────┐
//!                    ▼                         ▼
//!             ┌────────────┐            ┌────────────┐
//!             │    TUI     │            │  Storage   │
//!             │  Adapter   │            │ (key/value │
//!             │ (ratatui)  │            │   shim)    │
//!             └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`ticket`]: The `Ticket` record and id generation
//! - [`storage`]: The `Storage` trait and its file / memory backends
//! - [`store`]: `TicketStore` — the collection plus its persistence mirror
//! - [`editor`]: `Editor` — the modal draft state machine
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings resolution (defaults → file → env → CLI)

pub mod action;
pub mod config;
pub mod editor;
pub mod state;
pub mod storage;
pub mod store;
pub mod ticket;
