//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::App;
use crate::core::storage::MemoryStorage;
use crate::core::store::DEFAULT_STORAGE_KEY;

/// Creates a test App backed by empty in-memory storage.
pub fn test_app() -> App {
    App::new(Box::new(MemoryStorage::new()), DEFAULT_STORAGE_KEY)
}

/// Creates a test App holding the given `(title, description)` tickets, in order.
pub fn test_app_with(tickets: &[(&str, &str)]) -> App {
    let mut app = test_app();
    for (title, description) in tickets {
        app.store.create(title.to_string(), description.to_string());
    }
    app
}
