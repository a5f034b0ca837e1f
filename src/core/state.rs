//! # Application State
//!
//! Core business state for the helpdesk. Domain logic only, no
//! TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: TicketStore          // tickets + persistence mirror
//! ├── editor: Editor              // modal form (hidden or drafting)
//! └── status_message: String      // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::storage::{FileStorage, Storage};
use crate::core::store::TicketStore;
use crate::core::editor::Editor;

pub struct App {
    pub store: TicketStore,
    pub editor: Editor,
    pub status_message: String,
}

impl App {
    pub fn new(storage: Box<dyn Storage>, storage_key: &str) -> Self {
        let store = TicketStore::load(storage, storage_key);
        let status_message = match store.len() {
            0 => String::from("No tickets yet"),
            1 => String::from("Loaded 1 ticket"),
            n => format!("Loaded {} tickets", n),
        };
        Self {
            store,
            editor: Editor::default(),
            status_message,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            Box::new(FileStorage::new(&config.data_dir)),
            &config.storage_key,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStorage;
    use crate::core::store::DEFAULT_STORAGE_KEY;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "No tickets yet");
        assert!(app.store.is_empty());
        assert!(!app.editor.is_visible());
    }

    #[test]
    fn test_app_status_counts_loaded_tickets() {
        let raw = r#"[{"id":1,"title":"a","description":""},{"id":2,"title":"b","description":""}]"#;
        let app = App::new(
            Box::new(MemoryStorage::with_item(DEFAULT_STORAGE_KEY, raw)),
            DEFAULT_STORAGE_KEY,
        );
        assert_eq!(app.status_message, "Loaded 2 tickets");
    }
}
