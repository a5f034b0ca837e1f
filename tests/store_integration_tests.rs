use helpdesk::core::action::{Action, update};
use helpdesk::core::state::App;
use helpdesk::core::storage::{FileStorage, Storage};
use helpdesk::core::store::{DEFAULT_STORAGE_KEY, TicketStore};
use helpdesk::core::ticket::Ticket;
use std::fs;
use std::path::Path;

// ============================================================================
// Helper Functions
// ============================================================================

/// Opens a store on `dir` the way a fresh process start would.
fn open_session(dir: &Path) -> TicketStore {
    TicketStore::load(Box::new(FileStorage::new(dir)), DEFAULT_STORAGE_KEY)
}

fn stored_tickets(dir: &Path) -> Vec<Ticket> {
    let raw = fs::read_to_string(dir.join("tickets.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

// ============================================================================
// Persistence Across Sessions
// ============================================================================

#[test]
fn test_tickets_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = open_session(dir.path());
    let a = first.create("Printer".to_string(), "Out of toner".to_string());
    let b = first.create("Laptop".to_string(), "Won't boot\nsince update".to_string());
    drop(first);

    let second = open_session(dir.path());
    let ids: Vec<_> = second.tickets().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![a, b]);
    assert_eq!(second.tickets()[1].description, "Won't boot\nsince update");
}

#[test]
fn test_file_mirrors_memory_after_every_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_session(dir.path());

    let a = store.create("A".to_string(), "B".to_string());
    assert_eq!(stored_tickets(dir.path()), store.tickets());

    let b = store.create("C".to_string(), "D".to_string());
    store.update(a, "A2".to_string(), "B2".to_string());
    assert_eq!(stored_tickets(dir.path()), store.tickets());

    store.delete(b);
    assert_eq!(stored_tickets(dir.path()), store.tickets());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_persisted_layout_is_plain_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_session(dir.path());
    let id = store.create("T".to_string(), "D".to_string());

    let raw = fs::read_to_string(dir.path().join("tickets.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &value.as_array().unwrap()[0];
    assert_eq!(entry["id"].as_i64(), Some(id.0));
    assert_eq!(entry["title"], "T");
    assert_eq!(entry["description"], "D");
}

#[test]
fn test_ids_stay_unique_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let mut first = open_session(dir.path());
    let a = first.create("one".to_string(), String::new());
    drop(first);

    let mut second = open_session(dir.path());
    let b = second.create("two".to_string(), String::new());
    assert!(b > a);
}

// ============================================================================
// Degraded Startup
// ============================================================================

#[test]
fn test_corrupt_file_starts_empty_and_is_replaced_on_save() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("tickets.json"), "{ not json").unwrap();

    let mut store = open_session(dir.path());
    assert!(store.is_empty());

    store.create("fresh".to_string(), String::new());
    assert_eq!(stored_tickets(dir.path()).len(), 1);
}

#[test]
fn test_empty_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("tickets.json"), "").unwrap();
    assert!(open_session(dir.path()).is_empty());
}

#[test]
fn test_missing_data_dir_is_created_on_first_save() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("not").join("yet");

    let mut store = open_session(&data_dir);
    assert!(store.is_empty());
    store.create("first".to_string(), String::new());

    assert!(data_dir.join("tickets.json").exists());
}

#[test]
fn test_custom_key_uses_its_own_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = TicketStore::load(Box::new(FileStorage::new(dir.path())), "support");
    store.create("x".to_string(), String::new());

    assert!(dir.path().join("support.json").exists());
    assert!(!dir.path().join("tickets.json").exists());
    let storage = FileStorage::new(dir.path());
    assert!(storage.get_item("support").unwrap().is_some());
}

// ============================================================================
// Editor Flows Against Real Storage
// ============================================================================

#[test]
fn test_cancelled_edit_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::new(Box::new(FileStorage::new(dir.path())), DEFAULT_STORAGE_KEY);
    update(&mut app, Action::OpenCreate);
    update(&mut app, Action::SetTitle("kept".to_string()));
    update(&mut app, Action::SaveDraft);
    let before = fs::read_to_string(dir.path().join("tickets.json")).unwrap();

    let id = app.store.tickets()[0].id;
    update(&mut app, Action::OpenEdit(id));
    update(&mut app, Action::SetTitle("scratch".to_string()));
    update(&mut app, Action::SetDescription("scratch".to_string()));
    update(&mut app, Action::CancelDraft);

    let after = fs::read_to_string(dir.path().join("tickets.json")).unwrap();
    assert_eq!(before, after);
    assert_eq!(app.store.tickets()[0].title, "kept");
}
