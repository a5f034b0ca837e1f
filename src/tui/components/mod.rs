//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Heading, status message and ticket count
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `TicketTable`: Selectable table of tickets (persistent `TicketTableState`)
//! - `EditorForm`: Modal create/edit form
//! - `TextField`: Editable text box used by the form
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields or
//! constructor arguments), never by reaching into `App` themselves:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! TicketTable::new(&mut tui.table, app.store.tickets()).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── ticket_table.rs  (Ticket list with row actions)
//! ├── editor_form.rs   (Create/Edit modal)
//! └── text_field/      (Text input with wrapping and cursor)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod editor_form;
pub mod text_field;
pub mod ticket_table;
pub use editor_form::{EditorForm, FormEvent};
pub use ticket_table::{TableEvent, TicketTable, TicketTableState};
