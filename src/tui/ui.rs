use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{TicketTable, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    TitleBar::new(app.status_message.clone(), app.store.len()).render(frame, title_area);
    TicketTable::new(&mut tui.table, app.store.tickets()).render(frame, main_area);

    // Modal goes last so it paints over the table
    if let Some(form) = tui.editor_form.as_mut() {
        form.render(frame, frame.area());
    }
}
