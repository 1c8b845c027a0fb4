mod layout;
mod table;

use crate::tui::app::AppState;
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    table::draw_table(f, app);
    if app.help_open() {
        table::draw_help(f);
    }
}
