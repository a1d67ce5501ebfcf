//! UI module for rendering the TUI

mod banner;
mod components;
mod forms;
mod layout;
mod thank_you;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, content_area, status_area) = layout::create_layout(frame.area());

    // The banner has the screen to itself
    if app.state.current_view != View::Banner {
        layout::draw_header(frame, header_area, app);
    }

    match app.state.current_view {
        View::Banner => banner::draw(frame, content_area, app),
        View::Showroom | View::CustomerNumber | View::CustomerDetails => {
            forms::draw(frame, content_area, app)
        }
        View::ThankYou => thank_you::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Error dialog overlays everything
    if let Some(message) = app.state.current_error() {
        let pending = app.state.error_queue.len().saturating_sub(1);
        render_error_dialog(frame, message, pending);
    }
}
