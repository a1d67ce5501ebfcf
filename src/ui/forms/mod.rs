//! Form rendering module
//!
//! One renderer per data-entry step plus shared field helpers.

mod customer_details_form;
mod customer_number_form;
mod field_renderer;
mod showroom_form;

use super::components::render_button;
use crate::app::App;
use crate::state::FormState;
use ratatui::{layout::Rect, Frame};

const FORM_MAX_WIDTH: u16 = 72;
const BUTTON_WIDTH: u16 = 16;

/// Draw the form for the current step; the step title lives in the header
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let column = centered_column(area, FORM_MAX_WIDTH);

    let errors = &app.state.field_errors;
    match &app.state.form {
        FormState::Showroom(form) => showroom_form::draw(frame, column, form, errors),
        FormState::CustomerNumber(form) => customer_number_form::draw(frame, column, form, errors),
        FormState::CustomerDetails(form) => {
            customer_details_form::draw(frame, column, form, errors)
        }
        FormState::None => {}
    }
}

/// Center a column of at most `max_width` inside `area`
fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Draw the submit button right-aligned in `area`
fn draw_submit_button(frame: &mut Frame, area: Rect, label: &str, is_active: bool) {
    let width = BUTTON_WIDTH.min(area.width);
    let button_area = Rect {
        x: area.x + area.width - width,
        width,
        ..area
    };
    render_button(frame, button_area, label, is_active);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_column_narrows_wide_areas() {
        let column = centered_column(Rect::new(0, 0, 100, 20), 72);
        assert_eq!(column, Rect::new(14, 0, 72, 20));
    }

    #[test]
    fn test_centered_column_keeps_narrow_areas() {
        let column = centered_column(Rect::new(2, 1, 40, 20), 72);
        assert_eq!(column, Rect::new(2, 1, 40, 20));
    }
}
