//! Customer number step

use super::draw_submit_button;
use super::field_renderer::draw_field;
use crate::state::{CustomerNumberForm, Form};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use std::collections::BTreeMap;

pub fn draw(
    frame: &mut Frame,
    area: Rect,
    form: &CustomerNumberForm,
    errors: &BTreeMap<String, String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Customer number
            Constraint::Length(3), // Continue button
            Constraint::Min(0),
        ])
        .split(area);

    let field = &form.customer_number;
    draw_field(
        frame,
        chunks[0],
        field,
        form.active_field() == 0,
        errors.get(field.name).map(String::as_str),
    );
    draw_submit_button(frame, chunks[1], "Continue", form.is_button_active());
}
