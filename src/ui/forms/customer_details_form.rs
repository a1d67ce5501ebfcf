//! Customer details step: name and multiline address

use super::draw_submit_button;
use super::field_renderer::{draw_field, field_height};
use crate::state::{CustomerDetailsForm, Form};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use std::collections::BTreeMap;

pub fn draw(
    frame: &mut Frame,
    area: Rect,
    form: &CustomerDetailsForm,
    errors: &BTreeMap<String, String>,
) {
    let active = form.active_field();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(field_height(&form.customer_name)),
            Constraint::Length(field_height(&form.customer_address)),
            Constraint::Length(3), // Submit button
            Constraint::Min(0),
        ])
        .split(area);

    for (index, field) in [&form.customer_name, &form.customer_address]
        .into_iter()
        .enumerate()
    {
        draw_field(
            frame,
            chunks[index],
            field,
            active == index,
            errors.get(field.name).map(String::as_str),
        );
    }
    draw_submit_button(frame, chunks[2], "Submit", form.is_button_active());
}
