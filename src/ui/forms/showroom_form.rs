//! Showroom step: location radio grid, visit date and sales executive

use super::draw_submit_button;
use super::field_renderer::{draw_field, field_block, field_height};
use crate::feedback::SHOWROOM_GRID_COLUMNS;
use crate::state::{FieldValue, Form, FormField, ShowroomForm};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::collections::BTreeMap;

pub fn draw(
    frame: &mut Frame,
    area: Rect,
    form: &ShowroomForm,
    errors: &BTreeMap<String, String>,
) {
    let active = form.active_field();
    let error = |field: &FormField| errors.get(field.name).map(String::as_str);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(grid_height(&form.showroom)),
            Constraint::Length(field_height(&form.date)),
            Constraint::Length(field_height(&form.sales_exec_number)),
            Constraint::Length(field_height(&form.sales_exec_name)),
            Constraint::Length(3), // Continue button
            Constraint::Min(0),
        ])
        .split(area);

    draw_radio_grid(
        frame,
        chunks[0],
        &form.showroom,
        active == 0,
        error(&form.showroom),
    );
    draw_field(frame, chunks[1], &form.date, active == 1, error(&form.date));
    draw_field(
        frame,
        chunks[2],
        &form.sales_exec_number,
        active == 2,
        error(&form.sales_exec_number),
    );
    draw_field(
        frame,
        chunks[3],
        &form.sales_exec_name,
        active == 3,
        error(&form.sales_exec_name),
    );
    draw_submit_button(frame, chunks[4], "Continue", form.is_button_active());
}

fn grid_height(field: &FormField) -> u16 {
    match &field.value {
        FieldValue::Choice { options, .. } => {
            options.len().div_ceil(SHOWROOM_GRID_COLUMNS) as u16 + 2
        }
        FieldValue::Text(_) => 3,
    }
}

/// Grid lines for a choice field; `(•)` marks the selection and the
/// highlight follows the cursor while the field has focus
fn grid_lines(field: &FormField, is_active: bool, column_width: usize) -> Vec<Line<'static>> {
    let FieldValue::Choice {
        options,
        selected,
        cursor,
    } = &field.value
    else {
        return vec![];
    };

    options
        .chunks(SHOWROOM_GRID_COLUMNS)
        .enumerate()
        .map(|(row, names)| {
            let spans = names
                .iter()
                .enumerate()
                .map(|(col, name)| {
                    let index = row * SHOWROOM_GRID_COLUMNS + col;
                    let marker = if *selected == Some(index) { "(•)" } else { "( )" };
                    let style = if is_active && *cursor == index {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else if *selected == Some(index) {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    let label = format!("{marker} {name}");
                    Span::styled(format!("{label:<column_width$}"), style)
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect()
}

fn draw_radio_grid(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let block = field_block(field.label, is_active, error);
    let column_width = (block.inner(area).width as usize / SHOWROOM_GRID_COLUMNS).max(1);
    let paragraph = Paragraph::new(grid_lines(field, is_active, column_width)).block(block);
    frame.render_widget(paragraph, area);
}
