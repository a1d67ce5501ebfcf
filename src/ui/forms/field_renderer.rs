//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a text field occupies, borders included
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline {
        5
    } else {
        3
    }
}

/// Block with the field label on top and the validation message, if any,
/// on the bottom border
pub fn field_block<'a>(label: &'a str, is_active: bool, error: Option<&'a str>) -> Block<'a> {
    let border_color = match (error, is_active) {
        (Some(_), _) => Color::Red,
        (None, true) => Color::Cyan,
        (None, false) => Color::DarkGray,
    };

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }
    block
}

/// Draw a text field
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );
    let value = field.display_value();

    let mut lines: Vec<Line> = if value.is_empty() {
        let hint = match (field.placeholder, is_active) {
            (Some(placeholder), _) => placeholder,
            (None, false) => "(empty)",
            (None, true) => "",
        };
        let mut spans = vec![];
        if is_active {
            spans.push(cursor.clone());
        }
        spans.push(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        vec![Line::from(spans)]
    } else {
        let style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        // `lines()` drops a trailing empty line, keep it so the cursor
        // lands after a fresh newline
        value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect()
    };

    if is_active && !value.is_empty() {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(field_block(field.label, is_active, error));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline_fields_are_taller() {
        assert_eq!(field_height(&FormField::text("customerName", "Name")), 3);
        assert_eq!(
            field_height(&FormField::multiline("customerAddress", "Address")),
            5
        );
    }
}
