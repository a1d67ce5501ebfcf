//! Confirmation screen shown once the record has been submitted

use crate::app::App;
use crate::feedback::FeedbackRecord;
use crate::platform::COPY_SHORTCUT;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn summary_lines(record: &FeedbackRecord) -> Vec<Line<'static>> {
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:>16}: "), Style::default().fg(Color::DarkGray)),
            Span::raw(value),
        ])
    };

    vec![
        row("Showroom", record.showroom.clone()),
        row("Date", record.date.to_string()),
        row(
            "Sales Executive",
            format!("{} ({})", record.sales_exec_name, record.sales_exec_number),
        ),
        row("Customer", record.customer_name.clone()),
        row("Customer Number", record.customer_number.clone()),
        row("Address", record.customer_address.replace('\n', ", ")),
    ]
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Thank You!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Your feedback has been submitted successfully."),
        Line::from(""),
    ];

    if let Some(record) = app.controller.record() {
        lines.extend(
            summary_lines(&record)
                .into_iter()
                .map(|line| line.alignment(Alignment::Left)),
        );
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        format!("{COPY_SHORTCUT} copy as JSON   n new feedback   q quit"),
        Style::default().fg(Color::DarkGray),
    )));

    let height = (lines.len() as u16).min(area.height);
    let width = area.width.min(64);
    let content_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        content_area,
    );
}
