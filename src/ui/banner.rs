//! Banner screen with the start button

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BUTTON_LABEL: &str = "ENTER YOUR FEEDBACK";
const BUTTON_WIDTH: u16 = 27;

fn banner_lines(brand: &str) -> Vec<Line<'static>> {
    let rule = "═".repeat(brand.chars().count() + 8);
    vec![
        Line::from(Span::styled(rule.clone(), Style::default().fg(Color::Yellow))),
        Line::from(Span::styled(
            brand.to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(rule, Style::default().fg(Color::Yellow))),
        Line::from(""),
        Line::from(Span::styled(
            "We value your feedback",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ]
}

/// Draw the banner, shifted down by the current slide offset
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let lines = banner_lines(app.config.brand_name());
    let offset = app
        .banner_state
        .as_ref()
        .map(|b| b.slide_offset.round() as u16)
        .unwrap_or(0);
    let ready = !app.is_animating();

    let block_height = lines.len() as u16 + BUTTON_HEIGHT;
    let top = area.y + area.height.saturating_sub(block_height) / 2 + offset;
    let bottom = area.y + area.height;
    if top >= bottom {
        return;
    }

    let text_height = (lines.len() as u16).min(bottom - top);
    let text_area = Rect {
        x: area.x,
        y: top,
        width: area.width,
        height: text_height,
    };
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        text_area,
    );

    let button_y = top + text_height;
    if button_y + BUTTON_HEIGHT <= bottom {
        let width = BUTTON_WIDTH.min(area.width);
        let button_area = Rect {
            x: area.x + (area.width - width) / 2,
            y: button_y,
            width,
            height: BUTTON_HEIGHT,
        };
        render_button(frame, button_area, BUTTON_LABEL, ready);
    }
}
