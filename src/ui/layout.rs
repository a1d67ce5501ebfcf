//! Layout components (header, status bar)

use crate::app::App;
use crate::feedback::Step;
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the brand name and the step indicator
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let line = header_line(
        app.config.brand_name(),
        app.controller.current_step(),
        app.controller.is_complete(),
    );
    frame.render_widget(Paragraph::new(line), area);
}

/// One dot per step followed by the current step's number and title
fn header_line(brand: &str, current: Step, complete: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" {brand} "),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    for step in Step::ALL {
        let (dot, color) = if complete || step < current {
            ("●", Color::Green)
        } else if step == current {
            ("●", Color::Cyan)
        } else {
            ("○", Color::DarkGray)
        };
        spans.push(Span::styled(dot, Style::default().fg(color)));
    }

    let label = if complete {
        "  Complete".to_string()
    } else {
        format!(
            "  Step {}/{} · {}",
            current.number(),
            Step::ALL.len(),
            current.title()
        )
    };
    spans.push(Span::styled(
        label,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    Line::from(spans)
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {}", view_hints(app.state.current_view)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        let color = if app.state.field_errors.is_empty() {
            Color::Green
        } else {
            Color::Yellow
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current view
fn view_hints(view: View) -> String {
    match view {
        View::Banner => "Enter:start  any key:skip animation".to_string(),
        View::Showroom => format!(
            "Tab:next  arrows:pick  Space:select  {SUBMIT_SHORTCUT}:continue  Esc:clear"
        ),
        View::CustomerNumber => {
            format!("Tab:next  ^U:clear  {SUBMIT_SHORTCUT}:continue  Esc:clear")
        }
        View::CustomerDetails => format!(
            "Tab:next  Enter:new line  {SUBMIT_SHORTCUT}:submit  Esc:clear"
        ),
        View::ThankYou => format!("{COPY_SHORTCUT}:copy  n:new feedback  q:quit"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_header_and_status() {
        let (header, content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 1);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
        assert_eq!(content.height, 22);
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_header_shows_current_step_title() {
        let text = line_text(&header_line("Feedback", Step::CustomerDetails, false));
        assert_eq!(text, " Feedback  ●●●●  Step 4/4 · Customer Details");
    }

    #[test]
    fn test_header_fits_eighty_columns_on_every_step() {
        for step in Step::ALL {
            let line = header_line("Sri Jewellers", step, false);
            assert!(line.width() <= 80, "{step:?} header is {} wide", line.width());
        }
    }

    #[test]
    fn test_header_when_complete() {
        let text = line_text(&header_line("Feedback", Step::CustomerDetails, true));
        assert!(text.ends_with("Complete"));
    }

    #[test]
    fn test_form_hints_mention_submit_shortcut() {
        assert!(view_hints(View::Showroom).contains(SUBMIT_SHORTCUT));
        assert!(view_hints(View::CustomerDetails).contains("submit"));
    }

    #[test]
    fn test_thank_you_hints_mention_copy() {
        assert!(view_hints(View::ThankYou).contains(COPY_SHORTCUT));
    }
}
