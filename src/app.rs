//! Application state and core logic

use crate::config::FeedbackConfig;
use crate::feedback::{StepFormController, SubmissionSink};
use crate::state::{AppState, BannerState, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Step controller owning the form session
    pub controller: StepFormController,
    /// Destination for completed records
    sink: Box<dyn SubmissionSink>,
    /// User configuration
    pub config: FeedbackConfig,
    /// Banner animation state, present while on the banner
    pub banner_state: Option<BannerState>,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: FeedbackConfig, sink: Box<dyn SubmissionSink>) -> Self {
        let controller = StepFormController::new();
        let mut state = AppState::default();
        state.sync_with(controller.session());
        tracing::info!(session_id = %controller.session().id(), "feedback session started");

        Self {
            state,
            controller,
            sink,
            banner_state: Some(BannerState::new(config.animate_banner())),
            config,
            status_message: None,
            quit: false,
        }
    }

    /// Update banner animation state
    pub fn update_banner(&mut self, terminal_height: u16) {
        if let Some(ref mut banner) = self.banner_state {
            banner.update(terminal_height);
        }
    }

    /// Check if the banner is still animating
    pub fn is_animating(&self) -> bool {
        self.banner_state.as_ref().is_some_and(|b| !b.is_ready())
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Banner => self.handle_banner_key(key).await?,
            View::ThankYou => self.handle_thank_you_key(key)?,
            _ => self.handle_form_key(key).await?,
        }
        Ok(())
    }

    /// Handle keys on the banner screen
    async fn handle_banner_key(&mut self, key: KeyEvent) -> Result<()> {
        // Any key finishes the animation first
        if let Some(ref mut banner) = self.banner_state {
            if !banner.is_ready() {
                banner.skip();
                return Ok(());
            }
        }

        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.submit_step().await;
        }
        Ok(())
    }

    /// Handle keys on the data-entry steps
    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_button = self.state.form.is_button_active();
        let on_choice = self.state.form.is_active_field_choice();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if ctrl => self.submit_step().await,
            KeyCode::Char('u') if ctrl => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.clear();
                }
            }
            KeyCode::Esc => self.state.clear_field_errors(),
            // Radio grid navigation
            KeyCode::Left if on_choice => self.move_choice_cursor(-1, 0),
            KeyCode::Right if on_choice => self.move_choice_cursor(1, 0),
            KeyCode::Up if on_choice => self.move_choice_cursor(0, -1),
            KeyCode::Down if on_choice => self.move_choice_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') if on_choice => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.select_cursor();
                }
            }
            KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Down => self.state.form.next_field(),
            KeyCode::Enter if on_button => self.submit_step().await,
            KeyCode::Enter if self.state.form.is_active_field_multiline() => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_newline();
                }
            }
            KeyCode::Enter => self.state.form.next_field(),
            // Form field input (only when not on the button)
            KeyCode::Char(c) if !on_button && !ctrl => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace if !on_button => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys on the thank-you screen
    fn handle_thank_you_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_record();
            }
            KeyCode::Char('n') => self.start_new_feedback(),
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    fn move_choice_cursor(&mut self, columns: isize, rows: isize) {
        if let Some(field) = self.state.form.get_active_field_mut() {
            field.move_cursor(columns, rows);
        }
    }

    /// Submit the active step's inputs to the controller
    async fn submit_step(&mut self) {
        let input = self.state.form.step_input();
        let outcome = self
            .controller
            .advance(input)
            .map(|session| session.is_complete());

        match outcome {
            Ok(complete) => {
                self.state.clear_field_errors();
                self.state.sync_with(self.controller.session());
                if self.state.current_view != View::Banner {
                    self.banner_state = None;
                }
                if complete {
                    self.deliver_record().await;
                }
            }
            Err(errors) => {
                let count = errors.len();
                self.state.set_field_errors(&errors);
                self.status_message = Some(if count == 1 {
                    "1 field needs attention".to_string()
                } else {
                    format!("{count} fields need attention")
                });
            }
        }
    }

    /// Hand the completed record to the sink
    async fn deliver_record(&mut self) {
        let Some(record) = self.controller.record() else {
            tracing::warn!("session completed without a complete record");
            return;
        };

        if let Err(err) = self.sink.submit(&record).await {
            tracing::warn!(session_id = %record.session_id, "submission failed: {err:#}");
            self.push_error(format!("Failed to submit feedback: {err}"));
        }
    }

    /// Throw away the finished session and go back to the banner
    fn start_new_feedback(&mut self) {
        self.controller.reset();
        self.state.sync_with(self.controller.session());
        self.banner_state = Some(BannerState::new(self.config.animate_banner()));
        tracing::info!(session_id = %self.controller.session().id(), "feedback session started");
    }

    /// Copy the submitted record as JSON to the clipboard
    fn copy_record(&mut self) {
        let Some(record) = self.controller.record() else {
            return;
        };

        let result = record
            .to_json_pretty()
            .map_err(anyhow::Error::from)
            .and_then(|json| self.copy_to_clipboard(&json));

        match result {
            Ok(()) => self.status_message = Some("Copied feedback to clipboard".to_string()),
            Err(err) => {
                tracing::warn!("clipboard copy failed: {err:#}");
                self.push_error(format!("Failed to copy to clipboard: {err}"));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{fields, MockSubmissionSink, Step};
    use crate::state::FormState;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn config_without_animation() -> FeedbackConfig {
        FeedbackConfig {
            animate_banner: Some(false),
            ..Default::default()
        }
    }

    fn app_with_sink(sink: MockSubmissionSink) -> App {
        App::new(config_without_animation(), Box::new(sink))
    }

    /// A sink that must never be called
    fn idle_sink() -> MockSubmissionSink {
        let mut sink = MockSubmissionSink::new();
        sink.expect_submit().never();
        sink
    }

    fn press(app: &mut App, event: KeyEvent) {
        assert_eq!(event.kind, KeyEventKind::Press);
        tokio_test::block_on(app.handle_key(event)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, key(KeyCode::Char(c)));
        }
    }

    /// Fill in and submit the showroom step, choosing Vellore
    fn complete_showroom_step(app: &mut App) {
        press(app, key(KeyCode::Down));
        press(app, key(KeyCode::Char(' ')));
        press(app, key(KeyCode::Tab));
        type_text(app, "2024-01-01");
        press(app, key(KeyCode::Tab));
        type_text(app, "E123");
        press(app, key(KeyCode::Tab));
        type_text(app, "Asha");
        press(app, key(KeyCode::Tab));
        press(app, key(KeyCode::Enter));
    }

    fn complete_customer_number_step(app: &mut App) {
        type_text(app, "9876543210");
        press(app, ctrl('s'));
    }

    fn complete_customer_details_step(app: &mut App) {
        type_text(app, "Kumar");
        press(app, key(KeyCode::Enter));
        type_text(app, "12 Gandhi Road");
        press(app, key(KeyCode::Enter));
        type_text(app, "Vellore");
        press(app, ctrl('s'));
    }

    mod banner {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_banner() {
            let app = app_with_sink(idle_sink());
            assert_eq!(app.state.current_view, View::Banner);
            assert_eq!(app.controller.current_step(), Step::Banner);
        }

        #[test]
        fn test_enter_moves_to_showroom_step() {
            let mut app = app_with_sink(idle_sink());
            press(&mut app, key(KeyCode::Enter));

            assert_eq!(app.state.current_view, View::Showroom);
            assert!(matches!(app.state.form, FormState::Showroom(_)));
            assert!(app.banner_state.is_none());
        }

        #[test]
        fn test_first_key_skips_animation() {
            let mut app = App::new(FeedbackConfig::default(), Box::new(idle_sink()));
            assert!(app.is_animating());

            press(&mut app, key(KeyCode::Enter));
            assert!(!app.is_animating());
            assert_eq!(app.state.current_view, View::Banner);

            press(&mut app, key(KeyCode::Enter));
            assert_eq!(app.state.current_view, View::Showroom);
        }

        #[test]
        fn test_other_keys_do_nothing() {
            let mut app = app_with_sink(idle_sink());
            press(&mut app, key(KeyCode::Char('x')));
            assert_eq!(app.state.current_view, View::Banner);
        }
    }

    mod form_steps {
        use super::*;
        use pretty_assertions::assert_eq;

        fn app_on_showroom_step() -> App {
            let mut app = app_with_sink(idle_sink());
            press(&mut app, key(KeyCode::Enter));
            app
        }

        #[test]
        fn test_empty_submit_shows_all_errors() {
            let mut app = app_on_showroom_step();
            press(&mut app, ctrl('s'));

            assert_eq!(app.state.current_view, View::Showroom);
            assert_eq!(
                app.state.field_error(fields::SHOWROOM),
                Some("Please select a showroom")
            );
            assert_eq!(
                app.state.field_error(fields::SALES_EXEC_NAME),
                Some("Enter Sales Executive Name")
            );
            assert_eq!(app.state.field_errors.len(), 4);
            assert_eq!(
                app.status_message.as_deref(),
                Some("4 fields need attention")
            );
        }

        #[test]
        fn test_esc_clears_errors_but_keeps_input() {
            let mut app = app_on_showroom_step();
            press(&mut app, key(KeyCode::Tab));
            type_text(&mut app, "2024");
            press(&mut app, ctrl('s'));
            assert!(!app.state.field_errors.is_empty());

            press(&mut app, key(KeyCode::Esc));
            assert!(app.state.field_errors.is_empty());
            assert_eq!(
                app.state.form.get_active_field().map(|f| f.as_text()),
                Some("2024")
            );
        }

        #[test]
        fn test_grid_arrows_move_highlight_not_focus() {
            let mut app = app_on_showroom_step();
            press(&mut app, key(KeyCode::Right));
            press(&mut app, key(KeyCode::Down));

            let field = app.state.form.get_active_field().unwrap();
            assert_eq!(field.name, fields::SHOWROOM);
            assert_eq!(field.cursor(), Some(3));
        }

        #[test]
        fn test_up_down_move_focus_on_text_fields() {
            let mut app = app_on_showroom_step();
            press(&mut app, key(KeyCode::Tab));
            press(&mut app, key(KeyCode::Down));
            assert_eq!(
                app.state.form.get_active_field().map(|f| f.name),
                Some(fields::SALES_EXEC_NUMBER)
            );
            press(&mut app, key(KeyCode::Up));
            assert_eq!(
                app.state.form.get_active_field().map(|f| f.name),
                Some(fields::DATE)
            );
        }

        #[test]
        fn test_ctrl_u_clears_active_field() {
            let mut app = app_on_showroom_step();
            press(&mut app, key(KeyCode::Tab));
            type_text(&mut app, "2024-01");
            press(&mut app, ctrl('u'));
            assert_eq!(
                app.state.form.get_active_field().map(|f| f.as_text()),
                Some("")
            );
        }

        #[test]
        fn test_valid_showroom_step_advances() {
            let mut app = app_on_showroom_step();
            complete_showroom_step(&mut app);

            assert_eq!(app.state.current_view, View::CustomerNumber);
            let values = app.controller.values();
            assert_eq!(values.get(fields::SHOWROOM).map(String::as_str), Some("Vellore"));
            assert_eq!(values.get(fields::DATE).map(String::as_str), Some("2024-01-01"));
            assert!(app.state.field_errors.is_empty());
        }

        #[test]
        fn test_customer_number_ignores_letters() {
            let mut app = app_on_showroom_step();
            complete_showroom_step(&mut app);
            type_text(&mut app, "98ab76");
            press(&mut app, ctrl('s'));

            assert_eq!(app.state.current_view, View::CustomerDetails);
            assert_eq!(
                app.controller
                    .values()
                    .get(fields::CUSTOMER_NUMBER)
                    .map(String::as_str),
                Some("9876")
            );
        }
    }

    mod completion {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_full_pass_submits_record_once() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit()
                .withf(|record| {
                    record.showroom == "Vellore"
                        && record.sales_exec_name == "Asha"
                        && record.customer_number == "9876543210"
                        && record.customer_address == "12 Gandhi Road\nVellore"
                })
                .times(1)
                .returning(|_| Ok(()));

            let mut app = app_with_sink(sink);
            press(&mut app, key(KeyCode::Enter));
            complete_showroom_step(&mut app);
            complete_customer_number_step(&mut app);
            complete_customer_details_step(&mut app);

            assert_eq!(app.state.current_view, View::ThankYou);
            assert!(app.controller.is_complete());
            assert_eq!(app.controller.current_step(), Step::CustomerDetails);
            assert!(!app.state.has_errors());
        }

        #[test]
        fn test_sink_failure_shows_error_dialog() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("sink offline")));

            let mut app = app_with_sink(sink);
            press(&mut app, key(KeyCode::Enter));
            complete_showroom_step(&mut app);
            complete_customer_number_step(&mut app);
            complete_customer_details_step(&mut app);

            assert_eq!(app.state.current_view, View::ThankYou);
            assert_eq!(
                app.state.current_error(),
                Some("Failed to submit feedback: sink offline")
            );

            // Keys other than Enter/Esc leave the dialog up
            press(&mut app, key(KeyCode::Char('q')));
            assert!(app.state.has_errors());
            assert!(!app.should_quit());

            press(&mut app, key(KeyCode::Esc));
            assert!(!app.state.has_errors());
        }

        fn finished_app() -> App {
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit().returning(|_| Ok(()));
            let mut app = app_with_sink(sink);
            press(&mut app, key(KeyCode::Enter));
            complete_showroom_step(&mut app);
            complete_customer_number_step(&mut app);
            complete_customer_details_step(&mut app);
            app
        }

        #[test]
        fn test_copy_shortcut_copies_or_reports_failure() {
            let mut app = finished_app();
            let copy = KeyEvent::new(KeyCode::Char('y'), crate::platform::COPY_MODIFIER);
            press(&mut app, copy);

            // Headless machines have no clipboard; that must surface as a dialog
            let copied = app.status_message.as_deref() == Some("Copied feedback to clipboard");
            let reported = app
                .state
                .current_error()
                .is_some_and(|e| e.starts_with("Failed to copy to clipboard"));
            assert!(copied != reported, "exactly one outcome expected");
            assert!(!app.should_quit());
            assert_eq!(app.state.current_view, View::ThankYou);
        }

        #[test]
        fn test_copy_without_modifier_does_nothing() {
            let mut app = finished_app();
            press(&mut app, key(KeyCode::Char('y')));
            assert!(app.status_message.is_none());
            assert!(!app.state.has_errors());
            assert!(!app.should_quit());
        }

        #[test]
        fn test_q_quits_from_thank_you() {
            let mut app = finished_app();
            press(&mut app, key(KeyCode::Char('q')));
            assert!(app.should_quit());
        }

        #[test]
        fn test_n_starts_a_new_session() {
            let mut app = finished_app();
            let old_id = app.controller.session().id();

            press(&mut app, key(KeyCode::Char('n')));

            assert_eq!(app.state.current_view, View::Banner);
            assert!(app.controller.values().is_empty());
            assert_ne!(app.controller.session().id(), old_id);
            assert!(app.banner_state.is_some());
        }
    }
}
