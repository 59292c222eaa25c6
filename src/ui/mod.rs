//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod outcome;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);

    match app.state.current_view {
        View::Form => forms::draw_lead_form(frame, main_area, app),
        View::ThankYou => outcome::draw_thank_you(frame, main_area),
        View::Failed => outcome::draw_failed(frame, main_area),
    }

    layout::draw_status_bar(frame, status_area, app);

    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LeadConfig;
    use crate::sink::MockLeadSinkTrait;
    use crate::state::Degree;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use std::sync::Arc;

    fn new_app() -> App {
        App::new(&LeadConfig::default(), Arc::new(MockLeadSinkTrait::new()))
    }

    fn buffer_to_string(buf: &Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push_str(buf[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    mod form_view {
        use super::*;

        #[test]
        fn test_renders_all_labels() {
            let output = render(&new_app(), 100, 24);
            for label in ["Name*", "Mobile*", "Email*", "Location*"] {
                assert!(output.contains(label), "missing {label}");
            }
            assert!(output.contains("Which Degree do you want to pursue?*"));
            assert!(output.contains("SELECT COURSE*"));
            assert!(output.contains("CHOOSE STUDY DESTINATION(S)*"));
            assert!(output.contains("Terms of Use and Privacy Policy"));
            assert!(output.contains("Submit"));
        }

        #[test]
        fn test_course_row_follows_degree() {
            let mut app = new_app();
            assert!(render(&app, 100, 24).contains("[ SAT ]"));
            assert!(!render(&app, 100, 24).contains("[ TOLC ]"));

            app.state.form.select_degree(Degree::Bachelors);
            assert!(render(&app, 100, 24).contains("[ TOLC ]"));

            app.state.form.select_degree(Degree::Masters);
            let output = render(&app, 100, 24);
            assert!(!output.contains("[ SAT ]"));
            assert!(output.contains("[ GMAT ]"));
        }

        #[test]
        fn test_renders_typed_value() {
            let mut app = new_app();
            app.state
                .form
                .update_field(crate::state::FieldName::Location, "Pune");
            assert!(render(&app, 100, 24).contains("Pune"));
        }

        #[test]
        fn test_status_bar_shows_route() {
            assert!(render(&new_app(), 100, 24).contains(" / "));
        }
    }

    mod overlays {
        use super::*;

        #[test]
        fn test_error_dialog_drawn_over_form() {
            let mut app = new_app();
            app.push_error("Please fill all fields.");
            let output = render(&app, 100, 24);
            assert!(output.contains("Cannot submit"));
            assert!(output.contains("Please fill all fields."));
        }

        #[test]
        fn test_no_dialog_without_errors() {
            assert!(!render(&new_app(), 100, 24).contains("Cannot submit"));
        }
    }

    mod outcome_views {
        use super::*;

        #[test]
        fn test_thank_you_page() {
            let mut app = new_app();
            app.navigate(View::ThankYou);
            let output = render(&app, 100, 24);
            assert!(output.contains("Thank you!"));
            assert!(output.contains("/thankyou"));
        }

        #[test]
        fn test_failed_page() {
            let mut app = new_app();
            app.navigate(View::Failed);
            let output = render(&app, 100, 24);
            assert!(output.contains("Submission failed"));
            assert!(output.contains("/failed"));
        }
    }
}
