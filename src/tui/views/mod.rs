// Views module - screen-level rendering logic
//
// One screen: title bar with category buttons, search field, the current page
// of thoughts, page buttons and the status bar. Modals and the toast are
// drawn on top.

mod modal;

use super::app::App;
use crate::tui::components::{pager_bar, search_bar, status_bar, thought_list, title_bar};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    app.hits.clear();

    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title + categories
            Constraint::Length(1), // search
            Constraint::Min(5),    // thoughts
            Constraint::Length(1), // pages
            Constraint::Length(2), // status
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    search_bar::render(f, chunks[1], app);
    thought_list::render(f, chunks[2], app);
    pager_bar::render(f, chunks[3], app);
    status_bar::render(f, chunks[4], app);

    // Render modal overlay (on top of everything)
    // Content underneath must not react to clicks while it is open
    if let Some(modal_state) = app.modal.clone() {
        app.hits.clear();
        modal::render(f, &modal_state, app);
    } else {
        app.modal_area = None;
    }

    // Render toast notification (on top of modal too)
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    // Clear expired toast after render
    app.clear_expired_toast();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::thoughts::{sample, ThoughtId};
    use crate::tui::hit::HitTarget;
    use crate::tui::modal::Modal;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn loaded_app() -> App {
        let mut app = App::new(&Config::default(), LogBuffer::new());
        let thoughts = (0..3)
            .map(|i| sample(i, &format!("Quote {}", i + 1), Some("Life")))
            .collect();
        app.on_loaded(Ok(thoughts));
        app
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn draws_page_and_registers_hits() {
        let mut app = loaded_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Thoughtbook"));
        assert!(text.contains("\"Quote 1\""));
        assert!(text.contains("- Author 3"));

        let mut thoughts = 0;
        for row in 0..40 {
            for col in 0..100 {
                if let Some(HitTarget::Thought(_)) = app.hits.at(col, row) {
                    thoughts += 1;
                }
            }
        }
        assert!(thoughts > 0);
    }

    #[test]
    fn open_modal_hides_underlying_hits() {
        let mut app = loaded_app();
        app.modal = Some(Modal::detail(ThoughtId(0)));
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        assert!(app.modal_area.is_some());
        for row in 0..40 {
            for col in 0..100 {
                assert!(!matches!(
                    app.hits.at(col, row),
                    Some(HitTarget::Thought(_)) | Some(HitTarget::Page(_))
                ));
            }
        }
        assert!(screen_text(&terminal).contains("Thought #0"));
    }

    #[test]
    fn loading_screen_has_no_thoughts() {
        let mut app = App::new(&Config::default(), LogBuffer::new());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert!(screen_text(&terminal).contains("Loading thoughts"));
    }
}
