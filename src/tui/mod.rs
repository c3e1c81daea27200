// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks, the initial load)
// - Rendering the UI
// - Carrying out copy/share requests the App hands back

pub mod app;
pub mod components;
pub mod hit;
pub mod modal;
pub mod share;
pub mod theme;
pub mod views;
pub mod wrap;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::render::share::ShareAction;
use crate::thoughts::loader::LoadError;
use crate::thoughts::Thought;
use anyhow::{Context, Result};
use app::{App, ShareRequest};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Timer resolution for the search debounce and highlight expiry
const TICK: Duration = Duration::from_millis(100);

/// Run the TUI
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal. The collection arrives on `load_rx` while the
/// viewer is already showing its loading state.
pub async fn run_tui(
    config: &Config,
    log_buffer: LogBuffer,
    mut load_rx: mpsc::Receiver<Result<Vec<Thought>, LoadError>>,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app, &mut load_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Keyboard and mouse input
/// 2. Timer ticks (debounced search, highlight and toast expiry)
/// 3. The load result, delivered once
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    load_rx: &mut mpsc::Receiver<Result<Vec<Thought>, LoadError>>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(TICK);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            input = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            } => {
                let now = Instant::now();
                let request = match input {
                    Some(Event::Key(key_event)) => handle_key_event(app, key_event, now),
                    Some(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event, now),
                    _ => None,
                };
                if let Some(request) = request {
                    app.toast = Some(share::perform(&request));
                }
            }

            _ = tick_interval.tick() => {}

            Some(result) = load_rx.recv() => {
                app.on_loaded(result);
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Search field → Global
fn handle_key_event(app: &mut App, key_event: KeyEvent, now: Instant) -> Option<ShareRequest> {
    // Repeat and Release events would double up keys on some terminals
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        app.should_quit = true;
        return None;
    }

    // Layer 1: Modal captures all input when active
    if let Some(modal) = &app.modal {
        let action = modal.handle_input(key_event.code);
        return app.apply_modal_action(action);
    }

    // Layer 2: Search field captures typing while editing
    if app.search.editing {
        handle_search_input(app, key_event, now);
        return None;
    }

    // Layer 3: Global keys
    handle_global_keys(app, key_event, now)
}

fn handle_search_input(app: &mut App, key_event: KeyEvent, now: Instant) {
    match key_event.code {
        KeyCode::Enter => app.submit_search(),
        KeyCode::Esc => app.clear_search(),
        KeyCode::Backspace => app.search_pop(now),
        KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_push(c, now)
        }
        _ => {}
    }
}

fn handle_global_keys(app: &mut App, key_event: KeyEvent, now: Instant) -> Option<ShareRequest> {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('?') => app.open_help(),

        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_page(),
        KeyCode::Right | KeyCode::Char('l') => app.next_page(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(page) = c.to_digit(10) {
                app.go_to_page(page as usize);
            }
        }

        KeyCode::Char('c') => app.next_category(),
        KeyCode::Char('C') => app.prev_category(),
        KeyCode::Char('/') => app.start_search(),

        KeyCode::Tab => app.cycle_link(true),
        KeyCode::BackTab => app.cycle_link(false),
        KeyCode::Enter => app.activate(now),
        KeyCode::Esc => app.escape(),

        KeyCode::Char(c) => {
            if let Some(action) = ShareAction::from_key(c) {
                return app.share_selected(action);
            }
        }
        _ => {}
    }
    None
}

/// Handle mouse input
fn handle_mouse_event(
    app: &mut App,
    mouse_event: MouseEvent,
    now: Instant,
) -> Option<ShareRequest> {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.click(mouse_event.column, mouse_event.row, now)
        }
        MouseEventKind::ScrollUp => {
            app.scroll(false);
            None
        }
        MouseEventKind::ScrollDown => {
            app.scroll(true);
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thoughts::{sample, ThoughtId};
    use crate::tui::modal::Modal;

    fn loaded(n: usize) -> App {
        let mut app = App::new(&Config::default(), LogBuffer::new());
        let thoughts = (0..n)
            .map(|i| {
                let category = if i % 2 == 0 { "Even" } else { "Odd" };
                sample(i, &format!("Quote {}", i + 1), Some(category))
            })
            .collect();
        app.on_loaded(Ok(thoughts));
        app
    }

    fn press(app: &mut App, code: KeyCode) -> Option<ShareRequest> {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE), Instant::now())
    }

    #[test]
    fn arrows_and_digits_move_between_pages() {
        let mut app = loaded(12);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.browse.current_page(), 2);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.browse.current_page(), 1);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.browse.current_page(), 3);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.browse.current_page(), 3);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = loaded(3);
        let release =
            KeyEvent::new_with_kind(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);
        handle_key_event(&mut app, release, Instant::now());
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn typing_goes_to_search_field_not_shortcuts() {
        let mut app = loaded(6);
        press(&mut app, KeyCode::Char('/'));
        assert!(app.search.editing);

        // 'q' and 'c' are text while editing
        let start = Instant::now();
        for (i, c) in "quote 1".chars().enumerate() {
            handle_key_event(
                &mut app,
                KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE),
                start + Duration::from_millis(i as u64 * 50),
            );
        }
        assert!(!app.should_quit);
        assert_eq!(app.search.text, "quote 1");

        press(&mut app, KeyCode::Enter);
        assert!(!app.search.editing);
        assert_eq!(app.browse.filtered(), &[ThoughtId(0)]);
    }

    #[test]
    fn esc_while_searching_clears_search() {
        let mut app = loaded(6);
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.browse.filtered().len(), 1);

        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Esc);
        assert!(!app.search.editing);
        assert!(app.search.text.is_empty());
        assert_eq!(app.browse.filtered().len(), 6);
    }

    #[test]
    fn modal_swallows_global_keys() {
        let mut app = loaded(6);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modal, Some(Modal::detail(ThoughtId(0))));

        press(&mut app, KeyCode::Right);
        assert_eq!(app.browse.current_page(), 1);

        let request = press(&mut app, KeyCode::Char('y')).unwrap();
        assert_eq!(request.action, ShareAction::CopyQuote);
        assert_eq!(request.quote, "Quote 1");

        press(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
    }

    #[test]
    fn category_keys_cycle_roster() {
        let mut app = loaded(6);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.category_index(), 1);
        press(&mut app, KeyCode::Char('C'));
        press(&mut app, KeyCode::Char('C'));
        assert_eq!(app.category_index(), app.browse.categories().len() - 1);
    }

    #[test]
    fn share_keys_produce_requests_for_selection() {
        let mut app = loaded(3);
        press(&mut app, KeyCode::Down);
        let request = press(&mut app, KeyCode::Char('x')).unwrap();
        assert_eq!(request.action, ShareAction::X);
        assert_eq!(request.quote, "Quote 2");
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = loaded(3);
        press(&mut app, KeyCode::Char('/'));
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn wheel_scrolls_selection() {
        let mut app = loaded(3);
        let wheel = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, wheel(MouseEventKind::ScrollDown), Instant::now());
        assert_eq!(app.selected, 1);
        handle_mouse_event(&mut app, wheel(MouseEventKind::ScrollUp), Instant::now());
        assert_eq!(app.selected, 0);
    }
}
