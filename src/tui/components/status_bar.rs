// Status bar component
//
// Key hints, replaced by the most recent warning or error for a while after
// one is logged.

use crate::logging::LogLevel;
use crate::tui::app::App;
use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// How long a diagnostic stays in the status bar
const DIAGNOSTIC_SECS: i64 = 10;

const HINTS: &str =
    " ↑↓ select │ ←→ page │ c category │ / search │ Tab link │ Enter open │ x i f share │ y copy │ ? help │ q quit";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let recent = app.log_buffer.latest_diagnostic().filter(|entry| {
        Utc::now().signed_duration_since(entry.timestamp).num_seconds() < DIAGNOSTIC_SECS
    });

    let (text, color) = match recent {
        Some(entry) => {
            let color = if entry.level == LogLevel::Error {
                app.theme.error
            } else {
                app.theme.warn
            };
            (format!(" {} {}", entry.level.as_str(), entry.message), color)
        }
        None => (HINTS.to_string(), app.theme.status_bar),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(app.theme.border)),
        );

    f.render_widget(status, area);
}
