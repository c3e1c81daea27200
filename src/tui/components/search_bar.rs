// Search field
//
// Shows the typed text, a cursor while editing and a marker while a debounced
// value is waiting to be applied.

use crate::tui::app::App;
use crate::tui::hit::HitTarget;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let search = &app.search;

    let label_style = if search.editing {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted)
    };

    let mut spans = vec![Span::styled(" / Search: ", label_style)];
    if search.text.is_empty() && !search.editing {
        spans.push(Span::styled(
            "press / to search quotes, authors and explanations",
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(
            search.text.clone(),
            Style::default().fg(theme.foreground),
        ));
    }
    if search.editing {
        spans.push(Span::styled("▏", Style::default().fg(theme.highlight)));
    }
    if search.is_pending() {
        spans.push(Span::styled(" …", Style::default().fg(theme.muted)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
    app.hits.push(area, HitTarget::Search);
}
