// Page buttons
//
// "Page p of n" followed by a button per page, the current one marked.

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
    let current = app.browse.current_page();
    let count = app.browse.page_count();

    let summary = format!(" ← Page {} of {} → ", current, count);
    let mut x = area.x + summary.chars().count() as u16;
    let mut spans = vec![Span::styled(summary, Style::default().fg(theme.muted))];

    let mut regions = Vec::new();
    for page in 1..=count {
        let label = format!(" {} ", page);
        let width = label.len() as u16;
        if x + width > area.right() {
            spans.push(Span::styled("…", Style::default().fg(theme.muted)));
            break;
        }
        let style = if page == current {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground)
        };
        regions.push((Rect::new(x, area.y, width, 1), HitTarget::Page(page)));
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        x += width + 1;
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
    for (rect, target) in regions {
        app.hits.push(rect, target);
    }
}
