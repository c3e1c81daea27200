// Category buttons
//
// One button per roster entry, the active one reversed. Buttons that don't
// fit the width are dropped from the right.

use crate::render::sanitize;
use crate::tui::app::App;
use crate::tui::hit::HitTarget;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    if area.height == 0 {
        return;
    }
    let active = app.category_index();
    let theme = &app.theme;

    let mut spans = vec![Span::styled(" c ", Style::default().fg(theme.muted))];
    let mut x = area.x + 3;
    let mut regions = Vec::new();
    for (index, name) in app.browse.categories().iter().enumerate() {
        let label = format!(" {} ", sanitize(name));
        let width = label.width() as u16;
        if x + width > area.right() {
            break;
        }
        let style = if index == active {
            Style::default()
                .fg(theme.category)
                .add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default().fg(theme.category)
        };
        regions.push((Rect::new(x, area.y, width, 1), HitTarget::Category(index)));
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        x += width + 1;
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(area.x, area.y, area.width, 1),
    );
    for (rect, target) in regions {
        app.hits.push(rect, target);
    }
}
