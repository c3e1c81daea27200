// Title bar component
//
// Bordered box with the app name and match count on the top border and the
// category buttons inside.

use super::category_bar;
use crate::tui::app::{App, LoadStatus};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let count = match app.status {
        LoadStatus::Loading => " loading… ".to_string(),
        LoadStatus::Failed => " unavailable ".to_string(),
        LoadStatus::Ready if app.browse.criteria().is_unrestricted() => {
            format!(" {} thoughts ", app.browse.thoughts().len())
        }
        LoadStatus::Ready => format!(
            " {} of {} thoughts ",
            app.browse.filtered().len(),
            app.browse.thoughts().len()
        ),
    };

    let title = Line::from(vec![
        Span::styled(
            " ❝ Thoughtbook ",
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(count, Style::default().fg(app.theme.muted)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.title))
        .title(title)
        .title_top(Line::from(" ? help ").right_aligned());

    let inner = block.inner(area);
    f.render_widget(block, area);
    category_bar::render(f, inner, app);
}
