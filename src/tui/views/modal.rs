// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard and mouse shortcuts plus the active theme
// - Detail modal: one thought in full, scrollable, with share buttons
//
// Both record their screen area on the App so a click outside closes them.

use crate::render::{sanitize, ThoughtBlock};
use crate::thoughts::ThoughtId;
use crate::tui::app::App;
use crate::tui::components::thought_list::explanation_pieces;
use crate::tui::hit::HitTarget;
use crate::tui::modal::Modal;
use crate::tui::wrap::{wrap_pieces, wrap_plain, Piece, WrappedLine};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const CLOSE_BUTTON: &str = "[×]";

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &mut App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Detail { id, scroll } => render_detail(f, app, *id, *scroll),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn percent_of(value: u16, percent: u32) -> u16 {
    saturating_u16(u32::from(value) * percent / 100)
}

fn saturating_u16(value: impl TryInto<u16>) -> u16 {
    value.try_into().unwrap_or(u16::MAX)
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &mut App) {
    let key_style = Style::default().fg(app.theme.link);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Browse", header_style)),
        kb("↑/↓, j/k", "Select thought"),
        kb("←/→, h/l", "Previous / next page"),
        kb("1-9", "Go to page"),
        kb("c / C", "Next / previous category"),
        kb("Enter", "Open detail or follow link"),
        kb("Esc", "Clear link focus"),
        Line::raw(""),
        Line::from(Span::styled("  Search", header_style)),
        kb("/", "Edit search"),
        kb("Enter", "Apply now"),
        kb("Esc", "Clear search"),
        Line::raw(""),
        Line::from(Span::styled("  Keyword links", header_style)),
        kb("Tab", "Focus next link"),
        kb("Shift+Tab", "Focus previous link"),
        Line::raw(""),
        Line::from(Span::styled("  Share", header_style)),
        kb("y", "Copy quote"),
        kb("x / i / f", "Share on X / LinkedIn / Facebook"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled("  Mouse", header_style)),
        kb("Click", "Select, open, follow, share"),
        kb("Scroll", "Move selection / scroll detail"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name, key_style),
        ]),
    ]);

    let width = 50;
    let height = content.lines.len() as u16 + 2;
    let area = centered_rect(width, height, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
    app.modal_area = Some(area);
}

/// Render the detail modal overlay
fn render_detail(f: &mut Frame, app: &mut App, id: ThoughtId, scroll: u16) {
    let Some(thought) = app.browse.get(id) else {
        // Collection was replaced underneath the modal
        app.close_modal();
        return;
    };
    let block = ThoughtBlock::build(thought, app.browse.keywords());

    let frame_area = f.area();
    let width = percent_of(frame_area.width, 70).max(40).min(frame_area.width);
    // Borders plus one column of padding each side
    let text_width = width.saturating_sub(4) as usize;
    let lines = detail_lines(&block, text_width, app);
    let line_count = saturating_u16(lines.len());

    let max_height = percent_of(frame_area.height, 85).max(8);
    let height = line_count.saturating_add(2).clamp(5, max_height);
    let area = centered_rect(width, height, frame_area);

    f.render_widget(Clear, area);

    let viewport = area.height.saturating_sub(2);
    let max_scroll = line_count.saturating_sub(viewport);
    let scroll = scroll.min(max_scroll);
    if let Some(Modal::Detail { scroll: stored, .. }) = app.modal.as_mut() {
        *stored = scroll;
    }

    let scroll_info = if max_scroll > 0 {
        format!("({}/{}) ", scroll + 1, lines.len())
    } else {
        String::new()
    };

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight))
        .style(Style::default().bg(app.theme.background))
        .title(format!(" Thought #{} {}", id, scroll_info))
        .title_top(Line::from(CLOSE_BUTTON).right_aligned())
        .title_bottom(Line::from(" ↑↓:scroll  y:copy  x/i/f:share  Esc:close ").centered());
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let body = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );
    for (offset, line) in lines
        .into_iter()
        .skip(scroll as usize)
        .take(body.height as usize)
        .enumerate()
    {
        let y = body.y + offset as u16;
        for &(column, width, target) in &line.hits {
            let x = body.x + column;
            let width = width.min(body.right().saturating_sub(x));
            app.hits.push(Rect::new(x, y, width, 1), target);
        }
        f.render_widget(
            Paragraph::new(line.into_line()),
            Rect::new(body.x, y, body.width, 1),
        );
    }

    // The close button sits on the top border, left of the corner
    let close_width = CLOSE_BUTTON.chars().count() as u16;
    app.hits.push(
        Rect::new(
            area.right().saturating_sub(close_width + 1),
            area.y,
            close_width,
            1,
        ),
        HitTarget::CloseModal,
    );
    app.modal_area = Some(area);
}

/// Quote, author, category, explanation and share buttons
fn detail_lines(block: &ThoughtBlock, width: usize, app: &App) -> Vec<WrappedLine> {
    let theme = &app.theme;
    let mut lines = Vec::new();

    lines.extend(wrap_plain(
        &format!("\"{}\"", sanitize(&block.quote)),
        Style::default()
            .fg(theme.quote)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        width,
    ));
    lines.push(WrappedLine::default());
    lines.extend(wrap_plain(
        &format!("- {}", sanitize(&block.author)),
        Style::default().fg(theme.author),
        width,
    ));

    let mut meta = vec![Piece::plain(
        sanitize(&block.date),
        Style::default().fg(theme.date),
    )];
    if let Some(category) = &block.category {
        meta.push(Piece::plain(" · ", Style::default().fg(theme.muted)));
        meta.push(Piece::plain(
            sanitize(category),
            Style::default().fg(theme.category),
        ));
    }
    lines.extend(wrap_pieces(&meta, width));

    if !block.explanation.is_empty() {
        lines.push(WrappedLine::default());
        lines.extend(wrap_pieces(
            &explanation_pieces(&block.explanation, theme, None),
            width,
        ));
    }

    lines.push(WrappedLine::default());
    let mut share = Vec::new();
    for (i, action) in block.actions.iter().enumerate() {
        if i > 0 {
            share.push(Piece::plain("  ", Style::default()));
        }
        share.push(Piece::clickable(
            format!("[{}] {}", action.key(), action.label()),
            Style::default().fg(theme.link),
            HitTarget::Share(block.id, *action),
        ));
    }
    lines.extend(wrap_pieces(&share, width));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::render::share::ShareAction;
    use crate::thoughts::sample;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app_with_detail(explanation: &str) -> App {
        let mut app = App::new(&Config::default(), LogBuffer::new());
        let mut thought = sample(0, "Quote 1", Some("Life"));
        thought.explanation = explanation.to_string();
        app.on_loaded(Ok(vec![thought]));
        app.modal = Some(Modal::detail(ThoughtId(0)));
        app
    }

    fn draw(app: &mut App, width: u16, height: u16) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                if let Some(modal) = app.modal.clone() {
                    render(f, &modal, app);
                }
            })
            .unwrap();
    }

    #[test]
    fn centered_rect_fits_small_screens() {
        let area = Rect::new(0, 0, 30, 10);
        assert_eq!(centered_rect(50, 20, area), Rect::new(0, 0, 30, 10));
        assert_eq!(centered_rect(10, 4, area), Rect::new(10, 3, 10, 4));
    }

    #[test]
    fn detail_registers_close_and_share_regions() {
        let mut app = app_with_detail("Short.");
        draw(&mut app, 80, 30);

        let area = app.modal_area.unwrap();
        let close = app.hits.at(area.right() - 3, area.y);
        assert_eq!(close, Some(HitTarget::CloseModal));

        let mut shares = Vec::new();
        for row in area.y..area.bottom() {
            for col in area.x..area.right() {
                if let Some(HitTarget::Share(_, action)) = app.hits.at(col, row) {
                    if !shares.contains(&action) {
                        shares.push(action);
                    }
                }
            }
        }
        assert_eq!(shares.len(), ShareAction::all().len());
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let long = "word ".repeat(400);
        let mut app = app_with_detail(&long);
        if let Some(modal) = app.modal.as_mut() {
            modal.scroll_by(10_000);
        }
        draw(&mut app, 60, 20);

        let Some(Modal::Detail { scroll, .. }) = app.modal else {
            panic!("detail modal closed");
        };
        assert!(scroll > 0);
        assert!(scroll < 10_000);
    }

    #[test]
    fn huge_terminal_and_long_text_fit() {
        let mut app = app_with_detail(&"word ".repeat(60_000));
        draw(&mut app, 1000, 200);

        let area = app.modal_area.unwrap();
        assert_eq!(area.width, 700);
        assert_eq!(area.height, 170);
        assert_eq!(percent_of(u16::MAX, 85), 55_704);
        assert_eq!(saturating_u16(70_000usize), u16::MAX);
    }

    #[test]
    fn missing_thought_closes_detail() {
        let mut app = app_with_detail("");
        app.modal = Some(Modal::detail(ThoughtId(42)));
        draw(&mut app, 80, 30);
        assert!(app.modal.is_none());
    }
}
