// Thought list - the current page of blocks
//
// Every frame rebuilds the blocks from BrowseState, wraps them to the panel
// width, scrolls so the selected block is in view and registers hit regions
// for each visible row (whole thought) and each link or share button on it.

use crate::pipeline::keywords::Segment;
use crate::render::{build_page, sanitize, ThoughtBlock};
use crate::thoughts::loader::LOAD_FAILED_MESSAGE;
use crate::thoughts::ThoughtId;
use crate::tui::app::{App, LoadStatus};
use crate::tui::hit::HitTarget;
use crate::tui::theme::Theme;
use crate::tui::wrap::{wrap_pieces, wrap_plain, Piece, WrappedLine};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Selection marker plus a space
const GUTTER: u16 = 2;

struct Row {
    line: WrappedLine,
    /// (thought, index on page); `None` for separators
    owner: Option<(ThoughtId, usize)>,
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match app.status {
        LoadStatus::Loading => {
            return render_message(f, inner, "Loading thoughts…", app.theme.muted);
        }
        LoadStatus::Failed => {
            return render_message(f, inner, LOAD_FAILED_MESSAGE, app.theme.error);
        }
        LoadStatus::Ready => {}
    }

    let blocks = build_page(&app.browse.visible(), app.browse.keywords());
    if blocks.is_empty() {
        return render_message(
            f,
            inner,
            "No thoughts match the current filters.",
            app.theme.muted,
        );
    }

    let text_width = inner.width.saturating_sub(GUTTER) as usize;
    let mut rows: Vec<Row> = Vec::new();
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for (index, thought) in blocks.iter().enumerate() {
        let focused = if index == app.selected {
            app.focused_link
        } else {
            None
        };
        let start = rows.len();
        for line in block_lines(thought, text_width, &app.theme, focused) {
            rows.push(Row {
                line,
                owner: Some((thought.id, index)),
            });
        }
        ranges.push((start, rows.len()));
        rows.push(Row {
            line: WrappedLine::default(),
            owner: None,
        });
    }

    // Keep the selected block in view
    let height = inner.height as usize;
    if let Some(&(start, end)) = ranges.get(app.selected) {
        if start < app.list_scroll {
            app.list_scroll = start;
        } else if end > app.list_scroll + height {
            app.list_scroll = end.saturating_sub(height).min(start);
        }
    }
    app.list_scroll = app.list_scroll.min(rows.len().saturating_sub(1));

    for (offset, row) in rows.iter().skip(app.list_scroll).take(height).enumerate() {
        let y = inner.y + offset as u16;
        let row_area = Rect::new(inner.x, y, inner.width, 1);
        let Some((id, index)) = row.owner else {
            continue;
        };

        let selected = index == app.selected;
        let background = if app.is_highlighted(id) {
            app.theme.target_bg
        } else if selected {
            app.theme.selected_bg
        } else {
            app.theme.background
        };
        let marker = if selected {
            Span::styled("▌ ", Style::default().fg(app.theme.selected_marker))
        } else {
            Span::raw("  ")
        };

        let mut spans = vec![marker];
        spans.extend(row.line.spans.iter().cloned());
        f.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(background)),
            row_area,
        );

        app.hits.push(row_area, HitTarget::Thought(id));
        let text_x = inner.x + GUTTER;
        for &(column, width, target) in &row.line.hits {
            let x = text_x + column;
            let width = width.min(inner.right().saturating_sub(x));
            app.hits.push(Rect::new(x, y, width, 1), target);
        }
    }
}

/// Wrapped lines for one block: header, quote, author, explanation, share row
fn block_lines(
    block: &ThoughtBlock,
    width: usize,
    theme: &Theme,
    focused_link: Option<usize>,
) -> Vec<WrappedLine> {
    let mut lines = Vec::new();

    let mut header = vec![Piece::plain(
        sanitize(&block.date),
        Style::default().fg(theme.date),
    )];
    if let Some(category) = &block.category {
        header.push(Piece::plain(" · ", Style::default().fg(theme.muted)));
        header.push(Piece::plain(
            sanitize(category),
            Style::default().fg(theme.category),
        ));
    }
    lines.extend(wrap_pieces(&header, width));

    lines.extend(wrap_plain(
        &format!("\"{}\"", sanitize(&block.quote)),
        Style::default()
            .fg(theme.quote)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        width,
    ));
    lines.extend(wrap_plain(
        &format!("- {}", sanitize(&block.author)),
        Style::default().fg(theme.author),
        width,
    ));

    if !block.explanation.is_empty() {
        lines.extend(wrap_pieces(
            &explanation_pieces(&block.explanation, theme, focused_link),
            width,
        ));
    }

    let mut share = Vec::new();
    for (i, action) in block.actions.iter().enumerate() {
        if i > 0 {
            share.push(Piece::plain("  ", Style::default()));
        }
        share.push(Piece::clickable(
            format!("[{}] {}", action.key(), action.label()),
            Style::default().fg(theme.muted),
            HitTarget::Share(block.id, *action),
        ));
    }
    lines.extend(wrap_pieces(&share, width));

    lines
}

/// Explanation segments as pieces; the focused link gets its own style
pub fn explanation_pieces(
    segments: &[Segment],
    theme: &Theme,
    focused_link: Option<usize>,
) -> Vec<Piece> {
    let mut link_index = 0;
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => {
                Piece::plain(sanitize(text), Style::default().fg(theme.foreground))
            }
            Segment::Link { text, target } => {
                let focused = focused_link == Some(link_index);
                link_index += 1;
                Piece::clickable(
                    sanitize(text),
                    theme.link_style(focused),
                    HitTarget::Link(*target),
                )
            }
        })
        .collect()
}

/// Centered notice in place of the list
fn render_message(f: &mut Frame, area: Rect, message: &str, color: Color) {
    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(color));
    let top = area.height / 2;
    let message_area = Rect::new(area.x, area.y + top, area.width, area.height - top);
    f.render_widget(paragraph, message_area);
}
