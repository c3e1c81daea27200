// Word wrapping for styled, clickable text
//
// Splits styled pieces into words on whitespace and greedily fills lines of a
// fixed display width (unicode-width, so CJK and emoji count correctly).
// Pieces that touch without whitespace ("memory" link followed by ".") stay in
// one word. Each output line remembers the columns of its clickable pieces so
// the caller can register hit regions once it knows where the line lands.

use super::hit::HitTarget;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A run of text sharing one style and click target
#[derive(Debug, Clone)]
pub struct Piece {
    pub text: String,
    pub style: Style,
    pub target: Option<HitTarget>,
}

impl Piece {
    pub fn plain(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            target: None,
        }
    }

    pub fn clickable(text: impl Into<String>, style: Style, target: HitTarget) -> Self {
        Self {
            text: text.into(),
            style,
            target: Some(target),
        }
    }
}

/// One wrapped line plus the columns of its clickable pieces
#[derive(Debug, Clone, Default)]
pub struct WrappedLine {
    pub spans: Vec<Span<'static>>,
    /// (column offset, width, target)
    pub hits: Vec<(u16, u16, HitTarget)>,
    pub width: usize,
}

impl WrappedLine {
    fn push(&mut self, text: String, style: Style, target: Option<HitTarget>) {
        let width = text.width();
        if let Some(target) = target {
            self.hits.push((self.width as u16, width as u16, target));
        }
        self.spans.push(Span::styled(text, style));
        self.width += width;
    }

    pub fn into_line(self) -> Line<'static> {
        Line::from(self.spans)
    }
}

#[derive(Debug, Default)]
struct Word {
    pieces: Vec<Piece>,
    width: usize,
}

impl Word {
    fn push_char(
        &mut self,
        ch: char,
        style: Style,
        target: Option<HitTarget>,
        piece_id: usize,
        last_id: &mut Option<usize>,
    ) {
        if *last_id != Some(piece_id) || self.pieces.is_empty() {
            self.pieces.push(Piece {
                text: String::new(),
                style,
                target,
            });
            *last_id = Some(piece_id);
        }
        if let Some(piece) = self.pieces.last_mut() {
            piece.text.push(ch);
        }
        self.width += ch.width().unwrap_or(0);
    }
}

/// Wrap styled pieces into lines at most `width` columns wide
pub fn wrap_pieces(pieces: &[Piece], width: usize) -> Vec<WrappedLine> {
    let width = width.max(1);
    let words = split_words(pieces);

    let mut lines = Vec::new();
    let mut current = WrappedLine::default();
    for word in words.into_iter().flat_map(|w| break_long_word(w, width)) {
        if current.width > 0 && current.width + 1 + word.width > width {
            lines.push(std::mem::take(&mut current));
        }
        if current.width > 0 {
            current.push(" ".to_string(), Style::default(), None);
        }
        for piece in word.pieces {
            current.push(piece.text, piece.style, piece.target);
        }
    }
    if current.width > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap a single plain string
pub fn wrap_plain(text: &str, style: Style, width: usize) -> Vec<WrappedLine> {
    wrap_pieces(&[Piece::plain(text, style)], width)
}

fn split_words(pieces: &[Piece]) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current = Word::default();
    let mut last_id = None;

    for (piece_id, piece) in pieces.iter().enumerate() {
        for ch in piece.text.chars() {
            if ch.is_whitespace() {
                if !current.pieces.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                last_id = None;
            } else {
                current.push_char(ch, piece.style, piece.target, piece_id, &mut last_id);
            }
        }
    }
    if !current.pieces.is_empty() {
        words.push(current);
    }
    words
}

/// Hard-split a word wider than a whole line
fn break_long_word(word: Word, width: usize) -> Vec<Word> {
    if word.width <= width {
        return vec![word];
    }

    let mut out = Vec::new();
    let mut current = Word::default();
    for piece in word.pieces {
        let mut last_id = None;
        for ch in piece.text.chars() {
            let w = ch.width().unwrap_or(0);
            if current.width + w > width && current.width > 0 {
                out.push(std::mem::take(&mut current));
                last_id = None;
            }
            current.push_char(ch, piece.style, piece.target, 0, &mut last_id);
        }
    }
    if !current.pieces.is_empty() {
        out.push(current);
    }
    out
}
