//! Renderer - turns a page of thoughts into display blocks
//!
//! Building a `ThoughtBlock` is pure: it resolves keyword links and share
//! actions but knows nothing about the output surface. The TUI list component,
//! the HTML export and the plain-text listing each materialize blocks their own
//! way and always rebuild from scratch.

pub mod export;
pub mod html;
pub mod share;
pub mod text;

use crate::pipeline::keywords::{KeywordIndex, Segment};
use crate::thoughts::{Thought, ThoughtId};
use share::ShareAction;

/// Everything needed to display one thought
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThoughtBlock {
    pub id: ThoughtId,
    pub date: String,
    pub quote: String,
    pub author: String,
    pub category: Option<String>,
    /// Explanation split into plain text and keyword links
    pub explanation: Vec<Segment>,
    pub actions: &'static [ShareAction],
}

impl ThoughtBlock {
    pub fn build(thought: &Thought, keywords: &KeywordIndex) -> Self {
        Self {
            id: thought.id,
            date: thought.date.clone(),
            quote: thought.quote.clone(),
            author: thought.author.clone(),
            category: thought.category.clone(),
            explanation: keywords.linkify(&thought.explanation, thought.id),
            actions: ShareAction::all(),
        }
    }

    /// Keyword links in reading order
    pub fn links(&self) -> Vec<(usize, ThoughtId)> {
        self.explanation
            .iter()
            .enumerate()
            .filter_map(|(index, segment)| match segment {
                Segment::Link { target, .. } => Some((index, *target)),
                Segment::Text(_) => None,
            })
            .collect()
    }

    /// Explanation as plain text (links flattened)
    pub fn explanation_text(&self) -> String {
        self.explanation.iter().map(Segment::text).collect()
    }
}

/// Build blocks for a page, in display order
pub fn build_page(thoughts: &[&Thought], keywords: &KeywordIndex) -> Vec<ThoughtBlock> {
    thoughts
        .iter()
        .map(|thought| ThoughtBlock::build(thought, keywords))
        .collect()
}

/// Strip terminal control sequences from record text
///
/// ANSI escapes and control characters could move the cursor or recolor the
/// screen; they are dropped, except tab and newline which become whitespace.
pub fn sanitize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\x1b' => {
                // ESC [ <params> <letter>
                if chars.peek() == Some(&'[') {
                    chars.next();
                    for next in chars.by_ref() {
                        if next.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
            }
            '\t' | '\n' => result.push(ch),
            c if c.is_control() => {}
            _ => result.push(ch),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::BrowseState;
    use crate::thoughts::sample;

    #[test]
    fn block_carries_fields_and_actions() {
        let mut thought = sample(0, "Quote 1", Some("Life"));
        thought.explanation = "Explanation for quote 1 with keyword thinking.".to_string();

        let block = ThoughtBlock::build(&thought, &KeywordIndex::default());
        assert_eq!(block.id, ThoughtId(0));
        assert_eq!(block.date, "Date 1");
        assert_eq!(block.author, "Author 1");
        assert_eq!(block.category.as_deref(), Some("Life"));
        assert_eq!(block.explanation_text(), thought.explanation);
        assert_eq!(block.actions.len(), 4);
        assert!(block.links().is_empty());
    }

    #[test]
    fn page_blocks_follow_visible_order_and_links() {
        let mut thoughts: Vec<Thought> = (0..7)
            .map(|i| sample(i, &format!("Quote {}", i + 1), None))
            .collect();
        thoughts[0].keywords = vec!["memory".to_string()];
        thoughts[6].explanation = "On memory.".to_string();

        let mut state = BrowseState::new(thoughts);
        state.go_to_page(2);
        let blocks = build_page(&state.visible(), state.keywords());

        let ids: Vec<usize> = blocks.iter().map(|b| b.id.0).collect();
        assert_eq!(ids, vec![5, 6]);
        assert_eq!(blocks[1].links(), vec![(1, ThoughtId(0))]);
    }

    #[test]
    fn sanitize_drops_escape_sequences() {
        assert_eq!(sanitize("a\x1b[31mred\x1b[0m\x07b"), "aredb");
        assert_eq!(sanitize("line\nnext\ttab\r"), "line\nnext\ttab");
    }
}
