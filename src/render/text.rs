// Plain-text rendering for the headless `list` command
//
// Record text is sanitized so a hostile collection can't drive the terminal.

use super::{sanitize, ThoughtBlock};
use std::fmt::Write;

/// Render one block as indented plain text
pub fn render_block(block: &ThoughtBlock) -> String {
    let mut out = String::new();
    let _ = write!(out, "[#{}] {}", block.id, sanitize(&block.date));
    if let Some(category) = &block.category {
        let _ = write!(out, " ({})", sanitize(category));
    }
    out.push('\n');
    let _ = writeln!(out, "  \"{}\"", sanitize(&block.quote));
    let _ = writeln!(out, "  - {}", sanitize(&block.author));
    let explanation = sanitize(&block.explanation_text());
    if !explanation.is_empty() {
        let _ = writeln!(out, "  {}", explanation);
    }
    out
}

/// Render a page of blocks followed by the page indicator
pub fn render_page(blocks: &[ThoughtBlock], current_page: usize, page_count: usize) -> String {
    let mut out = String::new();
    if blocks.is_empty() {
        out.push_str("No thoughts match the current filters.\n");
    }
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_block(block));
    }
    let _ = writeln!(out, "\nPage {} of {}", current_page, page_count);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::keywords::KeywordIndex;
    use crate::thoughts::sample;

    #[test]
    fn block_lists_every_field() {
        let mut thought = sample(2, "Quote 3", Some("Life"));
        thought.explanation = "Because.".to_string();
        let text = render_block(&ThoughtBlock::build(&thought, &KeywordIndex::default()));
        assert_eq!(
            text,
            "[#2] Date 3 (Life)\n  \"Quote 3\"\n  - Author 3\n  Because.\n"
        );
    }

    #[test]
    fn control_sequences_are_stripped() {
        let mut thought = sample(0, "\x1b[2JQuote\x07", Some("Li\x1b[31mfe"));
        thought.author = "Author\r".to_string();
        thought.explanation = "Be\x1b]0;x\x07cause.".to_string();
        let text = render_page(
            &[ThoughtBlock::build(&thought, &KeywordIndex::default())],
            1,
            1,
        );
        assert!(!text.contains('\x1b'));
        assert!(!text.contains('\x07'));
        assert!(!text.contains('\r'));
        assert!(text.contains("  \"Quote\"\n"));
        assert!(text.contains("(Life)"));
    }

    #[test]
    fn empty_page_still_reports_position() {
        let text = render_page(&[], 1, 1);
        assert!(text.starts_with("No thoughts match"));
        assert!(text.ends_with("Page 1 of 1\n"));
    }
}
