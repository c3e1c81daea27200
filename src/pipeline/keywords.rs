//! Keyword cross-references between thoughts
//!
//! The first thought that lists a keyword owns it. Every other thought's
//! explanation links whole-word, case-insensitive occurrences of that keyword
//! to the owner. The index is built once per load; linking is a single
//! left-to-right regex pass, so already-linked text is never revisited.

use crate::thoughts::{Thought, ThoughtId};
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;

/// A run of explanation text, either plain or a cross-reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Link { text: String, target: ThoughtId },
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Text(text) | Segment::Link { text, .. } => text,
        }
    }
}

/// keyword (lower-cased) -> owning thought
///
/// A thought that owns keywords gets its own pattern without them, so a
/// self-owned phrase never hides a shorter foreign keyword inside it.
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    targets: HashMap<String, ThoughtId>,
    pattern: Option<Regex>,
    owner_patterns: HashMap<ThoughtId, Option<Regex>>,
}

impl KeywordIndex {
    pub fn build(thoughts: &[Thought]) -> Self {
        let mut targets: HashMap<String, ThoughtId> = HashMap::new();
        for thought in thoughts {
            for keyword in &thought.keywords {
                let key = keyword.trim().to_lowercase();
                if !key.is_empty() {
                    targets.entry(key).or_insert(thought.id);
                }
            }
        }

        let pattern = compile(targets.keys());
        let mut owners: Vec<ThoughtId> = targets.values().copied().collect();
        owners.sort();
        owners.dedup();
        let owner_patterns = owners
            .into_iter()
            .map(|owner| {
                let foreign = targets
                    .iter()
                    .filter(|(_, target)| **target != owner)
                    .map(|(key, _)| key);
                (owner, compile(foreign))
            })
            .collect();

        tracing::debug!("Keyword index built with {} keywords", targets.len());
        Self {
            targets,
            pattern,
            owner_patterns,
        }
    }

    /// Thought that owns `keyword`, if any
    pub fn target(&self, keyword: &str) -> Option<ThoughtId> {
        self.targets.get(&keyword.trim().to_lowercase()).copied()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.targets.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Split `text` (owned by `owner`) into plain and linked segments
    ///
    /// Occurrences of keywords owned by `owner` itself stay plain text.
    pub fn linkify(&self, text: &str, owner: ThoughtId) -> Vec<Segment> {
        let pattern = match self.owner_patterns.get(&owner) {
            Some(own) => own.as_ref(),
            None => self.pattern.as_ref(),
        };
        let Some(pattern) = pattern else {
            return plain(text);
        };

        let mut segments = Vec::new();
        let mut cursor = 0;
        for found in pattern.find_iter(text) {
            let Some(target) = self.target(found.as_str()) else {
                continue;
            };
            if found.start() > cursor {
                segments.push(Segment::Text(text[cursor..found.start()].to_string()));
            }
            segments.push(Segment::Link {
                text: found.as_str().to_string(),
                target,
            });
            cursor = found.end();
        }
        if cursor < text.len() {
            segments.push(Segment::Text(text[cursor..].to_string()));
        }
        segments
    }
}

/// Whole-word, case-insensitive alternation over `keys`
fn compile<'a>(keys: impl Iterator<Item = &'a String>) -> Option<Regex> {
    // Longest first so "free will" wins over "will" at the same position
    let mut keys: Vec<&String> = keys.collect();
    if keys.is_empty() {
        return None;
    }
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let alternation = keys
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    match RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!("Keyword links disabled: {}", e);
            None
        }
    }
}

fn plain(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![Segment::Text(text.to_string())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thoughts::sample;

    fn with_keywords(id: usize, explanation: &str, keywords: &[&str]) -> Thought {
        let mut thought = sample(id, &format!("Quote {}", id + 1), None);
        thought.explanation = explanation.to_string();
        thought.keywords = keywords.iter().map(|k| k.to_string()).collect();
        thought
    }

    fn links(segments: &[Segment]) -> Vec<(&str, ThoughtId)> {
        segments
            .iter()
            .filter_map(|s| match s {
                Segment::Link { text, target } => Some((text.as_str(), *target)),
                Segment::Text(_) => None,
            })
            .collect()
    }

    #[test]
    fn first_owner_wins() {
        let thoughts = vec![
            with_keywords(0, "", &["Memory"]),
            with_keywords(1, "", &["memory", "fate"]),
        ];
        let index = KeywordIndex::build(&thoughts);
        assert_eq!(index.target("MEMORY"), Some(ThoughtId(0)));
        assert_eq!(index.target("fate"), Some(ThoughtId(1)));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn links_whole_words_case_insensitively() {
        let thoughts = vec![
            with_keywords(0, "", &["memory"]),
            with_keywords(1, "Memory fades; memorys and memory.", &[]),
        ];
        let index = KeywordIndex::build(&thoughts);
        let segments = index.linkify(&thoughts[1].explanation, ThoughtId(1));

        assert_eq!(
            links(&segments),
            vec![("Memory", ThoughtId(0)), ("memory", ThoughtId(0))]
        );
        let rebuilt: String = segments.iter().map(Segment::text).collect();
        assert_eq!(rebuilt, thoughts[1].explanation);
    }

    #[test]
    fn owner_text_is_not_self_linked() {
        let thoughts = vec![
            with_keywords(0, "All about memory.", &["memory"]),
            with_keywords(1, "", &[]),
        ];
        let index = KeywordIndex::build(&thoughts);
        let segments = index.linkify(&thoughts[0].explanation, ThoughtId(0));
        assert_eq!(segments, vec![Segment::Text("All about memory.".to_string())]);
    }

    #[test]
    fn longer_keyword_is_linked_once() {
        let thoughts = vec![
            with_keywords(0, "", &["will"]),
            with_keywords(1, "", &["free will"]),
            with_keywords(2, "Is free will real?", &[]),
        ];
        let index = KeywordIndex::build(&thoughts);
        let segments = index.linkify(&thoughts[2].explanation, ThoughtId(2));
        assert_eq!(links(&segments), vec![("free will", ThoughtId(1))]);
    }

    #[test]
    fn own_phrase_does_not_hide_foreign_keyword() {
        let thoughts = vec![
            with_keywords(0, "", &["will"]),
            with_keywords(1, "Some say free will is a myth.", &["free will"]),
        ];
        let index = KeywordIndex::build(&thoughts);
        let segments = index.linkify(&thoughts[1].explanation, ThoughtId(1));
        assert_eq!(links(&segments), vec![("will", ThoughtId(0))]);
        let rebuilt: String = segments.iter().map(Segment::text).collect();
        assert_eq!(rebuilt, thoughts[1].explanation);
    }

    #[test]
    fn no_keywords_means_plain_text() {
        let index = KeywordIndex::build(&[with_keywords(0, "text", &[])]);
        assert!(index.is_empty());
        assert_eq!(
            index.linkify("some text", ThoughtId(0)),
            vec![Segment::Text("some text".to_string())]
        );
        assert!(index.linkify("", ThoughtId(0)).is_empty());
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let thoughts = vec![
            with_keywords(0, "", &["c.s"]),
            with_keywords(1, "cas and c.s", &[]),
        ];
        let index = KeywordIndex::build(&thoughts);
        let segments = index.linkify(&thoughts[1].explanation, ThoughtId(1));
        assert_eq!(links(&segments), vec![("c.s", ThoughtId(0))]);
    }
}
