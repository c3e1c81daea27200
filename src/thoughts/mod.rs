// Data model for quotation records ("thoughts")
//
// A thoughts.json file is an array of objects. Only quote/author/date/explanation
// are expected; category and keywords are optional. Serde ignores extra fields,
// and missing text fields fall back to an empty string so one sloppy record
// doesn't take down the whole collection.

pub mod loader;

use serde::{Deserialize, Deserializer};
use std::fmt;

/// Stable identifier: zero-based position in the originally loaded sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThoughtId(pub usize);

impl ThoughtId {
    /// Anchor used for the record's display block (`thought-3`)
    pub fn anchor(self) -> String {
        format!("thought-{}", self.0)
    }
}

impl fmt::Display for ThoughtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A record exactly as it appears in the source file (no id yet)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawThought {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub quote: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub explanation: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

/// A loaded quotation record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thought {
    pub id: ThoughtId,
    pub quote: String,
    pub author: String,
    pub date: String,
    pub explanation: String,
    /// Always `None` for absent, null, or empty categories
    pub category: Option<String>,
    pub keywords: Vec<String>,
}

impl Thought {
    /// Attach the positional id to a raw record
    pub fn from_raw(id: usize, raw: RawThought) -> Self {
        Self {
            id: ThoughtId(id),
            quote: raw.quote,
            author: raw.author,
            date: raw.date,
            explanation: raw.explanation,
            category: raw.category.filter(|c| !c.is_empty()),
            keywords: raw
                .keywords
                .unwrap_or_default()
                .into_iter()
                .filter(|k| !k.trim().is_empty())
                .collect(),
        }
    }
}

/// Assign ids in source order
pub fn assign_ids(raw: Vec<RawThought>) -> Vec<Thought> {
    raw.into_iter()
        .enumerate()
        .map(|(index, raw)| Thought::from_raw(index, raw))
        .collect()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Build a record for tests without going through JSON
#[cfg(test)]
pub(crate) fn sample(id: usize, quote: &str, category: Option<&str>) -> Thought {
    Thought {
        id: ThoughtId(id),
        quote: quote.to_string(),
        author: format!("Author {}", id + 1),
        date: format!("Date {}", id + 1),
        explanation: String::new(),
        category: category.map(str::to_string),
        keywords: Vec::new(),
    }
}
