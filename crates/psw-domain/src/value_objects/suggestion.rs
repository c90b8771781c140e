//! Autocomplete suggestion value objects

use crate::value_objects::NormalizedQuery;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// How completion lines are turned into suggestions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutocompleteMode {
    /// Bound each context by the end of its flow, as located by the slicer
    #[default]
    Located,
    /// Use each context as it came from the daemon
    Verbatim,
}

/// Byte span of the flow a hit lies in, as reported by the slicer's `loc` kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowSpan {
    /// First byte of the flow
    pub start: u64,
    /// Byte after the end of the flow
    pub end: u64,
}

/// Derive a suggestion from the escaped context around a hit.
///
/// `context` begins at byte `context_start`; the suggestion begins at
/// `match_offset` and may not run past `reference_end`. The context is
/// measured in units, where an escape token `\xHH` is a single unit that is
/// never split and a bare backslash ends the usable run. At most
/// `min(reference_end - match_offset, len(context))` units are taken.
///
/// Returns `None` when the match does not lie before `reference_end`, when
/// it lies before the context, or when no unit survives.
///
/// ```rust
/// use psw_domain::value_objects::derive_suggestion;
///
/// assert_eq!(derive_suggestion("abcdef", 0, 2, 5).as_deref(), Some("cde"));
/// assert_eq!(derive_suggestion("abcdef", 0, 5, 5), None);
/// ```
pub fn derive_suggestion(
    context: &str,
    context_start: u64,
    match_offset: u64,
    reference_end: u64,
) -> Option<String> {
    if match_offset >= reference_end || match_offset < context_start {
        return None;
    }
    let skip = usize::try_from(match_offset - context_start).ok()?;
    let budget = usize::try_from(reference_end - match_offset)
        .unwrap_or(usize::MAX)
        .min(context.len());

    let units = ContextUnits::new(context);
    let mut taken = units.skip(skip).take(budget).peekable();
    let start = taken.peek()?.0;
    let end = taken.last().map_or(start, |(_, end)| end);
    Some(context[start..end].to_string())
}

/// Iterator over the byte ranges of the atomic units of an escaped context
struct ContextUnits<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> ContextUnits<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl Iterator for ContextUnits<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let first = rest.chars().next()?;
        let len = if first == '\\' {
            let mut token = rest.char_indices().skip(1);
            match (token.next(), token.next(), token.next()) {
                (Some((_, 'x')), Some(_), Some((idx, c))) => idx + c.len_utf8(),
                _ => return None,
            }
        } else {
            first.len_utf8()
        };
        let range = (self.pos, self.pos + len);
        self.pos += len;
        Some(range)
    }
}

/// Ordered, de-duplicated collection of suggestions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionSet(IndexSet<String>);

impl SuggestionSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a suggestion; returns false when it was already present
    pub fn insert(&mut self, suggestion: String) -> bool {
        self.0.insert(suggestion)
    }

    /// Number of distinct suggestions
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no suggestion was collected
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Suggestions in first-seen order
    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

impl FromIterator<String> for SuggestionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Autocomplete response payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionList {
    /// The normalized query, echoed back
    pub query: NormalizedQuery,
    /// Distinct suggestions in first-seen order
    pub suggestions: Vec<String>,
}

impl SuggestionList {
    /// Build the payload from a collected set
    pub fn new(query: NormalizedQuery, suggestions: SuggestionSet) -> Self {
        Self {
            query,
            suggestions: suggestions.into_vec(),
        }
    }

    /// A payload without suggestions
    pub fn empty(query: NormalizedQuery) -> Self {
        Self {
            query,
            suggestions: Vec::new(),
        }
    }
}
