//! Match engine: turns the query and the candidate list into visible matches.
//!
//! The default filter is a case-insensitive substring match over each
//! candidate's searchable text. A host can replace it with any
//! [`FilterFn`], for example [`fuzzy_filter`].

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::item::{AutocompleteItem, Shape};

/// Host-supplied filter override. Its result is used as-is.
pub type FilterFn<T> = Box<dyn Fn(&str, &[T]) -> Vec<T>>;

/// Text searched by the default filter.
///
/// Strings search themselves; records search their field values joined by a
/// single space, in field order.
pub fn haystack<T: AutocompleteItem + ?Sized>(item: &T) -> String {
    match item.shape() {
        Shape::Text(text) => text.to_string(),
        Shape::Record(record) => record.joined_values(),
    }
}

/// Case-insensitive substring test of `query` against an item's haystack.
///
/// An empty query matches everything.
pub fn matches_query<T: AutocompleteItem + ?Sized>(query: &str, item: &T) -> bool {
    contains_lowercase(&query.to_lowercase(), item)
}

fn contains_lowercase<T: AutocompleteItem + ?Sized>(needle: &str, item: &T) -> bool {
    haystack(item).to_lowercase().contains(needle)
}

/// Default filter: keeps the items that contain `query`, case-insensitively.
///
/// Result order is the input order.
pub fn substring_filter<T: AutocompleteItem + Clone>(query: &str, items: &[T]) -> Vec<T> {
    let needle = query.to_lowercase();
    let matches: Vec<T> = items
        .iter()
        .filter(|item| contains_lowercase(&needle, *item))
        .cloned()
        .collect();

    log::trace!(
        "substring_filter query={:?} candidates={} matches={}",
        query,
        items.len(),
        matches.len()
    );

    matches
}

/// Result of a fuzzy filter operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Fuzzy matches using nucleo-matcher.
///
/// Returns matches sorted by score (highest first), ties kept in input order.
/// Empty query returns all items with score 0.
pub fn fuzzy_matches<T: AutocompleteItem>(query: &str, items: &[T]) -> Vec<FilterMatch> {
    if query.is_empty() {
        return (0..items.len())
            .map(|index| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let text = haystack(item);
            let haystack = Utf32Str::new(&text, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));

    matches
}

/// Fuzzy filter suitable for use as a filter override.
///
/// ```
/// use typeahead::filter::fuzzy_filter;
///
/// let items = vec!["apple".to_string(), "banana".to_string(), "apricot".to_string()];
/// let matches = fuzzy_filter("apt", &items);
/// assert_eq!(matches, vec!["apricot".to_string()]);
/// ```
pub fn fuzzy_filter<T: AutocompleteItem + Clone>(query: &str, items: &[T]) -> Vec<T> {
    fuzzy_matches(query, items)
        .into_iter()
        .filter_map(|m| items.get(m.index).cloned())
        .collect()
}
