use regex::Regex;

use crate::model::note::Note;
use crate::model::store::{Filter, Store};

/// Build the matcher for a search term.
///
/// The term is taken literally (regex-escaped) under `(?i)`, so matching is
/// plain case-insensitive substring search. An empty term has no matcher
/// and matches everything.
pub fn search_matcher(term: &str) -> Option<Regex> {
    if term.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(term))).ok()
}

/// Compute the visible subset of notes from the current store state.
///
/// Search match first, completion filter second, insertion order preserved
/// throughout. Recomputed from scratch on every call; there is no cache to
/// invalidate.
pub fn visible_notes(store: &Store) -> Vec<&Note> {
    let matcher = search_matcher(store.search_term());
    store
        .notes()
        .filter(|note| matcher.as_ref().is_none_or(|re| re.is_match(&note.text)))
        .filter(|note| match store.filter() {
            Filter::All => true,
            Filter::Complete => note.completed,
            Filter::Incomplete => !note.completed,
        })
        .collect()
}
