//! Substring search over the vocabulary for typeahead suggestions.

use super::{normalize, SymptomVocabulary};

/// Maximum entries returned per query.
pub const MAX_SUGGESTIONS: usize = 10;

/// Return vocabulary entries whose normalised form contains the normalised
/// query, in vocabulary order. An empty query yields nothing rather than
/// the whole vocabulary.
pub fn suggest(query: &str, vocab: &SymptomVocabulary) -> Vec<String> {
    let needle = normalize(query);
    if needle.is_empty() {
        return Vec::new();
    }
    vocab
        .entries()
        .iter()
        .filter(|entry| normalize(entry).contains(&needle))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}
