use triage_assistant::vocab::{
    suggest::{suggest, MAX_SUGGESTIONS},
    SymptomVocabulary,
};

#[test]
fn empty_query_returns_nothing() {
    let vocab = SymptomVocabulary::fallback();
    assert!(suggest("", &vocab).is_empty());
    assert!(suggest("   ", &vocab).is_empty());
}

#[test]
fn results_contain_the_query() {
    let vocab = SymptomVocabulary::fallback();
    let matches = suggest("itch", &vocab);
    assert!(!matches.is_empty());
    assert!(matches.iter().all(|entry| entry.contains("itch")));
    // Vocabulary order is preserved.
    assert_eq!(matches[0], "itching");
}

#[test]
fn query_matching_is_case_insensitive() {
    let vocab = SymptomVocabulary::fallback();
    assert_eq!(suggest("ITCH", &vocab), suggest("itch", &vocab));
}

#[test]
fn results_are_capped() {
    let vocab = SymptomVocabulary::fallback();
    let matches = suggest("a", &vocab);
    assert_eq!(matches.len(), MAX_SUGGESTIONS);
}
