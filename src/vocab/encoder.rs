//! Exact-then-fuzzy encoding of input tokens onto the feature schema.

use ndarray::Array1;
use thiserror::Error;

use super::{normalize, SymptomVocabulary};

/// Number of vocabulary entries included with a [`NoMatch`].
pub const NO_MATCH_SAMPLE: usize = 20;

/// No input token matched any vocabulary entry.
///
/// A semantic "nothing recognised" outcome rather than a system fault;
/// carries the leading vocabulary entries for caller diagnostics.
#[derive(Debug, Clone, Error)]
#[error("no matching symptoms")]
pub struct NoMatch {
    pub known_sample: Vec<String>,
}

/// Binary feature vector plus the vocabulary entries that produced it.
#[derive(Debug, Clone)]
pub struct Encoding {
    pub vector: Array1<f64>,
    pub matched: Vec<String>,
}

/// Encode free-text symptom tokens onto the vocabulary schema.
///
/// Per token: normalise, try an exact vocabulary hit, then fall back to the
/// first entry in vocabulary order that contains the token or is contained
/// by it. The first-match tie-break is part of the contract and must stay
/// stable across runs. Tokens matching nothing contribute nothing.
pub fn encode(tokens: &[String], vocab: &SymptomVocabulary) -> Result<Encoding, NoMatch> {
    let mut vector = Array1::zeros(vocab.len());
    let mut matched = Vec::new();

    for token in tokens {
        let clean = normalize(token);
        if let Some(slot) = vocab.entries().iter().position(|entry| *entry == clean) {
            vector[slot] = 1.0;
            matched.push(clean);
            continue;
        }
        if let Some((slot, entry)) = vocab
            .entries()
            .iter()
            .enumerate()
            .find(|(_, entry)| clean.contains(entry.as_str()) || entry.contains(&clean))
        {
            vector[slot] = 1.0;
            matched.push(entry.clone());
        }
    }

    if matched.is_empty() {
        return Err(NoMatch {
            known_sample: vocab.sample(NO_MATCH_SAMPLE),
        });
    }
    Ok(Encoding { vector, matched })
}
