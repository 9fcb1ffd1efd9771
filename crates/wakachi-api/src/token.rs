use {
    crate::{Reason, WordEntry, WordType},
    serde::{Deserialize, Serialize},
};

/// A hypothesized uninflected form produced by deinflection.
///
/// One candidate may be reachable along several rule paths, so it
/// carries a list of reason chains rather than a single chain. Within
/// each chain, index 0 is the step nearest the surface form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateWord {
    /// The hypothesized earlier form.
    pub word: String,
    /// Word classes this candidate could belong to, given the rules
    /// that produced it.
    pub word_type: WordType,
    /// One reason chain per derivation path; empty for the identity
    /// candidate.
    pub reason_chains: Vec<Vec<Reason>>,
}

/// One ranked dictionary match from a word search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordResult {
    /// The matched entry, with match ranges set on the readings the
    /// lookup key matched.
    pub entry: WordEntry,
    /// How much of the original input this match consumed, in UTF-16
    /// code units of the *original* (pre-normalization) string.
    pub match_len: usize,
    /// Deinflection reason chains, or [`None`] if the surface form
    /// matched the dictionary directly.
    #[serde(default)]
    pub reason_chains: Option<Vec<Vec<Reason>>>,
}

/// One segment of tokenized input.
///
/// `start` and `end` are UTF-16 code unit offsets into the original
/// input string, so `original[start..end] == text` when sliced by
/// UTF-16 units. Tokens the dictionary could not resolve carry no
/// entry and span a single code point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The original input text this token covers.
    pub text: String,
    /// Start offset, in UTF-16 code units of the original input.
    pub start: usize,
    /// End offset (exclusive), in UTF-16 code units of the original
    /// input.
    pub end: usize,
    /// The best dictionary match, if any.
    #[serde(default)]
    pub entry: Option<WordEntry>,
    /// Reason chains explaining the surface form, if it was inflected.
    #[serde(default)]
    pub reasons: Option<Vec<Vec<Reason>>>,
}

impl WordResult {
    /// Length of the longest reason chain, the "how many grammatical
    /// steps away from the dictionary form" measure used for ranking.
    #[must_use]
    pub fn deinflection_steps(&self) -> usize {
        self.reason_chains
            .as_ref()
            .map_or(0, |chains| chains.iter().map(Vec::len).max().unwrap_or(0))
    }
}
