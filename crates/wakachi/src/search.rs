//! The backtracking longest-match word search.

use {
    crate::{
        deinflect::deinflect,
        dictionary::Dictionary,
        match_type::entry_matches_type,
        sort,
        variations::{expand_choon, kyuujitai_to_shinjitai},
    },
    anyhow::{Context, Result},
    foldhash::{HashSet, HashSetExt},
    std::borrow::Cow,
    tracing::trace,
    wakachi_api::{EntryId, WordResult, jpn},
};

/// Default result cap for a standalone word search.
pub const WORD_SEARCH_MAX_RESULTS: usize = 7;

/// The search stops collecting once it holds this many times
/// `max_results` raw results.
const RESULT_BUDGET_FACTOR: usize = 5;

/// Outcome of a successful [`word_search`].
#[derive(Debug, Clone)]
pub struct WordSearchResult {
    /// Ranked matches, best first, at most `max_results` of them.
    pub data: Vec<WordResult>,
    /// Length of the longest match, in UTF-16 code units of the
    /// original input.
    pub match_len: usize,
    /// Whether more matches existed than were returned.
    pub more: bool,
}

/// Searches for dictionary words starting at the head of `input`.
///
/// `input` is normalized text; `offset_map` is its offset map (or the
/// tail of one, when searching from the middle of a larger string), so
/// that match lengths come out in original-input UTF-16 code units.
///
/// Probes the full input first, then progressively shorter prefixes,
/// expanding long-vowel-mark and old-kanji variants until any variant
/// hits. Deinflection candidates are validated against entry parts of
/// speech, and entries already found at a longer length are not
/// reported again at a shorter one.
///
/// Returns [`None`] if nothing along the way matched.
///
/// # Errors
///
/// Propagates dictionary failures.
pub fn word_search<D: Dictionary + ?Sized>(
    dict: &D,
    input: &str,
    offset_map: &[usize],
    max_results: usize,
) -> Result<Option<WordSearchResult>> {
    let base = offset_map.first().copied().unwrap_or(0);
    let mut current = input.to_owned();
    let mut current_u16 = input.chars().map(char::len_utf16).sum::<usize>();

    let mut longest_match = 0;
    let mut have = HashSet::<EntryId>::new();
    let mut results = Vec::<WordResult>::new();
    let mut include_variants = true;

    while !current.is_empty() {
        if is_numeric_run(&current) {
            break;
        }

        let mut variations = vec![current.clone()];
        if include_variants {
            variations.extend(expand_choon(&current));
            if let Cow::Owned(modern) = kyuujitai_to_shinjitai(&current) {
                variations.push(modern);
            }
        }

        let end = offset_map
            .get(current_u16)
            .or_else(|| offset_map.last())
            .copied()
            .unwrap_or(base);
        let current_original_len = end.saturating_sub(base);

        for variant in &variations {
            let found = lookup_candidates(
                dict,
                variant,
                &have,
                max_results,
                current_original_len,
                &current,
            )?;
            if found.is_empty() {
                continue;
            }

            trace!(%variant, hits = found.len(), "matched");
            have.extend(found.iter().map(|result| result.entry.id));
            longest_match = longest_match.max(current_original_len);
            results.extend(found);
            if *variant != current {
                current.clone_from(variant);
            }
            include_variants = false;
            break;
        }

        if results.len() >= RESULT_BUDGET_FACTOR * max_results {
            break;
        }

        let step = if jpn::ends_in_yoon(&current) { 2 } else { 1 };
        for _ in 0..step {
            if let Some(popped) = current.pop() {
                current_u16 -= popped.len_utf16();
            }
        }
    }

    if results.is_empty() {
        return Ok(None);
    }
    sort::rank(&mut results);
    let more = results.len() >= max_results;
    results.truncate(max_results);
    Ok(Some(WordSearchResult {
        data: results,
        match_len: longest_match,
        more,
    }))
}

/// Deinflects one variant and resolves every candidate against the
/// dictionary.
fn lookup_candidates<D: Dictionary + ?Sized>(
    dict: &D,
    variant: &str,
    have: &HashSet<EntryId>,
    max_results: usize,
    match_len: usize,
    matching_text: &str,
) -> Result<Vec<WordResult>> {
    let mut seen = HashSet::<EntryId>::new();
    let mut out = Vec::new();

    for (position, candidate) in deinflect(variant).into_iter().enumerate() {
        let entries = dict
            .get_words(&candidate.word, 2 * max_results, Some(matching_text))
            .with_context(|| format!("failed to look up {:?}", candidate.word))?;

        for entry in entries {
            if have.contains(&entry.id) || !seen.insert(entry.id) {
                continue;
            }
            // the identity candidate needs no part-of-speech support;
            // everything else must be able to inflect this way
            if position != 0 && !entry_matches_type(&entry, candidate.word_type) {
                continue;
            }

            out.push(WordResult {
                entry,
                match_len,
                reason_chains: if candidate.reason_chains.is_empty() {
                    None
                } else {
                    Some(candidate.reason_chains.clone())
                },
            });
        }
    }

    sort::rank(&mut out);
    out.truncate(max_results);
    Ok(out)
}

/// A run of digit, comma and period characters in half-width,
/// full-width or ideographic form; probing these against the
/// dictionary is never useful.
fn is_numeric_run(text: &str) -> bool {
    text.chars().all(|c| {
        matches!(
            c,
            '0'..='9' | '０'..='９' | ',' | '，' | '、' | '.' | '．' | '。'
        )
    })
}
