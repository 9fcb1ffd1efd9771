//! Deinflection: a forward closure over the suffix-rewrite rule table,
//! producing every plausible uninflected candidate for a surface form.

mod rules;

use {
    self::rules::{DeinflectRule, MAX_ENDING_LEN, RULE_INDEX},
    wakachi_api::{CandidateWord, Reason, WordType, jpn},
};

/// Until rules refine it, an input word could be any terminal form, or
/// a bare masu stem typed in directly.
const SEED_TYPE: WordType = WordType::TERMINAL.union(WordType::MASU_STEM);

/// Stem types that may be completed to an ichidan/kuru dictionary form
/// by appending る.
const FORWARDABLE: WordType = WordType::MASU_STEM
    .union(WordType::TA_TE_STEM)
    .union(WordType::IRREALIS_STEM);

/// Deinflects `word` into every candidate dictionary form reachable
/// through the rule table.
///
/// The result always contains the identity candidate (`word` itself,
/// no reasons); inflected inputs additionally yield their hypothesized
/// base forms, each annotated with the chain(s) of grammatical steps
/// that would produce the surface form, most recently stripped step
/// first. Intermediate stems are used during the search but filtered
/// from the result.
///
/// Candidates are hypotheses: the caller validates them against a
/// dictionary, using [`CandidateWord::word_type`] to reject entries
/// whose part of speech cannot inflect this way.
#[must_use]
pub fn deinflect(word: &str) -> Vec<CandidateWord> {
    let mut result = vec![CandidateWord {
        word: word.to_owned(),
        word_type: SEED_TYPE,
        reason_chains: Vec::new(),
    }];
    let mut index = foldhash::HashMap::<String, Vec<usize>>::default();
    index.insert(word.to_owned(), vec![0]);

    let mut i = 0;
    while i < result.len() {
        let word = result[i].word.clone();
        let word_type = result[i].word_type;
        let chains = result[i].reason_chains.clone();
        i += 1;

        // An ichidan verb recovered from a bare masu stem is already
        // the plain form; deinflecting it further only produces noise.
        if word_type.contains(WordType::ICHIDAN_VERB)
            && chains.len() == 1
            && chains[0] == [Reason::MasuStem]
        {
            continue;
        }

        forward_stem(&word, word_type, &chains, &mut result, &mut index);

        let chars = word.chars().collect::<Vec<_>>();
        for ending_len in (1..=chars.len().min(MAX_ENDING_LEN)).rev() {
            let ending = chars[chars.len() - ending_len..]
                .iter()
                .collect::<String>();
            let folded = jpn::kana_to_hiragana(&ending);

            let mut matched = Vec::<&'static DeinflectRule>::new();
            if let Some(rules) = RULE_INDEX.get(ending.as_str()) {
                matched.extend(rules);
            }
            if folded != ending {
                if let Some(rules) = RULE_INDEX.get(folded.as_ref()) {
                    matched.extend(rules);
                }
            }

            for rule in matched {
                apply_rule(
                    rule,
                    &chars,
                    ending_len,
                    word_type,
                    &chains,
                    &mut result,
                    &mut index,
                );
            }
        }
    }

    result
        .into_iter()
        .filter(|candidate| candidate.word_type.intersects(WordType::TERMINAL))
        .collect()
}

/// Completes a stem candidate to its possible ichidan/kuru dictionary
/// form by appending る.
fn forward_stem(
    word: &str,
    word_type: WordType,
    chains: &[Vec<Reason>],
    result: &mut Vec<CandidateWord>,
    index: &mut foldhash::HashMap<String, Vec<usize>>,
) {
    if word.is_empty() || !word_type.intersects(FORWARDABLE) {
        return;
    }

    // an irrealis stem followed by a passive/causative step is not a
    // combination ichidan grammar produces
    let suppressed = word_type.contains(WordType::IRREALIS_STEM)
        && matches!(
            chains.first().and_then(|chain| chain.first()),
            Some(Reason::Passive | Reason::Causative | Reason::CausativePassive)
        );
    if suppressed {
        return;
    }

    let mut forwarded = word.to_owned();
    forwarded.push('る');

    let mut new_chains = chains.to_vec();
    if new_chains.is_empty() && word_type.contains(WordType::MASU_STEM) {
        new_chains.push(vec![Reason::MasuStem]);
    }

    push_candidate(
        forwarded,
        WordType::ICHIDAN_VERB | WordType::KURU_VERB,
        new_chains,
        result,
        index,
    );
}

fn apply_rule(
    rule: &'static DeinflectRule,
    chars: &[char],
    ending_len: usize,
    word_type: WordType,
    chains: &[Vec<Reason>],
    result: &mut Vec<CandidateWord>,
    index: &mut foldhash::HashMap<String, Vec<usize>>,
) {
    if !word_type.intersects(rule.from_type) {
        return;
    }

    // a reason may drive a derivation only once
    let repeats = rule
        .reasons
        .iter()
        .any(|reason| chains.iter().flatten().any(|seen| seen == reason));
    if repeats {
        return;
    }

    let mut new_word = chars[..chars.len() - ending_len]
        .iter()
        .collect::<String>();
    new_word.push_str(rule.to);
    if new_word.is_empty() {
        return;
    }

    // a known word of the same type absorbs this derivation as an
    // extra chain instead of becoming a separate candidate
    if let Some(indices) = index.get(new_word.as_str()) {
        if let Some(&existing) = indices
            .iter()
            .find(|&&existing| result[existing].word_type == rule.to_type)
        {
            result[existing]
                .reason_chains
                .insert(0, rule.reasons.to_vec());
            return;
        }
    }

    let mut new_chains = chains.to_vec();
    if !rule.reasons.is_empty() {
        if let Some(first) = new_chains.first_mut() {
            if rule.reasons.first() == Some(&Reason::Causative)
                && first.first() == Some(&Reason::PotentialOrPassive)
            {
                // causative over (potential-or-)passive reads as the
                // single fused causative-passive form
                first[0] = Reason::CausativePassive;
            } else if rule.reasons.first() == Some(&Reason::MasuStem) {
                // the stem step is implicit once later steps exist
            } else {
                first.splice(0..0, rule.reasons.iter().copied());
            }
        } else {
            new_chains.push(rule.reasons.to_vec());
        }
    }

    push_candidate(new_word, rule.to_type, new_chains, result, index);
}

fn push_candidate(
    word: String,
    word_type: WordType,
    reason_chains: Vec<Vec<Reason>>,
    result: &mut Vec<CandidateWord>,
    index: &mut foldhash::HashMap<String, Vec<usize>>,
) {
    if let Some(indices) = index.get(word.as_str()) {
        if let Some(&existing) = indices
            .iter()
            .find(|&&existing| result[existing].word_type == word_type)
        {
            result[existing].reason_chains.extend(reason_chains);
            return;
        }
    }

    let position = result.len();
    index.entry(word.clone()).or_default().push(position);
    result.push(CandidateWord {
        word,
        word_type,
        reason_chains,
    });
}
