//! Validation of dictionary part-of-speech tags against deinflection
//! word types.
//!
//! A deinflected candidate is only plausible if the entry it resolves
//! to can actually inflect that way: `食べない` may deinflect to `食べ`,
//! but an entry for the noun 食べ物 could never produce that surface
//! form. Dictionaries built from raw JMDict XML store expanded English
//! descriptions while compact builds store the short codes, so both
//! vocabularies are accepted.

use wakachi_api::{WordEntry, WordType};

/// Checks whether any part-of-speech tag on `entry` is compatible with
/// at least one word class in `word_type`.
///
/// Entries with no part-of-speech tags at all never match. Entries
/// tagged only as expressions match any verb class, so idiomatic
/// expressions remain reachable through deinflection.
#[must_use]
pub fn entry_matches_type(entry: &WordEntry, word_type: WordType) -> bool {
    let mut any_tag = false;
    let mut all_expressions = true;

    for tag in entry.pos_tags() {
        any_tag = true;
        let lower = tag.to_lowercase();
        if !is_expression(tag, &lower) {
            all_expressions = false;
        }
        if satisfied_types(tag, &lower).intersects(word_type) {
            return true;
        }
    }

    any_tag && all_expressions && word_type.intersects(WordType::VERB)
}

/// The word classes a single part-of-speech tag vouches for.
fn satisfied_types(tag: &str, lower: &str) -> WordType {
    let mut types = WordType::empty();

    if tag.starts_with("v1") || tag.contains("Ichidan verb") {
        types |= WordType::ICHIDAN_VERB;
    }
    if tag.starts_with("v5") || tag.starts_with("v4") || tag.contains("Godan verb") {
        types |= WordType::GODAN_VERB;
    }
    if tag.starts_with("adj-i") || lower.contains("adjective") {
        types |= WordType::I_ADJ;
    }
    if tag.starts_with("vk") || lower.contains("kuru verb") {
        types |= WordType::KURU_VERB;
    }
    if tag.starts_with("vs-i") || tag.starts_with("vs-s") || lower.contains("suru verb") {
        types |= WordType::SURU_VERB;
    }
    if tag.starts_with("vs-s") || tag.starts_with("vz") || lower.contains("zuru") {
        types |= WordType::SPECIAL_SURU_VERB;
    }
    if tag == "vs" || (lower.contains("noun or participle") && lower.contains("suru")) {
        types |= WordType::NOUN_VS;
    }

    types
}

fn is_expression(tag: &str, lower: &str) -> bool {
    tag == "exp" || lower.contains("expressions")
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        wakachi_api::{Gloss, Sense},
    };

    fn entry_with_pos(pos_tags: &[&str]) -> WordEntry {
        WordEntry {
            senses: vec![Sense {
                index: 0,
                pos_tags: pos_tags.iter().map(|&tag| tag.to_owned()).collect(),
                glosses: vec![Gloss {
                    text: "test".into(),
                    lang: "eng".into(),
                    g_type: None,
                }],
                ..Sense::default()
            }],
            ..WordEntry::default()
        }
    }

    #[test]
    fn short_codes() {
        assert!(entry_matches_type(
            &entry_with_pos(&["v1"]),
            WordType::ICHIDAN_VERB
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["v5r"]),
            WordType::GODAN_VERB
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["v4h"]),
            WordType::GODAN_VERB
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["adj-i"]),
            WordType::I_ADJ
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["vk"]),
            WordType::KURU_VERB
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["vs-i"]),
            WordType::SURU_VERB
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["vs"]),
            WordType::NOUN_VS
        ));
    }

    #[test]
    fn expanded_phrases() {
        assert!(entry_matches_type(
            &entry_with_pos(&["Ichidan verb"]),
            WordType::ICHIDAN_VERB
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["Godan verb with 'ru' ending"]),
            WordType::GODAN_VERB
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["adjective (keiyoushi)"]),
            WordType::I_ADJ
        ));
        assert!(entry_matches_type(
            &entry_with_pos(&["noun or participle which takes the aux. verb suru"]),
            WordType::NOUN_VS
        ));
    }

    #[test]
    fn mismatches() {
        assert!(!entry_matches_type(
            &entry_with_pos(&["n"]),
            WordType::ICHIDAN_VERB
        ));
        assert!(!entry_matches_type(
            &entry_with_pos(&["v1"]),
            WordType::GODAN_VERB
        ));
        // no tags at all never matches
        assert!(!entry_matches_type(
            &WordEntry::default(),
            WordType::TERMINAL
        ));
    }

    #[test]
    fn expressions_match_any_verb_type() {
        let entry = entry_with_pos(&["exp"]);
        assert!(entry_matches_type(&entry, WordType::ICHIDAN_VERB));
        assert!(entry_matches_type(&entry, WordType::GODAN_VERB));
        assert!(!entry_matches_type(&entry, WordType::NOUN_VS));

        // expression plus a concrete verb tag still matches normally
        let entry = entry_with_pos(&["exp", "v5u"]);
        assert!(entry_matches_type(&entry, WordType::GODAN_VERB));
    }
}
